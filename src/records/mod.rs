//! Text codec for catalog and schedule records.
//!
//! One activity per line, comma-separated, no escaping — the format does
//! not support embedded commas or quotes. Course lines carry
//! `name,title,section,credits,instructorId,meetingDays[,startTime,endTime]`
//! with the time fields present iff the course is not arranged; event
//! lines carry `title,meetingDays,startTime,endTime,eventDetails`.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::activity::{Activity, Course, ARRANGED};

/// Reads course records from a catalog file.
///
/// Only an open/read failure is surfaced. Lines that do not parse into a
/// valid course (wrong field count, non-numeric credits or times, trailing
/// extras, or any field-validation failure) are skipped; each skip is
/// logged but not reported to the caller. Later lines that repeat an
/// earlier `(name, section)` pair are dropped, first occurrence wins.
pub fn read_course_records(path: &Path) -> io::Result<Vec<Course>> {
    let content = fs::read_to_string(path)?;
    let mut courses: Vec<Course> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let Some(course) = parse_course(line) else {
            warn!(line = idx + 1, "skipping malformed course record");
            continue;
        };
        let seen = courses
            .iter()
            .any(|c| c.name() == course.name() && c.section() == course.section());
        if !seen {
            courses.push(course);
        }
    }

    Ok(courses)
}

/// Writes one record line per activity.
pub fn write_activity_records(path: &Path, activities: &[Activity]) -> io::Result<()> {
    let mut out = String::new();
    for activity in activities {
        out.push_str(&activity.to_record());
        out.push('\n');
    }
    fs::write(path, out)
}

/// Parses a single course line, or `None` if it is malformed in any way.
fn parse_course(line: &str) -> Option<Course> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 6 {
        return None;
    }
    let (name, title, section) = (fields[0], fields[1], fields[2]);
    let credits = fields[3].parse::<u8>().ok()?;
    let (instructor_id, days) = (fields[4], fields[5]);

    if days == ARRANGED {
        // arranged records must not carry time fields
        if fields.len() != 6 {
            return None;
        }
        return Course::arranged(name, title, section, credits, instructor_id).ok();
    }

    if fields.len() != 8 {
        return None;
    }
    let start_time = fields[6].parse::<u16>().ok()?;
    let end_time = fields[7].parse::<u16>().ok()?;
    Course::new(name, title, section, credits, instructor_id, days, start_time, end_time).ok()
}
