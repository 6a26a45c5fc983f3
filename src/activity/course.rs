//! Course offerings from the catalog.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::error::FieldError;
use super::meeting::{MeetingTime, ARRANGED};

/// Minimum credit hours for a course.
pub const MIN_CREDITS: u8 = 1;
/// Maximum credit hours for a course.
pub const MAX_CREDITS: u8 = 5;

// Validation patterns, compiled once.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{1,4} [0-9]{3}$").unwrap());
static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3}$").unwrap());
static DAYS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[MTWHF]+$").unwrap());

/// A course offering: name (e.g. `"CSC 216"`), title, section, credit
/// hours, instructor id, and a weekly meeting window.
///
/// Courses meet on weekdays (`M`, `T`, `W`, `H`, `F`) or are arranged.
/// Two courses are duplicates of each other when their names match,
/// regardless of section or credits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u8,
    instructor_id: String,
    meeting: MeetingTime,
}

impl Course {
    /// Builds a course with a fixed weekly meeting.
    ///
    /// `days` must be drawn from `MTWHF` with no repeats, or be the
    /// arranged sentinel `"A"` with both times zero. Field rules: `name`
    /// is 1-4 letters, a space, and exactly 3 digits; `section` is exactly
    /// 3 digits; `credits` is 1-5; `title` and `instructor_id` are
    /// non-empty.
    pub fn new(
        name: &str,
        title: &str,
        section: &str,
        credits: u8,
        instructor_id: &str,
        days: &str,
        start_time: u16,
        end_time: u16,
    ) -> Result<Self, FieldError> {
        let meeting = if days == ARRANGED {
            if start_time != 0 || end_time != 0 {
                return Err(FieldError::MeetingTime);
            }
            MeetingTime::arranged()
        } else {
            if !DAYS_PATTERN.is_match(days) {
                return Err(FieldError::MeetingTime);
            }
            MeetingTime::new(days, start_time, end_time)?
        };

        Self::with_meeting(name, title, section, credits, instructor_id, meeting)
    }

    /// Builds an arranged course (no fixed day or time).
    pub fn arranged(
        name: &str,
        title: &str,
        section: &str,
        credits: u8,
        instructor_id: &str,
    ) -> Result<Self, FieldError> {
        Self::with_meeting(
            name,
            title,
            section,
            credits,
            instructor_id,
            MeetingTime::arranged(),
        )
    }

    fn with_meeting(
        name: &str,
        title: &str,
        section: &str,
        credits: u8,
        instructor_id: &str,
        meeting: MeetingTime,
    ) -> Result<Self, FieldError> {
        if !NAME_PATTERN.is_match(name) {
            return Err(FieldError::CourseName);
        }
        if title.is_empty() {
            return Err(FieldError::Title);
        }
        if !SECTION_PATTERN.is_match(section) {
            return Err(FieldError::Section);
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
            return Err(FieldError::Credits);
        }
        if instructor_id.is_empty() {
            return Err(FieldError::InstructorId);
        }

        Ok(Self {
            name: name.to_string(),
            title: title.to_string(),
            section: section.to_string(),
            credits,
            instructor_id: instructor_id.to_string(),
            meeting,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn meeting(&self) -> &MeetingTime {
        &self.meeting
    }

    /// Catalog/schedule table row: name, section, title, meeting string.
    pub fn short_display(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.meeting.meeting_string(),
        ]
    }

    /// Full schedule table row: name, section, title, credits, instructor
    /// id, meeting string, and an empty slot for event details.
    pub fn long_display(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting.meeting_string(),
            String::new(),
        ]
    }

    /// Comma-separated record line in the catalog/export format. The time
    /// fields are omitted when the course is arranged.
    pub fn to_record(&self) -> String {
        if self.meeting.is_arranged() {
            format!(
                "{},{},{},{},{},{}",
                self.name,
                self.title,
                self.section,
                self.credits,
                self.instructor_id,
                self.meeting.days()
            )
        } else {
            format!(
                "{},{},{},{},{},{},{},{}",
                self.name,
                self.title,
                self.section,
                self.credits,
                self.instructor_id,
                self.meeting.days(),
                self.meeting.start_time(),
                self.meeting.end_time()
            )
        }
    }
}
