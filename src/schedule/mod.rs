//! Schedule management over a loaded course catalog.

mod error;

pub use error::ScheduleError;

use std::path::Path;

use tracing::info;

use crate::activity::{Activity, Course, Event};
use crate::records;

/// Title a schedule starts with and returns to on reset.
pub const DEFAULT_TITLE: &str = "My Schedule";

/// Owns the course catalog and the user's personal schedule.
///
/// The catalog is loaded once at construction and never mutated; the
/// schedule is an ordered list of chosen activities, grown through the
/// add operations (which enforce the no-duplicate and no-conflict rules
/// against every existing member), shrunk by index removal, and wholly
/// cleared by reset.
#[derive(Debug)]
pub struct ScheduleManager {
    catalog: Vec<Course>,
    schedule: Vec<Activity>,
    title: String,
}

impl ScheduleManager {
    /// Builds a manager over the catalog file at `path`.
    ///
    /// Failure to open or read the file is fatal: no manager exists
    /// without a catalog. Malformed catalog lines are skipped by the
    /// record reader, so the catalog only ever holds valid courses.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let catalog =
            records::read_course_records(path).map_err(|source| ScheduleError::CatalogUnavailable {
                path: path.display().to_string(),
                source,
            })?;
        info!(courses = catalog.len(), path = %path.display(), "loaded course catalog");

        Ok(Self {
            catalog,
            schedule: Vec::new(),
            title: DEFAULT_TITLE.to_string(),
        })
    }

    /// Finds a catalog course by exact name and section.
    pub fn get_course_from_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog
            .iter()
            .find(|c| c.name() == name && c.section() == section)
    }

    /// Adds the catalog course with the given name and section to the
    /// schedule.
    ///
    /// Returns `Ok(false)` when no such course exists in the catalog —
    /// that is not an error and the schedule is untouched. When the course
    /// exists, every scheduled activity is checked in order: a duplicate
    /// (same course name) fails with [`ScheduleError::DuplicateCourse`],
    /// an overlap fails with [`ScheduleError::CourseConflict`]; otherwise
    /// the course is appended and `Ok(true)` is returned.
    pub fn add_course_to_schedule(
        &mut self,
        name: &str,
        section: &str,
    ) -> Result<bool, ScheduleError> {
        let Some(course) = self.get_course_from_catalog(name, section).cloned() else {
            return Ok(false);
        };
        let candidate = Activity::from(course);

        for scheduled in &self.schedule {
            if candidate.is_duplicate(scheduled) {
                return Err(ScheduleError::DuplicateCourse {
                    name: name.to_string(),
                });
            }
            if candidate.check_conflict(scheduled).is_err() {
                return Err(ScheduleError::CourseConflict);
            }
        }

        self.schedule.push(candidate);
        info!(course = name, section, "added course to schedule");
        Ok(true)
    }

    /// Builds an event from the given fields and adds it to the schedule.
    ///
    /// Field-validation failures propagate as [`ScheduleError::Field`].
    /// The duplicate/conflict loop mirrors the course path: a scheduled
    /// event with the same title fails with
    /// [`ScheduleError::DuplicateEvent`], an overlap with
    /// [`ScheduleError::EventConflict`].
    pub fn add_event_to_schedule(
        &mut self,
        title: &str,
        days: &str,
        start_time: u16,
        end_time: u16,
        details: &str,
    ) -> Result<(), ScheduleError> {
        let candidate = Activity::from(Event::new(title, days, start_time, end_time, details)?);

        for scheduled in &self.schedule {
            if candidate.is_duplicate(scheduled) {
                return Err(ScheduleError::DuplicateEvent {
                    title: title.to_string(),
                });
            }
            if candidate.check_conflict(scheduled).is_err() {
                return Err(ScheduleError::EventConflict);
            }
        }

        self.schedule.push(candidate);
        info!(event = title, "added event to schedule");
        Ok(())
    }

    /// Removes the scheduled activity at `idx`, shifting later entries
    /// down. Returns false (and mutates nothing) when `idx` is out of
    /// range.
    pub fn remove_activity_from_schedule(&mut self, idx: usize) -> bool {
        if idx >= self.schedule.len() {
            return false;
        }
        let removed = self.schedule.remove(idx);
        info!(title = removed.title(), idx, "removed activity from schedule");
        true
    }

    /// Empties the schedule and restores the default title. Cannot fail.
    pub fn reset_schedule(&mut self) {
        self.schedule.clear();
        self.title = DEFAULT_TITLE.to_string();
        info!("reset schedule");
    }

    /// Catalog table rows: name, section, title, meeting string per course.
    pub fn course_catalog(&self) -> Vec<[String; 4]> {
        self.catalog.iter().map(Course::short_display).collect()
    }

    /// Schedule table rows in insertion order.
    pub fn scheduled_activities(&self) -> Vec<[String; 4]> {
        self.schedule.iter().map(Activity::short_display).collect()
    }

    /// Full schedule table rows (credits, instructor, details included).
    pub fn full_scheduled_activities(&self) -> Vec<[String; 7]> {
        self.schedule.iter().map(Activity::long_display).collect()
    }

    /// The scheduled activities themselves, in insertion order.
    pub fn schedule(&self) -> &[Activity] {
        &self.schedule
    }

    pub fn schedule_title(&self) -> &str {
        &self.title
    }

    /// Sets the schedule title; the empty string is permitted.
    pub fn set_schedule_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Writes the schedule to `path` in the export record format. The
    /// schedule itself is unchanged whether or not the write succeeds.
    pub fn export_schedule(&self, path: impl AsRef<Path>) -> Result<(), ScheduleError> {
        records::write_activity_records(path.as_ref(), &self.schedule)
            .map_err(|source| ScheduleError::ExportFailure { source })?;
        info!(activities = self.schedule.len(), "exported schedule");
        Ok(())
    }
}
