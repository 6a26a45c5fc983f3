//! Course catalog and personal schedule building.
//!
//! Loads a catalog of course offerings from a comma-delimited text file,
//! assembles a personal schedule of courses and ad-hoc events under
//! no-duplicate/no-conflict rules, and writes the schedule back to text.
//!
//! [`ScheduleManager`] is the entry point: construct it over a catalog
//! file, then add courses by `(name, section)` or events by field, and
//! export the result. The [`activity`] module holds the data model and
//! the conflict algorithm; [`records`] is the text codec.

pub mod activity;
pub mod records;
pub mod schedule;

pub use activity::{Activity, ConflictError, Course, Event, FieldError, MeetingTime};
pub use schedule::{ScheduleError, ScheduleManager, DEFAULT_TITLE};
