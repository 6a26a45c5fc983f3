//! Error types for schedule management.

use std::io;

use thiserror::Error;

use crate::activity::FieldError;

/// Errors raised by [`ScheduleManager`](super::ScheduleManager) operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A course with the same name is already scheduled
    #[error("You are already enrolled in {name}")]
    DuplicateCourse { name: String },

    /// An event with the same title is already scheduled
    #[error("You have already created an event called {title}")]
    DuplicateEvent { title: String },

    /// The candidate course overlaps an already-scheduled activity
    #[error("The course cannot be added due to a conflict.")]
    CourseConflict,

    /// The candidate event overlaps an already-scheduled activity
    #[error("The event cannot be added due to a conflict.")]
    EventConflict,

    /// A field supplied for a new activity was malformed
    #[error(transparent)]
    Field(#[from] FieldError),

    /// The catalog source could not be opened or read at construction
    #[error("Cannot read course records from {path}")]
    CatalogUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The export destination could not be written
    #[error("The file cannot be saved.")]
    ExportFailure {
        #[source]
        source: io::Error,
    },
}

impl ScheduleError {
    /// True when the caller can keep using the manager after the failure.
    ///
    /// Everything is recoverable except [`CatalogUnavailable`], which is
    /// only raised at construction time when no manager exists yet.
    ///
    /// [`CatalogUnavailable`]: ScheduleError::CatalogUnavailable
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ScheduleError::CatalogUnavailable { .. })
    }
}
