//! Error types for activity construction and conflict checking.

use thiserror::Error;

/// A field supplied to an activity constructor was malformed.
///
/// Raised synchronously at the boundary where the bad value arrives; the
/// activity is never partially built, so the caller can reject the input
/// and keep whatever state it had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Title is empty
    #[error("Invalid title.")]
    Title,

    /// Course name does not match 1-4 letters, a space, and 3 digits
    #[error("Invalid course name.")]
    CourseName,

    /// Section is not exactly 3 digits
    #[error("Invalid section.")]
    Section,

    /// Credits outside the 1-5 range
    #[error("Invalid credits.")]
    Credits,

    /// Instructor id is empty
    #[error("Invalid instructor id.")]
    InstructorId,

    /// Meeting days/times violate the alphabet, repetition, range, or
    /// arranged-sentinel rules
    #[error("Invalid meeting days and times.")]
    MeetingTime,
}

/// Two activities meet on a shared day with intersecting time windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Schedule conflict.")]
pub struct ConflictError;
