//! Weekly meeting window shared by all schedulable items.

use chrono::NaiveTime;
use serde::Serialize;

use super::error::FieldError;

/// Sentinel meeting-days value for activities with no fixed day or time.
pub const ARRANGED: &str = "A";

/// A weekly meeting window: a string of day characters plus start and end
/// times in military `HHMM` form (e.g. `1330` for 1:30PM).
///
/// A `MeetingTime` can only be built through [`MeetingTime::new`] or
/// [`MeetingTime::arranged`], so every value is internally consistent:
/// valid times, `start <= end`, no repeated day character, and zeroed
/// times when the days are the arranged sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MeetingTime {
    days: String,
    start_time: u16,
    end_time: u16,
}

impl MeetingTime {
    /// Validates and builds a meeting window.
    ///
    /// Day-alphabet restrictions are variant-specific and checked by the
    /// activity constructors before this runs; this enforces the rules
    /// common to every variant: `days` non-empty with no repeated
    /// character, `start_time <= end_time`, and both times valid military
    /// `HHMM` values (hour 0-23, minute 0-59).
    pub fn new(days: &str, start_time: u16, end_time: u16) -> Result<Self, FieldError> {
        if days.is_empty() {
            return Err(FieldError::MeetingTime);
        }
        for (i, c) in days.char_indices() {
            if days[i + c.len_utf8()..].contains(c) {
                return Err(FieldError::MeetingTime);
            }
        }
        if start_time > end_time {
            return Err(FieldError::MeetingTime);
        }
        clock_time(start_time)?;
        clock_time(end_time)?;

        Ok(Self {
            days: days.to_string(),
            start_time,
            end_time,
        })
    }

    /// The window for arranged activities: days `"A"`, both times zero.
    pub fn arranged() -> Self {
        Self {
            days: ARRANGED.to_string(),
            start_time: 0,
            end_time: 0,
        }
    }

    /// Meeting-day characters, or `"A"` for arranged windows.
    pub fn days(&self) -> &str {
        &self.days
    }

    /// Start time as military `HHMM`.
    pub fn start_time(&self) -> u16 {
        self.start_time
    }

    /// End time as military `HHMM`.
    pub fn end_time(&self) -> u16 {
        self.end_time
    }

    /// True when this window is the arranged sentinel.
    pub fn is_arranged(&self) -> bool {
        self.days == ARRANGED
    }

    /// Renders the window for display: `"Arranged"`, or the days followed
    /// by a 12-hour time range such as `"MW 1:30PM-2:45PM"`.
    pub fn meeting_string(&self) -> String {
        if self.is_arranged() {
            return "Arranged".to_string();
        }
        format!(
            "{} {}-{}",
            self.days,
            twelve_hour(self.start_time),
            twelve_hour(self.end_time)
        )
    }

    /// Symmetric overlap test: true when the two windows share at least one
    /// day character and their time intervals intersect, boundaries
    /// included (a single shared minute counts). Arranged windows never
    /// overlap anything on the day axis.
    pub fn overlaps(&self, other: &MeetingTime) -> bool {
        let same_time = !(self.end_time < other.start_time || self.start_time > other.end_time);
        let same_day = !self.is_arranged()
            && !other.is_arranged()
            && self.days.chars().any(|c| other.days.contains(c));
        same_time && same_day
    }
}

/// Splits a military `HHMM` value into a clock time, rejecting
/// out-of-range hours or minutes.
fn clock_time(time: u16) -> Result<NaiveTime, FieldError> {
    NaiveTime::from_hms_opt(u32::from(time / 100), u32::from(time % 100), 0)
        .ok_or(FieldError::MeetingTime)
}

/// 12-hour rendering: no leading zero on the hour, zero-padded minutes,
/// uppercase AM/PM, hours 0 and 12 shown as 12.
fn twelve_hour(time: u16) -> String {
    clock_time(time)
        .expect("meeting time validated at construction")
        .format("%-I:%M%p")
        .to_string()
}
