//! Ad-hoc events on a personal schedule.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::error::FieldError;
use super::meeting::MeetingTime;

static DAYS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[UMTWHFS]+$").unwrap());

/// A user-created event: a title, free-form details, and a weekly meeting
/// window.
///
/// Events can meet on any day of the week (`U`, `M`, `T`, `W`, `H`, `F`,
/// `S`) but always have a fixed time; the arranged sentinel is not
/// accepted. Two events are duplicates of each other when their titles
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    title: String,
    details: String,
    meeting: MeetingTime,
}

impl Event {
    /// Builds an event. `title` must be non-empty; `days` must be drawn
    /// from `UMTWHFS` with no repeats. `details` may be empty.
    pub fn new(
        title: &str,
        days: &str,
        start_time: u16,
        end_time: u16,
        details: &str,
    ) -> Result<Self, FieldError> {
        if title.is_empty() {
            return Err(FieldError::Title);
        }
        // a lone "A" fails here too: arranged events do not exist
        if !DAYS_PATTERN.is_match(days) {
            return Err(FieldError::MeetingTime);
        }
        let meeting = MeetingTime::new(days, start_time, end_time)?;

        Ok(Self {
            title: title.to_string(),
            details: details.to_string(),
            meeting,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn meeting(&self) -> &MeetingTime {
        &self.meeting
    }

    /// Schedule table row: empty name and section slots, then title and
    /// meeting string.
    pub fn short_display(&self) -> [String; 4] {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            self.meeting.meeting_string(),
        ]
    }

    /// Full schedule table row: empty name, section, credits, and
    /// instructor slots around the title, meeting string, and details.
    pub fn long_display(&self) -> [String; 7] {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            String::new(),
            String::new(),
            self.meeting.meeting_string(),
            self.details.clone(),
        ]
    }

    /// Comma-separated record line in the export format.
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.title,
            self.meeting.days(),
            self.meeting.start_time(),
            self.meeting.end_time(),
            self.details
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event::new("Soccer Practice", "SU", 1400, 1530, "Club team practice")
            .expect("valid event")
    }

    #[test]
    fn test_valid_event() {
        let event = sample_event();
        assert_eq!(event.title(), "Soccer Practice");
        assert_eq!(event.details(), "Club team practice");
        assert_eq!(event.meeting().days(), "SU");
        assert_eq!(event.meeting().start_time(), 1400);
        assert_eq!(event.meeting().end_time(), 1530);
    }

    #[test]
    fn test_title_required() {
        let result = Event::new("", "SU", 1400, 1530, "details");
        assert_eq!(result, Err(FieldError::Title));
    }

    #[test]
    fn test_empty_details_allowed() {
        let event = Event::new("Lunch", "MTWHF", 1200, 1300, "").expect("empty details are fine");
        assert_eq!(event.details(), "");
    }

    #[test]
    fn test_weekend_days_allowed() {
        assert!(Event::new("Brunch", "SU", 1000, 1130, "").is_ok());
    }

    #[test]
    fn test_arranged_sentinel_rejected() {
        let result = Event::new("Mystery", "A", 0, 0, "");
        assert_eq!(result, Err(FieldError::MeetingTime));
    }

    #[test]
    fn test_day_alphabet() {
        for days in ["X", "MX", "mw", ""] {
            let result = Event::new("Practice", days, 1400, 1530, "");
            assert_eq!(result, Err(FieldError::MeetingTime), "days {days:?}");
        }
    }

    #[test]
    fn test_base_time_rules_still_apply() {
        assert_eq!(
            Event::new("Practice", "SS", 1400, 1530, ""),
            Err(FieldError::MeetingTime)
        );
        assert_eq!(
            Event::new("Practice", "S", 1530, 1400, ""),
            Err(FieldError::MeetingTime)
        );
    }

    #[test]
    fn test_to_record() {
        assert_eq!(
            sample_event().to_record(),
            "Soccer Practice,SU,1400,1530,Club team practice"
        );
    }
}
