//! Activity data model: courses, events, and the conflict test they share.

mod course;
mod error;
mod event;
mod meeting;

pub use course::{Course, MAX_CREDITS, MIN_CREDITS};
pub use error::{ConflictError, FieldError};
pub use event::Event;
pub use meeting::{MeetingTime, ARRANGED};

use serde::Serialize;

/// Any schedulable item: a catalog [`Course`] or a user-created [`Event`].
///
/// The two variants share a title, a [`MeetingTime`], display projections,
/// and the pairwise conflict test; each keeps its own validation rules and
/// duplicate identity (course name vs. event title).
///
/// Equality compares every field of the variant and is distinct from
/// [`Activity::is_duplicate`]: two sections of the same course are
/// duplicates but not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Activity {
    Course(Course),
    Event(Event),
}

impl Activity {
    /// Activity title (course title or event title).
    pub fn title(&self) -> &str {
        match self {
            Activity::Course(course) => course.title(),
            Activity::Event(event) => event.title(),
        }
    }

    /// The activity's weekly meeting window.
    pub fn meeting(&self) -> &MeetingTime {
        match self {
            Activity::Course(course) => course.meeting(),
            Activity::Event(event) => event.meeting(),
        }
    }

    /// Display form of the meeting window, e.g. `"MW 1:30PM-2:45PM"` or
    /// `"Arranged"`.
    pub fn meeting_string(&self) -> String {
        self.meeting().meeting_string()
    }

    /// Row for the catalog/schedule tables.
    pub fn short_display(&self) -> [String; 4] {
        match self {
            Activity::Course(course) => course.short_display(),
            Activity::Event(event) => event.short_display(),
        }
    }

    /// Row for the full-schedule table.
    pub fn long_display(&self) -> [String; 7] {
        match self {
            Activity::Course(course) => course.long_display(),
            Activity::Event(event) => event.long_display(),
        }
    }

    /// Variant-specific duplicate test: courses compare by name, events by
    /// title, and a course is never a duplicate of an event or vice versa.
    pub fn is_duplicate(&self, other: &Activity) -> bool {
        match (self, other) {
            (Activity::Course(a), Activity::Course(b)) => a.name() == b.name(),
            (Activity::Event(a), Activity::Event(b)) => a.title() == b.title(),
            _ => false,
        }
    }

    /// Symmetric pairwise conflict test. Fails iff the two meeting windows
    /// share a day and their time intervals intersect; arranged activities
    /// never conflict. No side effects either way.
    pub fn check_conflict(&self, other: &Activity) -> Result<(), ConflictError> {
        if self.meeting().overlaps(other.meeting()) {
            Err(ConflictError)
        } else {
            Ok(())
        }
    }

    /// Comma-separated record line in the export format.
    pub fn to_record(&self) -> String {
        match self {
            Activity::Course(course) => course.to_record(),
            Activity::Event(event) => event.to_record(),
        }
    }
}

impl From<Course> for Activity {
    fn from(course: Course) -> Self {
        Activity::Course(course)
    }
}

impl From<Event> for Activity {
    fn from(event: Event) -> Self {
        Activity::Event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, section: &str, days: &str, start: u16, end: u16) -> Activity {
        Activity::from(
            Course::new(name, "Title", section, 3, "instr", days, start, end).expect("valid course"),
        )
    }

    fn event(title: &str, days: &str, start: u16, end: u16) -> Activity {
        Activity::from(Event::new(title, days, start, end, "").expect("valid event"))
    }

    #[test]
    fn test_duplicate_course_by_name_only() {
        let a = course("CSC 216", "001", "MW", 1330, 1445);
        let b = course("CSC 216", "002", "TH", 900, 1015);
        let c = course("CSC 316", "001", "MW", 1330, 1445);
        assert!(a.is_duplicate(&b));
        assert!(b.is_duplicate(&a));
        assert!(!a.is_duplicate(&c));
    }

    #[test]
    fn test_duplicate_event_by_title_only() {
        let a = event("Practice", "S", 1400, 1500);
        let b = event("Practice", "U", 900, 1000);
        let c = event("Rehearsal", "S", 1400, 1500);
        assert!(a.is_duplicate(&b));
        assert!(!a.is_duplicate(&c));
    }

    #[test]
    fn test_cross_variant_never_duplicate() {
        // identical titles across variants are still distinct identities
        let c = Activity::from(
            Course::new("CSC 216", "Practice", "001", 3, "instr", "MW", 1330, 1445).unwrap(),
        );
        let e = event("Practice", "S", 1400, 1500);
        assert!(!c.is_duplicate(&e));
        assert!(!e.is_duplicate(&c));
    }

    #[test]
    fn test_equality_is_not_duplication() {
        let a = course("CSC 216", "001", "MW", 1330, 1445);
        let b = course("CSC 216", "002", "TH", 900, 1015);
        assert_ne!(a, b);
        assert!(a.is_duplicate(&b));
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_check_conflict_symmetry() {
        let pairs = [
            (course("CSC 216", "001", "MW", 1330, 1445), event("Practice", "M", 1400, 1500)),
            (course("CSC 216", "001", "MW", 1330, 1445), event("Practice", "TH", 1400, 1500)),
            (course("CSC 116", "001", "A", 0, 0), event("Practice", "M", 0, 100)),
        ];
        for (a, b) in &pairs {
            assert_eq!(
                a.check_conflict(b).is_err(),
                b.check_conflict(a).is_err(),
                "conflict test must be symmetric"
            );
        }
    }

    #[test]
    fn test_check_conflict_reports_schedule_conflict() {
        let a = course("CSC 216", "001", "MW", 1330, 1445);
        let b = event("Practice", "M", 1400, 1500);
        let err = a.check_conflict(&b).expect_err("overlapping activities");
        assert_eq!(err.to_string(), "Schedule conflict.");
        assert!(a.check_conflict(&course("CSC 316", "001", "TH", 1330, 1445)).is_ok());
    }

    #[test]
    fn test_arranged_course_never_conflicts() {
        let arranged = course("CSC 116", "001", "A", 0, 0);
        let busy = event("Practice", "MTWHFSU", 0, 2359);
        assert!(arranged.check_conflict(&busy).is_ok());
        assert!(busy.check_conflict(&arranged).is_ok());
    }

    #[test]
    fn test_course_display_rows() {
        let a = course("CSC 216", "001", "MW", 1330, 1445);
        assert_eq!(
            a.short_display(),
            ["CSC 216", "001", "Title", "MW 1:30PM-2:45PM"].map(String::from)
        );
        assert_eq!(
            a.long_display(),
            ["CSC 216", "001", "Title", "3", "instr", "MW 1:30PM-2:45PM", ""].map(String::from)
        );
    }

    #[test]
    fn test_event_display_rows() {
        let e = Activity::from(
            Event::new("Practice", "SU", 1400, 1530, "Bring cleats").unwrap(),
        );
        assert_eq!(
            e.short_display(),
            ["", "", "Practice", "SU 2:00PM-3:30PM"].map(String::from)
        );
        assert_eq!(
            e.long_display(),
            ["", "", "Practice", "", "", "SU 2:00PM-3:30PM", "Bring cleats"].map(String::from)
        );
    }
}
