use crate::core::{DisplayConfiguration, Grade, ScoreSource, Semester, Student, Subject};

pub const MIN_SCORE: i32 = 5;
pub const MAX_SCORE: i32 = 10;

/// One student of the sample roster with its display options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub display: DisplayConfiguration,
}

impl RosterEntry {
    const fn new(
        first_name: &'static str,
        last_name: &'static str,
        last_name_first: bool,
        show_letter_grade: bool,
    ) -> Self {
        Self {
            first_name,
            last_name,
            display: DisplayConfiguration {
                last_name_first,
                show_letter_grade,
            },
        }
    }
}

const SAMPLE_ROSTER: [RosterEntry; 5] = [
    RosterEntry::new("Cleo", "Strong", true, false),
    RosterEntry::new("Olivia", "Allen", false, false),
    RosterEntry::new("Fred", "Cisneros", true, true),
    RosterEntry::new("Julia", "Pacheco", false, false),
    RosterEntry::new("Gene", "Dixon", true, true),
];

pub fn sample_roster() -> &'static [RosterEntry] {
    &SAMPLE_ROSTER
}

/// Draws one score per subject, in `Subject::ALL` order.
pub fn build_semester<S: ScoreSource>(first_name: &str, last_name: &str, scores: &mut S) -> Semester {
    let grades = Subject::ALL
        .iter()
        .map(|subject| Grade::new(*subject, scores.next_score(MIN_SCORE..=MAX_SCORE)))
        .collect();

    Semester::new(Student::new(first_name, last_name), grades)
}
