use serde::Serialize;
use std::fmt;

/// 成績超出範圍時回傳的標記
pub const INVALID_LETTER: &str = "!INVALID";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    Math,
    Coding,
    Science,
}

impl Subject {
    /// All subjects, in report order.
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Coding, Subject::Science];

    pub fn name(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Coding => "Coding",
            Subject::Science => "Science",
        }
    }
}

impl fmt::Display for Subject {
    // pad 讓 `{:<width$}` 對齊生效
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl LetterGrade {
    /// Maps a score in `5..=10` to its letter. Anything else has no letter.
    pub fn from_score(score: i32) -> Option<Self> {
        match score {
            10 => Some(LetterGrade::A),
            9 => Some(LetterGrade::B),
            8 => Some(LetterGrade::C),
            7 => Some(LetterGrade::D),
            6 => Some(LetterGrade::E),
            5 => Some(LetterGrade::F),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::E => "E",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub subject: Subject,
    pub value: i32,
}

impl Grade {
    pub fn new(subject: Subject, value: i32) -> Self {
        Self { subject, value }
    }

    pub fn letter(&self) -> String {
        LetterGrade::from_score(self.value)
            .map(|letter| letter.to_string())
            .unwrap_or_else(|| INVALID_LETTER.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn inversed_full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Semester {
    pub student: Student,
    pub grades: Vec<Grade>,
}

impl Semester {
    pub fn new(student: Student, grades: Vec<Grade>) -> Self {
        Self { student, grades }
    }

    /// Longest subject name among the grades, 0 when there are none.
    pub fn max_subject_length(&self) -> usize {
        self.grades
            .iter()
            .map(|grade| grade.subject.name().chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DisplayConfiguration {
    pub last_name_first: bool,
    pub show_letter_grade: bool,
}

impl DisplayConfiguration {
    pub fn new(last_name_first: bool, show_letter_grade: bool) -> Self {
        Self {
            last_name_first,
            show_letter_grade,
        }
    }
}
