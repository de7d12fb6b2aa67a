use crate::core::{DisplayConfiguration, Semester};

/// Formats one semester as a `Student:` header followed by a line per grade.
pub fn format_report(semester: &Semester, config: &DisplayConfiguration) -> String {
    let name = if config.last_name_first {
        semester.student.inversed_full_name()
    } else {
        semester.student.full_name()
    };

    let mut message = format!("Student: {}\n", name);
    let width = semester.max_subject_length();

    for grade in &semester.grades {
        let grade_text = if config.show_letter_grade {
            grade.letter()
        } else {
            grade.value.to_string()
        };

        message.push_str(&format!(
            "\tSubject: {:<width$} - Grade: {}\n",
            grade.subject,
            grade_text,
            width = width
        ));
    }

    message
}
