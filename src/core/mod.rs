pub mod dashboard;
pub mod report;
pub mod roster;

pub use crate::domain::model::{DisplayConfiguration, Grade, Semester, Student, Subject};
pub use crate::domain::ports::ScoreSource;
pub use crate::utils::error::Result;
