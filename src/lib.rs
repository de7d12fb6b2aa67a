pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::random::RandomScores;
pub use core::{dashboard::Dashboard, report::format_report};
pub use domain::model::{DisplayConfiguration, Grade, LetterGrade, Semester, Student, Subject};
pub use domain::ports::ScoreSource;
pub use utils::error::{DashboardError, Result};
