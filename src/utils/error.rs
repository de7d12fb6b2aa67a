use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Terminal error: {message}")]
    TerminalError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl DashboardError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DashboardError::IoError(e) => format!("Could not write to the terminal: {}", e),
            DashboardError::TerminalError { message } => {
                format!("Terminal is not usable: {}", message)
            }
            DashboardError::SerializationError(e) => {
                format!("Could not serialize report data: {}", e)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
