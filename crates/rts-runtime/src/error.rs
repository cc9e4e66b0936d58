//! Error types for the logger primitive

use derive_more::{Display, From};

pub type LogResult<T> = Result<T, LogError>;

#[derive(Display, Debug, From)]
pub enum LogError {
    #[display("Failed to write log record: {_0}")]
    #[from]
    Io(std::io::Error),

    #[display("Log record name is empty")]
    EmptyName,

    #[display("Log record name is a null pointer")]
    NullName,
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io(e) => Some(e),
            LogError::EmptyName | LogError::NullName => None,
        }
    }
}
