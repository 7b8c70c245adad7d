use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
        }
    }
}

// ShellStatus tells the console whether the user can fix the input and retry
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ShellStatus {
    Rejected,
    Failed,
}

impl Display for ShellStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ShellStatus::Rejected => write!(f, "Error"),
            ShellStatus::Failed => write!(f, "Failure"),
        }
    }
}

pub type ShellError = (ShellStatus, String);

pub fn usage_error(message: &str) -> ShellError {
    (ShellStatus::Rejected, message.to_string())
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                (ShellStatus::Rejected, format!("{}", err))
            }
            CommandError::NotFound { .. } => {
                (ShellStatus::Rejected, format!("{}", err))
            }
            CommandError::NotAvailable { .. } => {
                (ShellStatus::Rejected, format!("{}", err))
            }
            CommandError::AlreadyAvailable { .. } => {
                (ShellStatus::Rejected, format!("{}", err))
            }
            CommandError::Validation { .. } => {
                (ShellStatus::Rejected, format!("{}", err))
            }
            CommandError::Serialization { .. } => {
                (ShellStatus::Failed, format!("{}", err))
            }
            CommandError::Runtime { .. } => {
                (ShellStatus::Failed, format!("{}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::controller::{ShellError, ShellStatus, usage_error};

    #[test]
    fn test_should_map_command_errors() {
        let (status, message) = ShellError::from(CommandError::NotFound { message: "gone".to_string() });
        assert_eq!(ShellStatus::Rejected, status);
        assert_eq!("gone", message.as_str());
        let (status, _) = ShellError::from(CommandError::Runtime { message: "io".to_string(), reason_code: None });
        assert_eq!(ShellStatus::Failed, status);
    }

    #[test]
    fn test_should_build_usage_error() {
        assert_eq!((ShellStatus::Rejected, "usage".to_string()), usage_error("usage"));
        assert_eq!("Error", ShellStatus::Rejected.to_string());
    }
}
