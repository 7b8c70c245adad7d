use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    NotAvailable {
        message: String,
    },
    AlreadyAvailable {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl CommandError {
    pub fn validation(message: &str, reason_code: Option<String>) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code }
    }
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::NotAvailable { message } => {
                CommandError::NotAvailable { message }
            }
            LibraryError::AlreadyAvailable { message } => {
                CommandError::AlreadyAvailable { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DuplicateKey { message } => write!(f, "{}", message),
            CommandError::NotFound { message } => write!(f, "{}", message),
            CommandError::NotAvailable { message } => write!(f, "{}", message),
            CommandError::AlreadyAvailable { message } => write!(f, "{}", message),
            CommandError::Serialization { message } => write!(f, "{}", message),
            CommandError::Validation { message, .. } => write!(f, "{}", message),
            CommandError::Runtime { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_build_command_error() {
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::validation("test", None);
    }

    #[test]
    fn test_should_map_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("k")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("k")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_available("k")), CommandError::NotAvailable { .. }));
        assert!(matches!(CommandError::from(LibraryError::already_available("k")), CommandError::AlreadyAvailable { .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("k", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("k")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("k", None)), CommandError::Runtime { .. }));
    }

    #[test]
    fn test_should_keep_message() {
        let err = CommandError::from(LibraryError::not_found("book 111 not found"));
        assert_eq!("book 111 not found", err.to_string());
    }
}
