use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // lend was requested for a book that is already lent out
    NotAvailable {
        message: String,
    },
    // return was requested for a book that was never lent out
    AlreadyAvailable {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn not_available(message: &str) -> LibraryError {
        LibraryError::NotAvailable { message: message.to_string() }
    }

    pub fn already_available(message: &str) -> LibraryError {
        LibraryError::AlreadyAvailable { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::DuplicateKey { message } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::NotAvailable { message } => { message }
            LibraryError::AlreadyAvailable { message } => { message }
            LibraryError::Validation { message, .. } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io error {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code: Some(reason) } => {
                write!(f, "{} ({})", message, reason)
            }
            LibraryError::Runtime { message, reason_code: Some(reason) } => {
                write!(f, "{} ({})", message, reason)
            }
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Lent,
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, BookStatus::Available)
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Lent" => BookStatus::Lent,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Lent => write!(f, "Lent"),
        }
    }
}

// BookFormat tells physical copies apart from downloadable ones
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BookFormat {
    Physical,
    Digital {
        download_size_mb: f64,
    },
}

impl BookFormat {
    pub fn download_size_mb(&self) -> Option<f64> {
        match self {
            BookFormat::Physical => None,
            BookFormat::Digital { download_size_mb } => Some(*download_size_mb),
        }
    }
}

impl Display for BookFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookFormat::Physical => write!(f, "Physical"),
            BookFormat::Digital { .. } => write!(f, "Digital"),
        }
    }
}
