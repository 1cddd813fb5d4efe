use std::path::PathBuf;

use thiserror::Error;

/// Malformed binary KeyValue input.
///
/// Offsets are byte positions into the decoded buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("Invalid tag {tag:#04x} at offset {offset}")]
    InvalidTag { tag: u8, offset: usize },

    #[error("Wide strings are unsupported (entry at offset {offset})")]
    WideStringUnsupported { offset: usize },

    #[error("Entry ending at offset {offset} is not followed by a tag")]
    MissingTerminator { offset: usize },

    #[error("Trailing data after document end: {0} bytes remaining")]
    TrailingData(usize),

    #[error("Containers nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed KeyValue document: {0}")]
    Format(#[from] FormatError),

    #[error("Schema document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("Schema for app {0} has no stats section")]
    StatsNotFound(u32),

    #[error("Game client installation not found: {0}")]
    InstallNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error means "no schema available" because something is missing
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::DocumentNotFound(_) | Error::StatsNotFound(_) | Error::InstallNotFound(_) => {
                true
            }
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error comes from an undecodable document
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}
