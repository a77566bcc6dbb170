use std::fmt;

use thiserror::Error;

/// The kind of record a payload was expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Account,
    Project,
    Media,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Account => "account",
            RecordKind::Project => "project",
            RecordKind::Media => "media",
        })
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is neither an object nor a list of objects")]
    NotAnObject,
    #[error("payload does not describe a valid {0}")]
    Missing(RecordKind),
}
