use crate::model::Field;
use thiserror::Error;

/// A submission the catalog refused. These never escape the submit flow as
/// `Err`: they become a danger banner and a `Submission::Rejected`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields (missing {0})")]
    MissingField(Field),

    #[error("A book with ISBN {0} already exists")]
    DuplicateIsbn(String),
}

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored catalog in slot '{slot}' is unreadable: {source}")]
    CorruptStore {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
