use thiserror::Error;

use crate::model::EntryId;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Dream not found: {0}")]
    EntryNotFound(EntryId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JournalError>;
