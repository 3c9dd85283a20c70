use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictError {
    #[error("word '{word}' already exists under code '{code}'")]
    DuplicateWord { word: String, code: String },
    #[error("no dictionary loaded")]
    NotLoaded,
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
