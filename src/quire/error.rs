use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuireError {
    #[error("Diary not found: {0}")]
    DiaryNotFound(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("A diary cannot hold more than {0} pages")]
    PageCapReached(usize),

    #[error("Page number must be between 1 and {max}")]
    InvalidPage { max: usize },

    #[error("Invalid import: {0}")]
    InvalidImport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, QuireError>;
