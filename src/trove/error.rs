use thiserror::Error;

#[derive(Error, Debug)]
pub enum TroveError {
    #[error("Invalid collection name: {0:?}")]
    InvalidName(String),

    #[error("A collection named \"{0}\" already exists")]
    DuplicateName(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Item {0} not found in collection")]
    ItemNotFound(usize),

    #[error("{0}")]
    Validation(String),

    #[error("No valid items found in {0}")]
    NothingToImport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TroveError>;
