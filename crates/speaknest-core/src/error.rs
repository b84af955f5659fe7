#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("{0} must not be empty")]
    EmptyId(&'static str),

    #[error("user id '{0}' must not contain '_'")]
    SeparatorInUserId(String),

    #[error("Failed to persist review state: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Word {word} references unknown group {group}")]
    UnknownGroup { word: String, group: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
