#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Filename collision:\n{path}\n'{first}' and '{second}'")]
    Collision {
        path: String,
        first: String,
        second: String,
    },

    #[error("Duplicate card id '{id}': '{first}' and '{second}'")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
