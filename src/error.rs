use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinanzasError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Missing column '{column}' in {source_name}")]
    MissingColumn { source_name: String, column: String },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Sink error (HTTP {status}): {message}")]
    Sink { status: u16, message: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FinanzasError>;
