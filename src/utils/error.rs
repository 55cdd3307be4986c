use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Input file not found: {path}")]
    NotFound { path: String },

    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to write output to {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CleanError>;
