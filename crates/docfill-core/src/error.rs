use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocfillError {
    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template file not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    // Form errors
    #[error("MISSING_FIELDS: please fill all the fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("INVALID_ASSIGNMENT: expected NAME=VALUE, got '{0}'")]
    InvalidAssignment(String),

    #[error("INVALID_CHOICE: {field}: '{value}' is not one of {expected}")]
    InvalidChoice {
        field: String,
        value: String,
        expected: String,
    },

    #[error("INVALID_AMOUNT: {field} must not be negative (got {value})")]
    NegativeAmount { field: String, value: f64 },

    #[error("INVALID_VALUE: {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    // Input file errors
    #[error("INPUT_PARSE_ERROR: failed to parse '{}': {reason}", path.display())]
    InputParseError { path: PathBuf, reason: String },

    // Config errors
    #[error("CONFIG_NOT_FOUND: config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    // Output errors
    #[error("OUTPUT_WRITE_ERROR: failed to write '{}': {source}", path.display())]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for DocfillError {
    fn from(err: serde_json::Error) -> Self {
        DocfillError::Generic(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DocfillError>;
