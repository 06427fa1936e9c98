//! Error types for fieldsmith-fields.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("CSV error: {0}")]
    Csv(String),
    #[error("invalid field definition: row {row} is missing required column '{column}'")]
    InvalidFieldDefinition { row: usize, column: &'static str },
    #[error("invalid field name: '{name}' must end with the custom-field suffix '__c'")]
    InvalidFieldName { name: String },
    #[error("invalid field definition: '{name}' has unsupported type '{field_type}'")]
    UnsupportedFieldType { name: String, field_type: String },
    #[error("Staging error: {0}")]
    Staging(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error { kind: ErrorKind::Csv(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error { kind: ErrorKind::Io(err.to_string()), source: Some(Box::new(err)) }
    }
}
