//! Operation-level error types.

use serde::Serialize;

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
    #[error("no field definitions found in the input file")]
    NoFieldDefinitions,
    #[error("no metadata was generated from the field definitions")]
    NoMetadataGenerated,
    #[error("{failed} field(s) failed to deploy")]
    DeploymentFailed {
        failed: usize,
        failures: Vec<FieldFailure>,
    },
    #[error("Field error: {0}")]
    Fields(String),
    #[error("Metadata error: {0}")]
    Metadata(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// One field that ended in a failed deployment outcome.
#[derive(Debug, Clone, Serialize)]
pub struct FieldFailure {
    pub full_name: String,
    pub message: String,
}

impl From<fieldsmith_fields::Error> for Error {
    fn from(err: fieldsmith_fields::Error) -> Self {
        Error { kind: ErrorKind::Fields(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<fieldsmith_metadata::Error> for Error {
    fn from(err: fieldsmith_metadata::Error) -> Self {
        Error { kind: ErrorKind::Metadata(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error { kind: ErrorKind::Io(err.to_string()), source: Some(Box::new(err)) }
    }
}
