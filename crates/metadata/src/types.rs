//! Common types for the Metadata API.

use serde::{Deserialize, Serialize};

/// Default Metadata API version.
pub const DEFAULT_API_VERSION: &str = "62.0";

/// SOAP Fault from the Metadata API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoapFault {
    pub fault_code: String,
    pub fault_string: String,
}

impl std::fmt::Display for SoapFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SOAP Fault: {} - {}", self.fault_code, self.fault_string)
    }
}

impl std::error::Error for SoapFault {}

/// Error information returned from Metadata API CRUD operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataError {
    /// Status code identifying the error type.
    pub status_code: String,
    /// Descriptive error message.
    pub message: String,
    /// Field names associated with the error.
    pub fields: Vec<String>,
}

/// Result of a save operation (createMetadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResult {
    /// Full name of the metadata component.
    pub full_name: String,
    /// Whether the operation succeeded.
    pub success: bool,
    /// Errors that occurred during the operation.
    pub errors: Vec<MetadataError>,
}
