//! # fieldsmith-fields
//!
//! Custom-field model for bulk field creation.
//!
//! ## Features
//!
//! - **CSV parsing** - Header-driven field definition rows
//! - **Validation** - Required columns, `__c` naming, supported types
//! - **Descriptors** - Fully-resolved `CustomField` metadata with
//!   type-conditional defaults
//! - **Manifest** - `package.xml` enumerating the batch members
//! - **Staging** - Source-format layout under a temporary directory
//!
//! ## Example
//!
//! ```rust,ignore
//! use fieldsmith_fields::{build_descriptor, normalize_rows, parse_rows};
//!
//! let csv = "fullName,label,type\nInvoice_Total__c,Invoice Total,Currency\n";
//! let rows = parse_rows(csv.as_bytes())?;
//! let definitions = normalize_rows(&rows)?;
//! let descriptors: Vec<_> = definitions.iter().map(build_descriptor).collect();
//!
//! assert_eq!(descriptors[0].precision.as_deref(), Some("18"));
//! ```

mod descriptor;
mod error;
mod field;
mod manifest;
mod record;
mod staging;
pub mod xml;

pub use descriptor::{
    build_descriptor, CustomField, PicklistValue, ValueSet, METADATA_NAMESPACE,
};
pub use error::{Error, ErrorKind, Result};
pub use field::{normalize_rows, FieldDefinition, FieldType, CUSTOM_FIELD_SUFFIX};
pub use manifest::{field_manifest, PackageManifest, PackageTypeMembers, CUSTOM_FIELD_TYPE};
pub use record::{parse_rows, FieldRow};
pub use staging::StagingArea;
