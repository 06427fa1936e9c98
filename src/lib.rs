//! # fieldsmith
//!
//! Bulk-create Salesforce custom fields from CSV definitions.
//!
//! One [`create_fields`] run reads field definitions from a CSV file,
//! validates and resolves them into `CustomField` descriptors, stages
//! the metadata documents plus a `package.xml` manifest under a
//! temporary directory, submits the batch in a single `createMetadata`
//! call, and reconciles the per-field results.
//!
//! ## Example
//!
//! ```rust,ignore
//! use fieldsmith::{create_fields, CreateFieldsParams};
//!
//! let report = create_fields(&CreateFieldsParams {
//!     object: "Account".to_string(),
//!     csv_path: "fields.csv".into(),
//!     instance_url: std::env::var("SF_INSTANCE_URL")?,
//!     access_token: std::env::var("SF_ACCESS_TOKEN")?,
//!     api_version: None,
//!     skip_existing: true,
//! })
//! .await?;
//!
//! println!("staged under {}", report.staging_dir.display());
//! for name in report.deployed_fields() {
//!     println!("  {name}");
//! }
//! ```

mod error;
mod run;

pub use error::{Error, ErrorKind, FieldFailure, Result};
pub use run::{create_fields, CreateFieldsParams, FieldDeploymentReport};

pub use fieldsmith_fields as fields;
pub use fieldsmith_metadata as metadata;
