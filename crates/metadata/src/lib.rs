//! # fieldsmith-metadata
//!
//! Salesforce Metadata API client for synchronous custom-field creation.
//!
//! ## Features
//!
//! - **Create fields** - Submit a batch of custom-field descriptors via
//!   the `createMetadata` SOAP operation
//! - **Result parsing** - Normalize single- and multi-result responses
//!   into one ordered sequence
//! - **Reconciliation** - Classify per-field outcomes, optionally
//!   treating "already exists" failures as skips
//!
//! ## Example
//!
//! ```rust,ignore
//! use fieldsmith_metadata::{reconcile, MetadataClient};
//!
//! let client = MetadataClient::from_parts(instance_url, access_token);
//! let results = client.create_fields("Account", &descriptors).await?;
//!
//! let reconciliation = reconcile(&field_names, &results, true);
//! for name in reconciliation.deployed_field_names() {
//!     println!("  {name}");
//! }
//! ```

mod client;
mod error;
mod reconcile;
mod types;

pub use client::MetadataClient;
pub use error::{Error, ErrorKind, Result};
pub use reconcile::{reconcile, DeploymentOutcome, Reconciliation};
pub use types::{MetadataError, SaveResult, SoapFault, DEFAULT_API_VERSION};
