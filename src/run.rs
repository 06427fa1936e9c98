//! The create-fields operation.

use std::path::PathBuf;

use serde::Serialize;

use fieldsmith_fields::{
    build_descriptor, field_manifest, normalize_rows, parse_rows, CustomField, StagingArea,
};
use fieldsmith_metadata::{reconcile, MetadataClient, Reconciliation, DEFAULT_API_VERSION};

use crate::error::{Error, ErrorKind, FieldFailure, Result};

/// Parameters for one bulk field-creation run.
#[derive(Debug, Clone)]
pub struct CreateFieldsParams {
    /// Target object the fields belong to.
    pub object: String,
    /// CSV file with one field definition per row.
    pub csv_path: PathBuf,
    /// Org instance URL.
    pub instance_url: String,
    /// Org access token.
    pub access_token: String,
    /// Metadata API version; defaults to [`DEFAULT_API_VERSION`].
    pub api_version: Option<String>,
    /// Treat "already exists" failures as successes.
    pub skip_existing: bool,
}

/// Result of a successful run.
#[derive(Debug, Serialize)]
pub struct FieldDeploymentReport {
    pub object: String,
    pub staging_dir: PathBuf,
    pub reconciliation: Reconciliation,
}

impl FieldDeploymentReport {
    /// Names of fields that ended up created or skipped-as-existing,
    /// in submission order.
    pub fn deployed_fields(&self) -> Vec<String> {
        self.reconciliation.deployed_field_names()
    }
}

/// Read field definitions from CSV, stage metadata documents, and
/// create the fields on the target object in one batch.
///
/// Validation is all-or-nothing: the first invalid row aborts the run
/// before anything is staged or submitted. Remote failures are
/// aggregated across the whole batch and reported once.
pub async fn create_fields(params: &CreateFieldsParams) -> Result<FieldDeploymentReport> {
    let csv_text = std::fs::read_to_string(&params.csv_path)?;

    let rows = parse_rows(csv_text.as_bytes())?;
    if rows.is_empty() {
        return Err(Error::new(ErrorKind::NoFieldDefinitions));
    }

    let definitions = normalize_rows(&rows)?;
    let descriptors: Vec<CustomField> = definitions.iter().map(build_descriptor).collect();
    if descriptors.is_empty() {
        return Err(Error::new(ErrorKind::NoMetadataGenerated));
    }

    let api_version = params
        .api_version
        .clone()
        .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
    let field_names: Vec<String> = descriptors.iter().map(|d| d.full_name.clone()).collect();
    let manifest = field_manifest(&params.object, &field_names, &api_version);

    let staging = StagingArea::create()?;
    staging.stage(&params.object, &descriptors, &manifest)?;
    tracing::info!(
        staging = %staging.root().display(),
        fields = descriptors.len(),
        "staged metadata documents"
    );

    let client = MetadataClient::from_parts(&params.instance_url, &params.access_token)
        .with_api_version(&api_version);
    let results = client.create_fields(&params.object, &descriptors).await?;

    let reconciliation = reconcile(&field_names, &results, params.skip_existing);
    let failures: Vec<FieldFailure> = reconciliation
        .failures()
        .iter()
        .map(|outcome| FieldFailure {
            full_name: outcome.full_name().to_string(),
            message: match outcome {
                fieldsmith_metadata::DeploymentOutcome::Failed { message, .. } => message.clone(),
                _ => String::new(),
            },
        })
        .collect();

    if !failures.is_empty() {
        return Err(Error::new(ErrorKind::DeploymentFailed {
            failed: failures.len(),
            failures,
        }));
    }

    tracing::info!(
        created = reconciliation.created(),
        skipped = reconciliation.skipped(),
        "field deployment complete"
    );

    Ok(FieldDeploymentReport {
        object: params.object.clone(),
        staging_dir: staging.root().to_path_buf(),
        reconciliation,
    })
}
