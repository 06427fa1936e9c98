//! Staging area for generated metadata documents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::CustomField;
use crate::error::{Error, ErrorKind, Result};
use crate::manifest::PackageManifest;

/// On-disk staging area for one deployment.
///
/// Layout mirrors the source format, keyed by the target object:
///
/// ```text
/// <root>/package.xml
/// <root>/objects/<Object>/fields/<FullName>.field-meta.xml
/// ```
#[derive(Debug)]
pub struct StagingArea {
    root: PathBuf,
}

impl StagingArea {
    /// Create a staging area under a fresh temporary directory.
    ///
    /// The directory is kept on disk after the run so callers can
    /// inspect the generated artifacts.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("fieldsmith-")
            .tempdir()
            .map_err(|err| Error {
                kind: ErrorKind::Staging(format!("failed to create staging directory: {err}")),
                source: Some(Box::new(err)),
            })?;
        Ok(Self {
            root: dir.into_path(),
        })
    }

    /// Open a staging area rooted at an existing directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of this staging area.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative path of one field document.
    pub fn field_document_path(object: &str, full_name: &str) -> PathBuf {
        Path::new("objects")
            .join(object)
            .join("fields")
            .join(format!("{full_name}.field-meta.xml"))
    }

    /// Write every field descriptor document plus the manifest.
    pub fn stage(
        &self,
        object: &str,
        fields: &[CustomField],
        manifest: &PackageManifest,
    ) -> Result<()> {
        for field in fields {
            let path = Self::field_document_path(object, &field.full_name);
            self.write_document(&path, &field.to_meta_xml())?;
        }
        self.write_document(Path::new("package.xml"), &manifest.to_xml())?;
        Ok(())
    }

    fn write_document(&self, relative: &Path, contents: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), "staged metadata document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::build_descriptor;
    use crate::field::{FieldDefinition, FieldType};
    use crate::manifest::field_manifest;

    fn text_field(full_name: &str) -> CustomField {
        build_descriptor(&FieldDefinition {
            full_name: full_name.to_string(),
            label: "Label".to_string(),
            field_type: FieldType::Text,
            length: None,
            precision: None,
            scale: None,
            description: None,
            formula: None,
            picklist_values: None,
            default_value: None,
            required: None,
            external_id: None,
            unique: None,
            case_sensitive: None,
            inline_help_text: None,
        })
    }

    #[test]
    fn test_field_document_path_keyed_by_object() {
        let path = StagingArea::field_document_path("Invoice__c", "Total__c");
        assert_eq!(
            path,
            Path::new("objects/Invoice__c/fields/Total__c.field-meta.xml")
        );
    }

    #[test]
    fn test_stage_writes_documents_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let staging = StagingArea::at(dir.path());

        let fields = vec![text_field("One__c"), text_field("Two__c")];
        let names: Vec<String> = fields.iter().map(|f| f.full_name.clone()).collect();
        let manifest = field_manifest("Account", &names, "62.0");

        staging.stage("Account", &fields, &manifest).unwrap();

        let one = dir
            .path()
            .join("objects/Account/fields/One__c.field-meta.xml");
        let package = dir.path().join("package.xml");
        assert!(one.is_file());
        assert!(dir
            .path()
            .join("objects/Account/fields/Two__c.field-meta.xml")
            .is_file());
        assert!(package.is_file());

        let document = fs::read_to_string(one).unwrap();
        assert!(document.contains("<fullName>One__c</fullName>"));
        let manifest_xml = fs::read_to_string(package).unwrap();
        assert!(manifest_xml.contains("<members>Account.One__c</members>"));
    }

    #[test]
    fn test_create_keeps_directory() {
        let staging = StagingArea::create().unwrap();
        assert!(staging.root().is_dir());
        let root = staging.root().to_path_buf();
        drop(staging);
        assert!(root.is_dir());
        fs::remove_dir_all(root).unwrap();
    }
}
