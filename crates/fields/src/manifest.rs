//! Package manifest (package.xml).

use crate::descriptor::METADATA_NAMESPACE;
use crate::xml;

/// Manifest type name for custom fields.
pub const CUSTOM_FIELD_TYPE: &str = "CustomField";

/// Package manifest (package.xml).
///
/// Use this structured type to safely build package manifests without
/// risk of XML injection. All values are properly escaped when
/// converted to XML.
#[derive(Debug, Clone, Default)]
pub struct PackageManifest {
    pub types: Vec<PackageTypeMembers>,
    pub version: String,
}

/// Type members in a package manifest.
#[derive(Debug, Clone)]
pub struct PackageTypeMembers {
    pub name: String,
    pub members: Vec<String>,
}

impl PackageManifest {
    /// Create a new package manifest with the given API version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            types: Vec::new(),
            version: version.into(),
        }
    }

    /// Add a metadata type with its members.
    pub fn add_type(mut self, name: impl Into<String>, members: Vec<String>) -> Self {
        self.types.push(PackageTypeMembers {
            name: name.into(),
            members,
        });
        self
    }

    /// Render the complete package.xml document.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!("<Package xmlns=\"{}\">\n", METADATA_NAMESPACE));
        for type_members in &self.types {
            out.push_str("    <types>\n");
            for member in &type_members.members {
                out.push_str(&format!(
                    "        <members>{}</members>\n",
                    xml::escape(member)
                ));
            }
            out.push_str(&format!(
                "        <name>{}</name>\n",
                xml::escape(&type_members.name)
            ));
            out.push_str("    </types>\n");
        }
        out.push_str(&format!(
            "    <version>{}</version>\n",
            xml::escape(&self.version)
        ));
        out.push_str("</Package>\n");
        out
    }
}

/// Build the manifest enumerating `<Object>.<Field>` members under the
/// CustomField type.
///
/// Purely descriptive: the manifest does not gate which descriptors are
/// actually submitted.
pub fn field_manifest(object: &str, field_names: &[String], version: &str) -> PackageManifest {
    let members = field_names
        .iter()
        .map(|name| format!("{object}.{name}"))
        .collect();
    PackageManifest::new(version).add_type(CUSTOM_FIELD_TYPE, members)
}
