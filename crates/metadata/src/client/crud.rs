//! Synchronous metadata CRUD operations.

use fieldsmith_fields::{xml, CustomField};

use crate::error::{Error, ErrorKind, Result};
use crate::types::SaveResult;

impl super::MetadataClient {
    /// Create custom fields on an object via `createMetadata`.
    ///
    /// Synchronous CRUD operation. The whole batch goes out in one
    /// envelope; the response carries one result per descriptor in
    /// submission order. An empty batch returns without a round trip.
    pub async fn create_fields(
        &self,
        object: &str,
        fields: &[CustomField],
    ) -> Result<Vec<SaveResult>> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }

        let metadata_elements: Vec<String> = fields
            .iter()
            .map(|field| self.build_field_element(object, field))
            .collect();

        let envelope = format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:met="http://soap.sforce.com/2006/04/metadata" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <soapenv:Header>
    <met:SessionHeader>
      <met:sessionId>{session_id}</met:sessionId>
    </met:SessionHeader>
  </soapenv:Header>
  <soapenv:Body>
    <met:createMetadata>
{metadata_elements}
    </met:createMetadata>
  </soapenv:Body>
</soapenv:Envelope>"#,
            session_id = self.access_token,
            metadata_elements = metadata_elements.join("\n"),
        );

        tracing::info!(object, fields = fields.len(), "submitting createMetadata batch");

        let response = self
            .http_client
            .post(self.metadata_url())
            .headers(self.build_headers("createMetadata"))
            .body(envelope)
            .send()
            .await?;

        let response_text = response.text().await?;

        if let Some(fault) = self.parse_soap_fault(&response_text) {
            return Err(Error::new(ErrorKind::SoapFault(fault.to_string())));
        }

        self.parse_save_results(&response_text)
    }

    /// Render one `<met:metadata>` element for a field descriptor.
    ///
    /// The field's full name is qualified as `Object.Field` as required
    /// by createMetadata for CustomField components.
    pub(crate) fn build_field_element(&self, object: &str, field: &CustomField) -> String {
        let mut element = String::new();
        element.push_str("      <met:metadata xsi:type=\"met:CustomField\">\n");
        element.push_str(&format!(
            "        <met:fullName>{}.{}</met:fullName>\n",
            xml::escape(object),
            xml::escape(&field.full_name)
        ));
        field.write_body_elements(&mut element, "met:", 8);
        element.push_str("      </met:metadata>");
        element
    }
}
