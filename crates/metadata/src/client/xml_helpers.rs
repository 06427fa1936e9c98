//! SOAP response parsing.

use crate::error::{Error, ErrorKind, Result};
use crate::types::{MetadataError, SaveResult, SoapFault};

impl super::MetadataClient {
    /// Parse a SOAP fault from the response.
    pub(crate) fn parse_soap_fault(&self, xml: &str) -> Option<SoapFault> {
        if !xml.contains("faultcode") {
            return None;
        }

        let fault_code = self.extract_element(xml, "faultcode")?;
        let fault_string = self
            .extract_element(xml, "faultstring")
            .unwrap_or_else(|| "Unknown error".to_string());

        Some(SoapFault {
            fault_code,
            fault_string,
        })
    }

    /// Extract a simple element value from XML.
    pub(crate) fn extract_element(&self, xml: &str, tag: &str) -> Option<String> {
        let end_tag = format!("</{}>", tag);

        let start_patterns = [
            format!("<{}>", tag),
            format!("<{}:{}>", "sf", tag),
            format!("<{}:{}>", "met", tag),
            format!("<{}:{}>", "tns", tag),
        ];

        for start in &start_patterns {
            if let Some(start_idx) = xml.find(start) {
                let content_start = start_idx + start.len();
                let search_from = &xml[content_start..];
                if let Some(end_idx) = search_from
                    .find(&end_tag)
                    .or_else(|| search_from.find(&format!("</{}", tag)))
                {
                    return Some(search_from[..end_idx].to_string());
                }
            }
        }
        None
    }

    /// Extract all elements with a given tag.
    pub(crate) fn extract_elements(&self, xml: &str, tag: &str) -> Vec<String> {
        let mut results = Vec::new();
        let start_tag = format!("<{}>", tag);
        let end_tag = format!("</{}>", tag);

        let mut search_from = xml;
        while let Some(start_idx) = search_from.find(&start_tag) {
            let content_start = start_idx + start_tag.len();
            let remaining = &search_from[content_start..];
            if let Some(end_idx) = remaining.find(&end_tag) {
                results.push(remaining[..end_idx].to_string());
                search_from = &remaining[end_idx + end_tag.len()..];
            } else {
                break;
            }
        }
        results
    }

    /// Parse save results from a createMetadata response.
    ///
    /// The API answers with one `<result>` element per submitted
    /// component, or a single element for a one-component call; both
    /// shapes normalize into the same ordered sequence here.
    pub(crate) fn parse_save_results(&self, xml: &str) -> Result<Vec<SaveResult>> {
        let mut results = Vec::new();
        let pattern = "<result>";
        let mut search_from = xml;

        while let Some(start) = search_from.find(pattern) {
            let remaining = &search_from[start..];
            if let Some(end) = remaining.find("</result>") {
                let block = &remaining[..end + "</result>".len()];

                let result = SaveResult {
                    full_name: self.extract_element(block, "fullName").unwrap_or_default(),
                    success: self
                        .extract_element(block, "success")
                        .map(|s| s == "true")
                        .unwrap_or(false),
                    errors: self.parse_metadata_errors(block),
                };

                results.push(result);
                search_from = &remaining[end + "</result>".len()..];
            } else {
                break;
            }
        }

        if results.is_empty() {
            return Err(Error::new(ErrorKind::InvalidResponse(
                "Missing result".to_string(),
            )));
        }

        Ok(results)
    }

    /// Parse error sub-elements of one result block.
    pub(crate) fn parse_metadata_errors(&self, xml: &str) -> Vec<MetadataError> {
        let mut errors = Vec::new();
        let pattern = "<errors>";
        let mut search_from = xml;

        while let Some(start) = search_from.find(pattern) {
            let remaining = &search_from[start..];
            if let Some(end) = remaining.find("</errors>") {
                let block = &remaining[..end + "</errors>".len()];

                errors.push(MetadataError {
                    status_code: self.extract_element(block, "statusCode").unwrap_or_default(),
                    message: self
                        .extract_element(block, "message")
                        .unwrap_or_else(|| "Unknown error".to_string()),
                    fields: self.extract_elements(block, "fields"),
                });

                search_from = &remaining[end + "</errors>".len()..];
            } else {
                break;
            }
        }

        errors
    }
}
