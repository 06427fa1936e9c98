//! Classification of createMetadata results onto per-field outcomes.

use serde::Serialize;

use crate::types::SaveResult;

/// Error-message substrings that mark an "already exists" failure.
const ALREADY_EXISTS_MARKERS: [&str; 2] = ["already a field named", "already exists"];

/// Outcome of one submitted field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status")]
pub enum DeploymentOutcome {
    Created {
        full_name: String,
    },
    SkippedExisting {
        full_name: String,
        message: String,
    },
    Failed {
        full_name: String,
        message: String,
    },
}

impl DeploymentOutcome {
    pub fn full_name(&self) -> &str {
        match self {
            DeploymentOutcome::Created { full_name }
            | DeploymentOutcome::SkippedExisting { full_name, .. }
            | DeploymentOutcome::Failed { full_name, .. } => full_name,
        }
    }

    /// Created and SkippedExisting both count as deployed.
    pub fn is_deployed(&self) -> bool {
        !matches!(self, DeploymentOutcome::Failed { .. })
    }
}

/// Immutable classification of one submitted batch.
#[derive(Debug, Clone, Serialize)]
pub struct Reconciliation {
    outcomes: Vec<DeploymentOutcome>,
}

impl Reconciliation {
    /// All outcomes, in submission order.
    pub fn outcomes(&self) -> &[DeploymentOutcome] {
        &self.outcomes
    }

    /// Number of fields created.
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DeploymentOutcome::Created { .. }))
            .count()
    }

    /// Number of fields skipped because they already exist.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DeploymentOutcome::SkippedExisting { .. }))
            .count()
    }

    /// Failed outcomes, in submission order.
    pub fn failures(&self) -> Vec<&DeploymentOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DeploymentOutcome::Failed { .. }))
            .collect()
    }

    /// Names of fields that ended up deployed (Created ∪ SkippedExisting),
    /// in submission order.
    pub fn deployed_field_names(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| o.is_deployed())
            .map(|o| o.full_name().to_string())
            .collect()
    }
}

/// Map results back onto the submitted field names and classify each.
///
/// Matching is strictly positional: result `i` corresponds to submitted
/// field `i`. The Metadata API documents that results come back in
/// submission order; this is inherited, not verified here. A field with
/// no corresponding result is classified as failed.
pub fn reconcile(
    field_names: &[String],
    results: &[SaveResult],
    skip_existing: bool,
) -> Reconciliation {
    let outcomes = field_names
        .iter()
        .enumerate()
        .map(|(idx, name)| match results.get(idx) {
            Some(result) => classify(name, result, skip_existing),
            None => DeploymentOutcome::Failed {
                full_name: name.clone(),
                message: "no result returned for this field".to_string(),
            },
        })
        .collect();

    Reconciliation { outcomes }
}

fn classify(full_name: &str, result: &SaveResult, skip_existing: bool) -> DeploymentOutcome {
    if result.success {
        return DeploymentOutcome::Created {
            full_name: full_name.to_string(),
        };
    }

    let message = if result.errors.is_empty() {
        "Unknown error".to_string()
    } else {
        result
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let already_exists = ALREADY_EXISTS_MARKERS
        .iter()
        .any(|marker| message.contains(marker));

    if already_exists && skip_existing {
        tracing::info!(field = %full_name, "field already exists, skipping");
        DeploymentOutcome::SkippedExisting {
            full_name: full_name.to_string(),
            message,
        }
    } else {
        DeploymentOutcome::Failed {
            full_name: full_name.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetadataError;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn ok(full_name: &str) -> SaveResult {
        SaveResult {
            full_name: full_name.to_string(),
            success: true,
            errors: Vec::new(),
        }
    }

    fn failed(full_name: &str, message: &str) -> SaveResult {
        SaveResult {
            full_name: full_name.to_string(),
            success: false,
            errors: vec![MetadataError {
                status_code: "DUPLICATE_DEVELOPER_NAME".to_string(),
                message: message.to_string(),
                fields: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_existing_field_fails_without_skip() {
        let submitted = names(&["A__c", "B__c", "C__c", "D__c"]);
        let results = vec![
            ok("Account.A__c"),
            ok("Account.B__c"),
            ok("Account.C__c"),
            failed("Account.D__c", "Field already exists"),
        ];

        let reconciliation = reconcile(&submitted, &results, false);
        assert_eq!(reconciliation.created(), 3);
        assert_eq!(reconciliation.skipped(), 0);
        assert_eq!(reconciliation.failures().len(), 1);
        assert_eq!(reconciliation.failures()[0].full_name(), "D__c");
    }

    #[test]
    fn test_existing_field_skipped_with_skip() {
        let submitted = names(&["A__c", "B__c", "C__c", "D__c"]);
        let results = vec![
            ok("Account.A__c"),
            ok("Account.B__c"),
            ok("Account.C__c"),
            failed("Account.D__c", "Field already exists"),
        ];

        let reconciliation = reconcile(&submitted, &results, true);
        assert_eq!(reconciliation.created(), 3);
        assert_eq!(reconciliation.skipped(), 1);
        assert!(reconciliation.failures().is_empty());
        assert_eq!(
            reconciliation.deployed_field_names(),
            vec!["A__c", "B__c", "C__c", "D__c"]
        );
    }

    #[test]
    fn test_duplicate_developer_name_message_skipped() {
        let submitted = names(&["Region__c"]);
        let results = vec![failed(
            "Account.Region__c",
            "There is already a field named Region on Account.",
        )];

        let reconciliation = reconcile(&submitted, &results, true);
        assert_eq!(reconciliation.skipped(), 1);
    }

    #[test]
    fn test_unrelated_failure_never_skipped() {
        let submitted = names(&["Bad__c"]);
        let results = vec![failed("Account.Bad__c", "Invalid field type")];

        let reconciliation = reconcile(&submitted, &results, true);
        assert_eq!(reconciliation.failures().len(), 1);
    }

    #[test]
    fn test_failure_messages_joined() {
        let submitted = names(&["Bad__c"]);
        let results = vec![SaveResult {
            full_name: "Account.Bad__c".to_string(),
            success: false,
            errors: vec![
                MetadataError {
                    status_code: "REQUIRED_FIELD_MISSING".to_string(),
                    message: "Required field is missing".to_string(),
                    fields: Vec::new(),
                },
                MetadataError {
                    status_code: "INVALID_FIELD".to_string(),
                    message: "Invalid length".to_string(),
                    fields: Vec::new(),
                },
            ],
        }];

        let reconciliation = reconcile(&submitted, &results, false);
        match reconciliation.failures()[0] {
            DeploymentOutcome::Failed { message, .. } => {
                assert_eq!(message.as_str(), "Required field is missing, Invalid length");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_failure_without_errors_reads_unknown() {
        let submitted = names(&["Odd__c"]);
        let results = vec![SaveResult {
            full_name: "Account.Odd__c".to_string(),
            success: false,
            errors: Vec::new(),
        }];

        let reconciliation = reconcile(&submitted, &results, false);
        match reconciliation.failures()[0] {
            DeploymentOutcome::Failed { message, .. } => {
                assert_eq!(message.as_str(), "Unknown error")
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_missing_result_classified_failed() {
        let submitted = names(&["A__c", "B__c"]);
        let results = vec![ok("Account.A__c")];

        let reconciliation = reconcile(&submitted, &results, false);
        assert_eq!(reconciliation.created(), 1);
        assert_eq!(reconciliation.failures().len(), 1);
        assert_eq!(reconciliation.failures()[0].full_name(), "B__c");
    }

    #[test]
    fn test_single_result_batch() {
        let submitted = names(&["Only__c"]);
        let reconciliation = reconcile(&submitted, &[ok("Account.Only__c")], false);
        assert_eq!(reconciliation.created(), 1);
        assert_eq!(reconciliation.deployed_field_names(), vec!["Only__c"]);
    }
}
