//! End-to-end tests: CSV file on disk, mocked Metadata API endpoint.

use std::io::Write;

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fieldsmith::{create_fields, CreateFieldsParams, ErrorKind};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create csv file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

fn params(csv: &tempfile::NamedTempFile, server_uri: &str, skip_existing: bool) -> CreateFieldsParams {
    CreateFieldsParams {
        object: "Account".to_string(),
        csv_path: csv.path().to_path_buf(),
        instance_url: server_uri.to_string(),
        access_token: "session-token".to_string(),
        api_version: None,
        skip_existing,
    }
}

fn save_results_body(results: &[(&str, bool, Option<&str>)]) -> String {
    let mut blocks = String::new();
    for (full_name, success, error) in results {
        blocks.push_str("      <result>\n");
        if let Some(message) = error {
            blocks.push_str(&format!(
                "        <errors>\n          <message>{message}</message>\n          <statusCode>DUPLICATE_DEVELOPER_NAME</statusCode>\n        </errors>\n"
            ));
        }
        blocks.push_str(&format!(
            "        <fullName>{full_name}</fullName>\n        <success>{success}</success>\n      </result>\n"
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <createMetadataResponse>
{blocks}    </createMetadataResponse>
  </soapenv:Body>
</soapenv:Envelope>"#
    )
}

#[tokio::test]
async fn test_create_fields_end_to_end() {
    let csv = write_csv(
        "fullName,label,type,length,precision,scale,description,formula,picklistValues,defaultValue,required,externalId,unique,caseSensitive,inlineHelpText\n\
         Status__c,Status,Picklist,,,,,,\"New,In Progress,Completed\",New,,,,,Pick one\n\
         Total__c,Invoice Total,Currency,,,,,,,,true,,,,\n",
    );

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/Soap/m/62.0"))
        .and(header("soapaction", "createMetadata"))
        .and(header("content-type", "text/xml;charset=UTF-8"))
        .and(body_string_contains("<met:createMetadata>"))
        .and(body_string_contains(
            "<met:fullName>Account.Status__c</met:fullName>",
        ))
        .and(body_string_contains(
            "<met:fullName>Account.Total__c</met:fullName>",
        ))
        .and(body_string_contains("<met:precision>18</met:precision>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(save_results_body(&[
            ("Account.Status__c", true, None),
            ("Account.Total__c", true, None),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let report = create_fields(&params(&csv, &server.uri(), false))
        .await
        .expect("deployment succeeds");

    assert_eq!(report.deployed_fields(), vec!["Status__c", "Total__c"]);
    assert_eq!(report.reconciliation.created(), 2);

    // Staged artifacts live under a path keyed by the target object.
    let status_doc = report
        .staging_dir
        .join("objects/Account/fields/Status__c.field-meta.xml");
    let package = report.staging_dir.join("package.xml");
    assert!(status_doc.is_file());
    assert!(package.is_file());

    let document = std::fs::read_to_string(status_doc).unwrap();
    assert!(document.contains("<fullName>Status__c</fullName>"));
    assert!(document.contains("<default>true</default>"));
    let manifest = std::fs::read_to_string(package).unwrap();
    assert!(manifest.contains("<members>Account.Status__c</members>"));
    assert!(manifest.contains("<name>CustomField</name>"));

    std::fs::remove_dir_all(&report.staging_dir).ok();
}

#[tokio::test]
async fn test_existing_field_fails_batch_without_skip() {
    let csv = write_csv(
        "fullName,label,type\n\
         A__c,A,Text\n\
         B__c,B,Text\n\
         C__c,C,Text\n\
         D__c,D,Text\n",
    );

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(save_results_body(&[
            ("Account.A__c", true, None),
            ("Account.B__c", true, None),
            ("Account.C__c", true, None),
            ("Account.D__c", false, Some("Field already exists")),
        ])))
        .mount(&server)
        .await;

    let err = create_fields(&params(&csv, &server.uri(), false))
        .await
        .expect_err("deployment fails");

    match err.kind {
        ErrorKind::DeploymentFailed { failed, failures } => {
            assert_eq!(failed, 1);
            assert_eq!(failures[0].full_name, "D__c");
            assert!(failures[0].message.contains("already exists"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_existing_field_skipped_with_skip() {
    let csv = write_csv(
        "fullName,label,type\n\
         A__c,A,Text\n\
         B__c,B,Text\n\
         C__c,C,Text\n\
         D__c,D,Text\n",
    );

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(save_results_body(&[
            ("Account.A__c", true, None),
            ("Account.B__c", true, None),
            ("Account.C__c", true, None),
            (
                "Account.D__c",
                false,
                Some("There is already a field named D on Account."),
            ),
        ])))
        .mount(&server)
        .await;

    let report = create_fields(&params(&csv, &server.uri(), true))
        .await
        .expect("deployment succeeds with skip-existing");

    assert_eq!(report.reconciliation.created(), 3);
    assert_eq!(report.reconciliation.skipped(), 1);
    assert_eq!(report.deployed_fields().len(), 4);

    std::fs::remove_dir_all(&report.staging_dir).ok();
}

#[tokio::test]
async fn test_empty_input_fails_before_any_request() {
    let csv = write_csv("fullName,label,type\n");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = create_fields(&params(&csv, &server.uri(), false))
        .await
        .expect_err("no definitions");
    assert!(matches!(err.kind, ErrorKind::NoFieldDefinitions));
}

#[tokio::test]
async fn test_invalid_row_aborts_before_any_request() {
    let csv = write_csv(
        "fullName,label,type\n\
         Good__c,Good,Text\n\
         BadName,Bad,Text\n",
    );

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = create_fields(&params(&csv, &server.uri(), false))
        .await
        .expect_err("validation fails");

    match err.kind {
        ErrorKind::Fields(message) => {
            assert!(message.contains("invalid field name"));
            assert!(message.contains("BadName"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
