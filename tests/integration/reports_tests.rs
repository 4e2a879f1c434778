use crate::common::{TOKEN_AUTH_HEADER, create_test_reports_client, test_options};
use mockito::{Matcher, Server};
use serde_json::json;
use tempfile::tempdir;
use toggl_client::prelude::*;

#[tokio::test]
async fn test_json_report_merges_params_into_defaults() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/workspace/1/summary/time_entries")
        .match_header("authorization", TOKEN_AUTH_HEADER)
        .match_body(Matcher::PartialJson(json!({
            "start_date": "2024-01-01",
            "end_date": "2024-01-31",
            "project_ids": [7]
        })))
        .with_status(200)
        .with_body(r#"{"groups": []}"#)
        .create_async()
        .await;

    let reports = create_test_reports_client(&server);
    let params = ReportRequest::between("2024-01-01", "2024-01-31").with_project_ids(vec![7]);
    let report = reports.summary(ReportFormat::Json, &params).await.unwrap();

    assert_eq!(report, Report::Json(json!({"groups": []})));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_report_body_defaults() {
    let server = Server::new_async().await;
    let reports = create_test_reports_client(&server);

    let body = reports.report_body(&ReportRequest::default()).unwrap();
    assert!(body["user_agent"].as_str().unwrap().starts_with("toggl-client/"));
    assert_eq!(body["start_date"].as_str().unwrap().len(), 10);
    assert!(body.get("end_date").is_none());
}

#[tokio::test]
async fn test_write_pdf_report() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/workspace/1/weekly/time_entries.pdf")
        .with_status(200)
        .with_body("%PDF-1.4 fake")
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("weekly.pdf");
    let reports = create_test_reports_client(&server);
    reports
        .write_weekly(&path, &ReportRequest::default())
        .await
        .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 fake".to_vec());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_document_becomes_empty_object_bytes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/workspace/1/weekly/time_entries.pdf")
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let reports = create_test_reports_client(&server);
    let report = reports
        .weekly(ReportFormat::Pdf, &ReportRequest::default())
        .await
        .unwrap();

    assert_eq!(report, Report::Document(b"{}".to_vec()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_write_csv_details_report() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/workspace/1/search/time_entries.csv")
        .with_status(200)
        .with_body("User,Project\nTest,Website\n")
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("details.csv");
    let reports = create_test_reports_client(&server);
    reports
        .write_details(&path, &ReportRequest::default())
        .await
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "User,Project\nTest,Website\n"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_write_json_report_without_extension() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/workspace/1/summary/time_entries")
        .with_status(200)
        .with_body(r#"{"total": 3600}"#)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("summary");
    let reports = create_test_reports_client(&server);
    reports
        .write_summary(&path, &ReportRequest::default())
        .await
        .unwrap();

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(written, json!({"total": 3600}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unsupported_extension_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let reports = create_test_reports_client(&server);
    let err = reports
        .write_summary(dir.path().join("summary.txt"), &ReportRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_report_requires_workspace() {
    let server = Server::new_async().await;
    let reports =
        ReportsClient::with_options(Credentials::token("my-token"), &server.url(), test_options())
            .unwrap();

    assert_eq!(reports.workspace_id(), None);
    let err = reports
        .weekly(ReportFormat::Json, &ReportRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "configuration error: workspace_id is required");
}

#[tokio::test]
async fn test_list_clients() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/workspace/1/filters/clients")
        .match_body(Matcher::Json(json!({"start": 0})))
        .with_status(200)
        .with_body(r#"[{"id": 3, "name": "Big Client"}]"#)
        .create_async()
        .await;

    let reports = create_test_reports_client(&server);
    let clients = reports.list_clients().await.unwrap();

    assert_eq!(
        clients,
        vec![ReportClient {
            id: 3,
            name: "Big Client".to_string()
        }]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_project_dashboard_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"^/project(\?.*)?$".to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("workspace_id".to_string(), "1".to_string()),
            Matcher::UrlEncoded("project_id".to_string(), "7".to_string()),
            Matcher::UrlEncoded("page".to_string(), "2".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"data": {"name": "Website"}}"#)
        .create_async()
        .await;

    let reports = create_test_reports_client(&server);
    let project = reports.project(7, &[("page", 2)]).await.unwrap();

    assert_eq!(project, json!({"name": "Website"}));
    mock.assert_async().await;
}
