use serde_json::json;
use std::path::Path;
use toggl_client::error::AppError;
use toggl_client::model::requests::{
    ActiveFilter, ClientRequest, ProjectRequest, ReportFormat, ReportKind, ReportRequest,
    TagAction, TagRequest, TagsUpdateRequest, TaskRequest, TimeEntryRequest,
};

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn active_filter_display() {
    assert_eq!(ActiveFilter::Active.to_string(), "true");
    assert_eq!(ActiveFilter::Inactive.to_string(), "false");
    assert_eq!(ActiveFilter::Both.to_string(), "both");
}

#[test]
fn client_request_skips_unset_fields() {
    let req = ClientRequest::new("Big Client", 1234);
    assert_eq!(json_value(&req), json!({"name": "Big Client", "wid": 1234}));

    let req = ClientRequest::default().with_notes("vip");
    assert_eq!(json_value(&req), json!({"notes": "vip"}));
}

#[test]
fn project_request_builders() {
    let req = ProjectRequest::new("Website")
        .with_client_id(7)
        .with_private(false)
        .with_billable(true)
        .with_color("#06aaf5");

    assert_eq!(
        json_value(&req),
        json!({
            "name": "Website",
            "client_id": 7,
            "is_private": false,
            "billable": true,
            "color": "#06aaf5"
        })
    );
}

#[test]
fn tag_and_task_requests() {
    assert_eq!(json_value(&TagRequest::new("urgent")), json!({"name": "urgent"}));

    let task = TaskRequest::new("Design")
        .with_active(true)
        .with_estimated_seconds(3600)
        .with_user_id(42);
    assert_eq!(
        json_value(&task),
        json!({"name": "Design", "active": true, "estimated_seconds": 3600, "user_id": 42})
    );
}

#[test]
fn time_entry_request_sets_both_workspace_fields() {
    let req = TimeEntryRequest::new(99)
        .with_description("Meeting")
        .with_start("2015-08-21T09:21:02Z")
        .with_duration(900)
        .with_tags(vec!["billed".to_string()]);

    assert_eq!(
        json_value(&req),
        json!({
            "description": "Meeting",
            "wid": 99,
            "workspace_id": 99,
            "start": "2015-08-21T09:21:02Z",
            "duration": 900,
            "tags": ["billed"]
        })
    );
}

#[test]
fn tags_update_request_constructors() {
    let add = TagsUpdateRequest::add(vec!["a".to_string()]);
    assert_eq!(add.tag_action, Some(TagAction::Add));
    assert_eq!(json_value(&add), json!({"tags": ["a"], "tag_action": "add"}));

    let remove = TagsUpdateRequest::remove(vec!["b".to_string()]);
    assert_eq!(remove.tag_action, Some(TagAction::Remove));
    assert_eq!(TagAction::Remove.to_string(), "remove");
}

#[test]
fn report_kind_segments() {
    assert_eq!(ReportKind::Weekly.segment(), "weekly");
    assert_eq!(ReportKind::Details.segment(), "search");
    assert_eq!(ReportKind::Summary.segment(), "summary");
}

#[test]
fn report_format_from_extension() {
    assert_eq!(ReportFormat::from_extension("").unwrap(), ReportFormat::Json);
    assert_eq!(ReportFormat::from_extension("json").unwrap(), ReportFormat::Json);
    assert_eq!(ReportFormat::from_extension(".pdf").unwrap(), ReportFormat::Pdf);
    assert_eq!(ReportFormat::from_extension("CSV").unwrap(), ReportFormat::Csv);
    assert_eq!(ReportFormat::from_extension("xls").unwrap(), ReportFormat::Xls);

    match ReportFormat::from_extension("txt") {
        Err(AppError::InvalidInput(msg)) => {
            assert_eq!(msg, "unsupported report extension: .txt")
        }
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn report_format_from_path() {
    assert_eq!(
        ReportFormat::from_path(Path::new("/tmp/summary.pdf")).unwrap(),
        ReportFormat::Pdf
    );
    assert_eq!(
        ReportFormat::from_path(Path::new("/tmp/summary")).unwrap(),
        ReportFormat::Json
    );
    assert!(ReportFormat::Xls.is_document());
    assert!(!ReportFormat::Json.is_document());
    assert_eq!(ReportFormat::Csv.extension(), ".csv");
    assert_eq!(ReportFormat::Json.extension(), "");
}

#[test]
fn report_request_skips_empty_filters() {
    let req = ReportRequest::between("2024-01-01", "2024-01-31")
        .with_project_ids(vec![1, 2])
        .with_grouping("projects");

    assert_eq!(
        json_value(&req),
        json!({
            "start_date": "2024-01-01",
            "end_date": "2024-01-31",
            "project_ids": [1, 2],
            "grouping": "projects"
        })
    );
    assert_eq!(json_value(&ReportRequest::default()), json!({}));
}
