use serde_json::json;
use toggl_client::model::responses::{
    Dashboard, Project, Report, Tag, TagsUpdateResponse, TimeEntry, User, Workspace,
};

#[test]
fn workspace_deserializes_with_missing_fields() {
    let ws: Workspace = serde_json::from_value(json!({
        "id": 1234,
        "name": "Personal",
        "premium": false,
        "unknown_field": "ignored"
    }))
    .unwrap();

    assert_eq!(ws.id, 1234);
    assert_eq!(ws.name, "Personal");
    assert_eq!(ws.default_currency, None);
}

#[test]
fn time_entry_running_flag() {
    let running: TimeEntry = serde_json::from_value(json!({
        "id": 1,
        "workspace_id": 2,
        "start": "2024-03-01T08:00:00Z",
        "duration": -1709280000
    }))
    .unwrap();
    assert!(running.is_running());
    assert_eq!(running.stop, None);

    let stopped = TimeEntry {
        duration: 900,
        ..Default::default()
    };
    assert!(!stopped.is_running());
}

#[test]
fn user_with_related_data() {
    let user: User = serde_json::from_value(json!({
        "id": 9,
        "email": "user@example.com",
        "fullname": "Test User",
        "projects": [
            {"id": 1, "workspace_id": 2, "name": "Live", "active": true},
            {"id": 2, "workspace_id": 2, "name": "Gone", "server_deleted_at": "2024-01-01T00:00:00Z"}
        ],
        "tags": [{"id": 5, "workspace_id": 2, "name": "urgent"}]
    }))
    .unwrap();

    let projects: Vec<Project> = user.projects.clone().unwrap();
    assert_eq!(projects.len(), 2);
    assert!(projects[1].server_deleted_at.is_some());
    assert_eq!(
        user.tags.unwrap(),
        vec![Tag {
            id: 5,
            workspace_id: 2,
            name: "urgent".to_string(),
            at: None
        }]
    );
    assert_eq!(user.clients, None);
}

#[test]
fn tags_update_response_variants() {
    let bulk: TagsUpdateResponse =
        serde_json::from_value(json!({"success": [1, 2], "failure": []})).unwrap();
    assert!(matches!(bulk, TagsUpdateResponse::Bulk(ref b) if b.success == vec![1, 2]));
    assert!(bulk.entries().is_empty());

    let entries: TagsUpdateResponse =
        serde_json::from_value(json!([{"id": 1, "tags": ["a"]}, {"id": 2}])).unwrap();
    assert_eq!(entries.entries().len(), 2);

    let entry: TagsUpdateResponse =
        serde_json::from_value(json!({"id": 3, "workspace_id": 4, "tags": []})).unwrap();
    match entry {
        TagsUpdateResponse::Entry(e) => assert_eq!(e.id, 3),
        other => panic!("expected a single entry, got {other:?}"),
    }
}

#[test]
fn dashboard_keeps_loose_activity() {
    let dashboard: Dashboard = serde_json::from_value(json!({
        "all_activity": [],
        "most_active_user": [{"user_id": 1, "duration": 3600}],
        "activity": []
    }))
    .unwrap();
    assert_eq!(dashboard.most_active_user[0]["duration"], 3600);
}

#[test]
fn report_to_bytes() {
    let document = Report::Document(b"%PDF-1.4".to_vec());
    assert_eq!(document.to_bytes().unwrap(), b"%PDF-1.4".to_vec());
    assert!(document.as_json().is_none());

    let json_report = Report::Json(json!({"total_grand": 3600}));
    assert_eq!(json_report.to_bytes().unwrap(), br#"{"total_grand":3600}"#.to_vec());
    assert_eq!(json_report.as_json().unwrap()["total_grand"], 3600);
}

#[test]
fn tag_display() {
    let tag = Tag {
        id: 1,
        workspace_id: 2,
        name: "urgent".to_string(),
        at: None,
    };
    let shown = format!("{}", tag);
    assert!(shown.contains("urgent"));
}
