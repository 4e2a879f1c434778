use serde_json::json;
use toggl_client::application::auth::Credentials;
use toggl_client::error::AppError;
use toggl_client::model::http::{
    Connection, ConnectionOptions, NO_QUERY, build_path, empty_object, encode_plus,
    is_empty_body,
};

#[test]
fn test_build_path_without_query() {
    assert_eq!(build_path("me/workspaces", NO_QUERY), "me/workspaces");
}

#[test]
fn test_build_path_joins_query_pairs() {
    let path = build_path(
        "me/time_entries",
        &[("start_date", "2015-08-21"), ("end_date", "2015-08-22")],
    );
    assert_eq!(
        path,
        "me/time_entries?start_date=2015-08-21&end_date=2015-08-22"
    );
}

#[test]
fn test_build_path_encodes_plus_in_path_and_query() {
    let path = build_path("tags/a+b", &[("since", "2015-08-21T09:21:02+02:00")]);
    assert_eq!(path, "tags/a%2Bb?since=2015-08-21T09:21:02%2B02:00");
}

#[test]
fn test_build_path_does_not_encode_other_characters() {
    let path = build_path("projects", &[("name", "a b&c")]);
    assert_eq!(path, "projects?name=a b&c");
}

#[test]
fn test_encode_plus() {
    assert_eq!(encode_plus("a+b+c"), "a%2Bb%2Bc");
    assert_eq!(encode_plus("plain"), "plain");
}

#[test]
fn test_is_empty_body() {
    assert!(is_empty_body(b""));
    assert!(is_empty_body(b"null"));
    assert!(is_empty_body(b"  null\n"));
    assert!(!is_empty_body(b"{}"));
    assert!(!is_empty_body(b"nullable"));
}

#[test]
fn test_empty_object() {
    assert_eq!(empty_object(), json!({}));
}

#[test]
fn test_connection_open_requires_url() {
    let result = Connection::open(
        Credentials::token("my-token"),
        None,
        ConnectionOptions::default(),
    );
    match result {
        Err(AppError::Config(msg)) => assert_eq!(msg, "Missing URL"),
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[test]
fn test_connection_open_rejects_blank_url() {
    let result = Connection::open(
        Credentials::token("my-token"),
        Some("   "),
        ConnectionOptions::default(),
    );
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_connection_open_keeps_url_and_options() {
    let options = ConnectionOptions::default()
        .with_log(true)
        .with_timeout_secs(5);
    let connection = Connection::open(
        Credentials::token("my-token"),
        Some("http://localhost:1234/api/v9/"),
        options,
    )
    .unwrap();

    assert_eq!(connection.base_url(), "http://localhost:1234/api/v9/");
    assert!(connection.options().log);
    assert_eq!(connection.options().timeout_secs, 5);
}
