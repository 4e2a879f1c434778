use std::io::Write;
use tempfile::{NamedTempFile, tempdir};
use toggl_client::application::auth::Credentials;
use toggl_client::error::AppError;

#[test]
fn test_token_credentials_use_api_token_password() {
    let creds = Credentials::token("my-token");
    assert_eq!(creds.username(), "my-token");
    assert_eq!(creds.password(), "api_token");
}

#[test]
fn test_basic_credentials() {
    let creds = Credentials::basic("user@example.com", "secret");
    assert_eq!(creds.username(), "user@example.com");
    assert_eq!(creds.password(), "secret");
}

#[test]
fn test_debug_redacts_secrets() {
    let token = format!("{:?}", Credentials::token("my-token"));
    assert!(!token.contains("my-token"));

    let basic = format!("{:?}", Credentials::basic("user@example.com", "secret"));
    assert!(basic.contains("user@example.com"));
    assert!(!basic.contains("secret"));
}

#[test]
fn test_resolve_prefers_explicit_token() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let creds = Credentials::resolve(Some("explicit"), Some(&missing)).unwrap();
    assert_eq!(creds, Credentials::token("explicit"));
}

#[test]
fn test_resolve_reads_token_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "  file-token  ").unwrap();

    let creds = Credentials::resolve(None, Some(file.path())).unwrap();
    assert_eq!(creds.username(), "file-token");

    let blank_token = Credentials::resolve(Some("   "), Some(file.path())).unwrap();
    assert_eq!(blank_token.username(), "file-token");
}

#[test]
fn test_resolve_missing_file_lists_every_option() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join(".toggl");

    match Credentials::resolve(None, Some(&missing)) {
        Err(AppError::Config(msg)) => {
            assert!(msg.starts_with("Expecting one of:"));
            assert!(msg.contains(&format!("api_token in file {}", missing.display())));
            assert!(msg.contains("parameter: (api_token)"));
            assert!(msg.contains("parameters: (username, password)"));
        }
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[test]
fn test_empty_token_file_is_rejected() {
    let file = NamedTempFile::new().unwrap();
    assert!(matches!(
        Credentials::from_token_file(file.path()),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_default_token_file_name() {
    if let Some(path) = Credentials::default_token_file() {
        assert!(path.ends_with(".toggl"));
    }
}
