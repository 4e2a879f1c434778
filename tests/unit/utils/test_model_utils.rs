use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use serde_json::json;
use toggl_client::error::AppError;
use toggl_client::model::requests::ClientRequest;
use toggl_client::model::responses::Tag;
use toggl_client::model::utils::{
    Timestamp, decode, decode_list, decode_optional, is_empty_value, iso8601, parse_timestamp,
    require_fields, require_params,
};

#[test]
fn test_require_params_all_present() {
    let params = json!({"name": "Client", "wid": 1});
    assert!(require_params(&params, &["name", "wid"]).is_ok());
}

#[test]
fn test_require_params_lists_every_missing_field() {
    let params = json!({"notes": "x"});
    match require_params(&params, &["name", "wid"]) {
        Err(AppError::Validation(msg)) => {
            assert_eq!(msg, "params[name] is required, params[wid] is required")
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_require_params_only_missing_ones() {
    let params = json!({"name": "Client"});
    let err = require_params(&params, &["name", "wid"]).unwrap_err();
    assert_eq!(err.to_string(), "params[wid] is required");
}

#[test]
fn test_require_params_not_an_object() {
    let err = require_params(&json!([1, 2]), &["name"]).unwrap_err();
    assert_eq!(err.to_string(), "params is not an object: params[name] is required");
}

#[test]
fn test_require_fields_returns_wire_json() {
    let body = require_fields(&ClientRequest::new("Client", 1), &["name", "wid"]).unwrap();
    assert_eq!(body, json!({"name": "Client", "wid": 1}));

    let err = require_fields(&ClientRequest::default(), &["name", "wid"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "params[name] is required, params[wid] is required"
    );
}

#[test]
fn test_is_empty_value() {
    assert!(is_empty_value(&json!({})));
    assert!(is_empty_value(&json!(null)));
    assert!(!is_empty_value(&json!([])));
    assert!(!is_empty_value(&json!({"id": 1})));
}

#[test]
fn test_decode_list_and_optional() {
    let tags: Vec<Tag> = decode_list(json!({})).unwrap();
    assert!(tags.is_empty());

    let tags: Vec<Tag> = decode_list(json!([{"id": 1, "name": "a"}])).unwrap();
    assert_eq!(tags[0].name, "a");

    let none: Option<Tag> = decode_optional(json!({})).unwrap();
    assert!(none.is_none());
}

#[test]
fn test_decode_rejects_empty_entity() {
    assert!(matches!(
        decode::<Tag>(json!({})),
        Err(AppError::InvalidFormat(_))
    ));
    assert!(matches!(
        decode::<Tag>(json!(null)),
        Err(AppError::InvalidFormat(_))
    ));

    let tag: Tag = decode(json!({"id": 7, "name": "billable"})).unwrap();
    assert_eq!(tag.id, 7);
}

#[test]
fn test_iso8601_utc_becomes_z() {
    assert_eq!(
        iso8601("2015-08-21T09:21:02+00:00").unwrap(),
        "2015-08-21T09:21:02Z"
    );
    let dt = Utc.with_ymd_and_hms(2015, 8, 21, 9, 21, 2).unwrap();
    assert_eq!(iso8601(dt).unwrap(), "2015-08-21T09:21:02Z");
}

#[test]
fn test_iso8601_negative_zero_offset_becomes_z() {
    assert_eq!(
        iso8601("2015-08-21T09:21:02-00:00").unwrap(),
        "2015-08-21T09:21:02Z"
    );
}

#[test]
fn test_iso8601_keeps_fractional_seconds() {
    let input = "2015-08-21T09:21:02.750+02:00";
    let formatted = iso8601(input).unwrap();
    assert_eq!(formatted, "2015-08-21T09:21:02.750+02:00");
    assert_eq!(
        parse_timestamp(&formatted).unwrap(),
        parse_timestamp(input).unwrap()
    );

    let dt = Utc.with_ymd_and_hms(2015, 8, 21, 9, 21, 2).unwrap()
        + chrono::Duration::microseconds(123_456);
    let formatted = iso8601(dt).unwrap();
    assert_eq!(formatted, "2015-08-21T09:21:02.123456Z");
    assert_eq!(parse_timestamp(&formatted).unwrap(), dt);
}

#[test]
fn test_iso8601_round_trips_to_same_instant() {
    for input in [
        "2015-08-21T09:21:02Z",
        "2015-08-21T04:21:02-05:00",
        "2015-08-21 09:21:02",
    ] {
        let formatted = iso8601(input).unwrap();
        assert_eq!(
            parse_timestamp(&formatted).unwrap(),
            parse_timestamp(input).unwrap(),
            "{input} -> {formatted}"
        );
    }
}

#[test]
fn test_iso8601_keeps_offset() {
    assert_eq!(
        iso8601("2015-08-21T04:21:02-05:00").unwrap(),
        "2015-08-21T04:21:02-05:00"
    );
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let dt = offset.with_ymd_and_hms(2015, 8, 21, 11, 21, 2).unwrap();
    assert_eq!(iso8601(dt).unwrap(), "2015-08-21T11:21:02+02:00");
}

#[test]
fn test_iso8601_date() {
    let date = NaiveDate::from_ymd_opt(2015, 8, 21).unwrap();
    assert_eq!(iso8601(date).unwrap(), "2015-08-21");
}

#[test]
fn test_iso8601_text_without_offset_is_utc() {
    assert_eq!(iso8601("2015-08-21 09:21:02").unwrap(), "2015-08-21T09:21:02Z");
    assert_eq!(iso8601("2015-08-21").unwrap(), "2015-08-21T00:00:00Z");
}

#[test]
fn test_iso8601_rejects_numbers() {
    match iso8601(1440000000_i64) {
        Err(AppError::InvalidType(msg)) => {
            assert_eq!(msg, "Can't convert number to ISO-8601 Date/Time")
        }
        other => panic!("expected invalid type, got {other:?}"),
    }
    assert!(matches!(
        iso8601(Timestamp::from(json!(true))),
        Err(AppError::InvalidType(_))
    ));
}

#[test]
fn test_iso8601_json_string_is_parsed() {
    assert_eq!(
        iso8601(json!("2015-08-21T09:21:02Z")).unwrap(),
        "2015-08-21T09:21:02Z"
    );
}

#[test]
fn test_parse_timestamp_invalid() {
    match parse_timestamp("yesterday") {
        Err(AppError::InvalidFormat(msg)) => assert_eq!(msg, "invalid date: yesterday"),
        other => panic!("expected invalid format, got {other:?}"),
    }
}

#[test]
fn test_iso8601_invalid_text() {
    match iso8601("X") {
        Err(AppError::InvalidFormat(msg)) => assert_eq!(msg, "invalid date: X"),
        other => panic!("expected invalid format, got {other:?}"),
    }
}
