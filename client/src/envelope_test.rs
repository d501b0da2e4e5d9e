use serde_json::{Value, json};

use super::*;

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Row {
    id: i64,
    name: String,
}

#[test]
fn parse_record_returns_data() {
    let row: Row = parse_record(r#"{"code":200,"message":"ok","data":{"id":1,"name":"alpha"}}"#).unwrap();
    assert_eq!(row, Row { id: 1, name: "alpha".into() });
}

#[test]
fn parse_record_rejects_null_data() {
    let err = parse_record::<Row>(r#"{"code":200,"data":null}"#).unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[test]
fn parse_data_allows_missing_data_and_code() {
    let data = parse_data::<Value>(r#"{"message":"deleted"}"#).unwrap();
    assert_eq!(data, None);
}

#[test]
fn non_success_envelope_code_is_an_error() {
    let err = parse_data::<Value>(r#"{"code":500,"message":"db down"}"#).unwrap_err();
    match err {
        ApiError::Envelope { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "db down");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_page_reads_paging_fields() {
    let body = json!({
        "code": 200,
        "message": "ok",
        "data": [{"id": 2, "name": "b"}, {"id": 1, "name": "a"}],
        "total": 12,
        "page": 2,
        "page_size": 2
    })
    .to_string();
    let page: Page<Row> = parse_page(&body).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, 2);
    assert_eq!((page.total, page.page, page.page_size), (12, 2, 2));
}

#[test]
fn parse_page_defaults_missing_page_fields() {
    let page: Page<Row> = parse_page(r#"{"total":0}"#).unwrap();
    assert!(page.items.is_empty());
    assert_eq!((page.page, page.page_size), (1, 10));
}

#[test]
fn malformed_body_is_parse_error() {
    assert!(matches!(parse_page::<Row>("<html>"), Err(ApiError::Parse(_))));
}
