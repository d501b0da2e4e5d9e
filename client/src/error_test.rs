use super::*;

#[test]
fn error_codes_are_stable() {
    assert_eq!(ApiError::Config("x".into()).error_code(), "E_CONFIG_PARSE");
    assert_eq!(ApiError::Request("x".into()).error_code(), "E_API_REQUEST");
    assert_eq!(ApiError::Response { status: 404, body: String::new() }.error_code(), "E_API_RESPONSE");
    assert_eq!(ApiError::Envelope { code: 500, message: "boom".into() }.error_code(), "E_API_ENVELOPE");
    assert_eq!(ApiError::MissingId.error_code(), "E_MISSING_ID");
    assert_eq!(ApiError::UnknownDictionary("x".into()).error_code(), "E_UNKNOWN_DICTIONARY");
}

#[test]
fn retryable_covers_transport_and_server_errors() {
    assert!(ApiError::Request("reset".into()).retryable());
    assert!(ApiError::Response { status: 503, body: String::new() }.retryable());
    assert!(ApiError::Response { status: 429, body: String::new() }.retryable());
    assert!(!ApiError::Response { status: 404, body: String::new() }.retryable());
    assert!(!ApiError::Parse("bad".into()).retryable());
    assert!(!ApiError::MissingId.retryable());
}

#[test]
fn field_errors_reads_unprocessable_body() {
    let body = r#"{"code":422,"message":"validation failed","errors":{"detail":[
        {"field":"name","message":"form.required","code":"missing"}]}}"#;
    let err = ApiError::Response { status: 422, body: body.to_owned() };
    let detail = err.field_errors().unwrap();
    assert_eq!(detail, vec![FieldError::new("name", "form.required", "missing")]);
}

#[test]
fn field_errors_ignores_other_statuses() {
    let err = ApiError::Response { status: 400, body: r#"{"errors":{"detail":[]}}"#.to_owned() };
    assert!(err.field_errors().is_none());
    let err = ApiError::Response { status: 422, body: "not json".to_owned() };
    assert!(err.field_errors().is_none());
}
