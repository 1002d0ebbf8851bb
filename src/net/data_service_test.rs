use super::*;
use crate::net::auth_client::HttpAuthClient;
use std::cell::RefCell;

// =============================================================
// endpoints and request bodies
// =============================================================

#[test]
fn function_endpoint_strips_trailing_slash() {
    assert_eq!(
        function_endpoint("https://demo.convex.cloud/", FunctionKind::Query),
        "https://demo.convex.cloud/api/query"
    );
    assert_eq!(
        function_endpoint("https://demo.convex.cloud", FunctionKind::Mutation),
        "https://demo.convex.cloud/api/mutation"
    );
}

#[test]
fn function_request_body_wraps_path_and_args() {
    let body = function_request_body(SEND_MESSAGE, json!({ "content": "hi" }));
    assert_eq!(body["path"], "messages:sendMessage");
    assert_eq!(body["args"]["content"], "hi");
    assert_eq!(body["format"], "json");
}

// =============================================================
// decode_function_response
// =============================================================

#[test]
fn success_envelope_decodes_value() {
    let raw = json!({
        "status": "success",
        "value": [{
            "message": { "_id": "m1", "_creationTime": 1.0, "userId": "u1", "content": "a", "createdAt": 1.0 }
        }]
    });
    let items: Vec<MessageWithUser> = decode_function_response(raw).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].message.content, "a");
}

#[test]
fn success_envelope_with_null_value_decodes_unit() {
    let raw = json!({ "status": "success", "value": null });
    let out: Result<(), ServiceError> = decode_function_response(raw);
    assert!(out.is_ok());
}

#[test]
fn error_envelope_becomes_server_error_with_code() {
    let raw = json!({
        "status": "error",
        "errorMessage": "Uncaught Error: User not authenticated",
        "errorData": { "code": "UNAUTHORIZED" }
    });
    let err = decode_function_response::<()>(raw).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Server {
            code: Some("UNAUTHORIZED".to_owned()),
            message: "Uncaught Error: User not authenticated".to_owned(),
        }
    );
}

#[test]
fn error_envelope_without_data_has_no_code() {
    let raw = json!({ "status": "error", "errorMessage": "boom" });
    let err = decode_function_response::<()>(raw).unwrap_err();
    assert_eq!(err, ServiceError::Server { code: None, message: "boom".to_owned() });
}

#[test]
fn schema_mismatch_is_a_decode_error() {
    let raw = json!({ "status": "success", "value": { "not": "a list" } });
    let err = decode_function_response::<Vec<MessageWithUser>>(raw).unwrap_err();
    assert!(matches!(err, ServiceError::Decode(_)));
}

#[test]
fn missing_status_is_a_decode_error() {
    let err = decode_function_response::<()>(json!({ "value": 1 })).unwrap_err();
    assert!(matches!(err, ServiceError::Decode(_)));
}

// =============================================================
// settle
// =============================================================

fn unauthorized() -> ServiceError {
    ServiceError::Server { code: Some("UNAUTHORIZED".to_owned()), message: "Unauthorized".to_owned() }
}

fn watched_client() -> (Rc<HttpAuthClient>, Rc<RefCell<Vec<bool>>>) {
    let client = Rc::new(HttpAuthClient::new("https://demo.convex.site", 45_000));
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    client.subscribe(Box::new(move |flag| sink.borrow_mut().push(flag)));
    (client, events)
}

#[test]
fn unauthenticated_rejection_reports_lost_session() {
    let (client, events) = watched_client();
    let result: Result<(), _> = settle(&*client, Err(unauthorized()));
    assert_eq!(result, Err(unauthorized()));
    assert_eq!(*events.borrow(), vec![false]);
}

#[test]
fn other_failures_leave_session_alone() {
    let (client, events) = watched_client();
    let _ = settle::<()>(&*client, Err(ServiceError::Network("offline".to_owned())));
    let _ = settle::<()>(&*client, Err(ServiceError::Server { code: None, message: "Message too long".to_owned() }));
    assert_eq!(settle(&*client, Ok(3)), Ok(3));
    assert!(events.borrow().is_empty());
}

#[test]
fn unauthenticated_is_recognised_by_code_or_message() {
    assert!(unauthorized().is_unauthenticated());
    assert!(
        ServiceError::Server { code: None, message: "Uncaught Error: User not authenticated".to_owned() }
            .is_unauthenticated()
    );
    assert!(!ServiceError::Server { code: Some("USER_NOT_FOUND".to_owned()), message: String::new() }.is_unauthenticated());
    assert!(!ServiceError::Unavailable.is_unauthenticated());
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_data_calls_are_unavailable_without_signing_out() {
    let (client, events) = watched_client();
    let data = HttpDataService::new("https://demo.convex.cloud", client);
    assert_eq!(futures::executor::block_on(data.get_messages()), Err(ServiceError::Unavailable));
    assert!(events.borrow().is_empty());
}
