use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::executor::block_on;

use super::*;

/// Transport fake that replays a scripted response sequence and records
/// every request it was asked to send.
#[derive(Default)]
struct ScriptedTransport {
    script: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    fn new(script: Vec<Result<ApiResponse, ApiError>>) -> Self {
        Self { script: RefCell::new(script.into()), sent: RefCell::new(Vec::new()) }
    }

    fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.borrow_mut().push(request.clone());
        self.script.borrow_mut().pop_front().expect("script exhausted")
    }
}

#[derive(Default)]
struct RecordingTokens {
    token: RefCell<Option<String>>,
    refreshed: RefCell<Vec<String>>,
    cleared: Cell<u32>,
}

impl RecordingTokens {
    fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())), ..Self::default() }
    }
}

impl TokenSource for RecordingTokens {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store_refreshed(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
        self.refreshed.borrow_mut().push(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        self.cleared.set(self.cleared.get() + 1);
    }
}

fn status(status: u16, body: &str) -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse { status, body: body.to_owned() })
}

#[test]
fn retry_decision_refreshes_only_first_401() {
    assert_eq!(retry_decision(401, false), RetryDecision::RefreshAndRetry);
    assert_eq!(retry_decision(401, true), RetryDecision::Propagate);
    assert_eq!(retry_decision(403, false), RetryDecision::Propagate);
    assert_eq!(retry_decision(200, false), RetryDecision::Propagate);
    assert_eq!(retry_decision(500, false), RetryDecision::Propagate);
}

#[test]
fn attach_token_respects_explicit_authorization() {
    let mut request = ApiRequest::get("/products");
    attach_token(&mut request, Some("t1"));
    assert_eq!(request.auth.as_deref(), Some("Bearer t1"));

    let mut explicit = ApiRequest::get("/auth/profile");
    explicit.auth = Some("Bearer other".to_owned());
    attach_token(&mut explicit, Some("t1"));
    assert_eq!(explicit.auth.as_deref(), Some("Bearer other"));

    let mut anonymous = ApiRequest::get("/categories");
    attach_token(&mut anonymous, None);
    assert_eq!(anonymous.auth, None);
}

#[test]
fn dispatch_attaches_stored_token_at_send_time() {
    let transport = ScriptedTransport::new(vec![status(200, "{}")]);
    let tokens = RecordingTokens::with_token("t1");

    let result = block_on(dispatch(&transport, &tokens, ApiRequest::get("/auth/profile")));

    assert!(result.is_ok());
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].auth.as_deref(), Some("Bearer t1"));
}

#[test]
fn dispatch_passes_success_through_untouched() {
    let transport = ScriptedTransport::new(vec![status(200, r#"{"message":"ok"}"#)]);
    let tokens = RecordingTokens::default();

    let response = block_on(dispatch(&transport, &tokens, ApiRequest::get("/categories"))).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"message":"ok"}"#);
    assert_eq!(tokens.cleared.get(), 0);
}

#[test]
fn dispatch_propagates_non_401_errors_without_refresh() {
    let transport = ScriptedTransport::new(vec![status(404, r#"{"message":"Not found."}"#)]);
    let tokens = RecordingTokens::with_token("t1");

    let err = block_on(dispatch(&transport, &tokens, ApiRequest::get("/products/9"))).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 404, message: "Not found.".to_owned() });
    assert_eq!(transport.sent().len(), 1);
    assert!(tokens.refreshed.borrow().is_empty());
}

#[test]
fn dispatch_refreshes_once_and_resends_with_new_token() {
    let transport = ScriptedTransport::new(vec![
        status(401, r#"{"message":"Token expired."}"#),
        status(200, r#"{"token":"t2"}"#),
        status(200, r#"{"name":"Asha","email":"a@b.c"}"#),
    ]);
    let tokens = RecordingTokens::with_token("t1");

    let response =
        block_on(dispatch(&transport, &tokens, ApiRequest::get("/auth/profile"))).unwrap();

    assert_eq!(response.status, 200);
    let sent = transport.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].auth.as_deref(), Some("Bearer t1"));
    // the refresh exchanges the stale credential
    assert_eq!(sent[1].path, REFRESH_PATH);
    assert_eq!(sent[1].auth.as_deref(), Some("Bearer t1"));
    // the resend carries the refreshed credential
    assert_eq!(sent[2].path, "/auth/profile");
    assert_eq!(sent[2].auth.as_deref(), Some("Bearer t2"));
    assert_eq!(*tokens.refreshed.borrow(), vec!["t2".to_owned()]);
    assert_eq!(tokens.cleared.get(), 0);
}

#[test]
fn dispatch_caller_receives_resend_outcome() {
    let transport = ScriptedTransport::new(vec![
        status(401, "{}"),
        status(200, r#"{"token":"t2"}"#),
        status(422, r#"{"message":"Phone number is invalid."}"#),
    ]);
    let tokens = RecordingTokens::with_token("t1");

    let err = block_on(dispatch(
        &transport,
        &tokens,
        ApiRequest::patch("/profile", Some(serde_json::json!({"phone": "x"}))),
    ))
    .unwrap_err();

    assert_eq!(err, ApiError::Status { status: 422, message: "Phone number is invalid.".to_owned() });
}

#[test]
fn dispatch_failed_refresh_clears_session_and_returns_original_401() {
    let transport = ScriptedTransport::new(vec![
        status(401, r#"{"message":"Token expired."}"#),
        status(500, r#"{"message":"refresh backend down"}"#),
    ]);
    let tokens = RecordingTokens::with_token("t1");

    let err = block_on(dispatch(&transport, &tokens, ApiRequest::get("/auth/profile"))).unwrap_err();

    // the caller observes the original authorization failure, not the
    // refresh error
    assert_eq!(err, ApiError::Status { status: 401, message: "Token expired.".to_owned() });
    assert!(err.is_unauthorized());
    assert_eq!(tokens.cleared.get(), 1);
    assert_eq!(tokens.token(), None);
    assert_eq!(transport.sent().len(), 2);
}

#[test]
fn dispatch_network_failure_during_refresh_counts_as_refresh_failure() {
    let transport = ScriptedTransport::new(vec![
        status(401, "{}"),
        Err(ApiError::Network("connection reset".to_owned())),
    ]);
    let tokens = RecordingTokens::with_token("t1");

    let err = block_on(dispatch(&transport, &tokens, ApiRequest::get("/auth/profile"))).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(tokens.cleared.get(), 1);
}

#[test]
fn dispatch_second_401_propagates_without_second_refresh() {
    let transport = ScriptedTransport::new(vec![
        status(401, "{}"),
        status(200, r#"{"token":"t2"}"#),
        status(401, r#"{"message":"Still unauthorized."}"#),
    ]);
    let tokens = RecordingTokens::with_token("t1");

    let err = block_on(dispatch(&transport, &tokens, ApiRequest::get("/auth/profile"))).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 401, message: "Still unauthorized.".to_owned() });
    // exactly one refresh call happened
    let refresh_calls =
        transport.sent().iter().filter(|r| r.path == REFRESH_PATH).count();
    assert_eq!(refresh_calls, 1);
    assert_eq!(transport.sent().len(), 3);
}

#[test]
fn dispatch_first_send_network_error_skips_refresh() {
    let transport =
        ScriptedTransport::new(vec![Err(ApiError::Network("offline".to_owned()))]);
    let tokens = RecordingTokens::with_token("t1");

    let err = block_on(dispatch(&transport, &tokens, ApiRequest::get("/vendors"))).unwrap_err();

    assert_eq!(err, ApiError::Network("offline".to_owned()));
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(tokens.cleared.get(), 0);
}

#[test]
fn request_refresh_rejects_empty_or_missing_token() {
    let transport = ScriptedTransport::new(vec![status(200, r#"{"token":""}"#)]);
    assert_eq!(block_on(request_refresh(&transport, Some("t1"))), RefreshOutcome::Failed);

    let transport = ScriptedTransport::new(vec![status(200, "{}")]);
    assert_eq!(block_on(request_refresh(&transport, Some("t1"))), RefreshOutcome::Failed);

    let transport = ScriptedTransport::new(vec![status(200, r#"{"token":"t9"}"#)]);
    assert_eq!(
        block_on(request_refresh(&transport, Some("t1"))),
        RefreshOutcome::Refreshed("t9".to_owned())
    );
    assert_eq!(transport.sent()[0].auth.as_deref(), Some("Bearer t1"));
}

#[test]
fn encode_query_value_escapes_reserved_characters() {
    assert_eq!(encode_query_value("kitenge dress"), "kitenge%20dress");
    assert_eq!(encode_query_value("a&b=c+d"), "a%26b%3Dc%2Bd");
    assert_eq!(encode_query_value("asha@example.com"), "asha%40example.com");
    assert_eq!(encode_query_value("plain-text_1.2~"), "plain-text_1.2~");
}
