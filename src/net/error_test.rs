use super::*;

#[test]
fn is_unauthorized_only_for_401_status() {
    let unauthorized = ApiError::Status { status: 401, message: "expired".to_owned() };
    assert!(unauthorized.is_unauthorized());

    let forbidden = ApiError::Status { status: 403, message: "no".to_owned() };
    assert!(!forbidden.is_unauthorized());
    assert!(!ApiError::Network("down".to_owned()).is_unauthorized());
}

#[test]
fn user_message_prefers_backend_text() {
    let err = ApiError::Status { status: 422, message: "Email already taken.".to_owned() };
    assert_eq!(err.user_message("Registration Failed"), "Email already taken.");
}

#[test]
fn user_message_falls_back_for_transport_failures() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(err.user_message("Invalid credentials"), "Invalid credentials");
}

#[test]
fn error_message_reads_backend_message_field() {
    assert_eq!(error_message(r#"{"message":"OTP expired."}"#, 400), "OTP expired.");
}

#[test]
fn error_message_falls_back_on_missing_or_malformed_body() {
    assert_eq!(error_message("", 500), "request failed: 500");
    assert_eq!(error_message("<html>", 502), "request failed: 502");
    assert_eq!(error_message(r#"{"message":""}"#, 401), "request failed: 401");
}
