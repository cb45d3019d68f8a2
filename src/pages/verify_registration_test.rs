use super::*;

#[test]
fn validate_verify_input_trims_both_fields() {
    let payload = validate_verify_input(" asha@example.com ", " 123456 ").unwrap();
    assert_eq!(payload.email, "asha@example.com");
    assert_eq!(payload.otp, "123456");
}

#[test]
fn validate_verify_input_requires_both_fields() {
    assert_eq!(
        validate_verify_input("", "123456"),
        Err("Please enter your email and the OTP code.")
    );
    assert_eq!(
        validate_verify_input("asha@example.com", "  "),
        Err("Please enter your email and the OTP code.")
    );
}

#[test]
fn resend_confirmation_appends_the_email_to_backend_text() {
    assert_eq!(
        resend_confirmation_message(Some("OTP sent."), "asha@example.com"),
        "OTP sent. (asha@example.com)"
    );
}

#[test]
fn resend_confirmation_has_a_fallback_line() {
    assert_eq!(
        resend_confirmation_message(None, "asha@example.com"),
        "OTP resent successfully to asha@example.com."
    );
}
