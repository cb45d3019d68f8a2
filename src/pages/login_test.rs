use super::*;

#[test]
fn validate_login_input_trims_the_email() {
    let payload = validate_login_input("  asha@example.com  ", "secret").unwrap();
    assert_eq!(payload.email, "asha@example.com");
    assert_eq!(payload.password, "secret");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter your email and password."));
    assert_eq!(
        validate_login_input("asha@example.com", ""),
        Err("Enter your email and password.")
    );
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email and password."));
}

#[test]
fn login_success_message_appends_welcome_when_named() {
    assert_eq!(
        login_success_message(Some("Signed in."), Some("Asha")),
        "Signed in. Welcome, Asha."
    );
    assert_eq!(login_success_message(None, Some("Asha")), "Login successful. Welcome, Asha.");
    assert_eq!(login_success_message(None, None), "Login successful.");
}
