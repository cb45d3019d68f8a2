use super::*;

#[test]
fn validate_reset_input_requires_every_field() {
    assert_eq!(
        validate_reset_input("", "123456", "Secret1", "Secret1"),
        Err("Please fill in all fields.")
    );
    assert_eq!(
        validate_reset_input("asha@example.com", "  ", "Secret1", "Secret1"),
        Err("Please fill in all fields.")
    );
    assert_eq!(
        validate_reset_input("asha@example.com", "123456", "", ""),
        Err("Please fill in all fields.")
    );
}

#[test]
fn validate_reset_input_rejects_mismatched_passwords() {
    assert_eq!(
        validate_reset_input("asha@example.com", "123456", "Secret1", "Secret2"),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_reset_input_builds_a_trimmed_payload() {
    let payload =
        validate_reset_input(" asha@example.com ", " 123456 ", "Secret1", "Secret1").unwrap();
    assert_eq!(payload.email, "asha@example.com");
    assert_eq!(payload.otp, "123456");
    assert_eq!(payload.password, "Secret1");
    assert_eq!(payload.password_confirmation, "Secret1");
}
