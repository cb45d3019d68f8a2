use super::*;
use crate::net::types::{Role, SessionUser};

fn signed_in_with_roles(roles: &[&str]) -> SessionState {
    SessionState {
        user: Some(SessionUser {
            id: Some(1),
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: None,
            roles: roles.iter().map(|name| Role { name: (*name).to_owned() }).collect(),
            photo_url: None,
        }),
        token: Some("tok".to_owned()),
        loading: false,
    }
}

#[test]
fn avatar_initial_takes_the_first_letter_uppercased() {
    assert_eq!(avatar_initial("asha"), "A");
    assert_eq!(avatar_initial("  zuri"), "Z");
    assert_eq!(avatar_initial(""), "?");
    assert_eq!(avatar_initial("   "), "?");
}

#[test]
fn role_badge_prefers_vendor_over_customer() {
    assert_eq!(role_badge(&signed_in_with_roles(&["customer"])), "Verified Customer");
    assert_eq!(role_badge(&signed_in_with_roles(&["customer", "business_vendor"])), "Verified Vendor");
    assert_eq!(role_badge(&signed_in_with_roles(&["individual_vendor"])), "Verified Vendor");
}

#[test]
fn profile_edit_requires_a_name_and_drops_an_empty_phone() {
    assert_eq!(validate_profile_edit("  ", "+255700000000"), Err("Name is required."));

    let payload = validate_profile_edit(" Asha ", "  ").unwrap();
    assert_eq!(payload.name.as_deref(), Some("Asha"));
    assert_eq!(payload.phone, None);

    let payload = validate_profile_edit("Asha", " +255700000000 ").unwrap();
    assert_eq!(payload.phone.as_deref(), Some("+255700000000"));
}

#[test]
fn vendor_onboarding_shows_only_for_non_vendor_users() {
    assert!(show_vendor_onboarding(&signed_in_with_roles(&["customer"])));
    assert!(!show_vendor_onboarding(&signed_in_with_roles(&["vendor"])));
    assert!(!show_vendor_onboarding(&SessionState::default()));
}
