use super::*;
use crate::net::types::SessionUser;

fn signed_in() -> SessionState {
    SessionState {
        user: Some(SessionUser {
            id: Some(1),
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: None,
            roles: Vec::new(),
            photo_url: None,
        }),
        token: Some("t1".to_owned()),
        loading: false,
    }
}

#[test]
fn redirects_when_loaded_and_signed_out() {
    let state = SessionState { user: None, token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_while_loading() {
    let state = SessionState { user: None, token: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_when_authenticated() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn token_without_identity_still_redirects() {
    let state = SessionState { token: Some("t1".to_owned()), ..SessionState::default() };
    assert!(should_redirect_unauth(&state));
}
