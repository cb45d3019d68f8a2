//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes that require a signed-in user apply identical redirect behavior,
//! including after a forced sign-out when a token refresh fails mid-session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{Session, SessionState};

/// True once the startup restore finished with no authenticated user.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever the session has loaded without a user.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = session.state();
    Effect::new(move || {
        if should_redirect_unauth(&state.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
