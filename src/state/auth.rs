//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` handle is provided via context by the app shell. Pages read
//! authentication status from it to branch their UI and mutate it only
//! through the explicit operations here (startup load, login/verify success,
//! profile edit, logout). Both slots persist to `localStorage` so a page
//! reload restores the session without a network round trip.
//!
//! Persistence is written before observers are notified, and a restore never
//! yields an identity without its credential or vice versa.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::http::TokenSource;
use crate::net::types::SessionUser;
use crate::util::storage::{BrowserStore, KeyValueStore};

/// Fixed storage slot holding the bearer token.
pub const TOKEN_KEY: &str = "natakahii_token";
/// Fixed storage slot holding the serialized [`SessionUser`].
pub const USER_KEY: &str = "natakahii_user";

/// Authentication state tracking the current user, credential and the
/// startup loading flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    /// True until the startup restore has run.
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Coarse permission check against the category's accepted role names.
    /// A missing identity answers `false` for every category.
    pub fn holds(&self, category: RoleCategory) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| category.accepted_names().iter().any(|name| user.has_role(name)))
    }
}

/// Coarse role buckets the UI branches on. Each accepts a fixed set of
/// backend role names; the mapping is static configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleCategory {
    Vendor,
    Customer,
    Admin,
}

impl RoleCategory {
    pub fn accepted_names(self) -> &'static [&'static str] {
        match self {
            Self::Vendor => &["vendor", "individual_vendor", "business_vendor"],
            Self::Customer => &["customer"],
            Self::Admin => &["admin", "normal_admin", "super_admin"],
        }
    }
}

/// Read any persisted session back into memory. Never touches the network.
///
/// Both slots must be present and the identity must parse, otherwise any
/// leftover state is removed and the signed-out state returned.
pub fn restore_session<S: KeyValueStore>(store: &S) -> SessionState {
    if let (Some(token), Some(raw_user)) = (store.read(TOKEN_KEY), store.read(USER_KEY)) {
        if let Ok(user) = serde_json::from_str::<SessionUser>(&raw_user) {
            return SessionState { user: Some(user), token: Some(token), loading: false };
        }
    }
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
    SessionState::default()
}

/// Persist both slots after a successful authentication action.
pub fn persist_session<S: KeyValueStore>(store: &S, user: &SessionUser, token: &str) {
    if let Ok(raw) = serde_json::to_string(user) {
        store.write(USER_KEY, &raw);
    }
    store.write(TOKEN_KEY, token);
}

/// Persist only the identity slot (profile edit); the credential is kept.
pub fn persist_identity<S: KeyValueStore>(store: &S, user: &SessionUser) {
    if let Ok(raw) = serde_json::to_string(user) {
        store.write(USER_KEY, &raw);
    }
}

/// Remove both slots. Safe to call repeatedly.
pub fn clear_session<S: KeyValueStore>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Shared session handle backed by a reactive signal, provided via context.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Fresh handle in the loading state; call [`Session::load`] once at
    /// application start.
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState { loading: true, ..SessionState::default() }) }
    }

    /// Restore any persisted session from browser storage.
    pub fn load(&self) {
        self.state.set(restore_session(&BrowserStore));
    }

    /// Reactive access for components.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Synchronous snapshot for non-reactive consumers.
    pub fn current(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Install `user` + `token` after login, OTP verification or refresh.
    pub fn set_session(&self, user: SessionUser, token: String) {
        persist_session(&BrowserStore, &user, &token);
        self.state.set(SessionState { user: Some(user), token: Some(token), loading: false });
    }

    /// Replace only the cached identity, e.g. after a profile edit.
    pub fn update_identity(&self, user: SessionUser) {
        persist_identity(&BrowserStore, &user);
        self.state.update(|state| state.user = Some(user));
    }

    /// Sign out locally: drop both slots and notify observers.
    pub fn clear(&self) {
        clear_session(&BrowserStore);
        self.state.set(SessionState { user: None, token: None, loading: false });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource for Session {
    fn token(&self) -> Option<String> {
        self.current().token
    }

    fn store_refreshed(&self, token: &str) {
        BrowserStore.write(TOKEN_KEY, token);
        self.state.update(|state| state.token = Some(token.to_owned()));
    }

    fn clear(&self) {
        Session::clear(self);
    }
}
