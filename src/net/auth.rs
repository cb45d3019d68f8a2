//! Authentication actions against the `/auth` endpoint family.
//!
//! Browser builds issue real HTTP calls through the session pipeline;
//! native builds return `ApiError::Unavailable` so the crate compiles and
//! tests on the host.
//!
//! ERROR HANDLING
//! ==============
//! Callers receive `Result` values and turn failures into one displayable
//! message at the form boundary; nothing here panics or crashes a view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::types::{
    AuthResponse, ForgotPasswordPayload, LoginPayload, MessageResponse, RegisterPayload,
    ResendOtpPayload, ResetPasswordPayload, SessionUser, VerifyRegistrationPayload,
};
use crate::state::auth::Session;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const VERIFY_REGISTRATION_PATH: &str = "/auth/verify-registration";
pub const RESEND_OTP_PATH: &str = "/auth/resend-otp";
pub const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/auth/reset-password";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const PROFILE_PATH: &str = "/auth/profile";

/// OTP flow discriminator the resend endpoint expects.
pub const OTP_KIND_REGISTRATION: &str = "registration";

/// Extract the `(user, token)` pair from an auth response; `None` unless
/// both are present.
pub fn session_from_auth(response: &AuthResponse) -> Option<(SessionUser, String)> {
    match (&response.user, &response.token) {
        (Some(user), Some(token)) if !token.is_empty() => Some((user.clone(), token.clone())),
        _ => None,
    }
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::de::DeserializeOwned>(
    session: Session,
    path: &str,
    body: serde_json::Value,
) -> Result<T, ApiError> {
    use super::http::{ApiRequest, GlooTransport, dispatch};

    let response =
        dispatch(&GlooTransport::default(), &session, ApiRequest::post(path, Some(body))).await?;
    response.json()
}

/// Start a registration; the backend emails an OTP to the given address.
pub async fn register(session: Session, payload: &RegisterPayload) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        post_json(session, REGISTER_PATH, body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, payload);
        Err(ApiError::Unavailable)
    }
}

/// Password login; success carries `{ token, user }`.
pub async fn login(session: Session, payload: &LoginPayload) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        post_json(session, LOGIN_PATH, body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, payload);
        Err(ApiError::Unavailable)
    }
}

/// Confirm a registration OTP; success behaves like a login.
pub async fn verify_registration(
    session: Session,
    payload: &VerifyRegistrationPayload,
) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        post_json(session, VERIFY_REGISTRATION_PATH, body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, payload);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to email a fresh OTP for the named flow.
pub async fn resend_otp(
    session: Session,
    payload: &ResendOtpPayload,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        post_json(session, RESEND_OTP_PATH, body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, payload);
        Err(ApiError::Unavailable)
    }
}

/// Send a password-reset OTP to the account email.
pub async fn forgot_password(
    session: Session,
    payload: &ForgotPasswordPayload,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        post_json(session, FORGOT_PASSWORD_PATH, body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, payload);
        Err(ApiError::Unavailable)
    }
}

/// Set a new password using the emailed OTP.
pub async fn reset_password(
    session: Session,
    payload: &ResetPasswordPayload,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        post_json(session, RESET_PASSWORD_PATH, body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, payload);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the authenticated user's profile.
pub async fn fetch_profile(session: Session) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "csr")]
    {
        use super::http::{ApiRequest, GlooTransport, dispatch};

        let response =
            dispatch(&GlooTransport::default(), &session, ApiRequest::get(PROFILE_PATH)).await?;
        let auth: AuthResponse = response.json()?;
        auth.user.ok_or_else(|| ApiError::Decode("profile response had no user".to_owned()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Sign out. The backend notification is best-effort: local state is
/// cleared whether or not the call succeeds.
pub async fn logout(session: Session) {
    #[cfg(feature = "csr")]
    {
        use super::http::{ApiRequest, GlooTransport, dispatch};

        if session.current().token.is_some() {
            if let Err(err) =
                dispatch(&GlooTransport::default(), &session, ApiRequest::post(LOGOUT_PATH, None))
                    .await
            {
                log::warn!("logout notification failed: {err}");
            }
        }
    }
    session.clear();
}
