//! Profile and vendor-application endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use super::error::ApiError;
use super::types::{
    MessageResponse, ProfileUpdatePayload, SessionUser, VendorApplicationDraft,
    VendorApplicationStatus,
};
use crate::state::auth::Session;

pub const PROFILE_UPDATE_PATH: &str = "/profile";
pub const PROFILE_PHOTO_PATH: &str = "/profile/photo";
pub const VENDOR_APPLICATION_PATH: &str = "/vendor-application";
pub const VENDOR_APPLICATION_STATUS_PATH: &str = "/vendor-application/status";

/// Update name/phone on the profile; returns the fresh identity so the
/// caller can push it into the session store.
pub async fn update_profile(
    session: Session,
    payload: &ProfileUpdatePayload,
) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "csr")]
    {
        use super::http::{ApiRequest, GlooTransport, dispatch};
        use super::types::AuthResponse;

        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = dispatch(
            &GlooTransport::default(),
            &session,
            ApiRequest::patch(PROFILE_UPDATE_PATH, Some(body)),
        )
        .await?;
        let auth: AuthResponse = response.json()?;
        auth.user.ok_or_else(|| ApiError::Decode("profile update returned no user".to_owned()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, payload);
        Err(ApiError::Unavailable)
    }
}

/// Upload a profile photo as multipart form data.
///
/// Binary uploads go straight to the transport instead of the JSON
/// pipeline; a 401 here is surfaced to the caller rather than refreshed.
#[cfg(feature = "csr")]
pub async fn upload_profile_photo(
    session: Session,
    file: web_sys::File,
) -> Result<MessageResponse, ApiError> {
    use super::error::error_message;
    use super::http::{API_BASE_URL, bearer};

    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data".to_owned()))?;
    form.append_with_blob("photo", &file)
        .map_err(|_| ApiError::Network("form data".to_owned()))?;

    let url = format!("{API_BASE_URL}{PROFILE_PHOTO_PATH}");
    let mut builder = gloo_net::http::Request::post(&url).header("Accept", "application/json");
    if let Some(token) = session.current().token {
        builder = builder.header("Authorization", &bearer(&token));
    }
    let response = builder
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if (200..300).contains(&status) {
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(ApiError::Status { status, message: error_message(&body, status) })
    }
}

/// Remove the current profile photo.
pub async fn delete_profile_photo(session: Session) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        use super::http::{ApiRequest, GlooTransport, dispatch};

        let response = dispatch(
            &GlooTransport::default(),
            &session,
            ApiRequest::delete(PROFILE_PHOTO_PATH),
        )
        .await?;
        response.json()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Review state of the user's vendor application, if any.
pub async fn vendor_application_status(
    session: Session,
) -> Result<VendorApplicationStatus, ApiError> {
    #[cfg(feature = "csr")]
    {
        use super::http::{ApiRequest, GlooTransport, dispatch};

        let response = dispatch(
            &GlooTransport::default(),
            &session,
            ApiRequest::get(VENDOR_APPLICATION_STATUS_PATH),
        )
        .await?;
        response.json()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Submit the vendor application form.
pub async fn submit_vendor_application(
    session: Session,
    draft: &VendorApplicationDraft,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        use super::http::{ApiRequest, GlooTransport, dispatch};

        let body = serde_json::to_value(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = dispatch(
            &GlooTransport::default(),
            &session,
            ApiRequest::post(VENDOR_APPLICATION_PATH, Some(body)),
        )
        .await?;
        response.json()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, draft);
        Err(ApiError::Unavailable)
    }
}
