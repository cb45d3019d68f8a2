//! Wire DTOs for the marketplace backend.
//!
//! DESIGN
//! ======
//! These types mirror the REST payloads one-to-one so serde round-trips stay
//! lossless. Fields the backend may omit carry `#[serde(default)]` instead of
//! failing the whole decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A role name granted to a user (e.g. `"customer"`, `"business_vendor"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
}

/// The authenticated user's profile as returned by login/verify/refresh and
/// the profile endpoint. Cached locally alongside the bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Backend identifier, absent on some auth responses.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Contact phone number, if set.
    #[serde(default)]
    pub phone: Option<String>,
    /// Assigned roles; empty means a plain unverified account.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Profile photo URL, if one was uploaded.
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl SessionUser {
    /// True when any role matches `name` exactly.
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|role| role.name == name)
    }
}

// ---- auth request payloads ------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// OTP verification for a freshly registered email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyRegistrationPayload {
    pub email: String,
    pub otp: String,
}

/// Resend an OTP; the backend requires a `type` discriminator naming the
/// flow the code belongs to (`"registration"` or `"password_reset"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResendOtpPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordPayload {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordPayload {
    pub email: String,
    pub otp: String,
    pub password: String,
    pub password_confirmation: String,
}

// ---- auth responses -------------------------------------------------------

/// Response of login, verify-registration and refresh. `token` and `user`
/// are present together on success.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
    /// Echoed registration email, used to prefill the OTP screen.
    #[serde(default)]
    pub email: Option<String>,
}

/// Plain acknowledgement carrying only a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// ---- catalog --------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Icon slug rendered by the UI (e.g. `"laptop"`, `"shirt"`).
    #[serde(default)]
    pub icon: Option<String>,
}

/// A per-category filter facet (e.g. "Brand" with its value list).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Pre-discount price; present only when the product is on sale.
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i64,
    pub category_id: i64,
    pub vendor_id: i64,
    #[serde(default)]
    pub featured: bool,
    /// ISO 8601 creation timestamp; drives the "new arrivals" ordering.
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_sales: i64,
}

/// Paginated list envelope for product listings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default = "default_page")]
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn default_page() -> u32 {
    1
}

// ---- profile / vendor application ----------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Vendor application form fields, submitted as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VendorApplicationDraft {
    pub business_name: String,
    pub business_email: String,
    pub description: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub ward: String,
    pub street: String,
    pub region: String,
    pub city: String,
}

/// Review state of a previously submitted vendor application.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VendorApplicationStatus {
    /// `"pending"`, `"approved"` or `"rejected"`; absent when the user has
    /// never applied.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
