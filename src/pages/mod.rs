//! Routed pages. Each page reads the shared [`crate::state::auth::Session`]
//! from context and talks to the backend through `crate::net`.

pub mod browse;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod product;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod verify_registration;
