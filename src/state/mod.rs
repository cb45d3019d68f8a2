//! Shared client state provided through Leptos context.

pub mod auth;
