//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` implements the authenticated request pipeline, `auth`/`catalog`/
//! `user` wrap the endpoint families on top of it, and `types` defines the
//! wire schema shared by all of them.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod http;
pub mod types;
pub mod user;
