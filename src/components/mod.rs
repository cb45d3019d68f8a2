//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and shared surfaces while reading
//! session state from the Leptos context provider.

pub mod bottom_nav;
pub mod hero_carousel;
pub mod product_card;
pub mod vendor_application_form;
