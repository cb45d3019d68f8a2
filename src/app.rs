//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::bottom_nav::BottomNav;
use crate::components::vendor_application_form::VendorApplicationForm;
use crate::pages::{
    browse::BrowsePage, forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, product::ProductPage, profile::ProfilePage,
    register::RegisterPage, reset_password::ResetPasswordPage,
    verify_registration::VerifyRegistrationPage,
};
use crate::state::auth::Session;

/// Every statically routed path, the root first. The parameterized product
/// route and the catch-all fallback are registered separately.
pub const ROUTE_PATHS: [&str; 9] = [
    "/",
    "/browse",
    "/login",
    "/register",
    "/verify-registration",
    "/forgot-password",
    "/reset-password",
    "/profile",
    "/vendor-application",
];

/// Root application component.
///
/// Provides the shared session context, restores any persisted session once,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    session.load();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/natakahii.css" />
        <Title text="Nataka Hii" />

        <Router>
            <main class="app-shell">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("browse") view=BrowsePage />
                    <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage />
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=StaticSegment("register") view=RegisterPage />
                    <Route path=StaticSegment("verify-registration") view=VerifyRegistrationPage />
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage />
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage />
                    <Route path=StaticSegment("profile") view=ProfilePage />
                    <Route path=StaticSegment("vendor-application") view=VendorApplicationForm />
                </Routes>
            </main>
            <BottomNav />
        </Router>
    }
}
