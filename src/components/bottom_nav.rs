//! Bottom navigation bar shown on storefront routes.

#[cfg(test)]
#[path = "bottom_nav_test.rs"]
mod bottom_nav_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { path: "/", label: "Home" },
    NavItem { path: "/browse", label: "Browse" },
    NavItem { path: "/profile", label: "Account" },
];

/// The bar stays hidden on the auth screens.
pub fn hide_bottom_nav(path: &str) -> bool {
    matches!(
        path,
        "/login" | "/register" | "/verify-registration" | "/forgot-password" | "/reset-password"
    )
}

#[component]
pub fn BottomNav() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    view! {
        <Show when=move || !hide_bottom_nav(&pathname())>
            <nav class="bottom-nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        let active = move || pathname() == path;
                        view! {
                            <a
                                href=path
                                class="bottom-nav-item"
                                class:active=active
                            >
                                <span class="bottom-nav-label" class:active=active>
                                    {item.label}
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}
