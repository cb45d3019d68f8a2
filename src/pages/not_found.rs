//! Catch-all route for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2 class="not-found-title">"Page not found"</h2>
            <p class="not-found-text">"The page you are looking for does not exist."</p>
            <a class="primary-button" href="/">
                "Back to home"
            </a>
        </div>
    }
}
