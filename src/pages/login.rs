//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginPayload;
use crate::state::auth::Session;

/// Trim and require both credentials before any network call.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginPayload, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(LoginPayload { email: email.to_owned(), password: password.to_owned() })
}

/// Success line shown before navigating home, naming the user when known.
pub fn login_success_message(message: Option<&str>, name: Option<&str>) -> String {
    let base = message.unwrap_or("Login successful.");
    match name {
        Some(name) => format!("{base} Welcome, {name}."),
        None => base.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let payload = match validate_login_input(&email.get(), &password.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::login(session, &payload).await {
                    Ok(response) => {
                        if let Some((user, token)) = crate::net::auth::session_from_auth(&response)
                        {
                            log::info!(
                                "{}",
                                login_success_message(
                                    response.message.as_deref(),
                                    Some(user.name.as_str()),
                                )
                            );
                            session.set_session(user, token);
                            navigate("/", NavigateOptions::default());
                        } else {
                            error.set(
                                response
                                    .message
                                    .unwrap_or_else(|| "Invalid credentials".to_owned()),
                            );
                            busy.set(false);
                        }
                    }
                    Err(err) => {
                        error.set(err.user_message("Invalid credentials"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <form class="auth-card" on:submit=on_submit>
            <h2 class="auth-title">"Login"</h2>
            <p class="auth-subtitle">"Sign in to your Nataka Hii account."</p>
            <div class="form-group">
                <label class="form-label">"Email"</label>
                <input
                    class="form-input"
                    type="email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label class="form-label">"Password"</label>
                <input
                    class="form-input"
                    type="password"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <div class="form-links">
                <a class="link-inline" href="/forgot-password">
                    "Forgot your password?"
                </a>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="error-text">{move || error.get()}</p>
            </Show>
            <div class="form-footer">
                <button class="primary-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <div>
                    <span class="form-footer-hint">"Don't have an account?"</span>
                    <a class="link-inline" href="/register">
                        "Register"
                    </a>
                </div>
            </div>
        </form>
    }
}
