//! Forgot-password page: request a reset OTP by email.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::encode_query_value;
use crate::net::types::ForgotPasswordPayload;
use crate::state::auth::Session;

pub fn validate_forgot_input(email: &str) -> Result<ForgotPasswordPayload, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email.");
    }
    Ok(ForgotPasswordPayload { email: email.to_owned() })
}

/// Confirmation line naming the address the reset code went to.
pub fn reset_sent_message(backend: Option<&str>, email: &str) -> String {
    let base = backend.unwrap_or("Password reset OTP sent to your email.");
    format!("{base} ({email})")
}

/// Route to the reset screen, carrying the email to prefill.
pub fn reset_route(email: &str) -> String {
    format!("/reset-password?email={}", encode_query_value(email))
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let payload = match validate_forgot_input(&email.get()) {
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
                match crate::net::auth::forgot_password(session, &payload).await {
                    Ok(response) => {
                        log::info!(
                            "{}",
                            reset_sent_message(response.message.as_deref(), &payload.email)
                        );
                        navigate(&reset_route(&payload.email), NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.user_message(
                            "Failed to send password reset email. Please try again.",
                        ));
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
            <h2 class="auth-title">"Forgot password"</h2>
            <p class="auth-subtitle">"Enter your email to receive a password reset code."</p>
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
            <Show when=move || !error.get().is_empty()>
                <p class="error-text">{move || error.get()}</p>
            </Show>
            <div class="form-footer">
                <button class="primary-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send reset code" }}
                </button>
                <div>
                    <span class="form-footer-hint">"Remembered your password?"</span>
                    <a class="link-inline" href="/login">
                        "Login"
                    </a>
                </div>
            </div>
        </form>
    }
}
