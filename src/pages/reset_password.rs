//! Reset-password page: consume the emailed OTP and set a new password.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::ResetPasswordPayload;
use crate::state::auth::Session;

pub fn validate_reset_input(
    email: &str,
    otp: &str,
    password: &str,
    confirmation: &str,
) -> Result<ResetPasswordPayload, &'static str> {
    let email = email.trim();
    let otp = otp.trim();
    if email.is_empty() || otp.is_empty() || password.is_empty() || confirmation.is_empty() {
        return Err("Please fill in all fields.");
    }
    if password != confirmation {
        return Err("Passwords do not match.");
    }
    Ok(ResetPasswordPayload {
        email: email.to_owned(),
        otp: otp.to_owned(),
        password: password.to_owned(),
        password_confirmation: confirmation.to_owned(),
    })
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let otp = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let payload = match validate_reset_input(
            &email.get(),
            &otp.get(),
            &password.get(),
            &confirmation.get(),
        ) {
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
                match crate::net::auth::reset_password(session, &payload).await {
                    Ok(response) => {
                        log::info!(
                            "{}",
                            response
                                .message
                                .unwrap_or_else(|| "Password reset successfully.".to_owned())
                        );
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.user_message(
                            "Password reset failed. Please check the code and try again.",
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
            <h2 class="auth-title">"Reset password"</h2>
            <p class="auth-subtitle">"Enter the code from your email and choose a new password."</p>
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
                <label class="form-label">"OTP code"</label>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Enter the OTP from your email"
                    prop:value=move || otp.get()
                    on:input=move |ev| otp.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label class="form-label">"New password"</label>
                <input
                    class="form-input"
                    type="password"
                    placeholder="Enter a new password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label class="form-label">"Confirm password"</label>
                <input
                    class="form-input"
                    type="password"
                    placeholder="Repeat the new password"
                    prop:value=move || confirmation.get()
                    on:input=move |ev| confirmation.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="error-text">{move || error.get()}</p>
            </Show>
            <div class="form-footer">
                <button class="primary-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Resetting..." } else { "Reset password" }}
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
