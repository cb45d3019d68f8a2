//! OTP verification page completing a registration.

#[cfg(test)]
#[path = "verify_registration_test.rs"]
mod verify_registration_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::{ResendOtpPayload, VerifyRegistrationPayload};
use crate::state::auth::Session;

pub fn validate_verify_input(
    email: &str,
    otp: &str,
) -> Result<VerifyRegistrationPayload, &'static str> {
    let email = email.trim();
    let otp = otp.trim();
    if email.is_empty() || otp.is_empty() {
        return Err("Please enter your email and the OTP code.");
    }
    Ok(VerifyRegistrationPayload { email: email.to_owned(), otp: otp.to_owned() })
}

/// Confirmation line naming the address the OTP went to.
pub fn resend_confirmation_message(backend: Option<&str>, email: &str) -> String {
    match backend {
        Some(message) => format!("{message} ({email})"),
        None => format!("OTP resent successfully to {email}."),
    }
}

#[component]
pub fn VerifyRegistrationPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let otp = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let verifying = RwSignal::new(false);
    let resending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if verifying.get() || resending.get() {
            return;
        }
        error.set(String::new());
        let payload = match validate_verify_input(&email.get(), &otp.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        verifying.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::verify_registration(session, &payload).await {
                    Ok(response) => {
                        if let Some((user, token)) = crate::net::auth::session_from_auth(&response)
                        {
                            session.set_session(user, token);
                            navigate("/", NavigateOptions::default());
                        } else {
                            info.set(response.message.unwrap_or_else(|| {
                                "Registration successful. You are now logged in.".to_owned()
                            }));
                            verifying.set(false);
                        }
                    }
                    Err(err) => {
                        error.set(err.user_message(
                            "Verification failed. Please check the OTP and try again.",
                        ));
                        verifying.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &navigate;
        }
    };

    let on_resend = move |_| {
        if verifying.get() || resending.get() {
            return;
        }
        error.set(String::new());
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            error.set("Please enter your email before resending OTP.".to_owned());
            return;
        }
        resending.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let payload = ResendOtpPayload {
                kind: crate::net::auth::OTP_KIND_REGISTRATION.to_owned(),
                email: email_value.clone(),
            };
            match crate::net::auth::resend_otp(session, &payload).await {
                Ok(response) => {
                    info.set(resend_confirmation_message(
                        response.message.as_deref(),
                        &email_value,
                    ));
                }
                Err(err) => {
                    error.set(err.user_message("Failed to resend OTP. Please try again."));
                }
            }
            resending.set(false);
        });
    };

    view! {
        <form class="auth-card" on:submit=on_submit>
            <h2 class="auth-title">"Verify your email"</h2>
            <p class="auth-subtitle">
                "Enter the OTP sent to your email to complete registration."
            </p>
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
            <div class="form-links">
                <span class="form-footer-hint">"Didn't receive the code?"</span>
                <button
                    class="button-ghost link-inline"
                    type="button"
                    on:click=on_resend
                    disabled=move || resending.get() || verifying.get()
                >
                    {move || if resending.get() { "Resending..." } else { "Resend OTP" }}
                </button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="info-text">{move || info.get()}</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="error-text">{move || error.get()}</p>
            </Show>
            <div class="form-footer">
                <button
                    class="primary-button"
                    type="submit"
                    disabled=move || verifying.get() || resending.get()
                >
                    {move || if verifying.get() { "Verifying..." } else { "Verify & Continue" }}
                </button>
                <div>
                    <span class="form-footer-hint">"Already verified?"</span>
                    <a class="link-inline" href="/login">
                        "Login"
                    </a>
                </div>
            </div>
        </form>
    }
}
