//! Registration page; success hands off to OTP verification.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::encode_query_value;
use crate::net::types::RegisterPayload;
use crate::state::auth::Session;

/// Local mirror of the backend's password rule: at least one uppercase and
/// one lowercase letter.
pub fn password_meets_rule(password: &str) -> bool {
    password.chars().any(char::is_uppercase) && password.chars().any(char::is_lowercase)
}

pub fn validate_register_input(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<RegisterPayload, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let phone = phone.trim();
    if name.is_empty() || email.is_empty() || phone.is_empty() || password.is_empty() {
        return Err("Please fill in all fields.");
    }
    if !password_meets_rule(password) {
        return Err("Password must contain at least one uppercase and one lowercase letter.");
    }
    Ok(RegisterPayload {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        phone: phone.to_owned(),
    })
}

/// Route to the OTP screen, carrying the email to prefill.
pub fn verify_route(email: &str) -> String {
    format!("/verify-registration?email={}", encode_query_value(email))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let payload = match validate_register_input(
            &name.get(),
            &email.get(),
            &phone.get(),
            &password.get(),
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
                match crate::net::auth::register(session, &payload).await {
                    Ok(response) => {
                        let email_to_use = response.email.unwrap_or(payload.email);
                        log::info!(
                            "{}",
                            response.message.unwrap_or_else(|| {
                                "Registration successful. Please check your email for the OTP code."
                                    .to_owned()
                            })
                        );
                        navigate(&verify_route(&email_to_use), NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.user_message("Registration Failed"));
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
        <div class="auth-container">
            <div class="auth-brand">
                <h1 class="brand-name">"NATAKAHII"</h1>
                <p class="brand-tagline">"Your African Marketplace"</p>
            </div>
            <form class="auth-card" on:submit=on_submit>
                <h2 class="auth-title">"Create Account"</h2>
                <p class="auth-subtitle">"Join thousands of shoppers today"</p>
                <div class="form-group">
                    <label class="form-label">"Full Name"</label>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="form-label">"Email Address"</label>
                    <input
                        class="form-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="form-label">"Phone Number"</label>
                    <input
                        class="form-input"
                        type="tel"
                        placeholder="Enter your phone number"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="form-label">"Password"</label>
                    <input
                        class="form-input"
                        type="password"
                        placeholder="Create a strong password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <p class="input-hint">"Must contain uppercase and lowercase letters"</p>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="error-text">{move || error.get()}</p>
                </Show>
                <button class="primary-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                </button>
                <div class="auth-footer">
                    <span class="form-footer-hint">"Already have an account?"</span>
                    <a class="link-inline" href="/login">
                        "Sign In"
                    </a>
                </div>
            </form>
        </div>
    }
}
