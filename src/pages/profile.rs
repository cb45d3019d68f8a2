//! Account page: identity card, profile editing, role badge, vendor
//! onboarding entry, logout.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::ProfileUpdatePayload;
use crate::state::auth::{RoleCategory, Session, SessionState};

/// Single uppercase letter standing in for a missing profile photo.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Account badge text, vendor roles winning over customer.
pub fn role_badge(state: &SessionState) -> &'static str {
    if state.holds(RoleCategory::Vendor) { "Verified Vendor" } else { "Verified Customer" }
}

/// The onboarding card shows only for signed-in users who are not vendors
/// yet.
pub fn show_vendor_onboarding(state: &SessionState) -> bool {
    state.is_authenticated() && !state.holds(RoleCategory::Vendor)
}

/// Build the profile edit payload. An empty phone clears the field on the
/// backend side by omission.
pub fn validate_profile_edit(
    name: &str,
    phone: &str,
) -> Result<ProfileUpdatePayload, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    let phone = phone.trim();
    Ok(ProfileUpdatePayload {
        name: Some(name.to_owned()),
        phone: if phone.is_empty() { None } else { Some(phone.to_owned()) },
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let state = session.state();

    // Refresh the cached identity from the backend; storage may be stale
    // after a role change (e.g. vendor approval).
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if session.current().is_authenticated() {
            match crate::net::auth::fetch_profile(session).await {
                Ok(user) => session.update_identity(user),
                Err(err) => log::warn!("profile refresh failed: {err}"),
            }
        }
    });

    let editing = RwSignal::new(false);
    let name_field = RwSignal::new(String::new());
    let phone_field = RwSignal::new(String::new());
    let edit_error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let signing_out = RwSignal::new(false);

    let begin_edit = move |_| {
        if let Some(user) = session.current().user {
            name_field.set(user.name);
            phone_field.set(user.phone.unwrap_or_default());
        }
        edit_error.set(String::new());
        editing.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        edit_error.set(String::new());
        let payload = match validate_profile_edit(&name_field.get(), &phone_field.get()) {
            Ok(payload) => payload,
            Err(message) => {
                edit_error.set(message.to_owned());
                return;
            }
        };
        saving.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::user::update_profile(session, &payload).await {
                Ok(user) => {
                    session.update_identity(user);
                    editing.set(false);
                }
                Err(err) => {
                    edit_error.set(err.user_message("Failed to update profile."));
                }
            }
            saving.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
        }
    };

    let on_photo_selected = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::user::upload_profile_photo(session, file).await {
                    // the upload response has no user; re-fetch for the URL
                    Ok(_) => match crate::net::auth::fetch_profile(session).await {
                        Ok(user) => session.update_identity(user),
                        Err(err) => log::warn!("profile refresh failed: {err}"),
                    },
                    Err(err) => {
                        edit_error.set(err.user_message("Photo upload failed."));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &ev;
        }
    };

    let on_photo_removed = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::user::delete_profile_photo(session).await {
                Ok(_) => {
                    if let Some(mut user) = session.current().user {
                        user.photo_url = None;
                        session.update_identity(user);
                    }
                }
                Err(err) => {
                    edit_error.set(err.user_message("Failed to remove photo."));
                }
            }
        });
    };

    let on_logout = move |_| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::auth::logout(session).await;
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="profile-page">
            <Show
                when=move || state.get().is_authenticated()
                fallback=move || {
                    view! {
                        <Show when=move || !state.get().loading>
                            <div class="auth-card">
                                <h2 class="auth-title">"You are not signed in"</h2>
                                <p class="auth-subtitle">
                                    "Sign in to see your orders, profile and vendor tools."
                                </p>
                                <a class="primary-button" href="/login">
                                    "Sign in"
                                </a>
                            </div>
                        </Show>
                    }
                }
            >
                <div class="profile-card">
                    <div class="avatar">
                        {move || match state.get().user {
                            Some(user) => match user.photo_url.clone() {
                                Some(url) => view! {
                                    <img class="avatar-photo" src=url alt=user.name />
                                }
                                    .into_any(),
                                None => view! {
                                    <span class="avatar-initial">
                                        {avatar_initial(&user.name)}
                                    </span>
                                }
                                    .into_any(),
                            },
                            None => view! { <span class="avatar-initial">"?"</span> }.into_any(),
                        }}
                    </div>
                    <div class="avatar-actions">
                        <label class="button-ghost">
                            "Change photo"
                            <input
                                class="file-input"
                                type="file"
                                accept="image/*"
                                on:change=on_photo_selected
                            />
                        </label>
                        <Show when=move || {
                            state.get().user.as_ref().is_some_and(|u| u.photo_url.is_some())
                        }>
                            <button class="button-ghost" on:click=on_photo_removed>
                                "Remove photo"
                            </button>
                        </Show>
                    </div>

                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <h2 class="profile-name">
                                    {move || state.get().user.map(|u| u.name).unwrap_or_default()}
                                </h2>
                                <p class="profile-email">
                                    {move || state.get().user.map(|u| u.email).unwrap_or_default()}
                                </p>
                                <Show when=move || {
                                    state.get().user.as_ref().is_some_and(|u| u.phone.is_some())
                                }>
                                    <p class="profile-phone">
                                        {move || {
                                            state
                                                .get()
                                                .user
                                                .and_then(|u| u.phone)
                                                .unwrap_or_default()
                                        }}
                                    </p>
                                </Show>
                                <button class="button-ghost" on:click=begin_edit>
                                    "Edit profile"
                                </button>
                            }
                        }
                    >
                        <form class="profile-edit" on:submit=on_save>
                            <div class="form-group">
                                <label class="form-label">"Name"</label>
                                <input
                                    class="form-input"
                                    type="text"
                                    prop:value=move || name_field.get()
                                    on:input=move |ev| name_field.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label class="form-label">"Phone"</label>
                                <input
                                    class="form-input"
                                    type="tel"
                                    prop:value=move || phone_field.get()
                                    on:input=move |ev| phone_field.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-row">
                                <button
                                    class="primary-button"
                                    type="submit"
                                    disabled=move || saving.get()
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </button>
                                <button
                                    class="button-ghost"
                                    type="button"
                                    on:click=move |_| editing.set(false)
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </Show>

                    <Show when=move || !edit_error.get().is_empty()>
                        <p class="error-text">{move || edit_error.get()}</p>
                    </Show>

                    <span class="role-badge">{move || role_badge(&state.get())}</span>
                </div>

                <Show when=move || show_vendor_onboarding(&state.get())>
                    <a class="vendor-banner" href="/vendor-application">
                        <h3 class="vendor-banner-title">"Become a vendor"</h3>
                        <p class="vendor-banner-text">
                            "Apply to open your own shop and start selling."
                        </p>
                    </a>
                </Show>

                <button
                    class="danger-button"
                    on:click=on_logout.clone()
                    disabled=move || signing_out.get()
                >
                    {move || if signing_out.get() { "Signing out..." } else { "Log out" }}
                </button>
            </Show>

            <Show when=move || state.get().loading>
                <p class="loading-text">"Loading..."</p>
            </Show>
        </div>
    }
}
