//! Vendor application screen: business, contact and location details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/vendor-application` and guarded by the unauthenticated
//! redirect. An application that is already under review short-circuits the
//! form with its status.

#[cfg(test)]
#[path = "vendor_application_form_test.rs"]
mod vendor_application_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::VendorApplicationDraft;
use crate::state::auth::Session;
use crate::util::auth::install_unauth_redirect;

/// Regions offered by the location select.
pub const TANZANIA_REGIONS: [&str; 26] = [
    "Arusha",
    "Dar es Salaam",
    "Dodoma",
    "Geita",
    "Iringa",
    "Kagera",
    "Katavi",
    "Kigoma",
    "Kilimanjaro",
    "Lindi",
    "Manyara",
    "Mara",
    "Mbeya",
    "Morogoro",
    "Mtwara",
    "Mwanza",
    "Njombe",
    "Pwani",
    "Rukwa",
    "Ruvuma",
    "Shinyanga",
    "Simiyu",
    "Singida",
    "Tabora",
    "Tanga",
    "Zanzibar",
];

/// First-missing-field validation, mirroring the backend's required set.
pub fn validate_application(draft: &VendorApplicationDraft) -> Result<(), &'static str> {
    if draft.business_name.trim().is_empty() {
        return Err("Business name is required.");
    }
    if draft.business_email.trim().is_empty() {
        return Err("Business email is required.");
    }
    if draft.full_name.trim().is_empty() {
        return Err("Full name is required.");
    }
    if draft.phone.trim().is_empty() {
        return Err("Phone number is required.");
    }
    if draft.address.trim().is_empty() {
        return Err("Address is required.");
    }
    if draft.ward.trim().is_empty() {
        return Err("Ward is required.");
    }
    if draft.street.trim().is_empty() {
        return Err("Street is required.");
    }
    if draft.region.trim().is_empty() {
        return Err("Region is required.");
    }
    Ok(())
}

#[component]
pub fn VendorApplicationForm() -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session, use_navigate());

    let business_name = RwSignal::new(String::new());
    let business_email = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let ward = RwSignal::new(String::new());
    let street = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());

    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let existing_status = RwSignal::new(None::<String>);

    // An application already on file replaces the empty form.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if !session.current().is_authenticated() {
            return;
        }
        if let Ok(status) = crate::net::user::vendor_application_status(session).await {
            existing_status.set(status.status);
        }
    });

    let draft = move || VendorApplicationDraft {
        business_name: business_name.get(),
        business_email: business_email.get(),
        description: description.get(),
        full_name: full_name.get(),
        phone: phone.get(),
        address: address.get(),
        ward: ward.get(),
        street: street.get(),
        region: region.get(),
        city: city.get(),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        let current = draft();
        if let Err(message) = validate_application(&current) {
            error.set(Some(message.to_owned()));
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::user::submit_vendor_application(session, &current).await {
                Ok(_) => submitted.set(true),
                Err(err) => {
                    error.set(Some(err.user_message("Failed to submit application.")));
                }
            }
            busy.set(false);
        });
    };

    let text_input = move |label: &'static str,
                           kind: &'static str,
                           placeholder: &'static str,
                           value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label class="form-label">{label}</label>
                <input
                    class="form-input"
                    type=kind
                    placeholder=placeholder
                    prop:value=move || value.get()
                    prop:disabled=move || busy.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="vendor-app-container">
            <div class="vendor-app-header">
                <h2>"Become a Vendor"</h2>
            </div>
            <Show
                when=move || !submitted.get()
                fallback=|| {
                    view! {
                        <div class="vendor-app-success">
                            <h3>"Application Submitted!"</h3>
                            <p>
                                "Thank you for applying. We'll review your application and notify you within 2-3 business days."
                            </p>
                        </div>
                    }
                }
            >
                <Show when=move || existing_status.get().is_some()>
                    <p class="vendor-app-status">
                        {move || {
                            format!(
                                "You already have an application on file (status: {}).",
                                existing_status.get().unwrap_or_default(),
                            )
                        }}
                    </p>
                </Show>
                <form class="vendor-app-form" on:submit=on_submit>
                    <div class="form-section">
                        <h3>"Business Information"</h3>
                        {text_input("Business Name *", "text", "Your shop name", business_name)}
                        {text_input(
                            "Business Email *",
                            "email",
                            "business@example.com",
                            business_email,
                        )}
                        <div class="form-group">
                            <label class="form-label">"Business Description"</label>
                            <textarea
                                class="form-input"
                                placeholder="What does your business offer?"
                                prop:value=move || description.get()
                                prop:disabled=move || busy.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                    </div>
                    <div class="form-section">
                        <h3>"Your Information"</h3>
                        {text_input("Full Name *", "text", "Your full name", full_name)}
                        {text_input("Phone Number *", "tel", "+255 7XX XXX XXX", phone)}
                    </div>
                    <div class="form-section">
                        <h3>"Business Location"</h3>
                        {text_input("Address *", "text", "Physical address", address)}
                        {text_input("Ward *", "text", "Ward", ward)}
                        {text_input("Street *", "text", "Street name", street)}
                        <div class="form-group">
                            <label class="form-label">"Region (City) *"</label>
                            <select
                                class="form-input"
                                prop:value=move || region.get()
                                prop:disabled=move || busy.get()
                                on:change=move |ev| region.set(event_target_value(&ev))
                            >
                                <option value="">"Select a region"</option>
                                {TANZANIA_REGIONS
                                    .iter()
                                    .map(|name| view! { <option value=*name>{*name}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        {text_input("City (Optional)", "text", "City name", city)}
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="error-text">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="form-actions">
                        <button class="primary-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Submitting..." } else { "Submit Application" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
