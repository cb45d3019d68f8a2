//! Single-product detail page.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_card::{discount_percent, format_price};
use crate::net::types::{Product, Vendor};
use crate::state::auth::Session;

/// The `:id` route parameter; anything non-numeric is treated as missing.
pub fn parse_product_id(raw: Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|value| value.parse().ok())
}

pub fn rating_line(rating: f64, review_count: i64) -> String {
    format!("{rating:.1} ({review_count} reviews)")
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let params = use_params_map();

    let product = RwSignal::new(None::<Product>);
    let vendor = RwSignal::new(None::<Vendor>);
    let loading = RwSignal::new(true);

    let product_id = parse_product_id(params.get_untracked().get("id"));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::catalog;

        if let Some(id) = product_id {
            match catalog::fetch_product(session, id).await {
                Ok(found) => {
                    let vendor_id = found.vendor_id;
                    product.set(Some(found));
                    match catalog::fetch_vendors(session).await {
                        Ok(vendors) => {
                            vendor.set(vendors.into_iter().find(|v| v.id == vendor_id));
                        }
                        Err(err) => log::warn!("vendor lookup failed: {err}"),
                    }
                }
                Err(err) => log::warn!("product load failed: {err}"),
            }
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, product_id);
        loading.set(false);
    }

    view! {
        <div class="product-page">
            <Show
                when=move || product.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || !loading.get()>
                            <p class="empty-state">"Product not found."</p>
                        </Show>
                    }
                }
            >
                {move || {
                    product
                        .get()
                        .map(|item| {
                            let discount = discount_percent(item.price, item.original_price);
                            let image = item.images.first().cloned().unwrap_or_default();
                            let original = item.original_price;
                            view! {
                                <div class="product-detail">
                                    <div class="product-image-container">
                                        <img
                                            class="product-image"
                                            src=image
                                            alt=item.title.clone()
                                        />
                                        <Show when=move || discount.is_some()>
                                            <div class="discount-badge">
                                                {move || {
                                                    format!("-{}%", discount.unwrap_or_default())
                                                }}
                                            </div>
                                        </Show>
                                    </div>
                                    <h2 class="product-title">{item.title.clone()}</h2>
                                    <p class="rating-row">
                                        {rating_line(item.rating, item.review_count)}
                                    </p>
                                    <div class="price-row">
                                        <span class="product-price">
                                            {format_price(item.price)}
                                        </span>
                                        <Show when=move || original.is_some()>
                                            <span class="original-price">
                                                {format_price(original.unwrap_or_default())}
                                            </span>
                                        </Show>
                                    </div>
                                    <Show when={
                                        let vendor = vendor;
                                        move || vendor.get().is_some()
                                    }>
                                        <p class="product-vendor">
                                            {move || {
                                                vendor.get().map(|v| v.name).unwrap_or_default()
                                            }}
                                        </p>
                                    </Show>
                                    <p class="product-description">{item.description.clone()}</p>
                                </div>
                            }
                        })
                }}
            </Show>

            <Show when=move || loading.get()>
                <p class="loading-text">"Loading..."</p>
            </Show>
        </div>
    }
}
