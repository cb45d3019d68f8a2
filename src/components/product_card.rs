//! Product tile used by the home rails and the browse grid.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;

/// Rounded sale percentage, present only when the original price is a real
/// markdown.
pub fn discount_percent(price: f64, original_price: Option<f64>) -> Option<u32> {
    let original = original_price?;
    if original > price && original > 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some((((original - price) / original) * 100.0).round() as u32)
    } else {
        None
    }
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// One product tile with image, vendor line, rating and price row.
#[component]
pub fn ProductCard(product: Product, #[prop(optional_no_strip)] vendor_name: Option<String>) -> impl IntoView {
    let discount = discount_percent(product.price, product.original_price);
    let image = product.images.first().cloned().unwrap_or_default();
    let original = product.original_price;
    let href = format!("/product/{}", product.id);

    view! {
        <a class="product-card" href=href>
            <div class="product-image-container">
                <img class="product-image" src=image alt=product.title.clone() />
                <Show when=move || discount.is_some()>
                    <div class="discount-badge">
                        {move || format!("-{}%", discount.unwrap_or_default())}
                    </div>
                </Show>
            </div>
            <div class="product-info">
                <Show when={
                    let vendor_name = vendor_name.clone();
                    move || vendor_name.is_some()
                }>
                    <p class="product-vendor">{vendor_name.clone().unwrap_or_default()}</p>
                </Show>
                <h3 class="product-title">{product.title.clone()}</h3>
                <div class="rating-row">
                    <span class="rating-text">{format!("{:.1}", product.rating)}</span>
                    <span class="review-count">{format!("({})", product.review_count)}</span>
                </div>
                <div class="price-row">
                    <span class="product-price">{format_price(product.price)}</span>
                    <Show when=move || original.is_some()>
                        <span class="original-price">
                            {format_price(original.unwrap_or_default())}
                        </span>
                    </Show>
                </div>
            </div>
        </a>
    }
}
