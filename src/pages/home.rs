//! Storefront landing page: hero carousel, category grid, product rails.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::hero_carousel::HeroCarousel;
use crate::components::product_card::ProductCard;
use crate::net::types::{Category, Product, Vendor};
use crate::state::auth::Session;

/// How many tiles each home rail shows.
pub const RAIL_LEN: usize = 6;

/// Products flagged for the "Featured" rail, capped at [`RAIL_LEN`].
pub fn featured_products(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|product| product.featured).take(RAIL_LEN).cloned().collect()
}

/// Most recently created products first, capped at [`RAIL_LEN`]. ISO 8601
/// timestamps order lexicographically; products without one sink to the end.
pub fn newest_products(products: &[Product]) -> Vec<Product> {
    let mut sorted: Vec<Product> = products.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(RAIL_LEN);
    sorted
}

pub fn vendor_name_for(vendors: &[Vendor], vendor_id: i64) -> Option<String> {
    vendors.iter().find(|vendor| vendor.id == vendor_id).map(|vendor| vendor.name.clone())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();

    let categories = RwSignal::new(Vec::<Category>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let vendors = RwSignal::new(Vec::<Vendor>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::catalog;

        match catalog::fetch_categories(session).await {
            Ok(list) => categories.set(list),
            Err(err) => log::warn!("categories load failed: {err}"),
        }
        match catalog::fetch_vendors(session).await {
            Ok(list) => vendors.set(list),
            Err(err) => log::warn!("vendors load failed: {err}"),
        }
        match catalog::fetch_products(session, &catalog::ProductQuery::default()).await {
            Ok(page) => products.set(page.data),
            Err(err) => log::warn!("products load failed: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        loading.set(false);
    }

    let featured = Memo::new(move |_| featured_products(&products.get()));
    let newest = Memo::new(move |_| newest_products(&products.get()));

    view! {
        <div class="home-page">
            <HeroCarousel />

            <section class="home-section">
                <h2 class="section-title">"Shop by category"</h2>
                <div class="category-grid">
                    <For
                        each=move || categories.get()
                        key=|category| category.id
                        children=move |category| {
                            let href = format!("/browse?category={}", category.id);
                            view! {
                                <a class="category-tile" href=href>
                                    <span class="category-icon">
                                        {category.icon.clone().unwrap_or_default()}
                                    </span>
                                    <span class="category-name">{category.name.clone()}</span>
                                </a>
                            }
                        }
                    />
                </div>
            </section>

            <section class="home-section">
                <div class="section-header">
                    <h2 class="section-title">"Featured"</h2>
                    <a class="link-inline" href="/browse">
                        "See all"
                    </a>
                </div>
                <div class="product-rail">
                    <For
                        each=move || featured.get()
                        key=|product| product.id
                        children=move |product| {
                            let vendor = vendor_name_for(&vendors.get_untracked(), product.vendor_id);
                            view! { <ProductCard product=product vendor_name=vendor /> }
                        }
                    />
                </div>
            </section>

            <section class="home-section">
                <div class="section-header">
                    <h2 class="section-title">"New arrivals"</h2>
                    <a class="link-inline" href="/browse">
                        "See all"
                    </a>
                </div>
                <div class="product-rail">
                    <For
                        each=move || newest.get()
                        key=|product| product.id
                        children=move |product| {
                            let vendor = vendor_name_for(&vendors.get_untracked(), product.vendor_id);
                            view! { <ProductCard product=product vendor_name=vendor /> }
                        }
                    />
                </div>
            </section>

            <section class="home-section">
                <h2 class="section-title">"Top vendors"</h2>
                <div class="vendor-rail">
                    <For
                        each=move || vendors.get()
                        key=|vendor| vendor.id
                        children=move |vendor| {
                            view! {
                                <div class="vendor-tile">
                                    <img
                                        class="vendor-logo"
                                        src=vendor.logo.clone().unwrap_or_default()
                                        alt=vendor.name.clone()
                                    />
                                    <span class="vendor-name">{vendor.name.clone()}</span>
                                    <span class="vendor-rating">
                                        {format!("{:.1}", vendor.rating)}
                                    </span>
                                </div>
                            }
                        }
                    />
                </div>
            </section>

            <Show when=move || loading.get()>
                <p class="loading-text">"Loading..."</p>
            </Show>
        </div>
    }
}
