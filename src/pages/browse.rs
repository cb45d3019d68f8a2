//! Browse page: searchable, filterable product grid.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::product_card::ProductCard;
use crate::net::catalog::{ProductQuery, ProductSort};
use crate::net::types::{Category, CategoryFilter, Product};
use crate::state::auth::Session;

/// Category preselected via `?category=` on the way in from the home grid.
pub fn initial_category(raw: Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|value| value.parse().ok())
}

pub fn results_count_label(total: u64) -> String {
    if total == 1 { "1 result".to_owned() } else { format!("{total} results") }
}

/// More pages exist beyond the one currently loaded.
pub fn has_more_pages(current_page: u32, last_page: u32) -> bool {
    current_page < last_page
}

/// The query the grid reloads with whenever a control changes. Every control
/// change resets pagination back to the first page.
pub fn build_query(search: &str, category: Option<i64>, sort: ProductSort) -> ProductQuery {
    ProductQuery {
        search: search.trim().to_owned(),
        category,
        sort,
        page: 1,
        per_page: None,
    }
}

#[component]
pub fn BrowsePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let query_map = use_query_map();

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(initial_category(query_map.get_untracked().get("category")));
    let sort = RwSignal::new(ProductSort::Default);

    let categories = RwSignal::new(Vec::<Category>::new());
    let filters = RwSignal::new(Vec::<CategoryFilter>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let total = RwSignal::new(0_u64);
    let current_page = RwSignal::new(1_u32);
    let last_page = RwSignal::new(1_u32);
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    let reload = move || {
        loading.set(true);
        let query = build_query(&search.get_untracked(), category.get_untracked(), sort.get_untracked());
        leptos::task::spawn_local(async move {
            match crate::net::catalog::fetch_products(session, &query).await {
                Ok(page) => {
                    products.set(page.data);
                    total.set(page.total);
                    current_page.set(page.current_page);
                    last_page.set(page.last_page);
                }
                Err(err) => log::warn!("product search failed: {err}"),
            }
            loading.set(false);
        });
    };
    #[cfg(not(feature = "csr"))]
    let reload = move || {
        let _ = session;
        loading.set(false);
    };

    #[cfg(feature = "csr")]
    let load_more = move |_| {
        if loading.get() || !has_more_pages(current_page.get(), last_page.get()) {
            return;
        }
        loading.set(true);
        let mut query =
            build_query(&search.get_untracked(), category.get_untracked(), sort.get_untracked());
        query.page = current_page.get_untracked() + 1;
        leptos::task::spawn_local(async move {
            match crate::net::catalog::fetch_products(session, &query).await {
                Ok(page) => {
                    products.update(|list| list.extend(page.data));
                    total.set(page.total);
                    current_page.set(page.current_page);
                    last_page.set(page.last_page);
                }
                Err(err) => log::warn!("product search failed: {err}"),
            }
            loading.set(false);
        });
    };
    #[cfg(not(feature = "csr"))]
    let load_more = move |_| {
        let _ = (current_page, last_page);
    };

    // Facets are informational per category; the "All" pill clears them.
    #[cfg(feature = "csr")]
    let load_filters = move |selected: Option<i64>| {
        let Some(category_id) = selected else {
            filters.set(Vec::new());
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::catalog::fetch_category_filters(session, category_id).await {
                Ok(list) => filters.set(list),
                Err(err) => log::warn!("category filters load failed: {err}"),
            }
        });
    };
    #[cfg(not(feature = "csr"))]
    let load_filters = move |_selected: Option<i64>| {
        filters.set(Vec::new());
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::catalog::fetch_categories(session).await {
            Ok(list) => categories.set(list),
            Err(err) => log::warn!("categories load failed: {err}"),
        }
    });

    reload();
    load_filters(category.get_untracked());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        reload();
    };

    view! {
        <div class="browse-page">
            <form class="search-bar" on:submit=on_search>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search products"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="search-button" type="submit">
                    "Search"
                </button>
            </form>

            <div class="pill-row">
                <button
                    class=move || {
                        if category.get().is_none() { "pill pill-active" } else { "pill" }
                    }
                    on:click=move |_| {
                        category.set(None);
                        load_filters(None);
                        reload();
                    }
                >
                    "All"
                </button>
                <For
                    each=move || categories.get()
                    key=|c| c.id
                    children=move |c| {
                        let id = c.id;
                        view! {
                            <button
                                class=move || {
                                    if category.get() == Some(id) { "pill pill-active" } else { "pill" }
                                }
                                on:click=move |_| {
                                    category.set(Some(id));
                                    load_filters(Some(id));
                                    reload();
                                }
                            >
                                {c.name.clone()}
                            </button>
                        }
                    }
                />
            </div>

            <div class="pill-row">
                {ProductSort::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class=move || {
                                    if sort.get() == option { "pill pill-active" } else { "pill" }
                                }
                                on:click=move |_| {
                                    sort.set(option);
                                    reload();
                                }
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || !filters.get().is_empty()>
                <div class="facet-row">
                    <For
                        each=move || filters.get()
                        key=|facet| facet.name.clone()
                        children=move |facet| {
                            view! {
                                <div class="facet">
                                    <span class="facet-name">{facet.name.clone()}</span>
                                    {facet
                                        .values
                                        .iter()
                                        .map(|value| {
                                            view! {
                                                <span class="facet-value">{value.clone()}</span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <p class="results-count">{move || results_count_label(total.get())}</p>

            <Show
                when=move || !products.get().is_empty()
                fallback=move || {
                    view! {
                        <Show when=move || !loading.get()>
                            <p class="empty-state">"No products found."</p>
                        </Show>
                    }
                }
            >
                <div class="product-grid">
                    <For
                        each=move || products.get()
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>
                <Show when=move || has_more_pages(current_page.get(), last_page.get())>
                    <button
                        class="button-ghost load-more"
                        on:click=load_more
                        disabled=move || loading.get()
                    >
                        "Load more"
                    </button>
                </Show>
            </Show>

            <Show when=move || loading.get()>
                <p class="loading-text">"Loading..."</p>
            </Show>
        </div>
    }
}
