//! Read-only catalog endpoints: categories, products, vendors.
//!
//! These are public reads; the pipeline still attaches the stored
//! credential opportunistically so the backend can personalize results for
//! signed-in shoppers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::error::ApiError;
use super::http::encode_query_value;
use super::types::{Category, CategoryFilter, Page, Product, Vendor};
use crate::state::auth::Session;

pub const CATEGORIES_PATH: &str = "/categories";
pub const PRODUCTS_PATH: &str = "/products";
pub const VENDORS_PATH: &str = "/vendors";

#[cfg(any(test, feature = "csr"))]
pub fn category_filters_path(category_id: i64) -> String {
    format!("/categories/{category_id}/filters")
}

#[cfg(any(test, feature = "csr"))]
pub fn product_path(product_id: i64) -> String {
    format!("/products/{product_id}")
}

/// Server-side product ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    Default,
    PriceLow,
    PriceHigh,
    Rating,
}

impl ProductSort {
    pub const ALL: [Self; 4] = [Self::Default, Self::PriceLow, Self::PriceHigh, Self::Rating];

    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceLow => "price_low",
            Self::PriceHigh => "price_high",
            Self::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "All",
            Self::PriceLow => "Price: Low",
            Self::PriceHigh => "Price: High",
            Self::Rating => "Top Rated",
        }
    }
}

/// Search/filter/pagination parameters for the product listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    pub search: String,
    pub category: Option<i64>,
    pub sort: ProductSort,
    pub page: u32,
    pub per_page: Option<u32>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self { search: String::new(), category: None, sort: ProductSort::Default, page: 1, per_page: None }
    }
}

impl ProductQuery {
    /// Render the query string, empty when every field is at its default.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(format!("search={}", encode_query_value(search)));
        }
        if let Some(category) = self.category {
            params.push(format!("category_id={category}"));
        }
        if self.sort != ProductSort::Default {
            params.push(format!("sort={}", self.sort.key()));
        }
        if self.page > 1 {
            params.push(format!("page={}", self.page));
        }
        if let Some(per_page) = self.per_page {
            params.push(format!("per_page={per_page}"));
        }
        if params.is_empty() { String::new() } else { format!("?{}", params.join("&")) }
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(
    session: Session,
    path: String,
) -> Result<T, ApiError> {
    use super::http::{ApiRequest, GlooTransport, dispatch};

    let response = dispatch(&GlooTransport::default(), &session, ApiRequest::get(path)).await?;
    response.json()
}

/// List all top-level categories.
pub async fn fetch_categories(session: Session) -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, CATEGORIES_PATH.to_owned()).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// List the filter facets of one category.
pub async fn fetch_category_filters(
    session: Session,
    category_id: i64,
) -> Result<Vec<CategoryFilter>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, category_filters_path(category_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, category_id);
        Err(ApiError::Unavailable)
    }
}

/// List/search products, paginated via query parameters.
pub async fn fetch_products(session: Session, query: &ProductQuery) -> Result<Page<Product>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, format!("{PRODUCTS_PATH}{}", query.to_query_string())).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, query);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single product.
pub async fn fetch_product(session: Session, product_id: i64) -> Result<Product, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, product_path(product_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, product_id);
        Err(ApiError::Unavailable)
    }
}

/// List vendors for the storefront rails.
pub async fn fetch_vendors(session: Session) -> Result<Vec<Vendor>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(session, VENDORS_PATH.to_owned()).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}
