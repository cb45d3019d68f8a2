use super::*;

#[test]
fn default_query_renders_empty_string() {
    assert_eq!(ProductQuery::default().to_query_string(), "");
}

#[test]
fn query_includes_only_non_default_fields() {
    let query = ProductQuery { category: Some(3), ..ProductQuery::default() };
    assert_eq!(query.to_query_string(), "?category_id=3");

    let query = ProductQuery { page: 2, ..ProductQuery::default() };
    assert_eq!(query.to_query_string(), "?page=2");
}

#[test]
fn query_encodes_the_search_term() {
    let query = ProductQuery { search: "kitenge dress".to_owned(), ..ProductQuery::default() };
    assert_eq!(query.to_query_string(), "?search=kitenge%20dress");
}

#[test]
fn query_trims_whitespace_only_search() {
    let query = ProductQuery { search: "   ".to_owned(), ..ProductQuery::default() };
    assert_eq!(query.to_query_string(), "");
}

#[test]
fn full_query_orders_parameters_stably() {
    let query = ProductQuery {
        search: "phone".to_owned(),
        category: Some(1),
        sort: ProductSort::PriceHigh,
        page: 3,
        per_page: Some(24),
    };
    assert_eq!(
        query.to_query_string(),
        "?search=phone&category_id=1&sort=price_high&page=3&per_page=24"
    );
}

#[test]
fn sort_keys_match_the_backend_contract() {
    assert_eq!(ProductSort::Default.key(), "default");
    assert_eq!(ProductSort::PriceLow.key(), "price_low");
    assert_eq!(ProductSort::PriceHigh.key(), "price_high");
    assert_eq!(ProductSort::Rating.key(), "rating");
}

#[test]
fn catalog_paths_format_expected_routes() {
    assert_eq!(category_filters_path(5), "/categories/5/filters");
    assert_eq!(product_path(42), "/products/42");
}
