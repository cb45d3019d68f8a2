use super::*;

#[test]
fn nav_covers_the_storefront_tabs() {
    let paths: Vec<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
    assert_eq!(paths, vec!["/", "/browse", "/profile"]);
}

#[test]
fn nav_hides_on_every_auth_route() {
    for path in ["/login", "/register", "/verify-registration", "/forgot-password", "/reset-password"] {
        assert!(hide_bottom_nav(path), "{path} should hide the bar");
    }
}

#[test]
fn nav_shows_on_storefront_routes() {
    for path in ["/", "/browse", "/profile", "/vendor-application", "/product/3"] {
        assert!(!hide_bottom_nav(path), "{path} should show the bar");
    }
}
