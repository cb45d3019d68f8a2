use super::*;

#[test]
fn discount_percent_rounds_the_markdown() {
    assert_eq!(discount_percent(45.0, Some(60.0)), Some(25));
    assert_eq!(discount_percent(9.99, Some(19.99)), Some(50));
}

#[test]
fn discount_percent_requires_a_real_markdown() {
    assert_eq!(discount_percent(45.0, None), None);
    assert_eq!(discount_percent(45.0, Some(45.0)), None);
    assert_eq!(discount_percent(45.0, Some(30.0)), None);
    assert_eq!(discount_percent(45.0, Some(0.0)), None);
}

#[test]
fn format_price_uses_two_decimals() {
    assert_eq!(format_price(45.0), "$45.00");
    assert_eq!(format_price(9.999), "$10.00");
}
