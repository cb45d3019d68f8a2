use super::*;

#[test]
fn session_user_decodes_with_missing_optional_fields() {
    let user: SessionUser =
        serde_json::from_str(r#"{"name":"Asha","email":"asha@example.com"}"#).unwrap();
    assert_eq!(user.name, "Asha");
    assert_eq!(user.id, None);
    assert!(user.roles.is_empty());
    assert_eq!(user.photo_url, None);
}

#[test]
fn session_user_has_role_matches_exactly() {
    let user: SessionUser = serde_json::from_str(
        r#"{"name":"A","email":"a@b.c","roles":[{"name":"business_vendor"}]}"#,
    )
    .unwrap();
    assert!(user.has_role("business_vendor"));
    assert!(!user.has_role("vendor"));
}

#[test]
fn resend_otp_payload_serializes_type_field() {
    let payload = ResendOtpPayload { kind: "registration".to_owned(), email: "a@b.c".to_owned() };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "registration", "email": "a@b.c" }));
}

#[test]
fn auth_response_tolerates_message_only_body() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"message":"OTP sent to your email."}"#).unwrap();
    assert_eq!(resp.message.as_deref(), Some("OTP sent to your email."));
    assert_eq!(resp.token, None);
    assert_eq!(resp.user, None);
}

#[test]
fn page_defaults_when_pagination_fields_are_absent() {
    let page: Page<Product> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
    assert_eq!(page.current_page, 1);
    assert_eq!(page.last_page, 1);
    assert_eq!(page.total, 0);
}

#[test]
fn product_decodes_laravel_style_row() {
    let product: Product = serde_json::from_str(
        r#"{
            "id": 7,
            "title": "Kitenge Dress",
            "price": 45.0,
            "original_price": 60.0,
            "images": ["https://cdn.example.com/p7.jpg"],
            "rating": 4.6,
            "review_count": 31,
            "category_id": 2,
            "vendor_id": 3,
            "featured": true,
            "created_at": "2026-05-01T09:00:00Z"
        }"#,
    )
    .unwrap();
    assert_eq!(product.title, "Kitenge Dress");
    assert_eq!(product.original_price, Some(60.0));
    assert!(product.featured);
}

#[test]
fn profile_update_payload_skips_unset_fields() {
    let payload = ProfileUpdatePayload { name: Some("Asha".to_owned()), phone: None };
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "name": "Asha" }));
}
