use super::*;

#[test]
fn profile_and_vendor_paths_are_rooted() {
    assert_eq!(PROFILE_UPDATE_PATH, "/profile");
    assert_eq!(PROFILE_PHOTO_PATH, "/profile/photo");
    assert_eq!(VENDOR_APPLICATION_PATH, "/vendor-application");
    assert!(VENDOR_APPLICATION_STATUS_PATH.starts_with(VENDOR_APPLICATION_PATH));
}

#[test]
fn vendor_application_draft_serializes_every_field() {
    let draft = VendorApplicationDraft {
        business_name: "Asha Crafts".to_owned(),
        business_email: "shop@asha.example".to_owned(),
        description: "Handmade baskets".to_owned(),
        full_name: "Asha Juma".to_owned(),
        phone: "+255700000000".to_owned(),
        address: "Plot 12".to_owned(),
        ward: "Upanga".to_owned(),
        street: "Mkwepu".to_owned(),
        region: "Dar es Salaam".to_owned(),
        city: String::new(),
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["business_name"], "Asha Crafts");
    assert_eq!(json["region"], "Dar es Salaam");
    // optional city still serializes so the backend sees a stable shape
    assert_eq!(json["city"], "");
}
