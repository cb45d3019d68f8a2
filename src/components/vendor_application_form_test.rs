use super::*;

fn complete_draft() -> VendorApplicationDraft {
    VendorApplicationDraft {
        business_name: "Asha Crafts".to_owned(),
        business_email: "shop@asha.example".to_owned(),
        description: String::new(),
        full_name: "Asha Juma".to_owned(),
        phone: "+255700000000".to_owned(),
        address: "Plot 12".to_owned(),
        ward: "Upanga".to_owned(),
        street: "Mkwepu".to_owned(),
        region: "Dar es Salaam".to_owned(),
        city: String::new(),
    }
}

#[test]
fn complete_application_validates() {
    assert_eq!(validate_application(&complete_draft()), Ok(()));
}

#[test]
fn description_and_city_are_optional() {
    let draft = complete_draft();
    assert!(draft.description.is_empty());
    assert!(draft.city.is_empty());
    assert_eq!(validate_application(&draft), Ok(()));
}

#[test]
fn validation_reports_the_first_missing_field() {
    let mut draft = complete_draft();
    draft.business_name = "   ".to_owned();
    draft.phone = String::new();
    assert_eq!(validate_application(&draft), Err("Business name is required."));
}

#[test]
fn each_required_field_has_its_own_message() {
    let cases: [(fn(&mut VendorApplicationDraft), &str); 8] = [
        (|d| d.business_name.clear(), "Business name is required."),
        (|d| d.business_email.clear(), "Business email is required."),
        (|d| d.full_name.clear(), "Full name is required."),
        (|d| d.phone.clear(), "Phone number is required."),
        (|d| d.address.clear(), "Address is required."),
        (|d| d.ward.clear(), "Ward is required."),
        (|d| d.street.clear(), "Street is required."),
        (|d| d.region.clear(), "Region is required."),
    ];
    for (mutate, expected) in cases {
        let mut draft = complete_draft();
        mutate(&mut draft);
        assert_eq!(validate_application(&draft), Err(expected));
    }
}

#[test]
fn region_list_contains_the_major_markets() {
    for region in ["Dar es Salaam", "Arusha", "Mwanza", "Dodoma"] {
        assert!(TANZANIA_REGIONS.contains(&region), "{region} missing");
    }
}
