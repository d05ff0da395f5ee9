//! Serialization shape of the records exchanged with the front end.

use chrono::{TimeZone, Utc};
use portal_model::{
    Discount, Limit, Property, PropertyId, PropertyStatus, PropertyType, Role, Session,
    UnitDraft, UnitStatus, PLACEHOLDER_IMAGE_URL,
};
use serde_json::json;

fn sample_property() -> Property {
    Property {
        id: PropertyId::new("42").unwrap(),
        name: "Test Towers".to_string(),
        address: "1 Test Way".to_string(),
        city: "Testville".to_string(),
        state: "TX".to_string(),
        zip_code: "73301".to_string(),
        property_type: PropertyType::Apartment.as_str().to_string(),
        units: vec![UnitDraft::new("101")],
        year_built: "2020".to_string(),
        total_area: String::new(),
        parking_spaces: String::new(),
        description: String::new(),
        amenities: vec!["Pool".to_string()],
        images: vec![vec![0xFF, 0xD8]],
        staff: vec![],
        manager: None,
        occupied: 0,
        monthly_revenue: 0,
        status: PropertyStatus::Active,
        image: PLACEHOLDER_IMAGE_URL.to_string(),
    }
}

#[test]
fn session_uses_camel_case_and_rfc3339() {
    let session = Session {
        id: "1".to_string(),
        name: "Admin".to_string(),
        email: "admin@example.com".to_string(),
        first_login: true,
        organization_id: "org-123".to_string(),
        role: Role::Admin,
        license_expiry_date: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    };

    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["firstLogin"], json!(true));
    assert_eq!(value["organizationId"], json!("org-123"));
    assert_eq!(value["role"], json!("admin"));
    assert_eq!(value["licenseExpiryDate"], json!("2026-01-01T00:00:00Z"));

    let back: Session = serde_json::from_value(value).unwrap();
    assert_eq!(back, session);
}

#[test]
fn property_drops_images_and_renames_type() {
    let value = serde_json::to_value(sample_property()).unwrap();
    assert!(value.get("images").is_none());
    assert_eq!(value["type"], json!("apartment"));
    assert_eq!(value["id"], json!("42"));
    assert_eq!(value["units"][0]["status"], json!("Vacant"));

    let back: Property = serde_json::from_value(value).unwrap();
    assert!(back.images.is_empty());
    assert_eq!(back.units[0].status, UnitStatus::Vacant);
}

#[test]
fn blank_property_id_is_rejected_on_deserialize() {
    let mut value = serde_json::to_value(sample_property()).unwrap();
    value["id"] = json!("   ");
    assert!(serde_json::from_value::<Property>(value).is_err());
}

#[test]
fn enums_parse_slug_or_label() {
    assert_eq!("Single Family".parse::<PropertyType>().unwrap(), PropertyType::SingleFamily);
    assert_eq!("MIXED-USE".parse::<PropertyType>().unwrap(), PropertyType::MixedUse);
    assert_eq!("Under Maintenance".parse::<UnitStatus>().unwrap(), UnitStatus::Maintenance);
    let err = "castle".parse::<PropertyType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown property type value: \"castle\"");
}

#[test]
fn limits_and_discounts_serialize_compactly() {
    assert_eq!(serde_json::to_value(Limit::Unlimited).unwrap(), json!("unlimited"));
    assert_eq!(serde_json::to_value(Limit::Count(50)).unwrap(), json!({ "count": 50 }));
    assert_eq!(
        serde_json::to_value(Discount::Percentage(20)).unwrap(),
        json!({ "kind": "percentage", "value": 20 })
    );
}
