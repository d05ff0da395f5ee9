//! Creating a property through the wizard and reading it back.

use portal_core::{
    BasicInfoPatch, PropertyAction, PropertyDraft, PropertyStore, PropertyWizard, SequentialIds,
    TimestampIds, WizardStep,
};
use portal_model::UnitDraft;

fn test_towers() -> PropertyWizard {
    let mut wizard = PropertyWizard::new();
    wizard.update(BasicInfoPatch {
        name: Some("Test Towers".to_string()),
        address: Some("1 Test Way".to_string()),
        city: Some("Testville".to_string()),
        state: Some("TX".to_string()),
        zip_code: Some("73301".to_string()),
        property_type: Some("apartment".to_string()),
        ..BasicInfoPatch::default()
    });
    wizard.next().unwrap();

    wizard.add_unit();
    wizard.add_unit();
    wizard.edit_unit(0, UnitDraft::new("101"));
    wizard.edit_unit(1, UnitDraft::new("102"));
    wizard.next().unwrap();

    wizard.toggle_amenity("Pool");
    wizard.next().unwrap();
    assert_eq!(wizard.next().unwrap(), WizardStep::Review);
    wizard
}

#[test]
fn wizard_submission_lands_in_store() {
    let mut store = PropertyStore::seeded();
    let wizard = test_towers();

    let mut ids = TimestampIds::new();
    let property = wizard.submit(&mut ids, store.properties()).unwrap();
    let id = property.id.clone();
    store.dispatch(PropertyAction::Add(property)).unwrap();

    assert_eq!(store.len(), 4);
    let created = &store.properties()[3];
    assert_eq!(created.id, id);
    assert!(store.properties()[..3].iter().all(|p| p.id != id));
    assert_eq!(created.name, "Test Towers");
    assert_eq!(created.units.len(), 2);
    assert_eq!(created.occupied, 0);
    assert_eq!(created.amenities, ["Pool"]);
    assert!(created.manager.is_none());
    assert_eq!(store.find(id.as_str()), Some(created));
}

#[test]
fn round_trip_keeps_every_draft_field() {
    let wizard = test_towers();
    let draft = wizard.draft().clone();
    let property = wizard
        .submit(&mut SequentialIds::starting_at(1), &[])
        .unwrap();

    let back = PropertyDraft {
        name: property.name,
        address: property.address,
        city: property.city,
        state: property.state,
        zip_code: property.zip_code,
        property_type: property.property_type,
        year_built: property.year_built,
        total_area: property.total_area,
        parking_spaces: property.parking_spaces,
        description: property.description,
        units: property.units,
        amenities: property.amenities,
        staff: property.staff,
        images: property.images,
    };
    assert_eq!(back, draft);
}

#[test]
fn draft_loads_from_toml() {
    let text = r#"
name = "Harbor Lofts"
type = "Condo"
address = "9 Pier St"
city = "Boston"
state = "MA"
zip_code = "02110"
amenities = ["Gym"]

[[units]]
unit_number = "1A"
bedrooms = "2"
rent_price = "2400"

[[staff]]
name = "Dana"
role = "Building Manager"
"#;
    let draft: PropertyDraft = toml::from_str(text).unwrap();
    assert_eq!(draft.units[0].unit_number, "1A");
    assert_eq!(draft.units[0].bathrooms, "");
    assert_eq!(draft.manager().map(|m| m.name.as_str()), Some("Dana"));

    let mut wizard = PropertyWizard::with_draft(draft);
    while !wizard.step().is_last() {
        wizard.next().unwrap();
    }
    let property = wizard
        .submit(&mut SequentialIds::starting_at(1), &[])
        .unwrap();
    assert_eq!(property.type_label(), "Condo");
}
