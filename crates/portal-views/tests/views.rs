//! Page view models over the live store and the demo data.

use portal_core::{
    BasicInfoPatch, PropertyAction, PropertyFilter, PropertyStore, PropertyWizard, SequentialIds,
};
use portal_model::{Property, PropertyStatus, UnitDraft};
use portal_views::pages::properties::{
    PropertyDetail, PropertyListState, property_detail, property_list,
};
use portal_views::pages::subscription::subscription;
use portal_views::{ModalForm, TeamMemberForm, ViewMode};

fn wizard_property(existing: &[Property]) -> Property {
    let mut wizard = PropertyWizard::new();
    wizard.update(BasicInfoPatch {
        name: Some("Lakeside Commons".to_string()),
        property_type: Some("Apartment".to_string()),
        address: Some("9 Shore Rd".to_string()),
        city: Some("Madison".to_string()),
        state: Some("WI".to_string()),
        zip_code: Some("53703".to_string()),
        ..BasicInfoPatch::default()
    });
    wizard.set_units(vec![UnitDraft::new("1")]);
    while !wizard.step().is_last() {
        wizard.next().unwrap();
    }
    let mut ids = SequentialIds::starting_at(100);
    wizard.submit(&mut ids, existing).unwrap()
}

#[test]
fn added_property_shows_in_list_and_detail() {
    let mut store = PropertyStore::seeded();
    let property = wizard_property(store.properties());
    store.dispatch(PropertyAction::Add(property)).unwrap();

    let state = PropertyListState {
        filter: PropertyFilter {
            query: "madison".to_string(),
            ..PropertyFilter::default()
        },
        view_mode: ViewMode::List,
        ..PropertyListState::default()
    };
    let page = property_list(store.properties(), &state);
    assert_eq!(page.total, 1);
    assert_eq!(page.cards[0].name, "Lakeside Commons");
    assert_eq!(page.cards[0].status, PropertyStatus::Active);
    assert_eq!(page.cards[0].occupancy_rate, Some(0));

    let PropertyDetail::Found(detail) = property_detail(store.properties(), "100") else {
        panic!("new property should resolve");
    };
    assert_eq!(detail.manager_name, "Unassigned");
    assert_eq!(detail.average_rent, None);
}

#[test]
fn list_page_serializes_for_the_front_end() {
    let store = PropertyStore::seeded();
    let page = property_list(store.properties(), &PropertyListState::default());
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["view_mode"], "grid");
    assert_eq!(json["cards"].as_array().map(Vec::len), Some(3));
}

#[test]
fn subscription_page_has_one_current_plan() {
    let page = subscription();
    let current: Vec<&str> = page
        .packages
        .iter()
        .filter(|card| card.action.label() == "Current Plan")
        .map(|card| card.package.id.as_str())
        .collect();
    assert_eq!(current, [page.license.package_id.as_str()]);
}

#[test]
fn team_form_round_trip() {
    let mut form = TeamMemberForm {
        name: "Dana Lee".to_string(),
        ..TeamMemberForm::default()
    };
    assert!(form.submit().is_error());
    form.email = "dana@propertyhub.com".to_string();
    assert!(!form.submit().is_error());
    assert!(form.name.is_empty());
}
