//! Property list and detail pages. Both read the live store.

use portal_core::{Pager, PropertyFilter};
use portal_model::{MaintenanceRequest, Property, PropertyStatus};
use serde::Serialize;

use super::ViewMode;
use crate::mock::{UnitRow, maintenance_rows, unit_rows};

/// Local state of the list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyListState {
    pub filter: PropertyFilter,
    pub view_mode: ViewMode,
    pub pager: Pager,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyCard {
    pub id: String,
    pub name: String,
    pub address: String,
    pub type_label: String,
    pub units: usize,
    pub occupied: u32,
    pub occupancy_rate: Option<u32>,
    pub monthly_revenue: u64,
    pub status: PropertyStatus,
    pub image: String,
}

impl From<&Property> for PropertyCard {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.to_string(),
            name: property.name.clone(),
            address: property.address.clone(),
            type_label: property.type_label(),
            units: property.unit_count(),
            occupied: property.occupied,
            occupancy_rate: property.occupancy_rate(),
            monthly_revenue: property.monthly_revenue,
            status: property.status,
            image: property.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyListPage {
    pub cards: Vec<PropertyCard>,
    /// Matches across all pages.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub view_mode: ViewMode,
}

/// Filters, then paginates. The state's page is clamped to the result.
pub fn property_list(properties: &[Property], state: &PropertyListState) -> PropertyListPage {
    let matches = state.filter.apply(properties);
    let mut pager = state.pager;
    pager.clamp(matches.len());
    PropertyListPage {
        cards: pager
            .slice(&matches)
            .iter()
            .map(|p| PropertyCard::from(*p))
            .collect(),
        total: matches.len(),
        page: pager.page(),
        page_count: pager.page_count(matches.len()),
        view_mode: state.view_mode,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDetailPage {
    pub property: Property,
    pub full_address: String,
    pub type_label: String,
    pub occupancy_rate: Option<u32>,
    pub average_rent: Option<u64>,
    pub manager_name: String,
    pub units: Vec<UnitRow>,
    pub maintenance: Vec<MaintenanceRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PropertyDetail {
    Found(Box<PropertyDetailPage>),
    NotFound { id: String },
}

impl PropertyDetail {
    pub const NOT_FOUND_TITLE: &'static str = "Property Not Found";

    pub fn not_found_message(id: &str) -> String {
        format!("The property with ID \"{id}\" could not be found.")
    }
}

pub fn property_detail(properties: &[Property], id: &str) -> PropertyDetail {
    let Some(property) = properties.iter().find(|p| p.id == id) else {
        return PropertyDetail::NotFound { id: id.to_string() };
    };
    PropertyDetail::Found(Box::new(PropertyDetailPage {
        full_address: property.full_address(),
        type_label: property.type_label(),
        occupancy_rate: property.occupancy_rate(),
        average_rent: property.average_rent(),
        manager_name: property
            .manager
            .as_ref()
            .map_or_else(|| "Unassigned".to_string(), |m| m.name.clone()),
        units: unit_rows(),
        maintenance: maintenance_rows(),
        property: property.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use portal_core::{PropertyStore, seed_properties};
    use portal_model::PropertyType;

    use super::*;

    #[test]
    fn list_applies_filter_and_page() {
        let store = PropertyStore::seeded();
        let mut state = PropertyListState {
            pager: Pager::new(2),
            ..PropertyListState::default()
        };
        let first = property_list(store.properties(), &state);
        assert_eq!(first.cards.len(), 2);
        assert_eq!(first.page_count, 2);

        state.pager.next(first.total);
        let second = property_list(store.properties(), &state);
        assert_eq!(second.cards[0].name, "Garden View Townhomes");

        state.filter.property_type = Some(PropertyType::Condo);
        let filtered = property_list(store.properties(), &state);
        assert_eq!(filtered.page, 1);
        assert_eq!(filtered.cards[0].type_label, "Condo");
    }

    #[test]
    fn seeds_have_no_unit_breakdown() {
        let seeds = seed_properties();
        let PropertyDetail::Found(page) = property_detail(&seeds, "1") else {
            panic!("seed 1 missing");
        };
        assert_eq!(page.occupancy_rate, None);
        assert_eq!(page.average_rent, Some(1309));
        assert_eq!(page.manager_name, "Sarah Johnson");
        assert_eq!(page.full_address, "123 Main Street, Downtown, New York, NY 10001");
    }

    #[test]
    fn missing_manager_reads_unassigned() {
        let mut seeds = seed_properties();
        seeds[1].manager = None;
        let PropertyDetail::Found(page) = property_detail(&seeds, "2") else {
            panic!("seed 2 missing");
        };
        assert_eq!(page.manager_name, "Unassigned");
    }

    #[test]
    fn unknown_id_is_not_found() {
        assert_eq!(
            property_detail(&seed_properties(), "77"),
            PropertyDetail::NotFound { id: "77".to_string() }
        );
        assert_eq!(
            PropertyDetail::not_found_message("77"),
            "The property with ID \"77\" could not be found."
        );
    }
}
