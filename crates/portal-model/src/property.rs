//! Property entity and its owned value collections.

use serde::{Deserialize, Serialize};

use crate::ids::PropertyId;
use crate::macros::labeled_enum;

/// Image shown for properties created without an uploaded photo.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://images.pexels.com/photos/323780/pexels-photo-323780.jpeg?auto=compress&cs=tinysrgb&w=800";

labeled_enum! {
    /// Operational status of a whole property.
    #[derive(Default)]
    pub enum PropertyStatus ("property status") {
        #[default]
        Active => ("active", "Active"),
        Maintenance => ("maintenance", "Maintenance"),
        Vacant => ("vacant", "Vacant"),
    }
}

labeled_enum! {
    /// Status of a single unit inside a property.
    #[derive(Default)]
    pub enum UnitStatus ("unit status") {
        #[default]
        Vacant => ("Vacant", "Vacant"),
        Occupied => ("Occupied", "Occupied"),
        Maintenance => ("Maintenance", "Under Maintenance"),
    }
}

labeled_enum! {
    /// Property categories offered when creating a property.
    pub enum PropertyType ("property type") {
        Apartment => ("apartment", "Apartment"),
        Condo => ("condo", "Condo"),
        Townhouse => ("townhouse", "Townhouse"),
        SingleFamily => ("single-family", "Single Family"),
        Commercial => ("commercial", "Commercial"),
        MixedUse => ("mixed-use", "Mixed Use"),
    }
}

impl PropertyType {
    /// Whether a free-text type stored on a property denotes this category.
    pub fn matches(self, stored: &str) -> bool {
        let stored = stored.trim();
        stored.eq_ignore_ascii_case(self.as_str()) || stored.eq_ignore_ascii_case(self.label())
    }
}

/// A leasable unit as entered in the creation wizard.
///
/// Numeric fields stay textual; the wizard checks they parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitDraft {
    pub unit_number: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub rent_price: String,
    pub status: UnitStatus,
}

impl UnitDraft {
    pub fn new(unit_number: impl Into<String>) -> Self {
        Self {
            unit_number: unit_number.into(),
            ..Self::default()
        }
    }
}

/// Contact record for someone working on a property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffData {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
}

impl StaffData {
    /// Whether the free-text role describes a property manager.
    pub fn is_manager(&self) -> bool {
        self.role.to_ascii_lowercase().contains("manager")
    }
}

/// A managed building or complex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Free text; usually a [`PropertyType`] slug or label.
    #[serde(rename = "type")]
    pub property_type: String,
    pub units: Vec<UnitDraft>,
    pub year_built: String,
    pub total_area: String,
    pub parking_spaces: String,
    pub description: String,
    pub amenities: Vec<String>,
    /// Uploaded photos. Session-only, never serialized.
    #[serde(skip)]
    pub images: Vec<Vec<u8>>,
    pub staff: Vec<StaffData>,
    pub manager: Option<StaffData>,
    pub occupied: u32,
    pub monthly_revenue: u64,
    pub status: PropertyStatus,
    pub image: String,
}

impl Property {
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Occupied share of units as a rounded percentage.
    ///
    /// `None` when the property has no units on record.
    pub fn occupancy_rate(&self) -> Option<u32> {
        let units = self.units.len();
        if units == 0 {
            return None;
        }
        Some((f64::from(self.occupied) / units as f64 * 100.0).round() as u32)
    }

    /// Monthly revenue per occupied unit, rounded.
    pub fn average_rent(&self) -> Option<u64> {
        if self.occupied == 0 {
            return None;
        }
        Some((self.monthly_revenue as f64 / f64::from(self.occupied)).round() as u64)
    }

    /// Single-line postal address.
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }

    pub fn type_label(&self) -> String {
        self.property_type
            .parse::<PropertyType>()
            .map(|kind| kind.label().to_string())
            .unwrap_or_else(|_| self.property_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(units: usize, occupied: u32, revenue: u64) -> Property {
        Property {
            id: PropertyId::new("1").unwrap(),
            name: "Test".to_string(),
            address: "1 Main St".to_string(),
            city: "Town".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            property_type: "condo".to_string(),
            units: vec![UnitDraft::default(); units],
            year_built: String::new(),
            total_area: String::new(),
            parking_spaces: String::new(),
            description: String::new(),
            amenities: vec![],
            images: vec![],
            staff: vec![],
            manager: None,
            occupied,
            monthly_revenue: revenue,
            status: PropertyStatus::Active,
            image: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    #[test]
    fn occupancy_and_average_rent() {
        let p = property(24, 22, 28_800);
        assert_eq!(p.occupancy_rate(), Some(92));
        assert_eq!(p.average_rent(), Some(1309));
    }

    #[test]
    fn ratios_are_absent_without_units_or_tenants() {
        let p = property(0, 0, 0);
        assert_eq!(p.occupancy_rate(), None);
        assert_eq!(p.average_rent(), None);
    }

    #[test]
    fn type_parsing_accepts_slug_and_label() {
        assert_eq!(
            "single-family".parse::<PropertyType>().unwrap(),
            PropertyType::SingleFamily
        );
        assert_eq!(
            "Mixed Use".parse::<PropertyType>().unwrap(),
            PropertyType::MixedUse
        );
        assert!(PropertyType::Condo.matches("Condo"));
        assert_eq!(property(0, 0, 0).type_label(), "Condo");
    }

    #[test]
    fn images_are_not_serialized() {
        let mut p = property(1, 0, 0);
        p.images.push(vec![1, 2, 3]);
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("images").is_none());
        assert_eq!(json["type"], "condo");
        assert_eq!(json["status"], "active");
    }
}
