use portal_model::{StaffData, UnitDraft};
use serde::{Deserialize, Serialize};

/// Amenities offered as checkboxes; anything else is added as custom text.
pub const COMMON_AMENITIES: [&str; 13] = [
    "Pool",
    "Gym",
    "Laundry",
    "Security",
    "Parking",
    "Elevator",
    "Balcony",
    "Air Conditioning",
    "Heating",
    "Internet",
    "Pet Friendly",
    "Garden",
    "Rooftop Access",
];

/// Everything the wizard has collected so far.
///
/// All scalar fields are kept as entered; checks happen per step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub year_built: String,
    pub total_area: String,
    pub parking_spaces: String,
    pub description: String,
    pub units: Vec<UnitDraft>,
    pub amenities: Vec<String>,
    pub staff: Vec<StaffData>,
    #[serde(skip)]
    pub images: Vec<Vec<u8>>,
}

/// Partial update of the basic-info fields. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicInfoPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub property_type: Option<String>,
    pub year_built: Option<String>,
    pub total_area: Option<String>,
    pub parking_spaces: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<Vec<u8>>>,
}

impl BasicInfoPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl PropertyDraft {
    /// Shallow merge: every `Some` field of the patch replaces the draft's.
    pub fn apply(&mut self, patch: BasicInfoPatch) {
        let BasicInfoPatch {
            name,
            address,
            city,
            state,
            zip_code,
            property_type,
            year_built,
            total_area,
            parking_spaces,
            description,
            images,
        } = patch;
        merge(&mut self.name, name);
        merge(&mut self.address, address);
        merge(&mut self.city, city);
        merge(&mut self.state, state);
        merge(&mut self.zip_code, zip_code);
        merge(&mut self.property_type, property_type);
        merge(&mut self.year_built, year_built);
        merge(&mut self.total_area, total_area);
        merge(&mut self.parking_spaces, parking_spaces);
        merge(&mut self.description, description);
        merge(&mut self.images, images);
    }

    /// First staff member whose role names them a manager.
    pub fn manager(&self) -> Option<&StaffData> {
        self.staff.iter().find(|member| member.is_manager())
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
