//! Demo properties present when the portal starts.

use portal_model::{Property, PropertyId, PropertyStatus, StaffData};

struct Seed {
    id: u64,
    name: &'static str,
    address: &'static str,
    city: &'static str,
    state: &'static str,
    zip_code: &'static str,
    property_type: &'static str,
    year_built: &'static str,
    total_area: &'static str,
    parking_spaces: &'static str,
    description: &'static str,
    amenities: &'static [&'static str],
    manager: (&'static str, &'static str, &'static str),
    occupied: u32,
    monthly_revenue: u64,
    status: PropertyStatus,
    photo: u32,
}

const SEEDS: [Seed; 3] = [
    Seed {
        id: 1,
        name: "Sunset Apartments",
        address: "123 Main Street, Downtown",
        city: "New York",
        state: "NY",
        zip_code: "10001",
        property_type: "Apartment",
        year_built: "2018",
        total_area: "15000",
        parking_spaces: "30",
        description: "Modern apartment complex with excellent amenities and prime location.",
        amenities: &["Pool", "Gym", "Laundry", "Security", "Parking"],
        manager: ("Sarah Johnson", "+1 (555) 123-4567", "sarah@propertyhub.com"),
        occupied: 22,
        monthly_revenue: 28_800,
        status: PropertyStatus::Active,
        photo: 323_780,
    },
    Seed {
        id: 2,
        name: "Riverside Condos",
        address: "456 River Road, Riverside",
        city: "Riverside",
        state: "CA",
        zip_code: "92507",
        property_type: "Condo",
        year_built: "2020",
        total_area: "12000",
        parking_spaces: "20",
        description: "Luxury condos with stunning river views and modern finishes.",
        amenities: &["Gym", "Concierge", "Rooftop Access", "Parking"],
        manager: ("Michael Brown", "+1 (555) 987-6543", "michael@propertyhub.com"),
        occupied: 16,
        monthly_revenue: 32_400,
        status: PropertyStatus::Active,
        photo: 1_396_122,
    },
    Seed {
        id: 3,
        name: "Garden View Townhomes",
        address: "789 Garden Lane, Suburbs",
        city: "Suburbs",
        state: "GA",
        zip_code: "30303",
        property_type: "Townhouse",
        year_built: "2015",
        total_area: "10000",
        parking_spaces: "15",
        description: "Spacious townhomes with private gardens and family-friendly environment.",
        amenities: &["Garden", "Pet Friendly", "Playground"],
        manager: ("Emily White", "+1 (555) 456-7890", "emily@propertyhub.com"),
        occupied: 10,
        monthly_revenue: 24_000,
        status: PropertyStatus::Maintenance,
        photo: 1_029_599,
    },
];

fn photo_url(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=800"
    )
}

impl Seed {
    fn build(&self) -> Property {
        let (name, phone, email) = self.manager;
        Property {
            id: PropertyId::from(self.id),
            name: self.name.to_string(),
            address: self.address.to_string(),
            city: self.city.to_string(),
            state: self.state.to_string(),
            zip_code: self.zip_code.to_string(),
            property_type: self.property_type.to_string(),
            units: Vec::new(),
            year_built: self.year_built.to_string(),
            total_area: self.total_area.to_string(),
            parking_spaces: self.parking_spaces.to_string(),
            description: self.description.to_string(),
            amenities: self.amenities.iter().map(ToString::to_string).collect(),
            images: Vec::new(),
            staff: Vec::new(),
            manager: Some(StaffData {
                name: name.to_string(),
                role: "Property Manager".to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
            }),
            occupied: self.occupied,
            monthly_revenue: self.monthly_revenue,
            status: self.status,
            image: photo_url(self.photo),
        }
    }
}

/// The three properties every session starts with.
pub fn seed_properties() -> Vec<Property> {
    SEEDS.iter().map(Seed::build).collect()
}
