//! Free-text search and filters over property lists.

use portal_model::{Property, PropertyStatus, PropertyType};
use serde::{Deserialize, Serialize};

/// Case-insensitive substring match against any of `fields`.
///
/// A blank query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub query: String,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        let text = matches_query(
            &self.query,
            &[&property.name, &property.address, &property.city],
        );
        let kind = self
            .property_type
            .is_none_or(|kind| kind.matches(&property.property_type));
        let status = self.status.is_none_or(|status| status == property.status);
        text && kind && status
    }

    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_properties;

    #[test]
    fn query_checks_name_address_and_city() {
        let seeds = seed_properties();
        let by = |query: &str| {
            PropertyFilter {
                query: query.to_string(),
                ..PropertyFilter::default()
            }
            .apply(&seeds)
            .len()
        };
        assert_eq!(by("sunset"), 1);
        assert_eq!(by("RIVER ROAD"), 1);
        assert_eq!(by("suburbs"), 1);
        assert_eq!(by("  "), 3);
        assert_eq!(by("nowhere"), 0);
    }

    #[test]
    fn type_and_status_filters_combine() {
        let seeds = seed_properties();
        let filter = PropertyFilter {
            property_type: Some(PropertyType::Townhouse),
            status: Some(PropertyStatus::Maintenance),
            ..PropertyFilter::default()
        };
        let found = filter.apply(&seeds);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Garden View Townhomes");

        let active_townhouses = PropertyFilter {
            status: Some(PropertyStatus::Active),
            ..filter
        };
        assert!(active_townhouses.apply(&seeds).is_empty());
    }
}
