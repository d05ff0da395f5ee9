//! In-memory property store.
//!
//! The store is the single source of truth for the property list and detail
//! pages. All mutation goes through [`PropertyStore::dispatch`], which takes
//! `&mut self`, so there is only ever one writer.

use portal_model::{Property, PropertyId};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::seed::seed_properties;

/// A requested change to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyAction {
    Add(Property),
    Update(Property),
    Delete(PropertyId),
}

impl PropertyAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "ADD_PROPERTY",
            Self::Update(_) => "UPDATE_PROPERTY",
            Self::Delete(_) => "DELETE_PROPERTY",
        }
    }

    pub fn target(&self) -> &PropertyId {
        match self {
            Self::Add(property) | Self::Update(property) => &property.id,
            Self::Delete(id) => id,
        }
    }
}

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Added(PropertyId),
    Updated(PropertyId),
    Deleted(PropertyId),
    /// Update or delete named an id that is not in the store. Nothing changed.
    NotFound(PropertyId),
}

impl DispatchOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    properties: Vec<Property>,
    revision: u64,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the three demo properties.
    pub fn seeded() -> Self {
        Self {
            properties: seed_properties(),
            revision: 0,
        }
    }

    /// Builds a store from existing records, rejecting repeated ids.
    pub fn from_properties(properties: Vec<Property>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for property in properties {
            store.add(property)?;
        }
        store.revision = 0;
        Ok(store)
    }

    /// Snapshot of all properties in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Bumped on every state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, action: PropertyAction) -> Result<DispatchOutcome, StoreError> {
        let name = action.name();
        let target = action.target().clone();
        let outcome = match action {
            PropertyAction::Add(property) => self.add(property)?,
            PropertyAction::Update(property) => self.update(property),
            PropertyAction::Delete(id) => self.delete(&id),
        };
        if outcome.changed() {
            info!(action = name, id = %target, revision = self.revision, "store updated");
        } else {
            debug!(action = name, id = %target, "no property with this id");
        }
        Ok(outcome)
    }

    pub fn add(&mut self, property: Property) -> Result<DispatchOutcome, StoreError> {
        if self.contains(property.id.as_str()) {
            return Err(StoreError::DuplicateId(property.id));
        }
        let id = property.id.clone();
        self.properties.push(property);
        self.revision += 1;
        Ok(DispatchOutcome::Added(id))
    }

    pub fn update(&mut self, property: Property) -> DispatchOutcome {
        match self.properties.iter_mut().find(|p| p.id == property.id) {
            Some(slot) => {
                let id = property.id.clone();
                *slot = property;
                self.revision += 1;
                DispatchOutcome::Updated(id)
            }
            None => DispatchOutcome::NotFound(property.id),
        }
    }

    pub fn delete(&mut self, id: &PropertyId) -> DispatchOutcome {
        let before = self.properties.len();
        self.properties.retain(|p| &p.id != id);
        if self.properties.len() == before {
            return DispatchOutcome::NotFound(id.clone());
        }
        self.revision += 1;
        DispatchOutcome::Deleted(id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> PropertyId {
        PropertyId::new(value).unwrap()
    }

    #[test]
    fn seeded_store_holds_three_properties() {
        let store = PropertyStore::seeded();
        let ids: Vec<&str> = store.properties().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn add_appends_and_bumps_revision() {
        let mut store = PropertyStore::seeded();
        let mut property = store.properties()[0].clone();
        property.id = id("99");
        let outcome = store.dispatch(PropertyAction::Add(property)).unwrap();
        assert_eq!(outcome, DispatchOutcome::Added(id("99")));
        assert_eq!(store.len(), 4);
        assert_eq!(store.properties()[3].id, "99");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn add_with_existing_id_is_rejected() {
        let mut store = PropertyStore::seeded();
        let duplicate = store.properties()[1].clone();
        let err = store.dispatch(PropertyAction::Add(duplicate)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(id("2")));
        assert_eq!(store.len(), 3);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = PropertyStore::seeded();
        let mut changed = store.properties()[1].clone();
        changed.name = "Renamed".to_string();
        let outcome = store.dispatch(PropertyAction::Update(changed)).unwrap();
        assert_eq!(outcome, DispatchOutcome::Updated(id("2")));
        assert_eq!(store.properties()[1].name, "Renamed");
        assert_eq!(store.properties()[0].name, "Sunset Apartments");
    }

    #[test]
    fn unknown_ids_report_not_found() {
        let mut store = PropertyStore::seeded();
        let mut ghost = store.properties()[0].clone();
        ghost.id = id("404");
        assert_eq!(
            store.dispatch(PropertyAction::Update(ghost)).unwrap(),
            DispatchOutcome::NotFound(id("404"))
        );
        assert_eq!(
            store.dispatch(PropertyAction::Delete(id("404"))).unwrap(),
            DispatchOutcome::NotFound(id("404"))
        );
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn delete_twice_is_idempotent() {
        let mut store = PropertyStore::seeded();
        assert!(store.delete(&id("1")).changed());
        let snapshot = store.properties().to_vec();
        assert!(!store.delete(&id("1")).changed());
        assert_eq!(store.properties(), snapshot.as_slice());
    }

    #[test]
    fn from_properties_rejects_duplicates() {
        let seeds = seed_properties();
        let mut doubled = seeds.clone();
        doubled.push(seeds[0].clone());
        assert!(PropertyStore::from_properties(doubled).is_err());
        assert_eq!(PropertyStore::from_properties(seeds).unwrap().revision(), 0);
    }
}
