//! Id assignment for newly created properties.

use chrono::Utc;
use portal_model::{Property, PropertyId};

/// Hands out ids for properties created by the wizard.
pub trait IdSource {
    /// Returns an id not used by any of `existing`.
    fn next_id(&mut self, existing: &[Property]) -> PropertyId;
}

fn is_taken(existing: &[Property], candidate: u64) -> bool {
    let candidate = candidate.to_string();
    existing.iter().any(|p| p.id == candidate.as_str())
}

/// Millisecond Unix timestamps, strictly increasing within one source.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: u64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for TimestampIds {
    fn next_id(&mut self, existing: &[Property]) -> PropertyId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let mut candidate = now.max(self.last + 1);
        while is_taken(existing, candidate) {
            candidate += 1;
        }
        self.last = candidate;
        PropertyId::from(candidate)
    }
}

/// Counts upwards from a starting number. Used where ids must be stable.
#[derive(Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, existing: &[Property]) -> PropertyId {
        while is_taken(existing, self.next) {
            self.next += 1;
        }
        let id = PropertyId::from(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_properties;

    #[test]
    fn sequential_skips_existing_ids() {
        let seeds = seed_properties();
        let mut ids = SequentialIds::starting_at(2);
        assert_eq!(ids.next_id(&seeds), "4");
        assert_eq!(ids.next_id(&seeds), "5");
    }

    #[test]
    fn timestamps_increase_strictly() {
        let mut ids = TimestampIds::new();
        let first: u64 = ids.next_id(&[]).as_str().parse().unwrap();
        let second: u64 = ids.next_id(&[]).as_str().parse().unwrap();
        assert!(second > first);
        assert!(first > 1_600_000_000_000);
    }

    #[test]
    fn timestamps_skip_ids_already_in_the_store() {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap();
        let template = seed_properties().remove(0);
        let existing: Vec<Property> = (now..now + 50)
            .map(|n| Property {
                id: PropertyId::from(n),
                ..template.clone()
            })
            .collect();

        let id: u64 = TimestampIds::new().next_id(&existing).as_str().parse().unwrap();
        assert!(id >= now + 50);
        assert!(existing.iter().all(|p| p.id != id.to_string().as_str()));
    }
}
