//! Multi-step property creation.
//!
//! The wizard owns a [`PropertyDraft`] and a cursor over [`WizardStep`].
//! Moving forward validates the step being left; submitting is only
//! possible from the review step and yields the finished [`Property`] for
//! the caller to dispatch into the store.

mod draft;
mod step;
mod validate;

use portal_model::{PLACEHOLDER_IMAGE_URL, Property, PropertyStatus, StaffData, UnitDraft};
use tracing::debug;

pub use draft::{BasicInfoPatch, COMMON_AMENITIES, PropertyDraft};
pub use step::WizardStep;
pub use validate::validate_step;

use crate::error::WizardError;
use crate::ids::IdSource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyWizard {
    step: WizardStep,
    draft: PropertyDraft,
}

impl PropertyWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing draft, positioned on the first step.
    pub fn with_draft(draft: PropertyDraft) -> Self {
        Self {
            step: WizardStep::default(),
            draft,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &PropertyDraft {
        &self.draft
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Validates the current step and advances. Stays put at review.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let issues = validate_step(&self.draft, self.step);
        if !issues.is_empty() {
            debug!(step = %self.step, issues = issues.len(), "wizard step rejected");
            return Err(WizardError::Invalid {
                step: self.step,
                issues,
            });
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Goes back one step without validation. Stays put at the first step.
    pub fn previous(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    // =========================================================================
    // Draft edits
    // =========================================================================

    pub fn update(&mut self, patch: BasicInfoPatch) {
        self.draft.apply(patch);
    }

    pub fn set_units(&mut self, units: Vec<UnitDraft>) {
        self.draft.units = units;
    }

    pub fn set_staff(&mut self, staff: Vec<StaffData>) {
        self.draft.staff = staff;
    }

    /// Replaces the amenity list, dropping repeats but keeping first order.
    pub fn set_amenities(&mut self, amenities: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(amenities.len());
        for amenity in amenities {
            if !unique.contains(&amenity) {
                unique.push(amenity);
            }
        }
        self.draft.amenities = unique;
    }

    /// Appends an empty vacant unit.
    pub fn add_unit(&mut self) {
        let mut units = self.draft.units.clone();
        units.push(UnitDraft::default());
        self.set_units(units);
    }

    /// Returns `false` when `index` is out of range.
    pub fn edit_unit(&mut self, index: usize, unit: UnitDraft) -> bool {
        if index >= self.draft.units.len() {
            return false;
        }
        let units = self
            .draft
            .units
            .iter()
            .enumerate()
            .map(|(i, existing)| if i == index { unit.clone() } else { existing.clone() })
            .collect();
        self.set_units(units);
        true
    }

    pub fn remove_unit(&mut self, index: usize) {
        let units = self
            .draft
            .units
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, unit)| unit.clone())
            .collect();
        self.set_units(units);
    }

    pub fn add_staff(&mut self) {
        let mut staff = self.draft.staff.clone();
        staff.push(StaffData::default());
        self.set_staff(staff);
    }

    pub fn edit_staff(&mut self, index: usize, member: StaffData) -> bool {
        if index >= self.draft.staff.len() {
            return false;
        }
        let staff = self
            .draft
            .staff
            .iter()
            .enumerate()
            .map(|(i, existing)| if i == index { member.clone() } else { existing.clone() })
            .collect();
        self.set_staff(staff);
        true
    }

    pub fn remove_staff(&mut self, index: usize) {
        let staff = self
            .draft
            .staff
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, member)| member.clone())
            .collect();
        self.set_staff(staff);
    }

    /// Adds the amenity if absent, removes it if present.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        let mut amenities = self.draft.amenities.clone();
        if let Some(pos) = amenities.iter().position(|a| a == amenity) {
            amenities.remove(pos);
        } else {
            amenities.push(amenity.to_string());
        }
        self.set_amenities(amenities);
    }

    /// Adds trimmed free text. Returns `false` if blank or already listed.
    pub fn add_custom_amenity(&mut self, text: &str) -> bool {
        let amenity = text.trim();
        if amenity.is_empty() || self.draft.amenities.iter().any(|a| a == amenity) {
            return false;
        }
        let mut amenities = self.draft.amenities.clone();
        amenities.push(amenity.to_string());
        self.set_amenities(amenities);
        true
    }

    pub fn remove_amenity(&mut self, amenity: &str) {
        let amenities = self
            .draft
            .amenities
            .iter()
            .filter(|a| a.as_str() != amenity)
            .cloned()
            .collect();
        self.set_amenities(amenities);
    }

    pub fn add_images(&mut self, images: Vec<Vec<u8>>) {
        let mut all = self.draft.images.clone();
        all.extend(images);
        self.update(BasicInfoPatch {
            images: Some(all),
            ..BasicInfoPatch::default()
        });
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.draft.images.len() {
            self.draft.images.remove(index);
        }
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Builds the new property from the draft.
    ///
    /// Only allowed on the review step. The whole draft is re-validated and a
    /// fresh id is drawn from `ids`, avoiding everything in `existing`.
    pub fn submit(
        &self,
        ids: &mut dyn IdSource,
        existing: &[Property],
    ) -> Result<Property, WizardError> {
        if !self.step.is_last() {
            return Err(WizardError::NotAtReview(self.step));
        }
        let issues = validate_step(&self.draft, WizardStep::Review);
        if !issues.is_empty() {
            return Err(WizardError::Invalid {
                step: WizardStep::Review,
                issues,
            });
        }

        let draft = self.draft.clone();
        let manager = draft.manager().cloned();
        Ok(Property {
            id: ids.next_id(existing),
            name: draft.name,
            address: draft.address,
            city: draft.city,
            state: draft.state,
            zip_code: draft.zip_code,
            property_type: draft.property_type,
            units: draft.units,
            year_built: draft.year_built,
            total_area: draft.total_area,
            parking_spaces: draft.parking_spaces,
            description: draft.description,
            amenities: draft.amenities,
            images: draft.images,
            staff: draft.staff,
            manager,
            occupied: 0,
            monthly_revenue: 0,
            status: PropertyStatus::Active,
            image: PLACEHOLDER_IMAGE_URL.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    fn basic() -> BasicInfoPatch {
        BasicInfoPatch {
            name: Some("Test Towers".to_string()),
            address: Some("1 Test Way".to_string()),
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            zip_code: Some("73301".to_string()),
            property_type: Some("apartment".to_string()),
            ..BasicInfoPatch::default()
        }
    }

    fn at_review() -> PropertyWizard {
        let mut wizard = PropertyWizard::new();
        wizard.update(basic());
        for _ in 0..4 {
            wizard.next().unwrap();
        }
        wizard
    }

    #[test]
    fn starts_empty_on_basic_info() {
        let wizard = PropertyWizard::new();
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert_eq!(wizard.draft(), &PropertyDraft::default());
    }

    #[test]
    fn next_refuses_invalid_step() {
        let mut wizard = PropertyWizard::new();
        let err = wizard.next().unwrap_err();
        assert!(matches!(err, WizardError::Invalid { step: WizardStep::BasicInfo, .. }));
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut wizard = at_review();
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.next().unwrap(), WizardStep::Review);
        for _ in 0..10 {
            wizard.previous();
        }
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let mut wizard = PropertyWizard::new();
        wizard.update(basic());
        wizard.update(BasicInfoPatch {
            city: Some("Dallas".to_string()),
            ..BasicInfoPatch::default()
        });
        assert_eq!(wizard.draft().city, "Dallas");
        assert_eq!(wizard.draft().name, "Test Towers");
    }

    #[test]
    fn unit_and_staff_lists_collapse_to_empty() {
        let mut wizard = PropertyWizard::new();
        wizard.add_unit();
        wizard.add_staff();
        assert!(wizard.edit_unit(0, UnitDraft::new("101")));
        assert!(!wizard.edit_unit(3, UnitDraft::new("x")));
        assert_eq!(wizard.draft().units[0].unit_number, "101");
        wizard.remove_unit(0);
        wizard.remove_staff(0);
        assert!(wizard.draft().units.is_empty());
        assert!(wizard.draft().staff.is_empty());
    }

    #[test]
    fn amenities_are_a_set() {
        let mut wizard = PropertyWizard::new();
        wizard.toggle_amenity("Pool");
        wizard.toggle_amenity("Gym");
        assert!(!wizard.add_custom_amenity(" Pool "));
        assert!(!wizard.add_custom_amenity("   "));
        assert!(wizard.add_custom_amenity("  Sauna "));
        assert_eq!(wizard.draft().amenities, ["Pool", "Gym", "Sauna"]);
        wizard.toggle_amenity("Gym");
        wizard.toggle_amenity("Gym");
        assert_eq!(wizard.draft().amenities, ["Pool", "Sauna", "Gym"]);
        wizard.remove_amenity("Pool");
        wizard.set_amenities(vec!["A".into(), "B".into(), "A".into()]);
        assert_eq!(wizard.draft().amenities, ["A", "B"]);
    }

    #[test]
    fn submit_only_from_review() {
        let mut wizard = PropertyWizard::new();
        wizard.update(basic());
        let mut ids = SequentialIds::starting_at(10);
        assert_eq!(
            wizard.submit(&mut ids, &[]),
            Err(WizardError::NotAtReview(WizardStep::BasicInfo))
        );
    }

    #[test]
    fn submit_applies_defaults_and_picks_manager() {
        let mut wizard = at_review();
        wizard.set_staff(vec![
            StaffData {
                name: "Jo".to_string(),
                role: "Maintenance".to_string(),
                ..StaffData::default()
            },
            StaffData {
                name: "Kim".to_string(),
                role: "Property Manager".to_string(),
                ..StaffData::default()
            },
        ]);
        let mut ids = SequentialIds::starting_at(10);
        let property = wizard.submit(&mut ids, &[]).unwrap();
        assert_eq!(property.id, "10");
        assert_eq!(property.occupied, 0);
        assert_eq!(property.monthly_revenue, 0);
        assert_eq!(property.status, PropertyStatus::Active);
        assert_eq!(property.image, PLACEHOLDER_IMAGE_URL);
        assert_eq!(property.manager.map(|m| m.name), Some("Kim".to_string()));
        assert_eq!(property.name, "Test Towers");
    }

    #[test]
    fn submit_revalidates_whole_draft() {
        let mut wizard = at_review();
        wizard.update(BasicInfoPatch {
            name: Some(String::new()),
            ..BasicInfoPatch::default()
        });
        let mut ids = SequentialIds::starting_at(1);
        let err = wizard.submit(&mut ids, &[]).unwrap_err();
        assert_eq!(err.issues()[0].field, "name");
        assert_eq!(err.user_message(), "Property name is required.");
    }
}
