use portal_core::{BasicInfoPatch, PropertyDraft};
use portal_model::{StaffData, UnitDraft};

/// Edits and step changes for the open property wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardMessage {
    /// Replace the draft and restart from the first step.
    LoadDraft(Box<PropertyDraft>),
    UpdateBasicInfo(BasicInfoPatch),

    AddUnit,
    EditUnit(usize, UnitDraft),
    RemoveUnit(usize),

    ToggleAmenity(String),
    AddCustomAmenity(String),
    RemoveAmenity(String),

    AddStaff,
    EditStaff(usize, StaffData),
    RemoveStaff(usize),

    AddImages(Vec<Vec<u8>>),
    RemoveImage(usize),

    Next,
    Previous,
    /// Save the property and return to the list.
    Submit,
    /// Leave without saving.
    Cancel,
}
