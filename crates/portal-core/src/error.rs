use portal_model::PropertyId;
use thiserror::Error;

use crate::wizard::WizardStep;

/// Rejected store dispatches. The store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a property with id {0} already exists")]
    DuplicateId(PropertyId),
}

/// A single validation problem attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field path such as `name` or `units[1].unit_number`.
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("{step} has {} invalid field(s)", .issues.len())]
    Invalid {
        step: WizardStep,
        issues: Vec<FieldIssue>,
    },
    #[error("the property can only be saved from the review step (currently on {0})")]
    NotAtReview(WizardStep),
}

impl WizardError {
    /// Inline text shown next to the wizard controls.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid { issues, .. } => issues
                .iter()
                .map(|issue| issue.message.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Self::NotAtReview(_) => "Review the property before saving.".to_string(),
        }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::Invalid { issues, .. } => issues,
            Self::NotAtReview(_) => &[],
        }
    }
}
