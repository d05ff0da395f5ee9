use serde::{Deserialize, Serialize};

/// Steps of the property creation wizard, in order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    #[default]
    BasicInfo,
    Units,
    Amenities,
    Staff,
    Review,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::Units => "Units",
            Self::Amenities => "Amenities",
            Self::Staff => "Associated Staff",
            Self::Review => "Review and Save",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::BasicInfo => "Enter the basic details of the property.",
            Self::Units => "Define individual units within this property.",
            Self::Amenities => "Select the amenities available at this property.",
            Self::Staff => "Add staff members responsible for this property.",
            Self::Review => "Review all details before saving the property.",
        }
    }

    pub const fn all() -> &'static [WizardStep] {
        &[
            Self::BasicInfo,
            Self::Units,
            Self::Amenities,
            Self::Staff,
            Self::Review,
        ]
    }

    /// 0-based position.
    pub fn index(&self) -> usize {
        match self {
            Self::BasicInfo => 0,
            Self::Units => 1,
            Self::Amenities => 2,
            Self::Staff => 3,
            Self::Review => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Following step, or `None` at review.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Preceding step, or `None` at basic info.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Self::Review)
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
