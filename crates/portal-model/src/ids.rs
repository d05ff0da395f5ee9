#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Identifier of a property in the store.
///
/// Assigned once at creation and never changed afterwards.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidPropertyId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric ids are always valid.
impl From<u64> for PropertyId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl std::str::FromStr for PropertyId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PropertyId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PropertyId> for String {
    fn from(id: PropertyId) -> Self {
        id.0
    }
}

impl PartialEq<str> for PropertyId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PropertyId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(PropertyId::new("  42 ").unwrap().as_str(), "42");
        assert!(matches!(
            PropertyId::new("   "),
            Err(ModelError::InvalidPropertyId(_))
        ));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = PropertyId::new("7").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
        let back: PropertyId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<PropertyId>("\"\"").is_err());
    }
}
