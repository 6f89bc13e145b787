//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Name of a tracked item. Unique within a roster, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a name, rejecting blank input. Surrounding whitespace is trimmed.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File-system friendly form: lowercase, spaces replaced with underscores.
    pub fn slug(&self) -> String {
        self.0.replace(' ', "_").to_lowercase()
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(ItemName::new("   "), Err(DomainError::Validation(_))));
        assert!(matches!(ItemName::new(""), Err(DomainError::Validation(_))));
    }

    #[test]
    fn slug_lowercases_and_replaces_spaces() {
        let name = ItemName::new("  Nail Polish ").unwrap();
        assert_eq!(name.as_str(), "Nail Polish");
        assert_eq!(name.slug(), "nail_polish");
    }

    #[test]
    fn deserialization_validates() {
        let ok: ItemName = serde_json::from_str("\"Acrylic Powder\"").unwrap();
        assert_eq!(ok.as_str(), "Acrylic Powder");
        assert!(serde_json::from_str::<ItemName>("\"  \"").is_err());
    }
}
