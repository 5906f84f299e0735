//! Junk entity - scavenged scrap with a trade value

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::{non_negative, optional_non_blank};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Junk {
    name: Option<String>,
    rareness: Option<String>,
    value: i32,
}

impl Junk {
    pub fn new(
        name: impl Into<String>,
        rareness: impl Into<String>,
        value: i32,
    ) -> Result<Self, DomainError> {
        let mut junk = Self::default();
        junk.set_name(Some(name.into()))?;
        junk.set_rareness(Some(rareness.into()))?;
        junk.set_value(value)?;
        Ok(junk)
    }

    pub fn create(
        extent: &mut Extent<Self>,
        name: impl Into<String>,
        rareness: impl Into<String>,
        value: i32,
    ) -> Result<Arc<Self>, DomainError> {
        admit(extent, Self::new(name, rareness, value)?)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn rareness(&self) -> Option<&str> {
        self.rareness.as_deref()
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_name(&mut self, name: Option<String>) -> Result<(), DomainError> {
        self.name = optional_non_blank("name", name)?;
        Ok(())
    }

    pub fn set_rareness(&mut self, rareness: Option<String>) -> Result<(), DomainError> {
        self.rareness = optional_non_blank("rareness", rareness)?;
        Ok(())
    }

    pub fn set_value(&mut self, value: i32) -> Result<(), DomainError> {
        self.value = non_negative("value", value)?;
        Ok(())
    }
}

impl ExtentMember for Junk {
    const TYPE_NAME: &'static str = "Junk";

    fn validate(&self) -> Result<(), DomainError> {
        optional_non_blank("name", self.name.clone())?;
        optional_non_blank("rareness", self.rareness.clone())?;
        non_negative("value", self.value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sets_fields() {
        let mut extent = Extent::new();
        let junk = Junk::create(&mut extent, "Desk Fan", "Common", 12).unwrap();
        assert_eq!(junk.name(), Some("Desk Fan"));
        assert_eq!(junk.rareness(), Some("Common"));
        assert_eq!(junk.value(), 12);
        assert_eq!(extent.len(), 1);
    }

    #[test]
    fn test_invalid_fields_abort_creation() {
        let mut extent = Extent::new();
        assert_eq!(
            Junk::create(&mut extent, "Desk Fan", "\t", 12).unwrap_err().field(),
            Some("rareness")
        );
        assert_eq!(
            Junk::create(&mut extent, "Desk Fan", "Rare", -1).unwrap_err().field(),
            Some("value")
        );
        assert!(extent.is_empty());
    }

    #[test]
    fn test_setters_keep_previous_value_on_failure() {
        let mut junk = Junk::new("Toaster", "Common", 5).unwrap();
        assert!(junk.set_value(-5).is_err());
        assert!(junk.set_name(Some(String::new())).is_err());
        assert_eq!(junk.value(), 5);
        assert_eq!(junk.name(), Some("Toaster"));
    }
}
