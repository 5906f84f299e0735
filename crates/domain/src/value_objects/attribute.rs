//! Attribute value object - the seven SPECIAL character attributes.
//!
//! Provides type safety for the attribute selectors rooms aggregate over,
//! instead of matching on raw strings at every call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::DomainError;

/// A SPECIAL attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Intelligence,
    Strength,
    Perception,
    Endurance,
    Charisma,
    Agility,
    Luck,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Attribute; 7] = [
        Self::Intelligence,
        Self::Strength,
        Self::Perception,
        Self::Endurance,
        Self::Charisma,
        Self::Agility,
        Self::Luck,
    ];

    /// Returns the selector name (e.g., "Intelligence").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intelligence => "Intelligence",
            Self::Strength => "Strength",
            Self::Perception => "Perception",
            Self::Endurance => "Endurance",
            Self::Charisma => "Charisma",
            Self::Agility => "Agility",
            Self::Luck => "Luck",
        }
    }

    /// Field name used in validation errors.
    pub(crate) fn field_name(&self) -> &'static str {
        match self {
            Self::Intelligence => "intelligence",
            Self::Strength => "strength",
            Self::Perception => "perception",
            Self::Endurance => "endurance",
            Self::Charisma => "charisma",
            Self::Agility => "agility",
            Self::Luck => "luck",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::unknown_attribute(s))
    }
}

/// Anything a group member can report an attribute value from.
///
/// Resolution is fallible so the aggregator can skip a single faulty member
/// without abandoning the whole group.
pub trait AttributeSource {
    fn attribute(&self, attribute: Attribute) -> Result<i32, DomainError>;
}

impl<T: AttributeSource + ?Sized> AttributeSource for Arc<T> {
    fn attribute(&self, attribute: Attribute) -> Result<i32, DomainError> {
        (**self).attribute(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_from_str() {
        assert_eq!(Attribute::from_str("Intelligence"), Ok(Attribute::Intelligence));
        assert_eq!(Attribute::from_str("luck"), Ok(Attribute::Luck));
        assert_eq!(Attribute::from_str(" AGILITY "), Ok(Attribute::Agility));
    }

    #[test]
    fn test_attribute_from_str_unknown() {
        assert_eq!(
            Attribute::from_str("Wisdom"),
            Err(DomainError::UnknownAttribute("Wisdom".to_string()))
        );
        assert!(Attribute::from_str("").is_err());
    }

    #[test]
    fn test_attribute_display_round_trips_through_parse() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute.to_string().parse::<Attribute>(), Ok(attribute));
        }
    }

    #[test]
    fn test_attribute_serde() {
        let json = serde_json::to_string(&Attribute::Charisma).unwrap();
        assert_eq!(json, "\"Charisma\"");
    }
}
