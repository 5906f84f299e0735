//! Armor entity - wearable gear carrying its own attribute bonuses

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::Special;

/// A piece of armor with seven attribute bonuses.
///
/// # Example
///
/// ```
/// use follout_domain::{Armor, Extent};
///
/// let mut extent = Extent::new();
/// let armor = Armor::create(&mut extent, 1, 2, 3, 4, 5, 6, 7).unwrap();
/// assert_eq!(armor.special().intelligence(), 1);
/// assert_eq!(extent.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    special: Special,
}

impl Armor {
    /// Validate without registering.
    pub fn new(
        intelligence: i32,
        strength: i32,
        perception: i32,
        endurance: i32,
        charisma: i32,
        agility: i32,
        luck: i32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            special: Special::new(
                intelligence,
                strength,
                perception,
                endurance,
                charisma,
                agility,
                luck,
            )?,
        })
    }

    /// Validate and register into `extent`.
    pub fn create(
        extent: &mut Extent<Self>,
        intelligence: i32,
        strength: i32,
        perception: i32,
        endurance: i32,
        charisma: i32,
        agility: i32,
        luck: i32,
    ) -> Result<Arc<Self>, DomainError> {
        let armor = Self::new(
            intelligence,
            strength,
            perception,
            endurance,
            charisma,
            agility,
            luck,
        )?;
        admit(extent, armor)
    }

    #[inline]
    pub fn special(&self) -> &Special {
        &self.special
    }

    /// Scores are only reachable through their validating setters.
    #[inline]
    pub fn special_mut(&mut self) -> &mut Special {
        &mut self.special
    }
}

impl ExtentMember for Armor {
    const TYPE_NAME: &'static str = "Armor";

    fn validate(&self) -> Result<(), DomainError> {
        self.special.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Attribute;

    #[test]
    fn test_create_sets_all_attributes_and_registers() {
        let mut extent = Extent::new();
        let armor = Armor::create(&mut extent, 1, 2, 3, 4, 5, 6, 7).unwrap();

        let special = armor.special();
        assert_eq!(special.intelligence(), 1);
        assert_eq!(special.strength(), 2);
        assert_eq!(special.perception(), 3);
        assert_eq!(special.endurance(), 4);
        assert_eq!(special.charisma(), 5);
        assert_eq!(special.agility(), 6);
        assert_eq!(special.luck(), 7);
        assert!(extent.contains(&armor));
    }

    #[test]
    fn test_create_with_negative_does_not_register() {
        let mut extent = Extent::new();
        let err = Armor::create(&mut extent, 1, 2, 3, -4, 5, 6, 7).unwrap_err();
        assert_eq!(err.field(), Some("endurance"));
        assert!(extent.is_empty());
    }

    #[test]
    fn test_default_is_unregistered_and_zeroed() {
        let mut armor = Armor::default();
        assert_eq!(armor.special().luck(), 0);

        armor.special_mut().set(Attribute::Luck, 9).unwrap();
        assert!(armor.special_mut().set(Attribute::Luck, -1).is_err());
        assert_eq!(armor.special().luck(), 9);
    }
}
