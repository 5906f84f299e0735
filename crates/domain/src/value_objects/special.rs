//! Special - the seven attribute scores shared by villagers and armor.

use serde::{Deserialize, Serialize};

use super::attribute::{Attribute, AttributeSource};
use super::constraints::non_negative;
use crate::error::DomainError;

/// Seven non-negative attribute scores.
///
/// # Invariants
///
/// - Every score is `>= 0`. Setters check before assigning, so a rejected
///   value leaves the previous score in place.
///
/// # Example
///
/// ```
/// use follout_domain::value_objects::{Attribute, Special};
///
/// let mut special = Special::new(1, 2, 3, 4, 5, 6, 7).unwrap();
/// assert_eq!(special.get(Attribute::Luck), 7);
///
/// assert!(special.set(Attribute::Luck, -1).is_err());
/// assert_eq!(special.luck(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Special {
    intelligence: i32,
    strength: i32,
    perception: i32,
    endurance: i32,
    charisma: i32,
    agility: i32,
    luck: i32,
}

impl Special {
    /// Create a validated score set.
    pub fn new(
        intelligence: i32,
        strength: i32,
        perception: i32,
        endurance: i32,
        charisma: i32,
        agility: i32,
        luck: i32,
    ) -> Result<Self, DomainError> {
        let mut special = Self::default();
        special.set(Attribute::Intelligence, intelligence)?;
        special.set(Attribute::Strength, strength)?;
        special.set(Attribute::Perception, perception)?;
        special.set(Attribute::Endurance, endurance)?;
        special.set(Attribute::Charisma, charisma)?;
        special.set(Attribute::Agility, agility)?;
        special.set(Attribute::Luck, luck)?;
        Ok(special)
    }

    /// Read one score.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Intelligence => self.intelligence,
            Attribute::Strength => self.strength,
            Attribute::Perception => self.perception,
            Attribute::Endurance => self.endurance,
            Attribute::Charisma => self.charisma,
            Attribute::Agility => self.agility,
            Attribute::Luck => self.luck,
        }
    }

    /// Assign one score.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the attribute if `value < 0`.
    pub fn set(&mut self, attribute: Attribute, value: i32) -> Result<(), DomainError> {
        let value = non_negative(attribute.field_name(), value)?;
        let slot = match attribute {
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Strength => &mut self.strength,
            Attribute::Perception => &mut self.perception,
            Attribute::Endurance => &mut self.endurance,
            Attribute::Charisma => &mut self.charisma,
            Attribute::Agility => &mut self.agility,
            Attribute::Luck => &mut self.luck,
        };
        *slot = value;
        Ok(())
    }

    pub fn intelligence(&self) -> i32 {
        self.intelligence
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn perception(&self) -> i32 {
        self.perception
    }

    pub fn endurance(&self) -> i32 {
        self.endurance
    }

    pub fn charisma(&self) -> i32 {
        self.charisma
    }

    pub fn agility(&self) -> i32 {
        self.agility
    }

    pub fn luck(&self) -> i32 {
        self.luck
    }

    /// Re-check every score (used for values that did not come through setters).
    pub fn validate(&self) -> Result<(), DomainError> {
        for attribute in Attribute::ALL {
            non_negative(attribute.field_name(), self.get(attribute))?;
        }
        Ok(())
    }
}

impl AttributeSource for Special {
    fn attribute(&self, attribute: Attribute) -> Result<i32, DomainError> {
        Ok(self.get(attribute))
    }
}
