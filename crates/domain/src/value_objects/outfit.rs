//! Outfit - what a human carries and wears.

use serde::{Deserialize, Serialize};

use super::constraints::optional_non_blank;
use crate::error::DomainError;

/// Weapon and clothing names. Either may be absent, neither may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    weapon: Option<String>,
    cloth: Option<String>,
}

impl Outfit {
    pub fn new(weapon: impl Into<String>, cloth: impl Into<String>) -> Result<Self, DomainError> {
        let mut outfit = Self::default();
        outfit.set_weapon(Some(weapon.into()))?;
        outfit.set_cloth(Some(cloth.into()))?;
        Ok(outfit)
    }

    pub fn weapon(&self) -> Option<&str> {
        self.weapon.as_deref()
    }

    pub fn cloth(&self) -> Option<&str> {
        self.cloth.as_deref()
    }

    pub fn set_weapon(&mut self, weapon: Option<String>) -> Result<(), DomainError> {
        self.weapon = optional_non_blank("weapon", weapon)?;
        Ok(())
    }

    pub fn set_cloth(&mut self, cloth: Option<String>) -> Result<(), DomainError> {
        self.cloth = optional_non_blank("cloth", cloth)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        optional_non_blank("weapon", self.weapon.clone())?;
        optional_non_blank("cloth", self.cloth.clone())?;
        Ok(())
    }
}
