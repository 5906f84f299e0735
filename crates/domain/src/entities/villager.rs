//! Villager entity - a settlement dweller
//!
//! Villagers are the only characters rooms aggregate over, so they expose
//! their attribute scores through [`AttributeSource`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::{non_negative, optional_non_blank};
use crate::value_objects::{Attribute, AttributeSource, Gender, Outfit, Special, Vitals};

/// A settlement dweller.
///
/// # Invariants
///
/// - `name` may be absent but never blank
/// - `happiness`, `radiation` and every attribute score are `>= 0`
/// - `vitals` and `outfit` enforce their own constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Villager {
    name: Option<String>,
    gender: Gender,
    happiness: i32,
    radiation: i32,
    special: Special,
    vitals: Vitals,
    outfit: Outfit,
    birth_date: DateTime<Utc>,
}

impl Villager {
    /// Validate without registering. `birth_date` is supplied by the caller
    /// so construction stays deterministic.
    pub fn new(
        name: impl Into<String>,
        gender: Gender,
        happiness: i32,
        radiation: i32,
        special: Special,
        vitals: Vitals,
        outfit: Outfit,
        birth_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let mut villager = Self {
            gender,
            special,
            vitals,
            outfit,
            birth_date,
            ..Self::default()
        };
        villager.set_name(Some(name.into()))?;
        villager.set_happiness(happiness)?;
        villager.set_radiation(radiation)?;
        Ok(villager)
    }

    /// Validate and register into `extent`.
    pub fn create(
        extent: &mut Extent<Self>,
        name: impl Into<String>,
        gender: Gender,
        happiness: i32,
        radiation: i32,
        special: Special,
        vitals: Vitals,
        outfit: Outfit,
        birth_date: DateTime<Utc>,
    ) -> Result<Arc<Self>, DomainError> {
        let villager = Self::new(
            name, gender, happiness, radiation, special, vitals, outfit, birth_date,
        )?;
        admit(extent, villager)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn happiness(&self) -> i32 {
        self.happiness
    }

    pub fn radiation(&self) -> i32 {
        self.radiation
    }

    pub fn special(&self) -> &Special {
        &self.special
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn outfit(&self) -> &Outfit {
        &self.outfit
    }

    pub fn birth_date(&self) -> DateTime<Utc> {
        self.birth_date
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn set_name(&mut self, name: Option<String>) -> Result<(), DomainError> {
        self.name = optional_non_blank("name", name)?;
        Ok(())
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub fn set_happiness(&mut self, happiness: i32) -> Result<(), DomainError> {
        self.happiness = non_negative("happiness", happiness)?;
        Ok(())
    }

    pub fn set_radiation(&mut self, radiation: i32) -> Result<(), DomainError> {
        self.radiation = non_negative("radiation", radiation)?;
        Ok(())
    }

    pub fn set_birth_date(&mut self, birth_date: DateTime<Utc>) {
        self.birth_date = birth_date;
    }

    pub fn special_mut(&mut self) -> &mut Special {
        &mut self.special
    }

    pub fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub fn outfit_mut(&mut self) -> &mut Outfit {
        &mut self.outfit
    }
}

impl AttributeSource for Villager {
    fn attribute(&self, attribute: Attribute) -> Result<i32, DomainError> {
        self.special.attribute(attribute)
    }
}

impl ExtentMember for Villager {
    const TYPE_NAME: &'static str = "Villager";

    fn validate(&self) -> Result<(), DomainError> {
        optional_non_blank("name", self.name.clone())?;
        non_negative("happiness", self.happiness)?;
        non_negative("radiation", self.radiation)?;
        self.special.validate()?;
        self.vitals.validate()?;
        self.outfit.validate()
    }
}
