//! Vitals - hit points and level shared by every living creature.

use serde::{Deserialize, Serialize};

use super::constraints::non_negative;
use crate::error::DomainError;

/// Hit points and level, both `>= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    hp: i32,
    level: i32,
}

impl Vitals {
    pub fn new(hp: i32, level: i32) -> Result<Self, DomainError> {
        let mut vitals = Self::default();
        vitals.set_hp(hp)?;
        vitals.set_level(level)?;
        Ok(vitals)
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn set_hp(&mut self, hp: i32) -> Result<(), DomainError> {
        self.hp = non_negative("hp", hp)?;
        Ok(())
    }

    pub fn set_level(&mut self, level: i32) -> Result<(), DomainError> {
        self.level = non_negative("level", level)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        non_negative("hp", self.hp)?;
        non_negative("level", self.level)?;
        Ok(())
    }
}
