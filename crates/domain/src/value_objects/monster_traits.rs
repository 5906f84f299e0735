//! MonsterTraits - reward and threat values shared by hostile creatures.

use serde::{Deserialize, Serialize};

use super::constraints::{no_blank_items, non_empty_items, non_negative};
use crate::error::DomainError;

/// Experience reward, damage and loot table of a monster.
///
/// # Invariants
///
/// - `xp` and `damage` are `>= 0`
/// - loot assigned through [`MonsterTraits::set_loot`] is non-empty and has no
///   blank entries; only the parameterless default has an empty table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterTraits {
    xp: i32,
    damage: i32,
    loot: Vec<String>,
}

impl MonsterTraits {
    pub fn new<I, S>(xp: i32, damage: i32, loot: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut traits = Self::default();
        traits.set_xp(xp)?;
        traits.set_damage(damage)?;
        traits.set_loot(loot.into_iter().map(Into::into).collect())?;
        Ok(traits)
    }

    pub fn xp(&self) -> i32 {
        self.xp
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn loot(&self) -> &[String] {
        &self.loot
    }

    pub fn set_xp(&mut self, xp: i32) -> Result<(), DomainError> {
        self.xp = non_negative("xp", xp)?;
        Ok(())
    }

    pub fn set_damage(&mut self, damage: i32) -> Result<(), DomainError> {
        self.damage = non_negative("damage", damage)?;
        Ok(())
    }

    pub fn set_loot(&mut self, loot: Vec<String>) -> Result<(), DomainError> {
        self.loot = non_empty_items("loot", loot)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        non_negative("xp", self.xp)?;
        non_negative("damage", self.damage)?;
        no_blank_items("loot", &self.loot)
    }
}
