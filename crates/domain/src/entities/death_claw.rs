//! DeathClaw entity - the apex wasteland predator

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::non_negative;
use crate::value_objects::{MonsterTraits, Vitals};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathClaw {
    size: i32,
    vitals: Vitals,
    traits: MonsterTraits,
}

impl DeathClaw {
    pub fn new(size: i32, vitals: Vitals, traits: MonsterTraits) -> Result<Self, DomainError> {
        let mut death_claw = Self {
            vitals,
            traits,
            ..Self::default()
        };
        death_claw.set_size(size)?;
        Ok(death_claw)
    }

    pub fn create(
        extent: &mut Extent<Self>,
        size: i32,
        vitals: Vitals,
        traits: MonsterTraits,
    ) -> Result<Arc<Self>, DomainError> {
        admit(extent, Self::new(size, vitals, traits)?)
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn traits(&self) -> &MonsterTraits {
        &self.traits
    }

    pub fn set_size(&mut self, size: i32) -> Result<(), DomainError> {
        self.size = non_negative("size", size)?;
        Ok(())
    }

    pub fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub fn traits_mut(&mut self) -> &mut MonsterTraits {
        &mut self.traits
    }
}

impl ExtentMember for DeathClaw {
    const TYPE_NAME: &'static str = "DeathClaw";

    fn validate(&self) -> Result<(), DomainError> {
        non_negative("size", self.size)?;
        self.vitals.validate()?;
        self.traits.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_composes_vitals_and_traits() {
        let mut extent = Extent::new();
        let claw = DeathClaw::create(
            &mut extent,
            3,
            Vitals::new(500, 20).unwrap(),
            MonsterTraits::new(300, 80, ["Deathclaw Hand", "Deathclaw Egg"]).unwrap(),
        )
        .unwrap();

        assert_eq!(claw.size(), 3);
        assert_eq!(claw.vitals().hp(), 500);
        assert_eq!(claw.traits().damage(), 80);
        assert_eq!(claw.traits().loot().len(), 2);
        assert_eq!(extent.len(), 1);
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let mut extent = Extent::new();
        let err = DeathClaw::create(
            &mut extent,
            -3,
            Vitals::default(),
            MonsterTraits::new(1, 1, ["Hide"]).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("size"));
        assert!(extent.is_empty());
    }
}
