//! Raider entity - hostile humans, some of whom can be captured
//!
//! Whether a raider is capturable is decided once, at construction, from a
//! probability roll the caller supplies (`0.0..1.0`). The domain never draws
//! randomness itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::{MonsterTraits, Vitals};

/// Probability that a freshly encountered raider can be captured.
pub const CAPTURE_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Raider {
    vitals: Vitals,
    traits: MonsterTraits,
    capturable: bool,
}

impl Raider {
    /// `capture_roll` is a uniform sample in `0.0..1.0`.
    pub fn new(vitals: Vitals, traits: MonsterTraits, capture_roll: f64) -> Self {
        Self {
            vitals,
            traits,
            capturable: capture_roll < CAPTURE_CHANCE,
        }
    }

    pub fn create(
        extent: &mut Extent<Self>,
        vitals: Vitals,
        traits: MonsterTraits,
        capture_roll: f64,
    ) -> Result<Arc<Self>, DomainError> {
        admit(extent, Self::new(vitals, traits, capture_roll))
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn traits(&self) -> &MonsterTraits {
        &self.traits
    }

    pub fn is_capturable(&self) -> bool {
        self.capturable
    }

    pub fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub fn traits_mut(&mut self) -> &mut MonsterTraits {
        &mut self.traits
    }
}

impl ExtentMember for Raider {
    const TYPE_NAME: &'static str = "Raider";

    fn validate(&self) -> Result<(), DomainError> {
        self.vitals.validate()?;
        self.traits.validate()
    }
}
