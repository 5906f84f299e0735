//! MoleRat entity - a burrowing pest

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::optional_non_blank;
use crate::value_objects::{MonsterTraits, Vitals};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleRat {
    color: Option<String>,
    vitals: Vitals,
    traits: MonsterTraits,
}

impl MoleRat {
    pub fn new(
        color: impl Into<String>,
        vitals: Vitals,
        traits: MonsterTraits,
    ) -> Result<Self, DomainError> {
        let mut mole_rat = Self {
            color: None,
            vitals,
            traits,
        };
        mole_rat.set_color(Some(color.into()))?;
        Ok(mole_rat)
    }

    pub fn create(
        extent: &mut Extent<Self>,
        color: impl Into<String>,
        vitals: Vitals,
        traits: MonsterTraits,
    ) -> Result<Arc<Self>, DomainError> {
        admit(extent, Self::new(color, vitals, traits)?)
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn traits(&self) -> &MonsterTraits {
        &self.traits
    }

    pub fn set_color(&mut self, color: Option<String>) -> Result<(), DomainError> {
        self.color = optional_non_blank("color", color)?;
        Ok(())
    }

    pub fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub fn traits_mut(&mut self) -> &mut MonsterTraits {
        &mut self.traits
    }
}

impl ExtentMember for MoleRat {
    const TYPE_NAME: &'static str = "MoleRat";

    fn validate(&self) -> Result<(), DomainError> {
        optional_non_blank("color", self.color.clone())?;
        self.vitals.validate()?;
        self.traits.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits() -> MonsterTraits {
        MonsterTraits::new(5, 2, ["Mole Rat Meat"]).unwrap()
    }

    #[test]
    fn test_create_sets_color() {
        let mut extent = Extent::new();
        let rat = MoleRat::create(&mut extent, "Pink", Vitals::new(20, 1).unwrap(), traits()).unwrap();
        assert_eq!(rat.color(), Some("Pink"));
        assert_eq!(MoleRat::default_snapshot_file(), "molerat_extent.json");
    }

    #[test]
    fn test_color_null_and_blank_rules() {
        let mut rat = MoleRat::new("Grey", Vitals::default(), traits()).unwrap();
        assert!(rat.set_color(Some(" ".to_string())).is_err());
        assert_eq!(rat.color(), Some("Grey"));
        rat.set_color(None).unwrap();
        assert_eq!(rat.color(), None);
    }

    #[test]
    fn test_loot_rule_applies_through_traits() {
        let mut rat = MoleRat::new("Grey", Vitals::default(), traits()).unwrap();
        assert!(rat.traits_mut().set_loot(Vec::new()).is_err());
        assert_eq!(rat.traits().loot(), &["Mole Rat Meat".to_string()]);
    }
}
