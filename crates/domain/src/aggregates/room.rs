//! RoomCore - the state every room type shares
//!
//! A room is built at a level, staffed by `2 * level` villagers and keyed to
//! one attribute (its needed skill). The staff's total in that attribute is
//! computed at construction and drives how long the room takes to build.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use follout_domain::aggregates::RoomCore;
//! use follout_domain::value_objects::{Attribute, Special};
//! use follout_domain::Villager;
//!
//! let staff: Vec<Arc<Villager>> = [5, 6, 8]
//!     .into_iter()
//!     .map(|intelligence| {
//!         let mut villager = Villager::default();
//!         villager.special_mut().set(Attribute::Intelligence, intelligence).unwrap();
//!         Arc::new(villager)
//!     })
//!     .collect();
//!
//! let room = RoomCore::new(1, "Intelligence", 100, &staff).unwrap();
//! assert_eq!(room.max_villagers(), 2);
//! assert_eq!(room.skill_points(), 11);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::group::Group;
use crate::entities::Villager;
use crate::error::DomainError;
use crate::extent::ExtentMember;
use crate::value_objects::constraints::{non_negative, optional_non_blank, positive, required_non_blank};
use crate::value_objects::Attribute;

/// Base build time before the staff's skill discount.
pub const BASE_TIME_TO_CREATE: i32 = 100;

/// Upgrade cost per room level.
pub const UPGRADE_COST_PER_LEVEL: i32 = 100;

/// Shared room state.
///
/// # Invariants
///
/// - `level > 0` once set (the parameterless default leaves it at 0)
/// - `needed_skill` names one of the seven attributes once the level is set
/// - the villager group holds exactly `max_villagers = 2 * level` members at
///   construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCore {
    level: i32,
    needed_skill: Option<String>,
    cost_to_build: i32,
    size: i32,
    max_villagers: i32,
    time_to_create: i32,
    cost_to_upgrade: i32,
    skill_points: i32,
    villagers: Group<Arc<Villager>>,
}

impl RoomCore {
    /// Build a staffed room.
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation` for a non-positive level or blank skill
    /// - `DomainError::Capacity` if fewer than `2 * level` villagers were
    ///   supplied
    /// - `DomainError::UnknownAttribute` if the needed skill names no attribute
    pub fn new(
        level: i32,
        needed_skill: impl Into<String>,
        cost_to_build: i32,
        villagers: &[Arc<Villager>],
    ) -> Result<Self, DomainError> {
        let mut room = Self::default();
        room.set_level(level)?;
        room.set_needed_skill(needed_skill)?;
        room.set_cost_to_build(cost_to_build);

        let capacity = room.level.saturating_mul(2);
        room.villagers = Group::fill(capacity as usize, villagers)?;
        for villager in room.villagers.members() {
            tracing::debug!(
                villager = villager.name().unwrap_or("<unnamed>"),
                "Villager added to room"
            );
        }
        room.max_villagers = capacity;
        room.size = capacity;

        let skill_points = room.update_skill_points()?;
        room.time_to_create =
            BASE_TIME_TO_CREATE.saturating_sub(BASE_TIME_TO_CREATE.saturating_mul(skill_points) / 10);
        room.cost_to_upgrade = UPGRADE_COST_PER_LEVEL.saturating_mul(room.level);
        Ok(room)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn needed_skill(&self) -> Option<&str> {
        self.needed_skill.as_deref()
    }

    pub fn cost_to_build(&self) -> i32 {
        self.cost_to_build
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn max_villagers(&self) -> i32 {
        self.max_villagers
    }

    pub fn time_to_create(&self) -> i32 {
        self.time_to_create
    }

    pub fn cost_to_upgrade(&self) -> i32 {
        self.cost_to_upgrade
    }

    /// The most recently aggregated total.
    pub fn skill_points(&self) -> i32 {
        self.skill_points
    }

    pub fn villagers(&self) -> &[Arc<Villager>] {
        self.villagers.members()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Changing the level does not restaff the room or recompute derived values.
    pub fn set_level(&mut self, level: i32) -> Result<(), DomainError> {
        self.level = positive("level", level)?;
        Ok(())
    }

    /// The skill must be non-blank and name one of the seven attributes.
    pub fn set_needed_skill(&mut self, needed_skill: impl Into<String>) -> Result<(), DomainError> {
        let needed_skill = required_non_blank("needed_skill", needed_skill.into())?;
        needed_skill.parse::<Attribute>()?;
        self.needed_skill = Some(needed_skill);
        Ok(())
    }

    pub fn set_cost_to_build(&mut self, cost_to_build: i32) {
        self.cost_to_build = cost_to_build;
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Re-aggregate the staff's needed-skill total and store it.
    pub fn update_skill_points(&mut self) -> Result<i32, DomainError> {
        let selector = self.needed_skill.clone().unwrap_or_default();
        self.total_for(&selector)
    }

    /// Aggregate any attribute across the staff and store it as the room's
    /// skill points. On error the stored total is left untouched.
    pub fn total_for(&mut self, selector: &str) -> Result<i32, DomainError> {
        let total = self.villagers.sum(selector)?;
        self.skill_points = total;
        Ok(total)
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        non_negative("level", self.level)?;
        if self.level > 0 {
            let skill = required_non_blank(
                "needed_skill",
                self.needed_skill.clone().unwrap_or_default(),
            )?;
            skill.parse::<Attribute>()?;
        } else {
            optional_non_blank("needed_skill", self.needed_skill.clone())?;
        }
        self.villagers.validate()?;
        if self.level > 0 && self.villagers.capacity() != self.level.saturating_mul(2) as usize {
            return Err(DomainError::capacity(
                self.level.saturating_mul(2) as usize,
                self.villagers.capacity(),
            ));
        }
        for villager in self.villagers.members() {
            villager.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn staff(intelligence: &[i32]) -> Vec<Arc<Villager>> {
        intelligence
            .iter()
            .map(|value| {
                let mut villager = Villager::default();
                villager
                    .special_mut()
                    .set(Attribute::Intelligence, *value)
                    .unwrap();
                villager.special_mut().set(Attribute::Luck, value + 1).unwrap();
                Arc::new(villager)
            })
            .collect()
    }

    #[test]
    fn test_new_derives_sizes_and_costs() {
        let room = RoomCore::new(2, "Intelligence", 250, &staff(&[1, 2, 3, 4])).unwrap();

        assert_eq!(room.level(), 2);
        assert_eq!(room.max_villagers(), 4);
        assert_eq!(room.size(), 4);
        assert_eq!(room.cost_to_upgrade(), 200);
        assert_eq!(room.cost_to_build(), 250);
        assert_eq!(room.skill_points(), 10);
        assert_eq!(room.time_to_create(), 0);
    }

    #[test]
    fn test_new_keeps_first_two_for_level_one() {
        let villagers = staff(&[5, 6, 8]);
        let room = RoomCore::new(1, "Intelligence", 100, &villagers).unwrap();

        assert_eq!(room.villagers().len(), 2);
        assert!(Arc::ptr_eq(&room.villagers()[0], &villagers[0]));
        assert!(Arc::ptr_eq(&room.villagers()[1], &villagers[1]));
        assert_eq!(room.skill_points(), 11);
        assert_eq!(room.time_to_create(), -10);
    }

    #[test]
    fn test_new_with_too_few_villagers_fails() {
        let err = RoomCore::new(2, "Intelligence", 100, &staff(&[5, 6, 8])).unwrap_err();
        assert_eq!(err, DomainError::capacity(4, 3));
    }

    #[test]
    fn test_new_rejects_non_positive_level_and_blank_skill() {
        assert_eq!(
            RoomCore::new(0, "Intelligence", 0, &[]).unwrap_err().field(),
            Some("level")
        );
        assert_eq!(
            RoomCore::new(1, " ", 0, &staff(&[1, 1])).unwrap_err().field(),
            Some("needed_skill")
        );
    }

    #[test]
    fn test_new_with_unknown_skill_fails() {
        let err = RoomCore::new(1, "Wisdom", 0, &staff(&[1, 1])).unwrap_err();
        assert_eq!(err, DomainError::unknown_attribute("Wisdom"));
    }

    #[test]
    fn test_total_for_stores_result() {
        let mut room = RoomCore::new(1, "Intelligence", 0, &staff(&[5, 6])).unwrap();
        assert_eq!(room.total_for("Luck"), Ok(13));
        assert_eq!(room.skill_points(), 13);
    }

    #[test]
    fn test_total_for_unknown_selector_stores_nothing() {
        let mut room = RoomCore::new(1, "Intelligence", 0, &staff(&[5, 6])).unwrap();
        assert!(matches!(
            room.total_for("Sneak"),
            Err(DomainError::UnknownAttribute(_))
        ));
        assert_eq!(room.skill_points(), 11);
    }

    #[test]
    fn test_update_skill_points_follows_needed_skill() {
        let mut room = RoomCore::new(1, "Intelligence", 0, &staff(&[5, 6])).unwrap();
        room.set_needed_skill("Luck").unwrap();
        assert_eq!(room.update_skill_points(), Ok(13));
    }

    #[test]
    fn test_setters_keep_previous_value_on_failure() {
        let mut room = RoomCore::new(1, "Intelligence", 0, &staff(&[5, 6])).unwrap();
        assert!(room.set_level(0).is_err());
        assert!(room.set_needed_skill("").is_err());
        assert_eq!(room.level(), 1);
        assert_eq!(room.needed_skill(), Some("Intelligence"));
    }

    #[test]
    fn test_default_passes_storage_validation() {
        assert!(RoomCore::default().validate().is_ok());
    }

    #[test]
    fn test_level_two_room_stores_total_of_three_staff() {
        let room = RoomCore::new(2, "Intelligence", 0, &staff(&[5, 6, 8, 0])).unwrap();
        assert_eq!(room.villagers().len(), 4);
        assert_eq!(room.skill_points(), 19);
    }

    #[test]
    fn test_set_needed_skill_rejects_unknown_attribute() {
        let mut room = RoomCore::new(1, "Intelligence", 0, &staff(&[5, 6])).unwrap();
        assert_eq!(
            room.set_needed_skill("Wisdom"),
            Err(DomainError::unknown_attribute("Wisdom"))
        );
        assert_eq!(room.needed_skill(), Some("Intelligence"));
    }

    #[test]
    fn test_validate_requires_known_skill_on_built_room() {
        let room = RoomCore::new(1, "Intelligence", 0, &staff(&[5, 6])).unwrap();
        assert!(room.validate().is_ok());

        let mut missing = room.clone();
        missing.needed_skill = None;
        assert_eq!(missing.validate().unwrap_err().field(), Some("needed_skill"));

        let mut unknown = room.clone();
        unknown.needed_skill = Some("Wisdom".to_string());
        assert_eq!(
            unknown.validate(),
            Err(DomainError::unknown_attribute("Wisdom"))
        );
    }
}
