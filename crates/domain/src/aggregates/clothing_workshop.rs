//! Clothing workshop - a crafting room that produces outfits

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::room::RoomCore;
use crate::entities::Villager;
use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::non_negative;

/// A crafting room. `craft_time` and `cost` describe one crafted outfit and
/// are separate from the room's own build time and cost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingWorkshop {
    room: RoomCore,
    craft_time: i32,
    cost: i32,
}

impl ClothingWorkshop {
    pub fn new(
        craft_time: i32,
        cost: i32,
        level: i32,
        needed_skill: impl Into<String>,
        cost_to_build: i32,
        villagers: &[Arc<Villager>],
    ) -> Result<Self, DomainError> {
        let mut workshop = Self {
            room: RoomCore::new(level, needed_skill, cost_to_build, villagers)?,
            craft_time: 0,
            cost: 0,
        };
        workshop.set_craft_time(craft_time)?;
        workshop.set_cost(cost)?;
        Ok(workshop)
    }

    pub fn create(
        extent: &mut Extent<Self>,
        craft_time: i32,
        cost: i32,
        level: i32,
        needed_skill: impl Into<String>,
        cost_to_build: i32,
        villagers: &[Arc<Villager>],
    ) -> Result<Arc<Self>, DomainError> {
        admit(
            extent,
            Self::new(craft_time, cost, level, needed_skill, cost_to_build, villagers)?,
        )
    }

    pub fn room(&self) -> &RoomCore {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut RoomCore {
        &mut self.room
    }

    pub fn craft_time(&self) -> i32 {
        self.craft_time
    }

    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn set_craft_time(&mut self, craft_time: i32) -> Result<(), DomainError> {
        self.craft_time = non_negative("craft_time", craft_time)?;
        Ok(())
    }

    pub fn set_cost(&mut self, cost: i32) -> Result<(), DomainError> {
        self.cost = non_negative("cost", cost)?;
        Ok(())
    }
}

impl ExtentMember for ClothingWorkshop {
    const TYPE_NAME: &'static str = "ClothingWorkshop";

    fn validate(&self) -> Result<(), DomainError> {
        non_negative("craft_time", self.craft_time)?;
        non_negative("cost", self.cost)?;
        self.room.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::room::tests::staff;

    #[test]
    fn test_create_keeps_craft_values_apart_from_room() {
        let mut extent = Extent::new();
        let workshop =
            ClothingWorkshop::create(&mut extent, 30, 15, 1, "Charisma", 400, &staff(&[2, 2])).unwrap();

        assert_eq!(workshop.craft_time(), 30);
        assert_eq!(workshop.cost(), 15);
        assert_eq!(workshop.room().cost_to_build(), 400);
        assert_eq!(workshop.room().time_to_create(), 100);
        assert!(extent.contains(&workshop));
    }

    #[test]
    fn test_negative_craft_values_abort_creation() {
        let mut extent = Extent::new();
        assert!(ClothingWorkshop::create(&mut extent, -1, 15, 1, "Charisma", 400, &staff(&[2, 2])).is_err());
        assert!(ClothingWorkshop::create(&mut extent, 30, -1, 1, "Charisma", 400, &staff(&[2, 2])).is_err());
        assert!(extent.is_empty());
    }
}
