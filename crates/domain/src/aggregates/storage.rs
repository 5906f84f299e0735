//! Storage room - holds the settlement's stockpile

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::room::RoomCore;
use crate::entities::Villager;
use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::non_negative;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    room: RoomCore,
    capacity: i32,
}

impl Storage {
    pub fn new(
        capacity: i32,
        level: i32,
        needed_skill: impl Into<String>,
        cost_to_build: i32,
        villagers: &[Arc<Villager>],
    ) -> Result<Self, DomainError> {
        let mut storage = Self {
            room: RoomCore::new(level, needed_skill, cost_to_build, villagers)?,
            capacity: 0,
        };
        storage.set_capacity(capacity)?;
        Ok(storage)
    }

    pub fn create(
        extent: &mut Extent<Self>,
        capacity: i32,
        level: i32,
        needed_skill: impl Into<String>,
        cost_to_build: i32,
        villagers: &[Arc<Villager>],
    ) -> Result<Arc<Self>, DomainError> {
        admit(
            extent,
            Self::new(capacity, level, needed_skill, cost_to_build, villagers)?,
        )
    }

    pub fn room(&self) -> &RoomCore {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut RoomCore {
        &mut self.room
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: i32) -> Result<(), DomainError> {
        self.capacity = non_negative("capacity", capacity)?;
        Ok(())
    }
}

impl ExtentMember for Storage {
    const TYPE_NAME: &'static str = "Storage";

    fn validate(&self) -> Result<(), DomainError> {
        non_negative("capacity", self.capacity)?;
        self.room.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::room::tests::staff;

    #[test]
    fn test_create_builds_room_and_registers() {
        let mut extent = Extent::new();
        let storage = Storage::create(&mut extent, 50, 1, "Endurance", 100, &staff(&[1, 2])).unwrap();

        assert_eq!(storage.capacity(), 50);
        assert_eq!(storage.room().max_villagers(), 2);
        assert!(extent.contains(&storage));
    }

    #[test]
    fn test_capacity_error_does_not_register() {
        let mut extent = Extent::new();
        let err = Storage::create(&mut extent, 50, 2, "Endurance", 100, &staff(&[1, 2])).unwrap_err();
        assert_eq!(err, DomainError::capacity(4, 2));
        assert!(extent.is_empty());
    }

    #[test]
    fn test_negative_capacity_does_not_register() {
        let mut extent = Extent::new();
        let err = Storage::create(&mut extent, -5, 1, "Endurance", 100, &staff(&[1, 2])).unwrap_err();
        assert_eq!(err.field(), Some("capacity"));
        assert!(extent.is_empty());
    }
}
