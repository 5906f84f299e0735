//! Resource production room - power, water or food

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::room::RoomCore;
use crate::entities::Villager;
use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::ResourceKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceProduction {
    room: RoomCore,
    kind: ResourceKind,
}

impl ResourceProduction {
    pub fn new(
        kind: ResourceKind,
        level: i32,
        needed_skill: impl Into<String>,
        cost_to_build: i32,
        villagers: &[Arc<Villager>],
    ) -> Result<Self, DomainError> {
        Ok(Self {
            room: RoomCore::new(level, needed_skill, cost_to_build, villagers)?,
            kind,
        })
    }

    pub fn create(
        extent: &mut Extent<Self>,
        kind: ResourceKind,
        level: i32,
        needed_skill: impl Into<String>,
        cost_to_build: i32,
        villagers: &[Arc<Villager>],
    ) -> Result<Arc<Self>, DomainError> {
        admit(
            extent,
            Self::new(kind, level, needed_skill, cost_to_build, villagers)?,
        )
    }

    pub fn room(&self) -> &RoomCore {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut RoomCore {
        &mut self.room
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Any defined kind is accepted; undefined kinds are unrepresentable.
    pub fn set_kind(&mut self, kind: ResourceKind) {
        self.kind = kind;
    }
}

impl ExtentMember for ResourceProduction {
    const TYPE_NAME: &'static str = "ResourceProduction";

    fn validate(&self) -> Result<(), DomainError> {
        self.room.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::room::tests::staff;

    #[test]
    fn test_create_sets_kind() {
        let mut extent = Extent::new();
        let plant = ResourceProduction::create(
            &mut extent,
            ResourceKind::Water,
            1,
            "Perception",
            100,
            &staff(&[1, 1]),
        )
        .unwrap();
        assert_eq!(plant.kind(), ResourceKind::Water);
        assert_eq!(
            ResourceProduction::default_snapshot_file(),
            "resourceproduction_extent.json"
        );
    }
}
