//! Training room - raises one attribute of the villagers working there

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::room::RoomCore;
use crate::entities::Villager;
use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::non_negative;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    room: RoomCore,
    skill_point: i32,
}

impl Training {
    pub fn new(
        skill_point: i32,
        level: i32,
        needed_skill: impl Into<String>,
        cost_to_build: i32,
        villagers: &[Arc<Villager>],
    ) -> Result<Self, DomainError> {
        let mut training = Self {
            room: RoomCore::new(level, needed_skill, cost_to_build, villagers)?,
            skill_point: 0,
        };
        training.set_skill_point(skill_point)?;
        Ok(training)
    }

    pub fn create(
        extent: &mut Extent<Self>,
        skill_point: i32,
        level: i32,
        needed_skill: impl Into<String>,
        cost_to_build: i32,
        villagers: &[Arc<Villager>],
    ) -> Result<Arc<Self>, DomainError> {
        admit(
            extent,
            Self::new(skill_point, level, needed_skill, cost_to_build, villagers)?,
        )
    }

    pub fn room(&self) -> &RoomCore {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut RoomCore {
        &mut self.room
    }

    pub fn skill_point(&self) -> i32 {
        self.skill_point
    }

    pub fn set_skill_point(&mut self, skill_point: i32) -> Result<(), DomainError> {
        self.skill_point = non_negative("skill_point", skill_point)?;
        Ok(())
    }
}

impl ExtentMember for Training {
    const TYPE_NAME: &'static str = "Training";

    fn validate(&self) -> Result<(), DomainError> {
        non_negative("skill_point", self.skill_point)?;
        self.room.validate()
    }
}
