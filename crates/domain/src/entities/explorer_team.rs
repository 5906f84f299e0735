//! ExplorerTeam entity - an expedition heading out into the wasteland

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::non_negative;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerTeam {
    end_point: i32,
    time_to_reach: i32,
}

impl ExplorerTeam {
    pub fn new(end_point: i32, time_to_reach: i32) -> Result<Self, DomainError> {
        let mut team = Self::default();
        team.set_end_point(end_point)?;
        team.set_time_to_reach(time_to_reach)?;
        Ok(team)
    }

    pub fn create(
        extent: &mut Extent<Self>,
        end_point: i32,
        time_to_reach: i32,
    ) -> Result<Arc<Self>, DomainError> {
        admit(extent, Self::new(end_point, time_to_reach)?)
    }

    pub fn end_point(&self) -> i32 {
        self.end_point
    }

    pub fn time_to_reach(&self) -> i32 {
        self.time_to_reach
    }

    pub fn set_end_point(&mut self, end_point: i32) -> Result<(), DomainError> {
        self.end_point = non_negative("end_point", end_point)?;
        Ok(())
    }

    pub fn set_time_to_reach(&mut self, time_to_reach: i32) -> Result<(), DomainError> {
        self.time_to_reach = non_negative("time_to_reach", time_to_reach)?;
        Ok(())
    }
}

impl ExtentMember for ExplorerTeam {
    const TYPE_NAME: &'static str = "ExplorerTeam";

    fn validate(&self) -> Result<(), DomainError> {
        non_negative("end_point", self.end_point)?;
        non_negative("time_to_reach", self.time_to_reach)?;
        Ok(())
    }
}
