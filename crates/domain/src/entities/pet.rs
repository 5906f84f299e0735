//! Pet entity - a companion granting a buff

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::optional_non_blank;

/// A companion animal. The buff may be absent but never blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    buff: Option<String>,
}

impl Pet {
    pub fn new(buff: impl Into<String>) -> Result<Self, DomainError> {
        let mut pet = Self::default();
        pet.set_buff(Some(buff.into()))?;
        Ok(pet)
    }

    pub fn create(extent: &mut Extent<Self>, buff: impl Into<String>) -> Result<Arc<Self>, DomainError> {
        admit(extent, Self::new(buff)?)
    }

    pub fn buff(&self) -> Option<&str> {
        self.buff.as_deref()
    }

    pub fn set_buff(&mut self, buff: Option<String>) -> Result<(), DomainError> {
        self.buff = optional_non_blank("buff", buff)?;
        Ok(())
    }
}

impl ExtentMember for Pet {
    const TYPE_NAME: &'static str = "Pet";

    fn validate(&self) -> Result<(), DomainError> {
        optional_non_blank("buff", self.buff.clone()).map(|_| ())
    }
}
