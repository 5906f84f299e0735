//! Shelter entity - a numbered vault and its currency stock

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::extent::{admit, Extent, ExtentMember};
use crate::value_objects::constraints::non_negative;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelter {
    number: i32,
    nuka_cola_caps: i32,
    nuka_cola: i32,
    creation_date: DateTime<Utc>,
}

impl Shelter {
    pub fn new(
        number: i32,
        nuka_cola_caps: i32,
        nuka_cola: i32,
        creation_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let mut shelter = Self {
            creation_date,
            ..Self::default()
        };
        shelter.set_number(number)?;
        shelter.set_nuka_cola_caps(nuka_cola_caps)?;
        shelter.set_nuka_cola(nuka_cola)?;
        Ok(shelter)
    }

    pub fn create(
        extent: &mut Extent<Self>,
        number: i32,
        nuka_cola_caps: i32,
        nuka_cola: i32,
        creation_date: DateTime<Utc>,
    ) -> Result<Arc<Self>, DomainError> {
        admit(
            extent,
            Self::new(number, nuka_cola_caps, nuka_cola, creation_date)?,
        )
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn nuka_cola_caps(&self) -> i32 {
        self.nuka_cola_caps
    }

    pub fn nuka_cola(&self) -> i32 {
        self.nuka_cola
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn set_number(&mut self, number: i32) -> Result<(), DomainError> {
        self.number = non_negative("number", number)?;
        Ok(())
    }

    pub fn set_nuka_cola_caps(&mut self, caps: i32) -> Result<(), DomainError> {
        self.nuka_cola_caps = non_negative("nuka_cola_caps", caps)?;
        Ok(())
    }

    pub fn set_nuka_cola(&mut self, nuka_cola: i32) -> Result<(), DomainError> {
        self.nuka_cola = non_negative("nuka_cola", nuka_cola)?;
        Ok(())
    }
}

impl ExtentMember for Shelter {
    const TYPE_NAME: &'static str = "Shelter";

    fn validate(&self) -> Result<(), DomainError> {
        non_negative("number", self.number)?;
        non_negative("nuka_cola_caps", self.nuka_cola_caps)?;
        non_negative("nuka_cola", self.nuka_cola)?;
        Ok(())
    }
}
