//! Group - a capacity-bounded member list and its attribute aggregation

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Attribute, AttributeSource};

/// An ordered group holding exactly `capacity` members.
///
/// Membership is fixed when the group is filled; there is no add/remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group<M> {
    capacity: usize,
    members: Vec<M>,
}

impl<M> Default for Group<M> {
    fn default() -> Self {
        Self {
            capacity: 0,
            members: Vec::new(),
        }
    }
}

impl<M: Clone> Group<M> {
    /// Take the first `capacity` entries of `supplied`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Capacity` if fewer than `capacity` entries were
    /// supplied.
    pub fn fill(capacity: usize, supplied: &[M]) -> Result<Self, DomainError> {
        if supplied.len() < capacity {
            return Err(DomainError::capacity(capacity, supplied.len()));
        }
        Ok(Self {
            capacity,
            members: supplied[..capacity].to_vec(),
        })
    }
}

impl<M> Group<M> {
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn members(&self) -> &[M] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.members.len() != self.capacity {
            return Err(DomainError::capacity(self.capacity, self.members.len()));
        }
        Ok(())
    }
}

impl<M: AttributeSource> Group<M> {
    /// Sum one attribute across every member, in order.
    ///
    /// A member whose value cannot be resolved, or whose value would overflow
    /// the running total, is logged and skipped; the rest still count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownAttribute` if `selector` names no
    /// attribute. No partial total is produced in that case.
    pub fn sum(&self, selector: &str) -> Result<i32, DomainError> {
        let attribute: Attribute = selector.parse()?;

        let mut total: i32 = 0;
        for (index, member) in self.members.iter().enumerate() {
            let value = match member.attribute(attribute) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(index, %attribute, error = %e, "Skipping group member");
                    continue;
                }
            };
            match total.checked_add(value) {
                Some(sum) => total = sum,
                None => {
                    tracing::warn!(index, %attribute, value, "Skipping group member: total would overflow");
                }
            }
        }
        Ok(total)
    }
}
