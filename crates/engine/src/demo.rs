//! Demo scenario run by the `follout` binary.
//!
//! Recruits three villagers, staffs a level-1 storage room with them (only
//! the first two fit) and totals every attribute across the room's staff.

use std::sync::Arc;

use follout_domain::{Attribute, DomainError, Gender, Outfit, Special, Storage, Vitals};

use crate::app::Settlement;

const STORAGE_CAPACITY: i32 = 100;
const STORAGE_COST: i32 = 100;

/// Outcome of [`run_demo`].
#[derive(Debug)]
pub struct DemoReport {
    pub storage: Arc<Storage>,
    /// Staff total per attribute, in [`Attribute::ALL`] order.
    pub totals: Vec<(Attribute, i32)>,
}

pub fn run_demo(settlement: &mut Settlement) -> Result<DemoReport, DomainError> {
    let roster = [
        ("Alice", Gender::F, Special::new(5, 6, 7, 8, 4, 5, 3)?),
        ("Bob", Gender::M, Special::new(6, 7, 5, 6, 8, 4, 5)?),
        ("Charlie", Gender::M, Special::new(8, 6, 6, 7, 5, 6, 4)?),
    ];

    let mut villagers = Vec::with_capacity(roster.len());
    for (name, gender, special) in roster {
        villagers.push(settlement.recruit_villager(
            name,
            gender,
            50,
            0,
            special,
            Vitals::new(100, 1)?,
            Outfit::default(),
        )?);
    }

    let mut storage = Storage::new(STORAGE_CAPACITY, 1, "Intelligence", STORAGE_COST, &villagers)?;

    let mut totals = Vec::with_capacity(Attribute::ALL.len());
    for attribute in Attribute::ALL {
        let total = storage.room_mut().total_for(attribute.as_str())?;
        tracing::info!(attribute = %attribute, total, "Staff attribute total");
        totals.push((attribute, total));
    }
    // Leave the room holding its needed-skill total.
    storage.room_mut().update_skill_points()?;

    let storage = settlement
        .extents_mut()
        .storages
        .register(Some(Arc::new(storage)))?;

    Ok(DemoReport { storage, totals })
}
