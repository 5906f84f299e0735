//! Application state and composition.

use std::path::Path;
use std::sync::Arc;

use follout_domain::{
    Armor, ClothingWorkshop, DeathClaw, DomainError, ExplorerTeam, Extent, Gender, Junk,
    MonsterTraits, MoleRat, Outfit, Pet, Raider, ResourceProduction, Shelter, Special, Storage,
    Training, Villager, Vitals,
};

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    ports::{ClockPort, RandomPort},
    snapshot::JsonSnapshotStore,
};

/// One extent per entity type.
#[derive(Debug, Default)]
pub struct Extents {
    pub armors: Extent<Armor>,
    pub villagers: Extent<Villager>,
    pub pets: Extent<Pet>,
    pub junk: Extent<Junk>,
    pub shelters: Extent<Shelter>,
    pub explorer_teams: Extent<ExplorerTeam>,
    pub death_claws: Extent<DeathClaw>,
    pub mole_rats: Extent<MoleRat>,
    pub raiders: Extent<Raider>,
    pub storages: Extent<Storage>,
    pub trainings: Extent<Training>,
    pub resource_productions: Extent<ResourceProduction>,
    pub clothing_workshops: Extent<ClothingWorkshop>,
}

impl Extents {
    /// Number of values across every extent.
    pub fn total_len(&self) -> usize {
        self.armors.len()
            + self.villagers.len()
            + self.pets.len()
            + self.junk.len()
            + self.shelters.len()
            + self.explorer_teams.len()
            + self.death_claws.len()
            + self.mole_rats.len()
            + self.raiders.len()
            + self.storages.len()
            + self.trainings.len()
            + self.resource_productions.len()
            + self.clothing_workshops.len()
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

/// Main application state.
///
/// Owns every extent and the ports that feed nondeterministic values (dates,
/// dice rolls) into entity construction.
pub struct Settlement {
    extents: Extents,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl Settlement {
    pub fn new(clock: Arc<dyn ClockPort>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            extents: Extents::default(),
            clock,
            random,
        }
    }

    /// Settlement backed by the real clock and randomness.
    pub fn with_system_ports() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(SystemRandom::new()))
    }

    pub fn extents(&self) -> &Extents {
        &self.extents
    }

    pub fn extents_mut(&mut self) -> &mut Extents {
        &mut self.extents
    }

    // =========================================================================
    // Construction through ports
    // =========================================================================

    /// Register a villager born now.
    pub fn recruit_villager(
        &mut self,
        name: impl Into<String>,
        gender: Gender,
        happiness: i32,
        radiation: i32,
        special: Special,
        vitals: Vitals,
        outfit: Outfit,
    ) -> Result<Arc<Villager>, DomainError> {
        let villager = Villager::create(
            &mut self.extents.villagers,
            name,
            gender,
            happiness,
            radiation,
            special,
            vitals,
            outfit,
            self.clock.now(),
        )?;
        tracing::info!(
            villager = villager.name().unwrap_or("<unnamed>"),
            "Villager recruited"
        );
        Ok(villager)
    }

    /// Register a shelter founded now.
    pub fn found_shelter(
        &mut self,
        number: i32,
        nuka_cola_caps: i32,
        nuka_cola: i32,
    ) -> Result<Arc<Shelter>, DomainError> {
        Shelter::create(
            &mut self.extents.shelters,
            number,
            nuka_cola_caps,
            nuka_cola,
            self.clock.now(),
        )
    }

    /// Register a raider, rolling whether it can be captured.
    pub fn spawn_raider(
        &mut self,
        vitals: Vitals,
        traits: MonsterTraits,
    ) -> Result<Arc<Raider>, DomainError> {
        let roll = self.random.gen_probability();
        let raider = Raider::create(&mut self.extents.raiders, vitals, traits, roll)?;
        tracing::debug!(roll, capturable = raider.is_capturable(), "Raider spawned");
        Ok(raider)
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Snapshot every extent into `dir`, one file per entity type.
    ///
    /// Failures are logged per file; a missing directory is created first.
    pub fn save_all(&self, dir: &Path) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::error!(
                dir = %dir.display(),
                error = %e,
                "Failed to create snapshot directory"
            );
        }

        let store = JsonSnapshotStore::new(dir);
        let extents = &self.extents;
        store.save(&extents.armors, None);
        store.save(&extents.villagers, None);
        store.save(&extents.pets, None);
        store.save(&extents.junk, None);
        store.save(&extents.shelters, None);
        store.save(&extents.explorer_teams, None);
        store.save(&extents.death_claws, None);
        store.save(&extents.mole_rats, None);
        store.save(&extents.raiders, None);
        store.save(&extents.storages, None);
        store.save(&extents.trainings, None);
        store.save(&extents.resource_productions, None);
        store.save(&extents.clothing_workshops, None);

        tracing::info!(
            dir = %dir.display(),
            total = extents.total_len(),
            "Settlement saved"
        );
    }

    /// Replace every extent with its snapshot from `dir`. Types without a
    /// readable snapshot start empty.
    pub fn load_all(&mut self, dir: &Path) {
        let store = JsonSnapshotStore::new(dir);
        let extents = &mut self.extents;
        store.load(&mut extents.armors, None);
        store.load(&mut extents.villagers, None);
        store.load(&mut extents.pets, None);
        store.load(&mut extents.junk, None);
        store.load(&mut extents.shelters, None);
        store.load(&mut extents.explorer_teams, None);
        store.load(&mut extents.death_claws, None);
        store.load(&mut extents.mole_rats, None);
        store.load(&mut extents.raiders, None);
        store.load(&mut extents.storages, None);
        store.load(&mut extents.trainings, None);
        store.load(&mut extents.resource_productions, None);
        store.load(&mut extents.clothing_workshops, None);

        tracing::info!(
            dir = %dir.display(),
            total = extents.total_len(),
            "Settlement loaded"
        );
    }

    pub fn reset_all(&mut self) {
        self.extents.reset_all();
    }
}
