//! JSON snapshot storage for extents.
//!
//! One file per entity type holding the extent's full ordered contents as a
//! JSON array. Saving and loading never fail from the caller's point of view:
//! problems are logged and, on load, the extent is left empty.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use follout_domain::{DomainError, Extent, ExtentMember};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode snapshot: {0}")]
    Encode(serde_json::Error),
    #[error("Failed to parse snapshot: {0}")]
    Parse(serde_json::Error),
    #[error("Snapshot contains an invalid value: {0}")]
    Invalid(#[from] DomainError),
}

/// Reads and writes extent snapshots under a base directory.
///
/// When no explicit path is given, a type's snapshot lives at
/// `base_dir/<type>_extent.json`. The default base directory is the process's
/// working directory.
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshotStore {
    base_dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Conventional snapshot location for `T`.
    pub fn default_path<T: ExtentMember>(&self) -> PathBuf {
        self.base_dir.join(T::default_snapshot_file())
    }

    /// Write every value in `extent` to `path` (or the default location).
    ///
    /// Failures are logged; the extent is never modified.
    pub fn save<T: ExtentMember>(&self, extent: &Extent<T>, path: Option<&Path>) {
        let path = self.resolve::<T>(path);
        match write_snapshot(extent, &path) {
            Ok(()) => tracing::info!(
                entity_type = T::TYPE_NAME,
                count = extent.len(),
                path = %path.display(),
                "Saved extent snapshot"
            ),
            Err(e) => tracing::error!(
                entity_type = T::TYPE_NAME,
                path = %path.display(),
                error = %e,
                "Failed to save extent snapshot"
            ),
        }
    }

    /// Replace the contents of `extent` with the snapshot at `path` (or the
    /// default location).
    ///
    /// A missing file, a malformed document or a document holding an invalid
    /// value all leave the extent empty.
    pub fn load<T: ExtentMember>(&self, extent: &mut Extent<T>, path: Option<&Path>) {
        let path = self.resolve::<T>(path);
        if !path.exists() {
            tracing::debug!(
                entity_type = T::TYPE_NAME,
                path = %path.display(),
                "No snapshot found, starting empty"
            );
            extent.reset();
            return;
        }

        match read_snapshot::<T>(&path) {
            Ok(values) => {
                let count = values.len();
                extent.replace_all(values);
                tracing::info!(
                    entity_type = T::TYPE_NAME,
                    count,
                    path = %path.display(),
                    "Loaded extent snapshot"
                );
            }
            Err(e) => {
                tracing::error!(
                    entity_type = T::TYPE_NAME,
                    path = %path.display(),
                    error = %e,
                    "Failed to load extent snapshot, starting empty"
                );
                extent.reset();
            }
        }
    }

    fn resolve<T: ExtentMember>(&self, path: Option<&Path>) -> PathBuf {
        match path {
            Some(path) => path.to_path_buf(),
            None => self.default_path::<T>(),
        }
    }
}

fn write_snapshot<T: ExtentMember>(extent: &Extent<T>, path: &Path) -> Result<(), SnapshotError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, extent.all()).map_err(SnapshotError::Encode)?;
    writer.flush()?;
    Ok(())
}

fn read_snapshot<T: ExtentMember>(path: &Path) -> Result<Vec<T>, SnapshotError> {
    let reader = BufReader::new(File::open(path)?);
    // A `null` document is an empty extent.
    let values: Option<Vec<T>> = serde_json::from_reader(reader).map_err(SnapshotError::Parse)?;
    let values = values.unwrap_or_default();
    for value in &values {
        value.validate()?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use follout_domain::{
        Armor, Gender, Outfit, Pet, Special, Storage, Villager, Vitals,
    };

    fn pets(buffs: &[&str]) -> Extent<Pet> {
        let mut extent = Extent::new();
        for buff in buffs {
            Pet::create(&mut extent, *buff).unwrap();
        }
        extent
    }

    fn values<T: Clone>(extent: &Extent<T>) -> Vec<T> {
        extent.iter().map(|v| v.as_ref().clone()).collect()
    }

    #[test]
    fn test_round_trip_preserves_order_for_every_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonSnapshotStore::new(dir.path());

        for buffs in [&[][..], &["Luck +1"][..], &["Luck +1", "Strength +2", "Charisma +3"][..]] {
            let mut extent = pets(buffs);
            let before = values(&extent);

            store.save(&extent, None);
            extent.reset();
            store.load(&mut extent, None);

            assert_eq!(values(&extent), before);
        }
    }

    #[test]
    fn test_default_path_uses_type_name() {
        let store = JsonSnapshotStore::new("/srv/follout");
        assert_eq!(
            store.default_path::<Armor>(),
            PathBuf::from("/srv/follout/armor_extent.json")
        );
    }

    #[test]
    fn test_load_missing_file_empties_extent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonSnapshotStore::new(dir.path());
        let mut extent = pets(&["Luck +1"]);

        store.load(&mut extent, Some(&dir.path().join("nowhere.json")));

        assert!(extent.is_empty());
    }

    #[test]
    fn test_load_malformed_file_empties_extent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pet_extent.json");
        std::fs::write(&path, "[{\"buff\": ").unwrap();
        let store = JsonSnapshotStore::new(dir.path());
        let mut extent = pets(&["Luck +1"]);

        store.load(&mut extent, None);

        assert!(extent.is_empty());
    }

    #[test]
    fn test_load_null_document_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pets.json");
        std::fs::write(&path, "null").unwrap();
        let store = JsonSnapshotStore::default();
        let mut extent = pets(&["Luck +1"]);

        store.load(&mut extent, Some(&path));

        assert!(extent.is_empty());
    }

    #[test]
    fn test_load_rejects_values_that_break_constraints() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pets.json");
        std::fs::write(&path, r#"[{"buff": "Luck +1"}, {"buff": "   "}]"#).unwrap();
        let store = JsonSnapshotStore::default();
        let mut extent = Extent::<Pet>::new();

        store.load(&mut extent, Some(&path));

        assert!(extent.is_empty());
    }

    #[test]
    fn test_save_to_unwritable_path_leaves_extent_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonSnapshotStore::default();
        let extent = pets(&["Luck +1", "Agility +1"]);

        store.save(&extent, Some(&dir.path().join("missing").join("pets.json")));

        assert_eq!(extent.len(), 2);
    }

    #[test]
    fn test_armor_save_reset_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("armor.json");
        let store = JsonSnapshotStore::default();
        let mut extent = Extent::new();
        let original = Armor::create(&mut extent, 1, 2, 3, 4, 5, 6, 7).unwrap();

        store.save(&extent, Some(&path));
        extent.reset();
        assert!(extent.is_empty());
        store.load(&mut extent, Some(&path));

        assert_eq!(extent.len(), 1);
        assert_eq!(extent.all()[0].as_ref(), original.as_ref());
    }

    #[test]
    fn test_load_rejects_room_without_usable_skill() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonSnapshotStore::new(dir.path());
        let staff = vec![Arc::new(Villager::default()), Arc::new(Villager::default())];
        let mut extent = Extent::new();
        Storage::create(&mut extent, 40, 1, "Intelligence", 100, &staff).unwrap();
        store.save(&extent, None);

        let path = store.default_path::<Storage>();
        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        for skill in [serde_json::Value::Null, serde_json::json!("Wisdom")] {
            let mut doc = saved.clone();
            doc[0]["room"]["neededSkill"] = skill;
            std::fs::write(&path, doc.to_string()).unwrap();

            let mut loaded = Extent::<Storage>::new();
            Storage::create(&mut loaded, 40, 1, "Intelligence", 100, &staff).unwrap();
            store.load(&mut loaded, None);

            assert!(loaded.is_empty());
        }
    }

    #[test]
    fn test_room_snapshot_keeps_staff() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonSnapshotStore::new(dir.path());
        let born = Utc.with_ymd_and_hms(2077, 10, 23, 9, 47, 0).unwrap();
        let staff: Vec<Arc<Villager>> = [("Alice", 5), ("Bob", 6)]
            .into_iter()
            .map(|(name, intelligence)| {
                let special = Special::new(intelligence, 1, 1, 1, 1, 1, 1).unwrap();
                let villager = Villager::new(
                    name,
                    Gender::F,
                    50,
                    0,
                    special,
                    Vitals::new(100, 1).unwrap(),
                    Outfit::default(),
                    born,
                )
                .unwrap();
                Arc::new(villager)
            })
            .collect();

        let mut extent = Extent::new();
        Storage::create(&mut extent, 40, 1, "Intelligence", 100, &staff).unwrap();
        let before = values(&extent);

        store.save(&extent, None);
        extent.reset();
        store.load(&mut extent, None);

        assert_eq!(values(&extent), before);
        let room = extent.all()[0].room();
        assert_eq!(room.skill_points(), 11);
        assert_eq!(room.villagers()[1].name(), Some("Bob"));
        assert_eq!(room.villagers()[0].birth_date(), born);
    }
}
