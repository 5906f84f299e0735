//! Extents - the ordered collection of every live value of one entity type.
//!
//! An [`Extent`] is an explicit store owned by whoever composes the
//! application; entity constructors take it by `&mut` instead of reaching for
//! shared static state. Values are held as `Arc<T>` handles so membership is
//! a question of identity, not of field content.
//!
//! ```
//! use std::sync::Arc;
//! use follout_domain::{Armor, Extent};
//!
//! let mut extent = Extent::new();
//! let armor = Armor::create(&mut extent, 1, 2, 3, 4, 5, 6, 7).unwrap();
//!
//! assert_eq!(extent.len(), 1);
//! assert!(extent.contains(&armor));
//! assert!(!extent.contains(&Arc::new(armor.as_ref().clone())));
//! ```

use std::fmt;
use std::slice;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DomainError;

/// An entity type that lives in an [`Extent`] and can be snapshotted.
pub trait ExtentMember: Serialize + DeserializeOwned + fmt::Debug {
    /// Type name used in errors, logs and the default snapshot file name.
    const TYPE_NAME: &'static str;

    /// Re-check every field constraint.
    ///
    /// Setters already enforce these; this exists for values that arrive by
    /// deserialization. Parameterless defaults must pass.
    fn validate(&self) -> Result<(), DomainError>;

    /// Conventional snapshot file name, e.g. `armor_extent.json`.
    fn default_snapshot_file() -> String {
        format!("{}_extent.json", Self::TYPE_NAME.to_lowercase())
    }
}

/// Ordered, append-only collection of live values.
///
/// # Invariants
///
/// - No absent entries: [`Extent::register`] rejects `None`
/// - Insertion order is preserved
/// - Entries are never removed or edited in place; the whole sequence is
///   only ever cleared ([`Extent::reset`]) or replaced ([`Extent::replace_all`])
#[derive(Debug)]
pub struct Extent<T> {
    items: Vec<Arc<T>>,
}

impl<T> Default for Extent<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: ExtentMember> Extent<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NullEntity` if `value` is `None`; the extent is
    /// left unchanged.
    pub fn register(&mut self, value: Option<Arc<T>>) -> Result<Arc<T>, DomainError> {
        let value = value.ok_or_else(|| DomainError::null_entity(T::TYPE_NAME))?;
        self.items.push(Arc::clone(&value));
        tracing::debug!(
            entity_type = T::TYPE_NAME,
            count = self.items.len(),
            "Registered value in extent"
        );
        Ok(value)
    }
}

impl<T> Extent<T> {
    /// Read-only view of every registered value, in insertion order.
    pub fn all(&self) -> &[Arc<T>] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, Arc<T>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this exact value (by identity) is registered.
    pub fn contains(&self, value: &Arc<T>) -> bool {
        self.items.iter().any(|item| Arc::ptr_eq(item, value))
    }

    /// Drop every value.
    pub fn reset(&mut self) {
        self.items = Vec::new();
    }

    /// Replace the whole sequence, keeping the given order.
    pub fn replace_all(&mut self, values: Vec<T>) {
        self.items = values.into_iter().map(Arc::new).collect();
    }
}

impl<'a, T> IntoIterator for &'a Extent<T> {
    type Item = &'a Arc<T>;
    type IntoIter = slice::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Registers an owned, already-validated value. Used by every `create`.
pub(crate) fn admit<T: ExtentMember>(
    extent: &mut Extent<T>,
    value: T,
) -> Result<Arc<T>, DomainError> {
    extent.register(Some(Arc::new(value)))
}
