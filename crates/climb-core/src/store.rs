//! In-memory climb collection.
//!
//! `ClimbStore` owns every climb for the lifetime of a session. It is loaded
//! once at startup and written back once at shutdown by `climb-store`; in
//! between, the command loop holds it by `&mut` and nothing else touches it.

use serde::Serialize;

use crate::entities::{Attempt, Climb};
use crate::errors::CoreError;

/// Most climbs in a store, and most attempts on one climb. Counts are
/// written to a four-digit record slot.
pub const RECORD_COUNT_MAX: usize = 9999;

/// Ordered collection of climbs with a case-insensitive (name, location) key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClimbStore {
    climbs: Vec<Climb>,
}

impl ClimbStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { climbs: Vec::new() }
    }

    #[must_use]
    pub fn exists(&self, name: &str, location: &str) -> bool {
        self.find(name, location).is_some()
    }

    /// Position of the climb keyed by `(name, location)`, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str, location: &str) -> Option<usize> {
        self.climbs
            .iter()
            .position(|climb| climb.matches_key(name, location))
    }

    /// Like [`ClimbStore::find`], but reports a miss as `CoreError::NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` when no climb has that key.
    pub fn require(&self, name: &str, location: &str) -> Result<usize, CoreError> {
        self.find(name, location).ok_or_else(|| CoreError::NotFound {
            name: name.to_string(),
            location: location.to_string(),
        })
    }

    /// Append a climb. Its key must not already be present.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateKey` when a climb with the same key exists
    /// and `CoreError::Validation` when the store already holds
    /// [`RECORD_COUNT_MAX`] climbs. The store is unchanged on error.
    pub fn insert(&mut self, climb: Climb) -> Result<usize, CoreError> {
        if self.exists(climb.name(), climb.location()) {
            tracing::debug!(
                name = climb.name(),
                location = climb.location(),
                "duplicate climb rejected"
            );
            return Err(CoreError::DuplicateKey {
                name: climb.name().to_string(),
                location: climb.location().to_string(),
            });
        }
        if self.climbs.len() >= RECORD_COUNT_MAX {
            return Err(CoreError::validation(format!(
                "the log is full, it holds at most {RECORD_COUNT_MAX} climbs"
            )));
        }
        self.climbs.push(climb);
        Ok(self.climbs.len() - 1)
    }

    /// Remove and return the climb at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` and leaves the store unchanged when
    /// `index` is past the end.
    pub fn remove_at(&mut self, index: usize) -> Result<Climb, CoreError> {
        self.check_index(index)?;
        Ok(self.climbs.remove(index))
    }

    /// Drop every climb.
    pub fn clear(&mut self) {
        self.climbs.clear();
        self.climbs.shrink_to_fit();
    }

    /// Append `attempt` to the climb at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` when `index` is past the end and
    /// `CoreError::Validation` when the climb already has
    /// [`RECORD_COUNT_MAX`] attempts.
    pub fn append_attempt(&mut self, index: usize, attempt: Attempt) -> Result<(), CoreError> {
        self.check_index(index)?;
        let climb = &mut self.climbs[index];
        if climb.attempts().len() >= RECORD_COUNT_MAX {
            return Err(CoreError::validation(format!(
                "`{}` already has {RECORD_COUNT_MAX} attempts",
                climb.name()
            )));
        }
        climb.push_attempt(attempt);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Climb> {
        self.climbs.get(index)
    }

    #[must_use]
    pub fn climbs(&self) -> &[Climb] {
        &self.climbs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Climb> {
        self.climbs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.climbs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.climbs.is_empty()
    }

    /// Total attempts across all climbs.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.climbs.iter().map(|climb| climb.attempts().len()).sum()
    }

    fn check_index(&self, index: usize) -> Result<(), CoreError> {
        if index >= self.climbs.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.climbs.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ClimbStore {
    type Item = &'a Climb;
    type IntoIter = std::slice::Iter<'a, Climb>;

    fn into_iter(self) -> Self::IntoIter {
        self.climbs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ClimbDate, Stars};
    use crate::enums::{AttemptStyle, ClimbType, Performance};
    use pretty_assertions::assert_eq;

    fn climb(name: &str, location: &str) -> Climb {
        Climb::new(name, location, ClimbType::Sport, "5.10a", Stars::default(), "").unwrap()
    }

    fn attempt() -> Attempt {
        Attempt::new(
            ClimbDate::new(2024, 3, 15).unwrap(),
            AttemptStyle::Lead,
            Performance::Send,
            "clipped every bolt",
        )
        .unwrap()
    }

    #[test]
    fn insert_then_exists_under_any_casing() {
        let mut store = ClimbStore::new();
        store.insert(climb("Biographie", "Ceuse")).unwrap();
        assert!(store.exists("Biographie", "Ceuse"));
        assert!(store.exists("BIOGRAPHIE", "ceuse"));
        assert!(store.exists("biographie", "CEUSE"));
        assert!(!store.exists("Biographie", "Rifle"));
    }

    #[test]
    fn duplicate_key_is_rejected_without_mutation() {
        let mut store = ClimbStore::new();
        store.insert(climb("Biographie", "Ceuse")).unwrap();
        let before = store.clone();

        let err = store.insert(climb("biographie", "CEUSE")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateKey { .. }));
        assert_eq!(store, before);
    }

    #[test]
    fn same_name_at_different_location_is_distinct() {
        let mut store = ClimbStore::new();
        store.insert(climb("The Nose", "Yosemite")).unwrap();
        store.insert(climb("The Nose", "Smith Rock")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.find("the nose", "smith rock"), Some(1));
    }

    #[test]
    fn find_miss_leaves_store_unchanged() {
        let mut store = ClimbStore::new();
        store.insert(climb("a", "b")).unwrap();
        let before = store.clone();

        assert_eq!(store.find("missing", "b"), None);
        assert!(matches!(
            store.require("missing", "b"),
            Err(CoreError::NotFound { .. })
        ));
        assert!(store.remove_at(5).is_err());
        assert!(store.append_attempt(5, attempt()).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn remove_at_returns_the_climb() {
        let mut store = ClimbStore::new();
        store.insert(climb("a", "x")).unwrap();
        store.insert(climb("b", "x")).unwrap();
        let removed = store.remove_at(0).unwrap();
        assert_eq!(removed.name(), "a");
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("b", "x"), Some(0));
    }

    #[test]
    fn append_attempt_targets_one_climb() {
        let mut store = ClimbStore::new();
        store.insert(climb("a", "x")).unwrap();
        store.insert(climb("b", "x")).unwrap();
        store.append_attempt(1, attempt()).unwrap();
        assert!(store.get(0).unwrap().attempts().is_empty());
        assert_eq!(store.get(1).unwrap().attempts(), &[attempt()]);
        assert_eq!(store.attempt_count(), 1);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = ClimbStore::new();
        store.insert(climb("a", "x")).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(!store.exists("a", "x"));
    }

    #[test]
    fn full_store_rejects_another_climb() {
        let mut store = ClimbStore {
            climbs: vec![climb("a", "x"); RECORD_COUNT_MAX],
        };

        let err = store.insert(climb("one more", "x")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len(), RECORD_COUNT_MAX);
        assert!(!store.exists("one more", "x"));
    }

    #[test]
    fn climb_with_full_attempt_list_rejects_another() {
        let mut store = ClimbStore::new();
        let mut full = climb("a", "x");
        for _ in 0..RECORD_COUNT_MAX {
            full.push_attempt(attempt());
        }
        let index = store.insert(full).unwrap();

        let err = store.append_attempt(index, attempt()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.attempt_count(), RECORD_COUNT_MAX);
    }
}
