// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout store: the ordered workout history and its persistence.
//!
//! Every mutation is written through to the slot before it returns. If the
//! write fails the mutation is rolled back, so memory and slot stay in step.

use crate::db::{slots, SlotStorage};
use crate::error::{AppError, Result};
use crate::models::{StoredWorkout, Workout};
use crate::services::factory::{RestoreError, WorkoutFactory};
use crate::time_utils::format_utc_rfc3339;
use chrono::Utc;

/// Outcome of loading the persisted history.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    /// Number of records restored
    pub loaded: usize,
    /// Elements that could not be restored
    pub skipped: Vec<SkippedRecord>,
}

/// A persisted element that was left out of the history.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position in the persisted array
    pub index: usize,
    /// Id, if the element carried a readable one
    pub id: Option<String>,
    pub reason: RestoreError,
}

/// Owns the ordered list of workouts (insertion order is chronological).
pub struct WorkoutStore {
    storage: Box<dyn SlotStorage>,
    slot: String,
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new(storage: Box<dyn SlotStorage>, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
            workouts: Vec::new(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// All workouts, oldest first.
    pub fn list(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Append a workout and persist.
    pub fn add(&mut self, workout: Workout) -> Result<()> {
        if self.find_by_id(workout.id()).is_some() {
            return Err(AppError::DuplicateId(workout.id().to_string()));
        }

        tracing::info!(
            id = workout.id(),
            kind = %workout.kind(),
            created_at = %format_utc_rfc3339(workout.created_at().with_timezone(&Utc)),
            "Adding workout"
        );
        self.workouts.push(workout);

        if let Err(e) = self.persist() {
            self.workouts.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Count one user interaction with a workout and persist.
    ///
    /// Returns the new interaction count.
    pub fn record_interaction(&mut self, id: &str) -> Result<u32> {
        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        let count = workout.record_interaction();

        if let Err(e) = self.persist() {
            if let Some(workout) = self.workouts.iter_mut().find(|w| w.id() == id) {
                workout.revert_interaction();
            }
            return Err(e);
        }

        tracing::debug!(id, count, "Recorded workout interaction");
        Ok(count)
    }

    /// Serialize the full history and overwrite the slot.
    pub fn persist(&mut self) -> Result<()> {
        let records: Vec<StoredWorkout> = self.workouts.iter().map(StoredWorkout::from).collect();
        let json = serde_json::to_string(&records)
            .map_err(|e| AppError::Storage(format!("Failed to serialize workouts: {}", e)))?;

        self.storage.write(&self.slot, &json).map_err(|e| {
            tracing::error!(slot = %self.slot, error = %e, "Failed to persist workouts");
            e
        })?;

        tracing::debug!(slot = %self.slot, count = records.len(), "Persisted workouts");
        Ok(())
    }

    /// Replace the in-memory history with the persisted one.
    ///
    /// An absent or blank slot is an empty history. Elements that cannot be
    /// restored are skipped and listed in the report. A slot that is not a
    /// JSON array at all is copied aside to `<slot>.corrupt` when possible,
    /// the store starts empty and `CorruptData` is returned. If the slot
    /// cannot be read the in-memory history is left untouched.
    pub fn load(&mut self) -> Result<LoadReport> {
        let raw = self.storage.read(&self.slot)?;
        self.workouts.clear();

        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                tracing::info!(slot = %self.slot, "No saved workouts");
                return Ok(LoadReport::default());
            }
        };

        let elements: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(elements) => elements,
            Err(e) => {
                tracing::error!(slot = %self.slot, error = %e, "Saved workouts are not a JSON array");
                self.set_aside(&raw);
                return Err(AppError::CorruptData(e.to_string()));
            }
        };

        let mut report = LoadReport::default();
        for (index, element) in elements.into_iter().enumerate() {
            let id = element
                .get("id")
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let restored = serde_json::from_value::<StoredWorkout>(element)
                .map_err(|e| RestoreError::Malformed(e.to_string()))
                .and_then(WorkoutFactory::restore)
                .and_then(|w| match self.find_by_id(w.id()) {
                    Some(_) => Err(RestoreError::DuplicateId(w.id().to_string())),
                    None => Ok(w),
                });

            match restored {
                Ok(workout) => self.workouts.push(workout),
                Err(reason) => {
                    tracing::warn!(index, id = ?id, reason = %reason, "Skipping saved workout");
                    report.skipped.push(SkippedRecord { index, id, reason });
                }
            }
        }

        report.loaded = self.workouts.len();
        tracing::info!(
            slot = %self.slot,
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "Loaded saved workouts"
        );
        Ok(report)
    }

    /// Keep a copy of unreadable slot contents under `<slot>.corrupt`.
    fn set_aside(&mut self, raw: &str) {
        let aside = format!("{}{}", self.slot, slots::CORRUPT_SUFFIX);
        match self.storage.write(&aside, raw) {
            Ok(()) => tracing::warn!(slot = %self.slot, moved_to = %aside, "Set aside corrupt workouts"),
            Err(e) => tracing::error!(
                slot = %self.slot,
                moved_to = %aside,
                error = %e,
                "Failed to set aside corrupt workouts"
            ),
        }
    }

    /// Remove the persisted history and clear the store.
    pub fn reset(&mut self) -> Result<()> {
        self.storage.remove(&self.slot)?;
        self.workouts.clear();
        tracing::info!(slot = %self.slot, "Workout history reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemorySlotStorage;
    use crate::models::{Coords, RawWorkoutInput};
    use crate::services::validation::validate;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Memory storage whose reads fail while `offline` is set.
    struct FlakyStorage {
        inner: MemorySlotStorage,
        offline: Rc<Cell<bool>>,
    }

    impl SlotStorage for FlakyStorage {
        fn read(&self, slot: &str) -> Result<Option<String>> {
            if self.offline.get() {
                return Err(AppError::Storage("device unavailable".to_string()));
            }
            self.inner.read(slot)
        }

        fn write(&mut self, slot: &str, contents: &str) -> Result<()> {
            self.inner.write(slot, contents)
        }

        fn remove(&mut self, slot: &str) -> Result<()> {
            self.inner.remove(slot)
        }
    }

    /// Storage that can be read but never written.
    struct ReadOnlyStorage(MemorySlotStorage);

    impl SlotStorage for ReadOnlyStorage {
        fn read(&self, slot: &str) -> Result<Option<String>> {
            self.0.read(slot)
        }

        fn write(&mut self, _slot: &str, _contents: &str) -> Result<()> {
            Err(AppError::Storage("read-only".to_string()))
        }

        fn remove(&mut self, _slot: &str) -> Result<()> {
            Err(AppError::Storage("read-only".to_string()))
        }
    }

    fn make_running(factory: &WorkoutFactory) -> Workout {
        let input = validate(&RawWorkoutInput::running(5.0, 25.0, 180.0)).unwrap();
        factory.create(input, Coords::new(51.5, -0.1))
    }

    #[test]
    fn test_add_appends_and_writes_through() {
        let storage = MemorySlotStorage::new();
        let mut store = WorkoutStore::new(Box::new(storage.clone()), "workouts");
        let workout = make_running(&WorkoutFactory::new());
        let id = workout.id().to_string();

        store.add(workout).unwrap();

        assert_eq!(store.len(), 1);
        let saved = storage.get("workouts").unwrap();
        assert!(saved.contains(&id));
        assert!(saved.contains("\"kind\":\"running\""));
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = WorkoutStore::new(Box::new(MemorySlotStorage::new()), "workouts");
        let workout = make_running(&WorkoutFactory::new());

        store.add(workout.clone()).unwrap();
        assert!(matches!(store.add(workout), Err(AppError::DuplicateId(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_record_interaction_unknown_id() {
        let mut store = WorkoutStore::new(Box::new(MemorySlotStorage::new()), "workouts");
        assert!(matches!(
            store.record_interaction("missing"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_blank_slot_is_empty_history() {
        let storage = MemorySlotStorage::new();
        storage.insert("workouts", "  ");
        let mut store = WorkoutStore::new(Box::new(storage), "workouts");

        let report = store.load().unwrap();
        assert_eq!(report, LoadReport::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_reset_clears_slot_and_memory() {
        let storage = MemorySlotStorage::new();
        let mut store = WorkoutStore::new(Box::new(storage.clone()), "workouts");
        store.add(make_running(&WorkoutFactory::new())).unwrap();

        store.reset().unwrap();

        assert!(store.is_empty());
        assert_eq!(storage.get("workouts"), None);
    }

    #[test]
    fn test_failed_read_keeps_history() {
        let offline = Rc::new(Cell::new(false));
        let storage = FlakyStorage {
            inner: MemorySlotStorage::new(),
            offline: offline.clone(),
        };
        let mut store = WorkoutStore::new(Box::new(storage), "workouts");
        store.add(make_running(&WorkoutFactory::new())).unwrap();

        offline.set(true);
        assert!(matches!(store.load(), Err(AppError::Storage(_))));
        assert_eq!(store.len(), 1);

        offline.set(false);
        assert_eq!(store.load().unwrap().loaded, 1);
    }

    #[test]
    fn test_corrupt_slot_reported_when_set_aside_fails() {
        let inner = MemorySlotStorage::new();
        inner.insert("workouts", "{not json");
        let mut store = WorkoutStore::new(Box::new(ReadOnlyStorage(inner.clone())), "workouts");

        assert!(matches!(store.load(), Err(AppError::CorruptData(_))));
        assert!(store.is_empty());
        assert_eq!(inner.get("workouts.corrupt"), None);
        assert_eq!(inner.get("workouts").as_deref(), Some("{not json"));
    }
}
