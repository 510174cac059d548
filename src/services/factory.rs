// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout construction.
//!
//! New records get a random id and the current timestamp. Persisted records
//! are rebuilt through [`WorkoutFactory::restore`], which re-runs validation
//! so a restored record always has its correct variant.

use crate::models::{Coords, RawWorkoutInput, StoredWorkout, Workout, WorkoutKind};
use crate::services::validation::{self, ValidatedInput};
use chrono::{DateTime, FixedOffset, Local};
use uuid::Uuid;

/// Source of creation timestamps.
///
/// The offset of the returned time decides the calendar day in descriptions.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall-clock time in the host's local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Generate a short, collision-resistant workout id (32 hex chars).
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Builds workout records.
pub struct WorkoutFactory {
    clock: Box<dyn Clock>,
}

impl Default for WorkoutFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutFactory {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Build a new record at `coords` from validated input.
    pub fn create(&self, input: ValidatedInput, coords: Coords) -> Workout {
        Workout::from_parts(
            generate_id(),
            self.clock.now(),
            input.distance(),
            input.duration(),
            coords,
            0,
            input.activity(),
        )
    }

    /// Rebuild a persisted record as its proper variant.
    pub fn restore(stored: StoredWorkout) -> Result<Workout, RestoreError> {
        let kind = stored.kind.ok_or(RestoreError::MissingKind)?;

        if stored.id.trim().is_empty() {
            return Err(RestoreError::MissingId);
        }
        if !stored.coords.is_valid() {
            return Err(RestoreError::InvalidCoords(
                stored.coords.lat,
                stored.coords.lng,
            ));
        }

        let raw = RawWorkoutInput {
            kind,
            distance: stored.distance,
            duration: stored.duration,
            cadence: match kind {
                WorkoutKind::Running => stored.cadence,
                WorkoutKind::Cycling => None,
            },
            elevation_gain: match kind {
                WorkoutKind::Cycling => stored.elevation_gain,
                WorkoutKind::Running => None,
            },
        };
        let input =
            validation::validate(&raw).map_err(|e| RestoreError::InvalidValues(e.to_string()))?;

        Ok(Workout::from_parts(
            stored.id,
            stored.created_at,
            input.distance(),
            input.duration(),
            stored.coords,
            stored.interaction_count,
            input.activity(),
        ))
    }
}

/// Why a persisted element could not be turned back into a workout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RestoreError {
    #[error("Record has no workout kind")]
    MissingKind,

    #[error("Record has no id")]
    MissingId,

    #[error("Record has invalid coordinates ({0}, {1})")]
    InvalidCoords(f64, f64),

    #[error("Record has invalid values: {0}")]
    InvalidValues(String),

    #[error("Record is malformed: {0}")]
    Malformed(String),

    #[error("Record id is duplicated: {0}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;
    use chrono::{TimeZone, Utc};

    fn april_14() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2024, 4, 14, 7, 45, 0)
            .unwrap()
            .fixed_offset()
    }

    fn stored_running() -> StoredWorkout {
        StoredWorkout {
            kind: Some(WorkoutKind::Running),
            id: "r1".to_string(),
            created_at: april_14(),
            distance: 5.0,
            duration: 25.0,
            coords: Coords::new(51.5, -0.1),
            description: "stale text".to_string(),
            interaction_count: 3,
            cadence: Some(180.0),
            elevation_gain: None,
        }
    }

    #[test]
    fn test_create_running() {
        let factory = WorkoutFactory::with_clock(FixedClock(april_14()));
        let input = validation::validate(&RawWorkoutInput::running(5.0, 25.0, 180.0)).unwrap();

        let workout = factory.create(input, Coords::new(51.5, -0.1));

        assert_eq!(workout.pace(), Some(5.0));
        assert_eq!(workout.description(), "Running on April 14");
        assert_eq!(workout.interaction_count(), 0);
        assert_eq!(workout.id().len(), 32);
        assert_eq!(workout.created_at(), april_14());
    }

    #[test]
    fn test_ids_unique_within_burst() {
        let factory = WorkoutFactory::with_clock(FixedClock(april_14()));
        let input = validation::validate(&RawWorkoutInput::cycling(20.0, 60.0, -30.0)).unwrap();

        let a = factory.create(input, Coords::new(0.0, 0.0));
        let b = factory.create(input, Coords::new(0.0, 0.0));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_restore_keeps_identity_and_recomputes_description() {
        let workout = WorkoutFactory::restore(stored_running()).unwrap();

        assert_eq!(workout.id(), "r1");
        assert_eq!(workout.interaction_count(), 3);
        assert_eq!(workout.activity(), Activity::Running { cadence: 180 });
        assert_eq!(workout.description(), "Running on April 14");
        assert_eq!(workout.pace(), Some(5.0));
    }

    #[test]
    fn test_local_day_survives_persistence() {
        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();
        let evening = pacific.with_ymd_and_hms(2024, 4, 14, 23, 30, 0).unwrap();
        let factory = WorkoutFactory::with_clock(FixedClock(evening));
        let input = validation::validate(&RawWorkoutInput::running(5.0, 25.0, 180.0)).unwrap();
        let workout = factory.create(input, Coords::new(37.4, -122.1));

        let json = serde_json::to_string(&StoredWorkout::from(&workout)).unwrap();
        assert!(json.contains("2024-04-14T23:30:00-07:00"));

        let stored: StoredWorkout = serde_json::from_str(&json).unwrap();
        let restored = WorkoutFactory::restore(stored).unwrap();
        assert_eq!(restored.description(), "Running on April 14");
        assert_eq!(restored.created_at().offset(), &pacific);
    }

    #[test]
    fn test_restore_rejects_missing_kind() {
        let mut stored = stored_running();
        stored.kind = None;
        assert_eq!(
            WorkoutFactory::restore(stored),
            Err(RestoreError::MissingKind)
        );
    }

    #[test]
    fn test_restore_rejects_variant_field_mismatch() {
        let mut stored = stored_running();
        stored.kind = Some(WorkoutKind::Cycling);
        assert!(matches!(
            WorkoutFactory::restore(stored),
            Err(RestoreError::InvalidValues(_))
        ));
    }

    #[test]
    fn test_restore_rejects_bad_coords() {
        let mut stored = stored_running();
        stored.coords = Coords::new(120.0, 0.0);
        assert!(matches!(
            WorkoutFactory::restore(stored),
            Err(RestoreError::InvalidCoords(..))
        ));
    }
}
