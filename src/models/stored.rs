// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted layout of a workout record.
//!
//! One element of the JSON array kept in the workouts slot. The aliases accept
//! histories written by the earlier browser version of the app.

use crate::models::workout::{Activity, Coords, Workout, WorkoutKind};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Stored workout record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWorkout {
    /// Variant discriminant; absence marks the element as corrupt
    #[serde(alias = "type", default)]
    pub kind: Option<WorkoutKind>,
    pub id: String,
    /// RFC3339 with the offset the workout was recorded at
    #[serde(alias = "date")]
    pub created_at: DateTime<FixedOffset>,
    /// Kilometers
    pub distance: f64,
    /// Minutes
    pub duration: f64,
    pub coords: Coords,
    /// Informational copy; recomputed from kind and date on restore
    #[serde(default)]
    pub description: String,
    #[serde(alias = "clicks", default)]
    pub interaction_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    #[serde(alias = "eleGain", default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
}

impl From<&Workout> for StoredWorkout {
    fn from(workout: &Workout) -> Self {
        let (cadence, elevation_gain) = match workout.activity() {
            Activity::Running { cadence } => (Some(f64::from(cadence)), None),
            Activity::Cycling { elevation_gain } => (None, Some(elevation_gain)),
        };

        Self {
            kind: Some(workout.kind()),
            id: workout.id().to_string(),
            created_at: workout.created_at(),
            distance: workout.distance(),
            duration: workout.duration(),
            coords: workout.coords(),
            description: workout.description(),
            interaction_count: workout.interaction_count(),
            cadence,
            elevation_gain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_legacy_browser_record() {
        let json = r#"{
            "date": "2024-04-14T09:15:00.000Z",
            "id": "3090151234",
            "clicks": 0,
            "distance": 20,
            "duration": 60,
            "coords": [51.5, -0.1],
            "type": "cycling",
            "eleGain": -30,
            "speed": 20,
            "description": "Cycling on April 14"
        }"#;

        let stored: StoredWorkout = serde_json::from_str(json).unwrap();
        assert_eq!(stored.kind, Some(WorkoutKind::Cycling));
        assert_eq!(stored.id, "3090151234");
        assert_eq!(stored.elevation_gain, Some(-30.0));
        assert_eq!(stored.cadence, None);
        assert_eq!(stored.coords, Coords::new(51.5, -0.1));
    }

    #[test]
    fn test_missing_kind_is_none() {
        let json = r#"{"id":"x","createdAt":"2024-04-14T09:15:00Z","distance":5,
            "duration":25,"coords":[0,0],"cadence":180}"#;
        let stored: StoredWorkout = serde_json::from_str(json).unwrap();
        assert_eq!(stored.kind, None);
        assert_eq!(stored.interaction_count, 0);
    }

    #[test]
    fn test_serializes_only_matching_variant_field() {
        let stored = StoredWorkout {
            kind: Some(WorkoutKind::Running),
            id: "a".to_string(),
            created_at: "2024-04-14T09:15:00Z".parse().unwrap(),
            distance: 5.0,
            duration: 25.0,
            coords: Coords::new(1.0, 2.0),
            description: "Running on April 14".to_string(),
            interaction_count: 2,
            cadence: Some(180.0),
            elevation_gain: None,
        };

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["kind"], "running");
        assert_eq!(value["interactionCount"], 2);
        assert!(value.get("elevationGain").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
