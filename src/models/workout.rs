// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model: running and cycling sessions with derived metrics.

use crate::time_utils::format_month_day;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A map position, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and within latitude/longitude bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(coords: Coords) -> Self {
        [coords.lat, coords.lng]
    }
}

/// Discriminant identifying the workout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown workout kind: {0:?}")]
pub struct UnknownKind(pub String);

/// Variant-specific data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    /// Cadence in steps per minute
    Running { cadence: u32 },
    /// Elevation gain in meters; negative for net descents
    Cycling { elevation_gain: f64 },
}

impl Activity {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// The variant's headline performance metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Minutes per kilometer
    Pace(f64),
    /// Kilometers per hour
    Speed(f64),
}

impl Metric {
    pub fn value(&self) -> f64 {
        match self {
            Metric::Pace(v) | Metric::Speed(v) => *v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Pace(_) => "min/km",
            Metric::Speed(_) => "km/h",
        }
    }
}

/// Running pace in minutes per kilometer.
pub fn pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed in kilometers per hour.
pub fn speed(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// Human-readable label, e.g. "Running on April 14".
pub fn describe(kind: WorkoutKind, created_at: DateTime<FixedOffset>) -> String {
    let name = kind.as_str();
    let mut chars = name.chars();
    let label = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{} on {}", label, format_month_day(created_at))
}

/// One logged exercise session.
///
/// Records are built by `WorkoutFactory`; afterwards only the interaction
/// counter changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: String,
    /// Creation instant with the user's UTC offset at that moment
    created_at: DateTime<FixedOffset>,
    distance: f64,
    duration: f64,
    coords: Coords,
    interaction_count: u32,
    activity: Activity,
}

impl Workout {
    pub(crate) fn from_parts(
        id: String,
        created_at: DateTime<FixedOffset>,
        distance: f64,
        duration: f64,
        coords: Coords,
        interaction_count: u32,
        activity: Activity,
    ) -> Self {
        Self {
            id,
            created_at,
            distance,
            duration,
            coords,
            interaction_count,
            activity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    /// Distance in kilometers
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Duration in minutes
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }

    pub fn description(&self) -> String {
        describe(self.kind(), self.created_at)
    }

    pub fn metric(&self) -> Metric {
        match self.activity {
            Activity::Running { .. } => Metric::Pace(pace(self.distance, self.duration)),
            Activity::Cycling { .. } => Metric::Speed(speed(self.distance, self.duration)),
        }
    }

    /// Pace for running workouts.
    pub fn pace(&self) -> Option<f64> {
        match self.metric() {
            Metric::Pace(p) => Some(p),
            Metric::Speed(_) => None,
        }
    }

    /// Speed for cycling workouts.
    pub fn speed(&self) -> Option<f64> {
        match self.metric() {
            Metric::Speed(s) => Some(s),
            Metric::Pace(_) => None,
        }
    }

    /// Count one user interaction. Returns the new count.
    pub(crate) fn record_interaction(&mut self) -> u32 {
        self.interaction_count = self.interaction_count.saturating_add(1);
        self.interaction_count
    }

    /// Undo the last `record_interaction` when it could not be persisted.
    pub(crate) fn revert_interaction(&mut self) {
        self.interaction_count = self.interaction_count.saturating_sub(1);
    }
}
