// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View models handed to the list and map collaborators.

use crate::models::workout::{Activity, Workout, WorkoutKind};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One entry of the workout list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSummary {
    pub id: String,
    pub kind: String,
    pub description: String,
    pub icon: String,
    /// Kilometers
    pub distance: f64,
    /// Minutes
    pub duration: f64,
    /// Pace or speed, one decimal
    pub metric_value: String,
    pub metric_unit: String,
    pub detail_icon: String,
    /// Cadence or elevation gain
    pub detail_value: String,
    pub detail_unit: String,
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        let metric = workout.metric();
        let (detail_icon, detail_value, detail_unit) = match workout.activity() {
            Activity::Running { cadence } => ("🦶🏼", cadence.to_string(), "spm"),
            Activity::Cycling { elevation_gain } => ("⛰", elevation_gain.to_string(), "m"),
        };

        Self {
            id: workout.id().to_string(),
            kind: workout.kind().to_string(),
            description: workout.description(),
            icon: kind_icon(workout.kind()).to_string(),
            distance: workout.distance(),
            duration: workout.duration(),
            metric_value: format!("{:.1}", metric.value()),
            metric_unit: metric.unit().to_string(),
            detail_icon: detail_icon.to_string(),
            detail_value,
            detail_unit: detail_unit.to_string(),
        }
    }
}

/// Popup attached to a workout's map marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MarkerPopup {
    pub content: String,
    /// CSS class, e.g. "running-popup"
    pub class_name: String,
}

impl From<&Workout> for MarkerPopup {
    fn from(workout: &Workout) -> Self {
        Self {
            content: format!("{} {}", kind_icon(workout.kind()), workout.description()),
            class_name: format!("{}-popup", workout.kind()),
        }
    }
}

fn kind_icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃‍♂️",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}
