// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw workout input as delivered by the entry form.

use crate::models::workout::WorkoutKind;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{ValidationError, ValidationErrors};

/// Field values of the entry form, as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    /// Selected workout type ("running" or "cycling")
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub distance: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub duration: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub cadence: String,
    #[serde(default, alias = "elevation", deserialize_with = "text_or_number")]
    pub elevation_gain: String,
}

impl FormFields {
    /// Convert the form text into numbers.
    ///
    /// Blank fields read as zero and unparseable text as NaN, so both are
    /// caught by validation rather than here. Only an unknown kind fails.
    pub fn to_raw(&self) -> Result<RawWorkoutInput, ValidationErrors> {
        let kind = self.kind.parse::<WorkoutKind>().map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.add("kind", ValidationError::new("unknown_kind"));
            errors
        })?;

        Ok(RawWorkoutInput {
            kind,
            distance: coerce_number(&self.distance),
            duration: coerce_number(&self.duration),
            cadence: match kind {
                WorkoutKind::Running => Some(coerce_number(&self.cadence)),
                WorkoutKind::Cycling => None,
            },
            elevation_gain: match kind {
                WorkoutKind::Cycling => Some(coerce_number(&self.elevation_gain)),
                WorkoutKind::Running => None,
            },
        })
    }
}

/// Numeric workout input, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawWorkoutInput {
    pub kind: WorkoutKind,
    /// Kilometers
    pub distance: f64,
    /// Minutes
    pub duration: f64,
    /// Steps per minute (running only)
    pub cadence: Option<f64>,
    /// Meters (cycling only)
    pub elevation_gain: Option<f64>,
}

impl RawWorkoutInput {
    pub fn running(distance: f64, duration: f64, cadence: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance,
            duration,
            cadence: Some(cadence),
            elevation_gain: None,
        }
    }

    pub fn cycling(distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance,
            duration,
            cadence: None,
            elevation_gain: Some(elevation_gain),
        }
    }
}

fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Accept either a JSON string or a JSON number for a form field.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected text or number, got {other}"
        ))),
    }
}
