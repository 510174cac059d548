// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout input validation.
//!
//! A `ValidatedInput` can only be obtained through [`validate`], so the
//! factory never sees numbers that failed these rules.

use crate::error::Result;
use crate::models::workout::Activity;
use crate::models::{FormFields, RawWorkoutInput, WorkoutKind};
use validator::{Validate, ValidationError, ValidationErrors};

/// Input that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    distance: f64,
    duration: f64,
    activity: Activity,
}

impl ValidatedInput {
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }
}

impl Validate for RawWorkoutInput {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !is_finite_positive(self.distance) {
            errors.add("distance", ValidationError::new("finite_positive"));
        }
        if !is_finite_positive(self.duration) {
            errors.add("duration", ValidationError::new("finite_positive"));
        }

        match self.kind {
            WorkoutKind::Running => match self.cadence {
                Some(c) if !is_finite_positive(c) => {
                    errors.add("cadence", ValidationError::new("finite_positive"));
                }
                Some(c) if c.fract() != 0.0 || c > f64::from(u32::MAX) => {
                    errors.add("cadence", ValidationError::new("whole_number"));
                }
                Some(_) => {}
                None => errors.add("cadence", ValidationError::new("required")),
            },
            // Descents make negative elevation legitimate.
            WorkoutKind::Cycling => match self.elevation_gain {
                Some(e) if !e.is_finite() => {
                    errors.add("elevation_gain", ValidationError::new("finite"));
                }
                Some(_) => {}
                None => errors.add("elevation_gain", ValidationError::new("required")),
            },
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Check raw numeric input before a record may be constructed.
pub fn validate(raw: &RawWorkoutInput) -> Result<ValidatedInput> {
    raw.validate()?;

    let activity = match raw.kind {
        WorkoutKind::Running => Activity::Running {
            // Bounds and integrality checked above.
            cadence: raw.cadence.unwrap_or_default() as u32,
        },
        WorkoutKind::Cycling => Activity::Cycling {
            elevation_gain: raw.elevation_gain.unwrap_or_default(),
        },
    };

    Ok(ValidatedInput {
        distance: raw.distance,
        duration: raw.duration,
        activity,
    })
}

/// Parse and validate the entry form in one step.
pub fn validate_form(fields: &FormFields) -> Result<ValidatedInput> {
    let raw = fields.to_raw()?;
    validate(&raw)
}

fn is_finite_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
