// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod input;
pub mod stored;
pub mod summary;
pub mod workout;

pub use input::{FormFields, RawWorkoutInput};
pub use stored::StoredWorkout;
pub use summary::{MarkerPopup, WorkoutSummary};
pub use workout::{Activity, Coords, Metric, Workout, WorkoutKind};
