// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod factory;
pub mod store;
pub mod validation;

pub use factory::{Clock, FixedClock, RestoreError, SystemClock, WorkoutFactory};
pub use store::{LoadReport, SkippedRecord, WorkoutStore};
pub use validation::{validate, validate_form, ValidatedInput};
