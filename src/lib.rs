// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Log: record running and cycling sessions picked on a map
//!
//! This crate provides the workout model with its derived metrics, input
//! validation, a write-through persisted store and the session controller
//! that connects them to map and list collaborators.

pub mod config;
pub mod controller;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod ui;

pub use controller::{init, SessionController, SessionEvent};
