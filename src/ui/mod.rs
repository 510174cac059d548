// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interfaces to the collaborators that draw the map and the workout list.
//!
//! Event registration (map clicks, form submits, list clicks) is inverted:
//! collaborators deliver those as [`crate::controller::SessionEvent`]s.

pub mod geolocation;
pub mod tracing_view;

pub use geolocation::FixedGeolocation;
pub use tracing_view::{TracingMapView, TracingWorkoutView};

use crate::error::Result;
use crate::models::{Coords, MarkerPopup, WorkoutSummary};
use std::future::Future;

/// One-shot position lookup.
pub trait Geolocation {
    fn current_position(&self) -> impl Future<Output = Result<Coords>> + Send;
}

/// Map rendering collaborator.
pub trait MapView {
    /// Show the map centered on `center`.
    fn render(&mut self, center: Coords, zoom: u8);

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup);

    fn recenter(&mut self, coords: Coords, zoom: u8);

    /// Remove every workout marker.
    fn clear_markers(&mut self);
}

/// Entry form, workout list and notifications.
pub trait WorkoutView {
    fn show_form(&mut self);

    fn hide_form(&mut self);

    fn reset_form_fields(&mut self);

    fn render_list_entry(&mut self, entry: &WorkoutSummary);

    /// Remove every entry from the workout list.
    fn clear_list(&mut self);

    /// Blocking user-visible notification.
    fn alert(&mut self, message: &str);
}
