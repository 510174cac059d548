// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Headless collaborators that render through structured log events.

use crate::controller::SessionEvent;
use crate::models::{Coords, MarkerPopup, WorkoutSummary};
use crate::ui::{MapView, WorkoutView};
use tokio::sync::mpsc::UnboundedSender;

/// Map that logs what it would draw.
///
/// After the first render it reports itself ready over `events`.
#[derive(Debug)]
pub struct TracingMapView {
    events: Option<UnboundedSender<SessionEvent>>,
    markers: usize,
}

impl TracingMapView {
    pub fn new(events: UnboundedSender<SessionEvent>) -> Self {
        Self {
            events: Some(events),
            markers: 0,
        }
    }
}

impl MapView for TracingMapView {
    fn render(&mut self, center: Coords, zoom: u8) {
        tracing::info!(lat = center.lat, lng = center.lng, zoom, "Map rendered");

        // Readiness is signalled once.
        if let Some(events) = self.events.take() {
            if events.send(SessionEvent::MapReady).is_err() {
                tracing::warn!("Event loop closed before map became ready");
            }
        }
    }

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup) {
        self.markers += 1;
        tracing::info!(
            lat = coords.lat,
            lng = coords.lng,
            popup = %popup.content,
            class = %popup.class_name,
            markers = self.markers,
            "Marker placed"
        );
    }

    fn recenter(&mut self, coords: Coords, zoom: u8) {
        tracing::info!(lat = coords.lat, lng = coords.lng, zoom, "Map recentered");
    }

    fn clear_markers(&mut self) {
        tracing::info!(removed = self.markers, "Markers cleared");
        self.markers = 0;
    }
}

/// Workout list and form that log their state changes.
#[derive(Debug, Default)]
pub struct TracingWorkoutView {
    form_visible: bool,
}

impl WorkoutView for TracingWorkoutView {
    fn show_form(&mut self) {
        self.form_visible = true;
        tracing::info!("Workout form shown");
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
        tracing::info!("Workout form hidden");
    }

    fn reset_form_fields(&mut self) {
        tracing::debug!(visible = self.form_visible, "Workout form reset");
    }

    fn render_list_entry(&mut self, entry: &WorkoutSummary) {
        match serde_json::to_string(entry) {
            Ok(json) => tracing::info!(id = %entry.id, entry = %json, "Workout listed"),
            Err(e) => tracing::error!(id = %entry.id, error = %e, "Failed to render workout"),
        }
    }

    fn clear_list(&mut self) {
        tracing::info!("Workout list cleared");
    }

    fn alert(&mut self, message: &str) {
        tracing::warn!(message, "User notification");
    }
}
