// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller: reacts to collaborator events.
//!
//! Handles the core workflow:
//! 1. Map click remembers the location and opens the entry form
//! 2. Form submit validates, builds the workout and stores it
//! 3. Map and list collaborators are asked to render the result
//!
//! Events are handled one at a time on a single control flow.

use crate::config::Config;
use crate::db::SlotStorage;
use crate::error::{AppError, Result};
use crate::models::{Coords, FormFields, MarkerPopup, Workout, WorkoutSummary};
use crate::services::{validate_form, WorkoutFactory, WorkoutStore};
use crate::ui::{MapView, WorkoutView};
use serde::{Deserialize, Serialize};

/// Something that happened in a collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Geolocation found the user's position
    PositionAcquired { coords: Coords },
    /// Geolocation failed or was denied
    PositionUnavailable { reason: String },
    /// The map finished rendering and accepts markers
    MapReady,
    MapClicked { coords: Coords },
    FormSubmitted { fields: FormFields },
    /// A workout list entry was clicked
    ListClicked { id: String },
    /// Discard the whole saved history
    Reset,
}

/// Build the store, load saved workouts and return a controller.
///
/// No collaborator is touched until [`SessionController::start`].
pub fn init(
    config: &Config,
    storage: Box<dyn SlotStorage>,
    map: Box<dyn MapView>,
    view: Box<dyn WorkoutView>,
) -> Result<SessionController> {
    let mut store = WorkoutStore::new(storage, config.slot.clone());

    let startup_notice = match store.load() {
        Ok(report) if report.skipped.is_empty() => None,
        Ok(report) => Some(format!(
            "{} saved workout(s) could not be restored and were skipped",
            report.skipped.len()
        )),
        Err(e @ AppError::CorruptData(_)) => Some(e.user_message().to_string()),
        Err(e) => return Err(e),
    };

    Ok(SessionController {
        store,
        factory: WorkoutFactory::new(),
        map,
        view,
        zoom: config.map_zoom_level,
        map_ready: false,
        pending_location: None,
        startup_notice,
        started: false,
    })
}

/// Drives validation, construction, storage and rendering.
pub struct SessionController {
    store: WorkoutStore,
    factory: WorkoutFactory,
    map: Box<dyn MapView>,
    view: Box<dyn WorkoutView>,
    zoom: u8,
    map_ready: bool,
    /// Location of the last map click, used by the next form submit
    pending_location: Option<Coords>,
    startup_notice: Option<String>,
    started: bool,
}

impl SessionController {
    /// Replace the workout factory (e.g. to use a fixed clock).
    pub fn with_factory(mut self, factory: WorkoutFactory) -> Self {
        self.factory = factory;
        self
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn map_ready(&self) -> bool {
        self.map_ready
    }

    pub fn pending_location(&self) -> Option<Coords> {
        self.pending_location
    }

    /// Render the saved history and surface any problem found while loading.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        for workout in self.store.list() {
            self.view.render_list_entry(&WorkoutSummary::from(workout));
        }
        if let Some(notice) = self.startup_notice.take() {
            self.view.alert(&notice);
        }

        tracing::info!(workouts = self.store.len(), "Session started");
    }

    /// Handle one event. Failures are shown to the user and returned.
    pub fn handle(&mut self, event: SessionEvent) -> Result<()> {
        let result = match event {
            SessionEvent::PositionAcquired { coords } => {
                self.map.render(coords, self.zoom);
                Ok(())
            }
            SessionEvent::PositionUnavailable { reason } => {
                Err(AppError::LocationUnavailable(reason))
            }
            SessionEvent::MapReady => {
                self.on_map_ready();
                Ok(())
            }
            SessionEvent::MapClicked { coords } => {
                self.on_map_click(coords);
                Ok(())
            }
            SessionEvent::FormSubmitted { fields } => self.on_form_submit(&fields),
            SessionEvent::ListClicked { id } => self.on_list_click(&id),
            SessionEvent::Reset => self.reset(),
        };

        if let Err(e) = &result {
            tracing::warn!(error = %e, "Event handling failed");
            self.view.alert(e.user_message());
        }
        result
    }

    fn on_map_ready(&mut self) {
        if self.map_ready {
            return;
        }
        self.map_ready = true;

        for workout in self.store.list() {
            self.map.place_marker(workout.coords(), &MarkerPopup::from(workout));
        }
        tracing::info!(markers = self.store.len(), "Map ready");
    }

    fn on_map_click(&mut self, coords: Coords) {
        if !coords.is_valid() {
            tracing::warn!(lat = coords.lat, lng = coords.lng, "Ignoring invalid map click");
            return;
        }
        self.pending_location = Some(coords);
        self.view.show_form();
    }

    fn on_form_submit(&mut self, fields: &FormFields) -> Result<()> {
        let coords = self.pending_location.ok_or(AppError::NoPendingLocation)?;
        let input = validate_form(fields)?;

        let workout = self.factory.create(input, coords);
        let summary = WorkoutSummary::from(&workout);
        let popup = MarkerPopup::from(&workout);

        self.store.add(workout)?;

        if self.map_ready {
            self.map.place_marker(coords, &popup);
        }
        self.view.render_list_entry(&summary);
        self.view.hide_form();
        self.view.reset_form_fields();
        self.pending_location = None;
        Ok(())
    }

    fn on_list_click(&mut self, id: &str) -> Result<()> {
        let Some(coords) = self.store.find_by_id(id).map(Workout::coords) else {
            tracing::debug!(id, "List click did not match a workout");
            return Ok(());
        };

        if self.map_ready {
            self.map.recenter(coords, self.zoom);
        } else {
            tracing::debug!(id, "Map not ready; not recentering");
        }

        self.store.record_interaction(id)?;
        Ok(())
    }

    /// Discard the saved history and clear what the collaborators show.
    ///
    /// If the slot cannot be removed nothing is cleared.
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset()?;
        self.pending_location = None;

        self.view.clear_list();
        self.view.hide_form();
        self.view.reset_form_fields();
        if self.map_ready {
            self.map.clear_markers();
        }
        Ok(())
    }
}
