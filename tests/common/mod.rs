// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use workout_log::config::Config;
use workout_log::db::{MemorySlotStorage, SlotStorage};
use workout_log::error::{AppError, Result};
use workout_log::models::{Coords, FormFields, MarkerPopup, WorkoutSummary};
use workout_log::services::{FixedClock, WorkoutFactory};
use workout_log::ui::{MapView, WorkoutView};
use workout_log::SessionController;

/// Creation time used by test factories.
#[allow(dead_code)]
pub fn april_14() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 4, 14, 9, 30, 0)
        .unwrap()
        .fixed_offset()
}

#[allow(dead_code)]
pub fn test_factory() -> WorkoutFactory {
    WorkoutFactory::with_clock(FixedClock(april_14()))
}

#[allow(dead_code)]
pub fn running_form(distance: &str, duration: &str, cadence: &str) -> FormFields {
    FormFields {
        kind: "running".to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
        cadence: cadence.to_string(),
        elevation_gain: String::new(),
    }
}

#[allow(dead_code)]
pub fn cycling_form(distance: &str, duration: &str, elevation_gain: &str) -> FormFields {
    FormFields {
        kind: "cycling".to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
        cadence: String::new(),
        elevation_gain: elevation_gain.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum MapCall {
    Render(Coords, u8),
    Marker(Coords, MarkerPopup),
    Recenter(Coords, u8),
    ClearMarkers,
}

/// Map collaborator that records every call.
#[derive(Clone, Default)]
pub struct RecordingMap {
    pub calls: Rc<RefCell<Vec<MapCall>>>,
}

impl MapView for RecordingMap {
    fn render(&mut self, center: Coords, zoom: u8) {
        self.calls.borrow_mut().push(MapCall::Render(center, zoom));
    }

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup) {
        self.calls
            .borrow_mut()
            .push(MapCall::Marker(coords, popup.clone()));
    }

    fn recenter(&mut self, coords: Coords, zoom: u8) {
        self.calls.borrow_mut().push(MapCall::Recenter(coords, zoom));
    }

    fn clear_markers(&mut self) {
        self.calls.borrow_mut().push(MapCall::ClearMarkers);
    }
}

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum ViewCall {
    ShowForm,
    HideForm,
    ResetForm,
    Entry(WorkoutSummary),
    ClearList,
    Alert(String),
}

/// List/form collaborator that records every call.
#[derive(Clone, Default)]
pub struct RecordingView {
    pub calls: Rc<RefCell<Vec<ViewCall>>>,
}

#[allow(dead_code)]
impl RecordingView {
    pub fn alerts(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ViewCall::Alert(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn entries(&self) -> Vec<WorkoutSummary> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ViewCall::Entry(entry) => Some(entry.clone()),
                _ => None,
            })
            .collect()
    }
}

impl WorkoutView for RecordingView {
    fn show_form(&mut self) {
        self.calls.borrow_mut().push(ViewCall::ShowForm);
    }

    fn hide_form(&mut self) {
        self.calls.borrow_mut().push(ViewCall::HideForm);
    }

    fn reset_form_fields(&mut self) {
        self.calls.borrow_mut().push(ViewCall::ResetForm);
    }

    fn render_list_entry(&mut self, entry: &WorkoutSummary) {
        self.calls.borrow_mut().push(ViewCall::Entry(entry.clone()));
    }

    fn clear_list(&mut self) {
        self.calls.borrow_mut().push(ViewCall::ClearList);
    }

    fn alert(&mut self, message: &str) {
        self.calls
            .borrow_mut()
            .push(ViewCall::Alert(message.to_string()));
    }
}

/// Storage whose reads succeed but whose writes fail.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct FailingStorage {
    pub inner: MemorySlotStorage,
}

impl SlotStorage for FailingStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        self.inner.read(slot)
    }

    fn write(&mut self, _slot: &str, _contents: &str) -> Result<()> {
        Err(AppError::Storage("disk full".to_string()))
    }

    fn remove(&mut self, _slot: &str) -> Result<()> {
        Err(AppError::Storage("read-only".to_string()))
    }
}

/// A started controller over `storage` with recording collaborators.
#[allow(dead_code)]
pub fn start_session(
    storage: impl SlotStorage + 'static,
) -> (SessionController, RecordingMap, RecordingView) {
    let map = RecordingMap::default();
    let view = RecordingView::default();
    let mut controller = workout_log::init(
        &Config::default(),
        Box::new(storage),
        Box::new(map.clone()),
        Box::new(view.clone()),
    )
    .expect("Failed to init session")
    .with_factory(test_factory());
    controller.start();
    (controller, map, view)
}
