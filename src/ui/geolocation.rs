// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Geolocation from a configured fixed position.

use crate::error::{AppError, Result};
use crate::models::Coords;
use crate::ui::Geolocation;
use std::future::Future;

/// Reports a configured position, or "unavailable" when none is set.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocation {
    position: Option<Coords>,
}

impl FixedGeolocation {
    pub fn new(position: Option<Coords>) -> Self {
        Self { position }
    }
}

impl Geolocation for FixedGeolocation {
    fn current_position(&self) -> impl Future<Output = Result<Coords>> + Send {
        let position = self.position;
        async move {
            position.ok_or_else(|| AppError::LocationUnavailable("no position configured".into()))
        }
    }
}
