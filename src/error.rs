// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing notifications.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    #[error("Workout not found: {0}")]
    NotFound(String),

    #[error("Workout id already exists: {0}")]
    DuplicateId(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Persisted data is corrupt: {0}")]
    CorruptData(String),

    #[error("Current location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("No map location selected for the new workout")]
    NoPendingLocation,
}

impl AppError {
    /// Text of the blocking notification shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "Enter valid data",
            AppError::NotFound(_) => "Workout not found",
            AppError::DuplicateId(_) | AppError::Storage(_) => "Could not save workouts",
            AppError::CorruptData(_) => "Saved workouts could not be read and were set aside",
            AppError::LocationUnavailable(_) => "Could not fetch current location",
            AppError::NoPendingLocation => "Click on the map to choose a location first",
        }
    }

    /// Whether the failure came from the persistence layer.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, AppError::Storage(_))
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;
