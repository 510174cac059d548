// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed slot storage.
//!
//! Each slot is a `<slot>.json` file in the data directory. Writes go to a
//! temporary file that is then renamed over the slot.

use crate::db::SlotStorage;
use crate::error::{AppError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Slot storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    /// Open storage in `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::Storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        tracing::info!(dir = %dir.display(), "Opened slot storage");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !slot.starts_with('.');
        if !valid {
            return Err(AppError::Storage(format!("Invalid slot name: {slot:?}")));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<()> {
        let path = self.slot_path(slot)?;
        let tmp = self.dir.join(format!(".{slot}.json.tmp"));

        fs::write(&tmp, contents)
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path).map_err(|e| {
            AppError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })?;

        tracing::debug!(slot, bytes = contents.len(), "Slot written");
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
