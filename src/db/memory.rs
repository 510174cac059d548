// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory slot storage.

use crate::db::SlotStorage;
use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Slot storage kept in memory.
///
/// Clones share the same slots, so a clone handed to a store can be inspected
/// or handed to a second store to simulate a restart.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of a slot.
    pub fn get(&self, slot: &str) -> Option<String> {
        self.slots.borrow().get(slot).cloned()
    }

    /// Overwrite a slot directly, bypassing any store.
    pub fn insert(&self, slot: &str, contents: impl Into<String>) {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), contents.into());
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.get(slot))
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<()> {
        self.insert(slot, contents);
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        self.slots.borrow_mut().remove(slot);
        Ok(())
    }
}
