//! Persistence layer: named slots holding serialized text.
//!
//! A slot is written whole on every save, so readers never observe a
//! partially written history.

pub mod file;
pub mod memory;

pub use file::FileSlotStorage;
pub use memory::MemorySlotStorage;

use crate::error::Result;

/// Slot name suffixes as constants.
pub mod slots {
    /// Suffix of the slot that receives an unreadable history
    pub const CORRUPT_SUFFIX: &str = ".corrupt";
}

/// Durable key-value storage.
pub trait SlotStorage {
    /// Read a slot. `None` if it has never been written or was removed.
    fn read(&self, slot: &str) -> Result<Option<String>>;

    /// Replace the slot's contents.
    fn write(&mut self, slot: &str, contents: &str) -> Result<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn remove(&mut self, slot: &str) -> Result<()>;
}
