//! Persistence slots for the favourites set.
//!
//! A slot is a single named location in key-scoped local storage holding one
//! JSON payload — the moral equivalent of one key in a browser's
//! `localStorage`. The trait is deliberately synchronous: favourites
//! mutations must appear atomic to a single-threaded caller, and the payload
//! is a handful of ids.

mod file;
mod memory;

pub use self::file::FileSlot;
pub use self::memory::MemorySlot;

use crate::error::Result;

/// A single read/overwrite slot of persistent storage.
pub trait FavoritesSlot: Send + Sync {
    /// Read the current payload, if the slot has ever been written.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the slot with a new payload.
    fn write(&self, payload: &str) -> Result<()>;
}
