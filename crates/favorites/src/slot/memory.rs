//! In-memory favourites slot for testing.

use super::FavoritesSlot;
use crate::error::{ErrorKind, Result};
use std::path::PathBuf;
use std::sync::Mutex;

/// In-memory favourites slot for testing.
///
/// Holds the payload behind a [`Mutex`] so the trait methods can operate on
/// `&self`. Can be constructed pre-populated (to simulate a previous
/// session) or failing (to test that persistence problems degrade instead of
/// propagating).
///
/// Note:
/// - Do NOT apply `#[cfg(test)]` so that other crates can also use this in
///   their tests.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Mutex<Option<String>>,
    fail_writes: bool,
}

impl MemorySlot {
    /// A slot that behaves as if `payload` was persisted by an earlier session.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self { payload: Mutex::new(Some(payload.into())), fail_writes: false }
    }

    /// A slot whose writes always fail. Reads still work.
    pub fn failing_writes() -> Self {
        Self { payload: Mutex::new(None), fail_writes: true }
    }

    /// The raw payload as last written, for asserting on persistence.
    pub fn raw(&self) -> Option<String> {
        self.payload.lock().expect("favourites slot lock poisoned").clone()
    }
}

impl FavoritesSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.raw())
    }

    fn write(&self, payload: &str) -> Result<()> {
        if self.fail_writes {
            return Err(exn::Exn::from(ErrorKind::Unavailable(PathBuf::from("memory"))));
        }
        *self.payload.lock().expect("favourites slot lock poisoned") = Some(payload.to_string());
        Ok(())
    }
}
