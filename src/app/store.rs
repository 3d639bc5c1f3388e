//! Shared desired-status cell.
//!
//! The HTTP handlers write, the render loop reads. Last write wins: there
//! is no queue, a value overwritten before the next tick is never seen.
//! The lock is private so nothing can touch the value unsynchronised, and
//! it is only held for the clone or the swap itself.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::status::Status;

#[derive(Debug, Default)]
pub struct StatusStore {
    current: Mutex<Status>,
}

impl StatusStore {
    pub fn new(initial: Status) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }

    /// Overwrite the current status.
    pub fn set(&self, status: Status) {
        *self.lock() = status;
    }

    /// Snapshot of the current status.
    pub fn get(&self) -> Status {
        self.lock().clone()
    }

    // A writer cannot leave a half-written `Status` behind, so a poisoned
    // lock still guards a valid value.
    fn lock(&self) -> MutexGuard<'_, Status> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
