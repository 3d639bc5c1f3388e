//! Mock adapters for integration tests.
//!
//! Records every indicator write and every emitted event behind shared
//! handles, so tests can assert on the full history even after the
//! service has taken ownership of the adapter.

use std::sync::{Arc, Mutex};

use embedded_hal::digital::ErrorKind;
use ledbridge::app::events::AppEvent;
use ledbridge::app::ports::{EventSink, IndicatorPort};
use ledbridge::app::status::{Led, LedLevels};
use ledbridge::error::{GpioError, Result};

// ── RecordingIndicator ────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingIndicator {
    shown: Arc<Mutex<Vec<LedLevels>>>,
    writes: Arc<Mutex<usize>>,
    /// Zero-based write index that fails instead of being recorded.
    fail_at: Option<usize>,
}

#[allow(dead_code)]
impl RecordingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(write: usize) -> Self {
        Self {
            fail_at: Some(write),
            ..Self::default()
        }
    }

    pub fn history(&self) -> Vec<LedLevels> {
        self.shown.lock().unwrap().clone()
    }

    pub fn tuples(&self) -> Vec<(bool, bool, bool)> {
        self.history().iter().map(LedLevels::as_tuple).collect()
    }

    pub fn last(&self) -> Option<(bool, bool, bool)> {
        self.history().last().map(LedLevels::as_tuple)
    }
}

impl IndicatorPort for RecordingIndicator {
    fn show(&mut self, levels: LedLevels) -> Result<()> {
        let mut writes = self.writes.lock().unwrap();
        let index = *writes;
        *writes += 1;
        if self.fail_at == Some(index) {
            return Err(GpioError {
                led: Led::Yellow,
                kind: ErrorKind::Other,
            }
            .into());
        }
        self.shown.lock().unwrap().push(levels);
        Ok(())
    }
}

// ── CollectingSink ────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct CollectingSink {
    events: Arc<Mutex<Vec<AppEvent>>>,
}

#[allow(dead_code)]
impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AppEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Target statuses of every `StatusChanged`, in order.
    pub fn transitions(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                AppEvent::StatusChanged { to, .. } => Some(to.as_str().to_owned()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for CollectingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
