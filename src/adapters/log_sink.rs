//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events through the
//! `log` facade (stderr via `env_logger` in the shipped binary).

use log::{error, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::app::status::{Led, LedLevels, Status};

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(status) => {
                info!("START | initial_status={}", status);
            }
            AppEvent::StatusChanged { from, to, levels } => {
                if let Some(from) = from {
                    info!("STATUS | {} -> {}", from, to);
                }
                info!("LED: {}", describe(to, *levels));
            }
            AppEvent::HardwareFault(e) => {
                error!("FAULT | {}", e);
            }
            AppEvent::SafeState => {
                info!("SAFE | all LEDs off");
            }
        }
    }
}

/// Human-readable rendering, e.g. `Green ON (available)`.
fn describe(status: &Status, levels: LedLevels) -> String {
    let lit = Led::ALL
        .into_iter()
        .find(|led| levels.level(*led))
        .map(|led| match led {
            Led::Green => "Green",
            Led::Yellow => "Yellow",
            Led::Red => "Red",
        });
    let mode = if matches!(status, Status::ChargingBlink | Status::FaultyBlink) {
        " BLINK"
    } else {
        ""
    };
    match lit {
        Some(name) => format!("{}{} ON ({})", name, mode, status),
        None => format!("All OFF ({})", status),
    }
}
