//! Outbound application events.
//!
//! The [`IndicatorService`](super::service::IndicatorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use super::status::{LedLevels, Status};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The render loop is running (carries the status it starts from).
    Started(Status),

    /// The render loop observed a different status than on its previous tick.
    StatusChanged {
        from: Option<Status>,
        to: Status,
        /// Levels drawn on the first tick of the new status.
        levels: LedLevels,
    },

    /// An output write failed; the loop is stopping.
    HardwareFault(crate::error::Error),

    /// All outputs were forced LOW on shutdown.
    SafeState,
}
