//! Indicator service — the hexagonal core.
//!
//! [`IndicatorService`] owns the [`Renderer`] and drives an
//! [`IndicatorPort`]. It consumes the shared [`StatusStore`] on a fixed
//! tick and never holds the store's lock across a hardware write or a
//! sleep, so incoming requests are never stalled by the blink timer.
//!
//! ```text
//!  StatusStore ──get──▶ ┌──────────────────┐ ──▶ EventSink
//!                       │ IndicatorService │
//! IndicatorPort ◀─show──│     Renderer     │
//!                       └──────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

use super::events::AppEvent;
use super::ports::{EventSink, IndicatorPort};
use super::renderer::Renderer;
use super::status::{LedLevels, Status};
use super::store::StatusStore;

pub struct IndicatorService<P, S> {
    indicator: P,
    sink: S,
    renderer: Renderer,
    /// Status drawn on the previous tick.
    last_seen: Option<Status>,
}

impl<P: IndicatorPort, S: EventSink> IndicatorService<P, S> {
    pub fn new(indicator: P, sink: S) -> Self {
        Self {
            indicator,
            sink,
            renderer: Renderer::new(),
            last_seen: None,
        }
    }

    /// Render one tick: snapshot the store, compute levels, drive outputs.
    pub fn render_tick(&mut self, store: &StatusStore) -> Result<LedLevels> {
        let status = store.get();
        let levels = self.renderer.tick(&status);
        self.indicator.show(levels)?;

        if self.last_seen.as_ref() != Some(&status) {
            self.sink.emit(&AppEvent::StatusChanged {
                from: self.last_seen.take(),
                to: status.clone(),
                levels,
            });
            self.last_seen = Some(status);
        }
        Ok(levels)
    }

    /// Force every output LOW and forget the blink phase.
    pub fn shutdown(&mut self) -> Result<()> {
        self.renderer.reset();
        self.last_seen = None;
        self.indicator.all_off()?;
        self.sink.emit(&AppEvent::SafeState);
        Ok(())
    }

    /// Render `store` every `period` until `cancel` fires or a write fails.
    ///
    /// The first tick happens immediately. On either exit path the outputs
    /// are driven LOW before returning; a write failure also cancels
    /// `cancel` so the rest of the process stops with it.
    pub async fn run(
        mut self,
        store: Arc<StatusStore>,
        period: Duration,
        cancel: CancellationToken,
    ) -> Result<()> {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.sink.emit(&AppEvent::Started(store.get()));
        info!("Render loop started (period={}ms)", period.as_millis());

        let outcome = loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => break Ok(()),
                _ = ticker.tick() => {
                    if let Err(e) = self.render_tick(&store) {
                        error!("Indicator write failed, stopping: {}", e);
                        self.sink.emit(&AppEvent::HardwareFault(e));
                        cancel.cancel();
                        break Err(e);
                    }
                }
            }
        };

        if let Err(e) = self.shutdown() {
            warn!("Could not force outputs to safe state: {}", e);
        }
        outcome
    }
}
