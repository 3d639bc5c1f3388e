//! In-memory digital output.
//!
//! Stands in for a GPIO line when no hardware backend is compiled in, so
//! the full binary runs on a workstation. The level lives behind an
//! `Arc` so a [`probe`](SimPin::probe) can read it while the render loop
//! owns the pin.

use core::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

#[derive(Debug, Clone)]
pub struct SimPin {
    line: u32,
    level: Arc<AtomicBool>,
}

impl SimPin {
    /// New pin, initially LOW.
    pub fn new(line: u32) -> Self {
        Self {
            line,
            level: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A handle observing the same level.
    pub fn probe(&self) -> SimPin {
        self.clone()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_high(&self) -> bool {
        self.level.load(Ordering::Acquire)
    }

    fn write(&self, high: bool) {
        let prev = self.level.swap(high, Ordering::AcqRel);
        if prev != high {
            log::debug!("sim GPIO{} -> {}", self.line, if high { "HIGH" } else { "LOW" });
        }
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

impl StatefulOutputPin for SimPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(SimPin::is_high(self))
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!SimPin::is_high(self))
    }
}
