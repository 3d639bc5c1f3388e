//! Three-LED status indicator driver.
//!
//! Three independent digital outputs drive discrete green, yellow and red
//! LEDs (active HIGH).
//!
//! ## Dual-target design
//!
//! Generic over `embedded_hal` output pins: Linux GPIO character-device
//! lines in production (`gpio-cdev` feature), [`SimPin`](super::sim_pin::SimPin)s
//! on a host build.

use embedded_hal::digital::{Error as _, OutputPin, PinState};

use crate::app::status::{Led, LedLevels};
use crate::error::{GpioError, Result};

pub struct StatusLeds<G, Y, R> {
    green: G,
    yellow: Y,
    red: R,
    current: LedLevels,
}

impl<G: OutputPin, Y: OutputPin, R: OutputPin> StatusLeds<G, Y, R> {
    /// Take ownership of the pins and drive them all LOW.
    pub fn new(green: G, yellow: Y, red: R) -> Result<Self> {
        let mut leds = Self {
            green,
            yellow,
            red,
            current: LedLevels::ALL_OFF,
        };
        leds.off()?;
        Ok(leds)
    }

    /// Write all three outputs. Stops at the first failing write.
    pub fn set(&mut self, levels: LedLevels) -> Result<()> {
        drive(&mut self.green, Led::Green, levels.green)?;
        drive(&mut self.yellow, Led::Yellow, levels.yellow)?;
        drive(&mut self.red, Led::Red, levels.red)?;
        self.current = levels;
        Ok(())
    }

    /// Drive every output LOW, attempting all three even if one fails.
    /// Returns the first failure.
    pub fn off(&mut self) -> Result<()> {
        let results = [
            drive(&mut self.green, Led::Green, false),
            drive(&mut self.yellow, Led::Yellow, false),
            drive(&mut self.red, Led::Red, false),
        ];
        if let Some(e) = results.into_iter().find_map(|r| r.err()) {
            return Err(e);
        }
        self.current = LedLevels::ALL_OFF;
        Ok(())
    }

    /// Levels from the last fully successful [`set`](Self::set) or [`off`](Self::off).
    pub fn current(&self) -> LedLevels {
        self.current
    }
}

fn drive<P: OutputPin>(pin: &mut P, led: Led, high: bool) -> Result<()> {
    pin.set_state(PinState::from(high))
        .map_err(|e| GpioError { led, kind: e.kind() }.into())
}
