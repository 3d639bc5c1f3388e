//! Hardware adapter — bridges the LED driver to the [`IndicatorPort`].
//!
//! This is the only module that decides which GPIO backend the binary
//! drives: character-device lines with the `gpio-cdev` feature, simulated
//! pins otherwise.

use embedded_hal::digital::OutputPin;
use log::info;

use crate::app::ports::IndicatorPort;
use crate::app::status::LedLevels;
use crate::config::IndicatorConfig;
use crate::drivers::status_led::StatusLeds;
use crate::error::Result;

#[cfg(feature = "gpio-cdev")]
pub type Pin = linux_embedded_hal::CdevPin;
#[cfg(not(feature = "gpio-cdev"))]
pub type Pin = crate::drivers::sim_pin::SimPin;

/// Concrete adapter for the configured backend.
pub type HardwareAdapter = StatusLeds<Pin, Pin, Pin>;

impl<G: OutputPin, Y: OutputPin, R: OutputPin> IndicatorPort for StatusLeds<G, Y, R> {
    fn show(&mut self, levels: LedLevels) -> Result<()> {
        self.set(levels)
    }

    fn all_off(&mut self) -> Result<()> {
        self.off()
    }
}

/// Claim the three LED lines named in `config`, all LOW.
#[cfg(feature = "gpio-cdev")]
pub fn open(config: &IndicatorConfig) -> Result<HardwareAdapter> {
    let [green, yellow, red] = crate::drivers::cdev::open_outputs(
        &config.gpio_chip,
        [config.green_line, config.yellow_line, config.red_line],
    )?;
    info!("Hardware: GPIO character device {}", config.gpio_chip);
    StatusLeds::new(green, yellow, red)
}

/// Simulated outputs; level changes are logged at debug.
#[cfg(not(feature = "gpio-cdev"))]
pub fn open(config: &IndicatorConfig) -> Result<HardwareAdapter> {
    use crate::drivers::sim_pin::SimPin;

    info!("Hardware: simulated pins (build with --features gpio-cdev for real GPIO)");
    StatusLeds::new(
        SimPin::new(config.green_line),
        SimPin::new(config.yellow_line),
        SimPin::new(config.red_line),
    )
}
