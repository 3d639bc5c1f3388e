//! GPIO line assignments and network constants for the indicator board.
//!
//! Single source of truth for the defaults in [`IndicatorConfig`](crate::config::IndicatorConfig).
//! Line numbers are BCM (GPIO) numbers, not physical header pins.

// ---------------------------------------------------------------------------
// Indicator LEDs (active HIGH, series resistor to GND)
// ---------------------------------------------------------------------------

/// Green LED, physical pin 11.
pub const GREEN_LED_LINE: u32 = 17;
/// Yellow LED, physical pin 13.
pub const YELLOW_LED_LINE: u32 = 27;
/// Red LED, physical pin 15.
pub const RED_LED_LINE: u32 = 22;

/// GPIO character device that owns the header lines.
pub const GPIO_CHIP: &str = "/dev/gpiochip0";

// ---------------------------------------------------------------------------
// HTTP endpoint
// ---------------------------------------------------------------------------

/// TCP port the status endpoint listens on.
pub const HTTP_PORT: u16 = 5000;
