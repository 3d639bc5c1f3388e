//! Output drivers for the indicator LEDs.

#[cfg(feature = "gpio-cdev")]
pub mod cdev;
pub mod sim_pin;
pub mod status_led;
