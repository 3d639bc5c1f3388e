//! Linux GPIO character-device outputs.
//!
//! Requests each LED line from `/dev/gpiochipN` as an output with an
//! initial value of 0, so the LEDs are dark from the moment the line is
//! claimed. Lines are released when the [`CdevPin`]s drop.

use linux_embedded_hal::CdevPin;
use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use log::{error, info};

use crate::error::{Error, Result};

/// Consumer label shown by `gpioinfo` for requested lines.
const GPIO_CONSUMER: &str = "ledbridge";

/// Open `lines` on `chip_path` as LOW outputs, in order.
pub fn open_outputs<const N: usize>(chip_path: &str, lines: [u32; N]) -> Result<[CdevPin; N]> {
    let mut chip = Chip::new(chip_path).map_err(|e| {
        error!("Opening {} failed: {}", chip_path, e);
        Error::Init("gpio chip open failed")
    })?;

    let mut pins = Vec::with_capacity(N);
    for line in lines {
        let handle = chip
            .get_line(line)
            .and_then(|l| l.request(LineRequestFlags::OUTPUT, 0, GPIO_CONSUMER))
            .map_err(|e| {
                error!("Requesting {} line {} failed: {}", chip_path, line, e);
                Error::Init("gpio line request failed")
            })?;
        let pin = CdevPin::new(handle).map_err(|e| {
            error!("Wrapping {} line {} failed: {}", chip_path, line, e);
            Error::Init("gpio line setup failed")
        })?;
        pins.push(pin);
    }
    info!("GPIO: claimed lines {:?} on {}", lines, chip_path);

    pins.try_into()
        .map_err(|_| Error::Init("gpio line count mismatch"))
}
