//! System configuration parameters
//!
//! All tunable parameters for the indicator. Every field has a default, so
//! a config file only needs to name what it changes.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::status::Status;
use crate::pins;

/// Core indicator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    // --- HTTP ---
    /// Address the status endpoint binds to (all interfaces by default)
    pub bind_address: IpAddr,
    /// TCP port of the status endpoint
    pub port: u16,

    // --- Rendering ---
    /// Render tick period (milliseconds); also the blink half-period
    pub tick_interval_ms: u64,
    /// Status shown from startup until the first request arrives
    pub default_status: String,

    // --- GPIO ---
    /// GPIO character device
    pub gpio_chip: String,
    pub green_line: u32,
    pub yellow_line: u32,
    pub red_line: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: pins::HTTP_PORT,

            tick_interval_ms: 750,
            default_status: Status::Available.as_str().to_owned(),

            gpio_chip: pins::GPIO_CHIP.to_owned(),
            green_line: pins::GREEN_LED_LINE,
            yellow_line: pins::YELLOW_LED_LINE,
            red_line: pins::RED_LED_LINE,
        }
    }
}

impl IndicatorConfig {
    /// Range-check every field. Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be > 0");
        }
        if self.default_status.is_empty() {
            return Err("default_status must not be empty");
        }
        if self.gpio_chip.is_empty() {
            return Err("gpio_chip must not be empty");
        }
        if self.green_line == self.yellow_line
            || self.green_line == self.red_line
            || self.yellow_line == self.red_line
        {
            return Err("LED lines must be distinct");
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn initial_status(&self) -> Status {
        Status::parse(&self.default_status)
    }
}
