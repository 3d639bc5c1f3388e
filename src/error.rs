//! Unified error types for the indicator.
//!
//! A single `Error` enum every subsystem converts into. All variants are
//! `Copy` so a hardware fault can be handed from the render loop to `main`
//! without allocation.

use core::fmt;

use embedded_hal::digital::ErrorKind;

use crate::app::status::Led;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A digital output write failed. Fatal: there is no recovery path.
    Gpio(GpioError),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioError {
    /// Which indicator output the write was aimed at.
    pub led: Led,
    pub kind: ErrorKind,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} LED write failed ({})", self.led, self.kind)
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
