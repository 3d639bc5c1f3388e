//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ IndicatorService (domain)
//! ```
//!
//! Driven adapters (GPIO outputs, event sinks, config storage) implement
//! these traits. The [`IndicatorService`](super::service::IndicatorService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::config::IndicatorConfig;
use crate::error::Result;

use super::events::AppEvent;
use super::status::LedLevels;

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the three outputs.
///
/// A failed write is fatal for the caller; implementations must not retry
/// or swallow errors.
pub trait IndicatorPort {
    /// Drive all three outputs to `levels`.
    fn show(&mut self, levels: LedLevels) -> Result<()>;

    /// Force the known-safe state (everything LOW).
    fn all_off(&mut self) -> Result<()> {
        self.show(LedLevels::ALL_OFF)
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port. Adapters
/// decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: persistent config → domain)
// ───────────────────────────────────────────────────────────────

/// Loads the indicator configuration.
///
/// Implementations MUST validate before returning; an invalid file is
/// rejected with [`ConfigError::ValidationFailed`], never clamped.
pub trait ConfigPort {
    /// Returns [`ConfigError::NotFound`] when nothing is stored, so the
    /// caller can fall back to [`IndicatorConfig::default()`].
    fn load(&self) -> core::result::Result<IndicatorConfig, ConfigError>;
}

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// No config source present.
    NotFound,
    /// Stored config could not be deserialised.
    Corrupted(serde_json::Error),
    /// A field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    Io(std::io::Error),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted(e) => write!(f, "config corrupted: {}", e),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Corrupted(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::NotFound | Self::ValidationFailed(_) => None,
        }
    }
}
