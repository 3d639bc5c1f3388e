//! Indicator status vocabulary and the status → LED state table.
//!
//! | Status                            | G   | Y     | R     | Mode  |
//! |-----------------------------------|-----|-------|-------|-------|
//! | available, available-override     | on  | off   | off   | solid |
//! | checked-out, off                  | off | off   | off   | solid |
//! | charging-override                 | off | on    | off   | solid |
//! | faulty-override                   | off | off   | on    | solid |
//! | charging-blink                    | off | blink | off   | blink |
//! | faulty-blink                      | off | off   | blink | blink |
//! | anything else                     | off | off   | off   | solid |
//!
//! Unknown strings are not an error: they are carried verbatim in
//! [`Status::Unrecognized`] so the endpoint can echo them back.

use core::fmt;

/// One of the three indicator outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Led {
    Green,
    Yellow,
    Red,
}

impl Led {
    pub const ALL: [Led; 3] = [Led::Green, Led::Yellow, Led::Red];

    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for Led {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical level of each output for one render tick. `true` = HIGH (lit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedLevels {
    pub green: bool,
    pub yellow: bool,
    pub red: bool,
}

impl LedLevels {
    pub const ALL_OFF: Self = Self {
        green: false,
        yellow: false,
        red: false,
    };

    /// Exactly one output lit.
    pub const fn only(led: Led) -> Self {
        Self {
            green: matches!(led, Led::Green),
            yellow: matches!(led, Led::Yellow),
            red: matches!(led, Led::Red),
        }
    }

    pub fn level(&self, led: Led) -> bool {
        match led {
            Led::Green => self.green,
            Led::Yellow => self.yellow,
            Led::Red => self.red,
        }
    }

    /// `(G, Y, R)` for table-driven assertions.
    pub fn as_tuple(&self) -> (bool, bool, bool) {
        (self.green, self.yellow, self.red)
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::ALL_OFF
    }
}

/// How a status is drawn on the outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedPolicy {
    /// Constant levels every tick.
    Solid(LedLevels),
    /// The given LED alternates each tick; the other two stay LOW.
    Blink(Led),
}

/// Desired indicator status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Available,
    AvailableOverride,
    CheckedOut,
    Off,
    ChargingOverride,
    FaultyOverride,
    ChargingBlink,
    FaultyBlink,
    /// Any other string, kept verbatim. Rendered all-off.
    Unrecognized(String),
}

impl Status {
    /// Every recognised status, in table order.
    pub const KNOWN: [Status; 8] = [
        Status::Available,
        Status::AvailableOverride,
        Status::CheckedOut,
        Status::Off,
        Status::ChargingOverride,
        Status::FaultyOverride,
        Status::ChargingBlink,
        Status::FaultyBlink,
    ];

    /// Total parse: exact, case-sensitive match against the known set.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "available" => Self::Available,
            "available-override" => Self::AvailableOverride,
            "checked-out" => Self::CheckedOut,
            "off" => Self::Off,
            "charging-override" => Self::ChargingOverride,
            "faulty-override" => Self::FaultyOverride,
            "charging-blink" => Self::ChargingBlink,
            "faulty-blink" => Self::FaultyBlink,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    /// The wire string this status was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::AvailableOverride => "available-override",
            Self::CheckedOut => "checked-out",
            Self::Off => "off",
            Self::ChargingOverride => "charging-override",
            Self::FaultyOverride => "faulty-override",
            Self::ChargingBlink => "charging-blink",
            Self::FaultyBlink => "faulty-blink",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    pub fn policy(&self) -> LedPolicy {
        match self {
            Self::Available | Self::AvailableOverride => LedPolicy::Solid(LedLevels::only(Led::Green)),
            Self::CheckedOut | Self::Off | Self::Unrecognized(_) => LedPolicy::Solid(LedLevels::ALL_OFF),
            Self::ChargingOverride => LedPolicy::Solid(LedLevels::only(Led::Yellow)),
            Self::FaultyOverride => LedPolicy::Solid(LedLevels::only(Led::Red)),
            Self::ChargingBlink => LedPolicy::Blink(Led::Yellow),
            Self::FaultyBlink => LedPolicy::Blink(Led::Red),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
