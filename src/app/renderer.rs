//! Per-tick status renderer.
//!
//! Turns the current [`Status`] into concrete output levels. Solid
//! statuses map straight through the state table; blink statuses flip an
//! internal phase once per tick.
//!
//! ## Phase handling
//!
//! The phase starts LOW and is inverted *before* it is sampled, so the
//! first tick of a blink status is always ON. Whenever the active policy
//! changes the phase is reset, which means entering a blink status never
//! starts on a dark tick and switching from one blinking LED to the other
//! restarts the cycle.

use super::status::{LedLevels, LedPolicy, Status};

#[derive(Debug, Default)]
pub struct Renderer {
    blink_phase: bool,
    active: Option<LedPolicy>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick and return the levels to drive.
    pub fn tick(&mut self, status: &Status) -> LedLevels {
        let policy = status.policy();
        if self.active != Some(policy) {
            self.blink_phase = false;
        }
        self.active = Some(policy);

        match policy {
            LedPolicy::Solid(levels) => levels,
            LedPolicy::Blink(led) => {
                self.blink_phase = !self.blink_phase;
                if self.blink_phase {
                    LedLevels::only(led)
                } else {
                    LedLevels::ALL_OFF
                }
            }
        }
    }

    /// Forget the active policy; the next tick starts fresh.
    pub fn reset(&mut self) {
        self.blink_phase = false;
        self.active = None;
    }

    pub fn blink_phase(&self) -> bool {
        self.blink_phase
    }
}
