use crate::constants::INDICATOR_HOLD_TICKS;

/// Latch-and-hold display timer for the success and failure lines.
///
/// A single poll cycle is far too short for a human to see, so a triggered
/// indicator stays lit for a fixed number of cycles. The enclosing loop ticks
/// it once per iteration and drives the LED from [`Indicator::is_lit`].
#[derive(Debug, Clone, Copy)]
pub struct Indicator {
    remaining: u32,
    hold: u32,
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator {
    pub fn new() -> Self {
        Self {
            remaining: 0,
            hold: INDICATOR_HOLD_TICKS,
        }
    }

    /// Use a custom hold duration instead of [`INDICATOR_HOLD_TICKS`].
    pub fn with_hold(hold: u32) -> Self {
        Self { remaining: 0, hold }
    }

    /// Arm the indicator for the full hold duration. Re-triggering while lit
    /// restarts the hold.
    pub fn trigger(&mut self) {
        self.remaining = self.hold;
    }

    /// Advance the hold timer by one poll cycle.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Current level of the display line.
    pub fn is_lit(&self) -> bool {
        self.remaining > 0
    }
}
