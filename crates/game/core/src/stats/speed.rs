//! Turn meters.
//!
//! Each actor carries two accumulators, one fed by movement speed and one by
//! quickness. Every world tick adds the actor's speed to the meter; the actor
//! may act once per `threshold` accumulated, and leftover value carries over
//! to the next tick.

/// Energy accumulator that gates how often an actor may act.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnMeter {
    remainder: u32,
}

impl TurnMeter {
    pub const fn new() -> Self {
        Self { remainder: 0 }
    }

    pub const fn with_remainder(remainder: u32) -> Self {
        Self { remainder }
    }

    pub const fn remainder(&self) -> u32 {
        self.remainder
    }

    /// Adds one tick worth of speed and reports whether the actor may act.
    pub fn accumulate(&mut self, speed: u32, threshold: u32) -> bool {
        self.remainder = self.remainder.saturating_add(speed);
        self.is_ready(threshold)
    }

    pub fn is_ready(&self, threshold: u32) -> bool {
        self.remainder >= threshold
    }

    /// Spends one action's worth of energy, never going below zero.
    pub fn consume(&mut self, threshold: u32) {
        self.remainder = self.remainder.saturating_sub(threshold);
    }

    /// Whole actions banked in the meter, counting the one about to be taken.
    pub fn extra_moves(&self, threshold: u32) -> u32 {
        self.remainder.checked_div(threshold).unwrap_or(0)
    }
}
