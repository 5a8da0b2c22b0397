//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter where one tick is one
//! *phase*.  Phases alternate:
//!
//! ```text
//! T0 Strategy → T1 Movement → T2 Strategy → T3 Movement → …
//! ```
//!
//! so a full macro-step (decide, then move) spans two ticks.  There is no
//! wall-clock mapping; pacing is the caller's concern.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute phase counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` phases after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The phase that runs at this tick, assuming the run started with a
    /// strategy phase at tick 0.
    #[inline]
    pub fn phase(self) -> Phase {
        if self.0 % 2 == 0 { Phase::Strategy } else { Phase::Movement }
    }

    /// Number of complete macro-steps before this tick.
    #[inline]
    pub fn macro_step(self) -> u64 {
        self.0 / 2
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Phase ─────────────────────────────────────────────────────────────────────

/// One half of the strategy/movement flip-flop.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Every agent evaluates the game and fills its pending strategy; all
    /// pending strategies are then committed together.
    #[default]
    Strategy,
    /// Every agent samples a move; contention is resolved; the dynamic
    /// field diffuses.
    Movement,
}

impl Phase {
    /// The phase that follows this one.
    #[inline]
    pub fn flipped(self) -> Phase {
        match self {
            Phase::Strategy => Phase::Movement,
            Phase::Movement => Phase::Strategy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Strategy => "strategy",
            Phase::Movement => "movement",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
