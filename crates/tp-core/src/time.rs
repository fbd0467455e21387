//! Turn model.
//!
//! # Design
//!
//! Planning happens once per game turn.  `Turn` is the absolute position in
//! the game (turn number plus the coarse "age" the game is in), `Turns` is a
//! travel duration as reported by the distance oracle.
//!
//! `Turns::UNREACHABLE` is the `u32::MAX` sentinel, so unreachable legs sort
//! after every real one and comparisons need no special casing.

use std::fmt;

// ── Turn ──────────────────────────────────────────────────────────────────────

/// The game turn a planning cycle runs in.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// Monotonic turn counter starting at 1.
    pub number: u32,
    /// Game age (0 = discovery, 1 = early colonial, …).  Drives the scout quota.
    pub age: u8,
}

impl Turn {
    pub const FIRST: Turn = Turn { number: 1, age: 0 };

    pub fn new(number: u32, age: u8) -> Self {
        Self { number, age }
    }

    /// The first turn of the game triggers one-off mission initialization.
    #[inline]
    pub fn is_first(self) -> bool {
        self.number <= Self::FIRST.number
    }

    /// The following turn in the same age.
    #[inline]
    pub fn next(self) -> Turn {
        Turn { number: self.number + 1, age: self.age }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn {} (age {})", self.number, self.age)
    }
}

// ── Turns ─────────────────────────────────────────────────────────────────────

/// A travel duration in whole turns.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turns(pub u32);

impl Turns {
    pub const ZERO: Turns = Turns(0);
    pub const UNREACHABLE: Turns = Turns(u32::MAX);

    #[inline]
    pub fn is_reachable(self) -> bool {
        self != Self::UNREACHABLE
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `Some(n)` for a reachable duration.
    #[inline]
    pub fn get(self) -> Option<u32> {
        self.is_reachable().then_some(self.0)
    }

    /// Add two durations; unreachable is absorbing.
    #[inline]
    pub fn plus(self, other: Turns) -> Turns {
        if !self.is_reachable() || !other.is_reachable() {
            return Turns::UNREACHABLE;
        }
        Turns(self.0.saturating_add(other.0).min(u32::MAX - 1))
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{}t", self.0)
        } else {
            f.write_str("unreachable")
        }
    }
}
