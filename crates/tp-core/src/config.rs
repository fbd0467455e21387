//! Planner tuning knobs.
//!
//! Typically loaded from a TOML file by `tp-planner::load_config`; every field
//! has a default so partial files are accepted.

/// Search ranges, quota constants, and urgent-list sizing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Turns a colonist will travel to found a colony.  Tripled on the first
    /// turn for colonists still aboard their ship.
    pub building_range:      u32,
    pub cash_in_range:       u32,
    pub missionary_range:    u32,
    pub pioneering_range:    u32,
    pub scouting_range:      u32,
    /// Seek-and-destroy range before any fallback has been tried.
    pub seek_near_range:     u32,
    /// Seek-and-destroy range once every other land mission has failed.
    pub seek_far_range:      u32,
    pub wander_range:        u32,

    /// Scouts wanted while `turn.age <= early_age_limit`.
    pub early_scouts:        u32,
    pub late_scouts:         u32,
    pub early_age_limit:     u8,

    /// Average workers per colony above which another builder is wanted.
    pub colony_size_threshold: f64,

    /// The urgent list holds `ceil(N / urgent_fraction)` transportables …
    pub urgent_fraction:     u32,
    /// … but never fewer than this many.
    pub urgent_minimum:      u32,

    /// Added to a transportable's priority each cycle it waits in supply.
    pub priority_bump:       u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            building_range:        5,
            cash_in_range:         20,
            missionary_range:      20,
            pioneering_range:      10,
            scouting_range:        20,
            seek_near_range:       8,
            seek_far_range:        16,
            wander_range:          12,
            early_scouts:          3,
            late_scouts:           1,
            early_age_limit:       1,
            colony_size_threshold: std::f64::consts::E,
            urgent_fraction:       10,
            urgent_minimum:        2,
            priority_bump:         10,
        }
    }
}

impl PlannerConfig {
    /// Size of the urgent list for a supply pool of `n` transportables.
    ///
    /// `max(urgent_minimum, ceil(n / urgent_fraction))`, capped at `n`.
    pub fn urgent_len(&self, n: usize) -> usize {
        let fraction = self.urgent_fraction.max(1) as usize;
        n.div_ceil(fraction).max(self.urgent_minimum as usize).min(n)
    }

    /// Scouts wanted in the given game age.
    pub fn scouts_for_age(&self, age: u8) -> u32 {
        if age <= self.early_age_limit { self.early_scouts } else { self.late_scouts }
    }
}
