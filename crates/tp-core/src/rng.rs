//! Deterministic RNG for planning.
//!
//! The planner must reproduce the same assignments from the same input, so
//! every random draw goes through one seeded `PlanRng` owned by the faction's
//! planner.  Today the only draw is the WanderHostile target pick.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Faction-level planning RNG.
pub struct PlanRng(SmallRng);

impl PlanRng {
    pub fn new(seed: u64) -> Self {
        PlanRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Pick one candidate uniformly; `None` if there are none.
    #[inline]
    pub fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        candidates.choose(&mut self.0)
    }
}

impl std::fmt::Debug for PlanRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PlanRng")
    }
}
