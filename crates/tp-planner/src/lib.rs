//! `tp-planner` — per-turn mission allocation and transport matching for one
//! non-human faction.
//!
//! # Turn loop
//!
//! ```text
//! start_turn:
//!   ① Initialize   — first turn only: loaded ships head for a colony site,
//!                    everyone else gets a fallback mission.
//!   ② Improvements — prune colony improvement plans, index the best per tile.
//!   ③ Cycle ×2     — wish registry → claim verification → transport index
//!                    → priority bump → classify → quota passes (builder,
//!                    scout, pioneer) → fallback chains (land, naval)
//!                    → transport matcher → idle the rest;
//!                    then execute: non-transport missions, then transport.
//!   ④ End          — drop the cycle state and the improvement map.
//! ```
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`planner`]       | `Planner`, `TurnReport`                                   |
//! | [`builder`]       | `PlannerBuilder` (validates the mission book length)      |
//! | [`world`]         | `FactionWorld` — everything a faction owns but missions   |
//! | [`cycle`]         | `CycleState`, `Reason`                                    |
//! | [`quota`]         | `Quotas`, `builders_needed`                               |
//! | [`suitability`]   | Builder / scout / pioneer scoring                         |
//! | [`improvements`]  | `ImprovementMap`                                          |
//! | [`retarget`]      | `RetargetOutcome`                                         |
//! | [`execute`]       | `MissionExecutor`, `NoopExecutor`, `ExecutionReport`      |
//! | [`observer`]      | `PlanObserver`, `NoopObserver`                            |
//! | [`config`]        | `load_config`, `parse_config` (TOML)                      |
//! | [`error`]         | `PlannerError`, `PlannerResult<T>`                        |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | [`plan_factions`] runs one planner per Rayon task.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tp_mission::TargetCatalogue;
//! use tp_planner::{FactionWorld, NoopExecutor, NoopObserver, PlannerBuilder};
//! use tp_spatial::MapOracle;
//!
//! let mut planner = PlannerBuilder::new(world, MapOracle::new(map, 2), TargetCatalogue::new())
//!     .seed(42)
//!     .build()?;
//! let report = planner.start_turn(&mut NoopExecutor, &mut NoopObserver);
//! planner.advance_turn();
//! ```

pub mod builder;
pub mod config;
pub mod cycle;
pub mod error;
pub mod execute;
pub mod improvements;
pub mod observer;
pub mod planner;
pub mod quota;
pub mod retarget;
pub mod suitability;
pub mod world;

mod allocator;
mod factories;
mod initialize;
mod matcher;


pub use builder::PlannerBuilder;
pub use config::{load_config, parse_config};
pub use cycle::{CycleState, Reason};
pub use error::{PlannerError, PlannerResult};
pub use execute::{ExecutionReport, MissionExecutor, NoopExecutor};
pub use improvements::{ImprovementMap, PlanRef};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::{Planner, TurnReport, CYCLES_PER_TURN};
pub use quota::{builders_needed, Quotas};
pub use retarget::RetargetOutcome;
pub use world::FactionWorld;

use tp_mission::MissionCatalogue;
use tp_spatial::DistanceOracle;

/// Plan one turn for each faction and return their reports in input order.
///
/// Planners share nothing mutable, so with the `parallel` feature each runs
/// on its own Rayon task.  `make_executor` is called once per planner with
/// its index.
pub fn plan_factions<O, C, X, F>(planners: &mut [Planner<O, C>], make_executor: F) -> Vec<TurnReport>
where
    O: DistanceOracle,
    C: MissionCatalogue,
    X: MissionExecutor,
    F: Fn(usize) -> X + Send + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        planners
            .iter_mut()
            .enumerate()
            .map(|(i, planner)| planner.start_turn(&mut make_executor(i), &mut NoopObserver))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        planners
            .par_iter_mut()
            .enumerate()
            .map(|(i, planner)| planner.start_turn(&mut make_executor(i), &mut NoopObserver))
            .collect()
    }
}
