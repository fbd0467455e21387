//! `tp-core` — foundational types for the `turnplan` faction planner.
//!
//! This crate is a dependency of every other `tp-*` crate.  It intentionally
//! has no `tp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TileId`, `ColonyId`, `ParcelId`, `WishId`, …      |
//! | [`location`]    | `Location`, `Transportable`                                   |
//! | [`time`]        | `Turn`, `Turns`                                               |
//! | [`cost`]        | `CostPolicy` enum                                             |
//! | [`rng`]         | `PlanRng`                                                     |
//! | [`rules`]       | `Ruleset`, `GoodsTypeInfo`, `FactionRules`                    |
//! | [`config`]      | `PlannerConfig`                                               |
//! | [`error`]       | `PlanError`, `PlanResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `tp-planner` for TOML configuration.           |

pub mod config;
pub mod cost;
pub mod error;
pub mod ids;
pub mod location;
pub mod rng;
pub mod rules;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use cost::CostPolicy;
pub use error::{PlanError, PlanResult};
pub use ids::{AgentId, ColonyId, ContiguityId, GoodsTypeId, ParcelId, TileId, UnitTypeId, WishId};
pub use location::{Location, Transportable};
pub use rng::PlanRng;
pub use rules::{FactionRules, GoodsTypeInfo, Ruleset};
pub use time::{Turn, Turns};
