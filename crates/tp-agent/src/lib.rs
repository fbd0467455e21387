//! `tp-agent` — Structure-of-Arrays agent roster for the `turnplan` planner.
//!
//! An agent is anything the faction can order around: colonists, soldiers,
//! ships, wagon trains, treasure trains.  The roster holds what the planner
//! needs to classify and score them; missions are kept elsewhere (see
//! `tp-mission::MissionBook`) so the roster can be borrowed immutably while
//! missions are reassigned.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays), `AgentProfile`, `Capabilities`, `UnitState` |
//! | [`builder`]     | `AgentStoreBuilder` (fluent construction)                 |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use store::{AgentProfile, AgentStore, Capabilities, UnitState, BASE_PRIORITY};
