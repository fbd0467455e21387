//! `tp-mission` — the mission catalogue and everything a mission needs to
//! judge itself.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                      |
//! |-------------------|---------------------------------------------------------------|
//! | [`mission`]       | `Mission` sum type, `MissionKind`, `InvalidReason`            |
//! | [`transport`]     | `TransportMission`, `Cargo`, `CargoLeg`                       |
//! | [`transportable`] | Source / destination / priority / claim accessors             |
//! | [`book`]          | `MissionBook` — one mission slot per agent                    |
//! | [`context`]       | `PlanContext<'a>` — read-only world snapshot                  |
//! | [`catalogue`]     | `MissionCatalogue` trait, capability rules                    |
//! | [`targets`]       | `TargetCatalogue` (candidate lists, CSV loading)              |
//! | [`noop`]          | `NoTargets` — catalogue that never finds a target             |
//! | [`error`]         | `MissionError`, `MissionResult<T>`                            |
//!
//! # Design notes
//!
//! Missions are a closed enum: the planner matches on the variant instead of
//! asking the mission "what are you".  Anything that depends on game
//! knowledge the planner does not have (where to found a colony, which
//! settlement to convert, whom to attack) goes through the
//! [`MissionCatalogue`] trait.  "No target" is an ordinary `None`, never an
//! error.

pub mod book;
pub mod catalogue;
pub mod context;
pub mod error;
pub mod mission;
pub mod noop;
pub mod targets;
pub mod transport;
pub mod transportable;


pub use book::MissionBook;
pub use catalogue::{capability_reason, MissionCatalogue};
pub use context::PlanContext;
pub use error::{MissionError, MissionResult};
pub use mission::{InvalidReason, Mission, MissionKind};
pub use noop::NoTargets;
pub use targets::{load_targets_csv, load_targets_reader, TargetCatalogue};
pub use transport::{Cargo, CargoLeg, TransportMission};
