//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use tp_agent::{AgentProfile, AgentStoreBuilder, UnitState};
//! use tp_core::{AgentId, ColonyId, Location, UnitTypeId};
//!
//! let store = AgentStoreBuilder::new()
//!     .agent(AgentProfile::colonist(UnitTypeId(0), 0), Location::Colony(ColonyId(0)))
//!     .agent(
//!         AgentProfile::colonist(UnitTypeId(1), 2),
//!         Location::WorkSite { colony: ColonyId(0), slot: 3 },
//!     )
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(store.state[1], UnitState::InColony);
//! ```

use tp_core::{AgentId, Location};

use crate::{AgentProfile, AgentStore, UnitState};

/// Fluent builder for [`AgentStore`].
///
/// Agents receive sequential ids in the order they are added.  The initial
/// state is derived from the location (work sites mean `InColony`) and can be
/// overridden with [`state`](Self::state).
#[derive(Default)]
pub struct AgentStoreBuilder {
    profile:  Vec<AgentProfile>,
    location: Vec<Location>,
    state:    Vec<UnitState>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for `count` agents.
    pub fn with_capacity(count: usize) -> Self {
        Self {
            profile:  Vec::with_capacity(count),
            location: Vec::with_capacity(count),
            state:    Vec::with_capacity(count),
        }
    }

    /// Add an agent and return its id.
    pub fn add(&mut self, profile: AgentProfile, location: Location) -> AgentId {
        let id = AgentId(self.profile.len() as u32);
        let state = match location {
            Location::WorkSite { .. } => UnitState::InColony,
            _ => UnitState::Active,
        };
        self.profile.push(profile);
        self.location.push(location);
        self.state.push(state);
        id
    }

    /// Chainable form of [`add`](Self::add).
    pub fn agent(mut self, profile: AgentProfile, location: Location) -> Self {
        self.add(profile, location);
        self
    }

    /// Override the state of an agent added earlier.  Out-of-range ids are
    /// ignored.
    pub fn state(mut self, agent: AgentId, state: UnitState) -> Self {
        if let Some(slot) = self.state.get_mut(agent.index()) {
            *slot = state;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.profile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profile.is_empty()
    }

    pub fn build(self) -> AgentStore {
        AgentStore::from_parts(self.profile, self.location, self.state)
    }
}
