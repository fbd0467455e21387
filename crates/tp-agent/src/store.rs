//! Core agent storage.
//!
//! Every `Vec` field of [`AgentStore`] has exactly `count` elements and the
//! `AgentId` is the index into all of them:
//!
//! ```ignore
//! let here = store.location[agent.index()];
//! ```

use tp_core::{AgentId, Location, UnitTypeId};

/// Transport priority every agent starts with.  Goods parcels carry their own.
pub const BASE_PRIORITY: u32 = 50;

// ── Capabilities ──────────────────────────────────────────────────────────────

/// Static flags describing what an agent can do.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    pub naval:          bool,
    /// Can carry cargo (ships, wagon trains).
    pub carrier:        bool,
    /// A person who can found colonies and work in them.
    pub colonist:       bool,
    pub offensive:      bool,
    pub defensive:      bool,
    pub treasure:       bool,
    /// Currently equipped to scout (mounted).
    pub scout:          bool,
    pub expert_scout:   bool,
    /// Currently equipped to improve terrain (tools).
    pub pioneer:        bool,
    pub expert_pioneer: bool,
    pub missionary:     bool,
    pub privateer:      bool,
}

impl Capabilities {
    pub fn colonist() -> Self {
        Self { colonist: true, ..Self::default() }
    }

    pub fn soldier() -> Self {
        Self { colonist: true, offensive: true, defensive: true, ..Self::default() }
    }

    pub fn ship() -> Self {
        Self { naval: true, carrier: true, ..Self::default() }
    }

    pub fn wagon() -> Self {
        Self { carrier: true, ..Self::default() }
    }
}

// ── AgentProfile ──────────────────────────────────────────────────────────────

/// Type, skill, and equipment of one agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentProfile {
    pub unit_type:      UnitTypeId,
    pub caps:           Capabilities,
    /// `> 0` expert, `0` free colonist, `< 0` servant or criminal.
    pub skill:          i8,
    /// Carries role equipment (muskets, horses, tools, …).
    pub equipped:       bool,
    pub moves_per_turn: u32,
    /// Cargo slots; zero for non-carriers.
    pub cargo_slots:    u32,
}

impl AgentProfile {
    pub fn colonist(unit_type: UnitTypeId, skill: i8) -> Self {
        Self {
            unit_type,
            caps: Capabilities::colonist(),
            skill,
            equipped: false,
            moves_per_turn: 1,
            cargo_slots: 0,
        }
    }

    pub fn ship(unit_type: UnitTypeId, cargo_slots: u32, moves_per_turn: u32) -> Self {
        Self {
            unit_type,
            caps: Capabilities::ship(),
            skill: 0,
            equipped: false,
            moves_per_turn,
            cargo_slots,
        }
    }

    pub fn wagon(unit_type: UnitTypeId, cargo_slots: u32) -> Self {
        Self {
            unit_type,
            caps: Capabilities::wagon(),
            skill: 0,
            equipped: false,
            moves_per_turn: 1,
            cargo_slots,
        }
    }

    /// Replace the capability flags.
    pub fn with_caps(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    pub fn with_equipment(mut self) -> Self {
        self.equipped = true;
        self
    }
}

// ── UnitState ─────────────────────────────────────────────────────────────────

/// Lifecycle and activity state as far as mission allocation cares.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitState {
    /// Created but not yet placed; skipped by the planner.
    Uninitialized,
    #[default]
    Active,
    /// Working a slot inside a colony.
    InColony,
    /// Sailing between the map and the home port.
    AtSea,
    /// Destroyed or otherwise gone.
    Disposed,
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for the faction's agents.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Profile ───────────────────────────────────────────────────────────
    pub profile: Vec<AgentProfile>,

    // ── Position ──────────────────────────────────────────────────────────
    pub location: Vec<Location>,
    pub state:    Vec<UnitState>,

    // ── Transport ─────────────────────────────────────────────────────────
    /// Carrier that has claimed this agent as cargo.  At most one.
    pub transport:          Vec<Option<AgentId>>,
    /// Grows each cycle the agent waits for a carrier.
    pub transport_priority: Vec<u32>,
}

impl AgentStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn profile(&self, agent: AgentId) -> &AgentProfile {
        &self.profile[agent.index()]
    }

    #[inline]
    pub fn caps(&self, agent: AgentId) -> Capabilities {
        self.profile[agent.index()].caps
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Placed and not disposed.
    #[inline]
    pub fn is_alive(&self, agent: AgentId) -> bool {
        self.contains(agent)
            && !matches!(self.state[agent.index()], UnitState::Uninitialized | UnitState::Disposed)
    }

    pub fn dispose(&mut self, agent: AgentId) {
        self.state[agent.index()] = UnitState::Disposed;
        self.transport[agent.index()] = None;
    }

    // ── Capability shortcuts ──────────────────────────────────────────────

    #[inline]
    pub fn is_naval(&self, agent: AgentId) -> bool {
        self.caps(agent).naval
    }

    #[inline]
    pub fn is_carrier(&self, agent: AgentId) -> bool {
        self.caps(agent).carrier
    }

    /// A carrier that travels over land (wagon train).
    #[inline]
    pub fn is_land_carrier(&self, agent: AgentId) -> bool {
        let caps = self.caps(agent);
        caps.carrier && !caps.naval
    }

    // ── Position helpers ──────────────────────────────────────────────────

    /// The carrier this agent is physically on board, if any.
    #[inline]
    pub fn carrier_of(&self, agent: AgentId) -> Option<AgentId> {
        self.location[agent.index()].carrier()
    }

    /// Agents currently on board `carrier`, in id order.
    pub fn passengers(&self, carrier: AgentId) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids()
            .filter(move |&a| self.location[a.index()] == Location::Aboard(carrier) && self.is_alive(a))
    }

    /// The agent's location with one level of `Aboard` resolved to the
    /// carrier's own location.
    pub fn resolved_location(&self, agent: AgentId) -> Location {
        match self.location[agent.index()] {
            Location::Aboard(c) if self.contains(c) => self.location[c.index()],
            other => other,
        }
    }

    /// On a map tile (directly or aboard a carrier that is).
    pub fn is_on_map(&self, agent: AgentId) -> bool {
        matches!(
            self.resolved_location(agent),
            Location::Tile(_) | Location::Colony(_) | Location::WorkSite { .. }
        )
    }

    /// In the home port (directly or aboard a ship docked there).
    pub fn in_home_port(&self, agent: AgentId) -> bool {
        self.resolved_location(agent).is_home_port()
    }

    // ── Crate-private constructor used by AgentStoreBuilder ──────────────

    pub(crate) fn from_parts(
        profile:  Vec<AgentProfile>,
        location: Vec<Location>,
        state:    Vec<UnitState>,
    ) -> Self {
        let count = profile.len();
        Self {
            count,
            profile,
            location,
            state,
            transport: vec![None; count],
            transport_priority: vec![BASE_PRIORITY; count],
        }
    }
}
