//! Read-only world state passed to every mission query.

use tp_agent::AgentStore;
use tp_colony::{Colony, ColonyStore, GoodsStore, WishStore};
use tp_core::{AgentId, CostPolicy, FactionRules, Location, Ruleset, Turn, Turns};
use tp_spatial::{DistanceOracle, Mover};

/// A read-only snapshot of the faction's world for one planning step.
///
/// Construct it from borrowed parts whenever a decision has to be made and
/// drop it before applying the decision; the planner never mutates these
/// stores while a `PlanContext` is live.
#[derive(Copy, Clone)]
pub struct PlanContext<'a> {
    pub turn:     Turn,
    pub ruleset:  &'a Ruleset,
    pub rules:    &'a FactionRules,
    pub agents:   &'a AgentStore,
    pub colonies: &'a ColonyStore,
    pub goods:    &'a GoodsStore,
    pub wishes:   &'a WishStore,
    pub oracle:   &'a dyn DistanceOracle,
}

impl<'a> PlanContext<'a> {
    // ── Locations ─────────────────────────────────────────────────────────

    /// Replace `Aboard(carrier)` with the carrier's own location so the
    /// oracle can answer.
    #[inline]
    pub fn resolve(&self, location: Location) -> Location {
        match location {
            Location::Aboard(c) if self.agents.contains(c) => self.agents.location[c.index()],
            other => other,
        }
    }

    /// The colony at `location`, whether addressed as a colony, a work site,
    /// or the colony's tile.
    pub fn colony_at(&self, location: Location) -> Option<&'a Colony> {
        match self.resolve(location) {
            Location::Tile(t) => self.colonies.iter().find(|c| c.tile == t),
            other => other.colony().and_then(|c| self.colonies.get(c)),
        }
    }

    // ── Movers ────────────────────────────────────────────────────────────

    /// How `agent` moves on its own.
    pub fn mover(&self, agent: AgentId) -> Mover {
        let profile = self.agents.profile(agent);
        if profile.caps.naval {
            Mover::naval(profile.moves_per_turn)
        } else {
            Mover::land(profile.moves_per_turn)
        }
    }

    /// How `agent` moves if a ship carries it over water: at the carrier's
    /// speed when already aboard one, otherwise at its own.
    pub fn carried_mover(&self, agent: AgentId) -> Mover {
        if self.agents.is_naval(agent) {
            return self.mover(agent);
        }
        let speed_of = self.agents.carrier_of(agent).unwrap_or(agent);
        Mover::amphibious(self.agents.profile(speed_of).moves_per_turn)
    }

    // ── Travel time ───────────────────────────────────────────────────────

    #[inline]
    pub fn turns(&self, from: Location, to: Location, mover: Mover, policy: CostPolicy) -> Turns {
        self.oracle.turns_to_reach(self.resolve(from), self.resolve(to), mover, policy)
    }

    /// Turns for `agent` to reach `to` under its own power.
    pub fn turns_for(&self, agent: AgentId, to: Location, policy: CostPolicy) -> Turns {
        self.turns(self.agents.resolved_location(agent), to, self.mover(agent), policy)
    }

    /// Turns for `agent` to reach `to` if carried where needed.
    pub fn turns_carried(&self, agent: AgentId, to: Location, policy: CostPolicy) -> Turns {
        self.turns(self.agents.resolved_location(agent), to, self.carried_mover(agent), policy)
    }
}
