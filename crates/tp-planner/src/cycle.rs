//! Per-cycle derived state and the mutable view a cycle works through.

use std::fmt;

use tp_colony::WishRegistry;
use tp_core::{AgentId, PlanRng, PlannerConfig, Transportable, Turn, WishId};
use tp_mission::{transportable, Mission, MissionBook, MissionCatalogue};
use tp_spatial::DistanceOracle;
use tp_transport::{verify_claims, TransportIndex};

use crate::{FactionWorld, ImprovementMap, Quotas};

// ── Reason ────────────────────────────────────────────────────────────────────

/// Why an agent ended the cycle with the mission it has.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    /// Not placed yet, or gone.
    Invalid,
    /// Sole worker of the named colony.
    Vital(String),
    /// Riding as queued cargo of a transport mission.
    InMission,
    /// Kept a valid mission from an earlier cycle.
    Valid,
    AtSea,
    /// Got a mission this cycle.
    New,
    /// Nothing useful found; idling.
    Unused,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Invalid      => f.write_str("Invalid"),
            Reason::Vital(name)  => write!(f, "Vital-to-{name}"),
            Reason::InMission    => f.write_str("In-Mission"),
            Reason::Valid        => f.write_str("Valid"),
            Reason::AtSea        => f.write_str("At-Sea"),
            Reason::New          => f.write_str("New"),
            Reason::Unused       => f.write_str("UNUSED"),
        }
    }
}

// ── CycleState ────────────────────────────────────────────────────────────────

/// What one planning cycle derived from the world.
///
/// Rebuilt from scratch at the start of every cycle and readable through
/// [`Planner::cycle_state`][crate::Planner::cycle_state] until the turn
/// ends.
#[derive(Clone, Debug)]
pub struct CycleState {
    pub registry:     WishRegistry,
    pub index:        TransportIndex,
    pub quotas:       Quotas,
    /// Claims cleared by claim verification at the start of the cycle.
    pub stale_claims: usize,
    reasons:          Vec<Option<Reason>>,
}

impl CycleState {
    /// Wish registry, claim verification, transport index, then quotas.
    ///
    /// Priorities are left alone; [`Planner::run_cycle`][crate::Planner::run_cycle]
    /// bumps them once per allocation cycle.
    pub(crate) fn rebuild(
        turn:         Turn,
        config:       &PlannerConfig,
        world:        &mut FactionWorld,
        missions:     &MissionBook,
        oracle:       &dyn DistanceOracle,
        catalogue:    &dyn MissionCatalogue,
        improvements: usize,
    ) -> Self {
        let registry = WishRegistry::rebuild(&world.ruleset, &world.colonies, &world.wishes);
        let stale_claims = verify_claims(&mut world.agents, &mut world.goods, &world.colonies, missions);
        let index = {
            let ctx = world.ctx(turn, oracle);
            TransportIndex::build(&ctx, missions, catalogue)
        };
        let quotas = Quotas::compute(config, turn, &world.rules, &world.colonies, improvements);

        Self {
            registry,
            index,
            quotas,
            stale_claims,
            reasons: vec![None; world.agents.count],
        }
    }

    pub fn reason(&self, agent: AgentId) -> Option<&Reason> {
        self.reasons.get(agent.index()).and_then(Option::as_ref)
    }

    /// Every recorded reason in agent order.
    pub fn reasons(&self) -> impl Iterator<Item = (AgentId, &Reason)> {
        self.reasons
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().map(|r| (AgentId(i as u32), r)))
    }

    pub(crate) fn set_reason(&mut self, agent: AgentId, reason: Reason) {
        if let Some(slot) = self.reasons.get_mut(agent.index()) {
            *slot = Some(reason);
        }
    }
}

// ── Cycle ─────────────────────────────────────────────────────────────────────

/// Split borrows of a planner for the duration of one operation.
///
/// Read-only queries build a [`PlanContext`][tp_mission::PlanContext] from
/// `world` alone, so missions, the RNG and the cycle state stay writable
/// while it is live.
pub(crate) struct Cycle<'a> {
    pub turn:         Turn,
    pub config:       &'a PlannerConfig,
    pub world:        &'a mut FactionWorld,
    pub missions:     &'a mut MissionBook,
    pub oracle:       &'a dyn DistanceOracle,
    pub catalogue:    &'a dyn MissionCatalogue,
    pub rng:          &'a mut PlanRng,
    pub improvements: &'a mut ImprovementMap,
    pub state:        &'a mut CycleState,
}

impl Cycle<'_> {
    /// Replace the agent's mission.  A wish the old mission held is released
    /// so the registry can offer it again next cycle.
    pub(crate) fn assign(&mut self, agent: AgentId, mission: Mission) {
        let kind = mission.kind();
        if let Some(old) = self.missions.assign(agent, mission) {
            self.release(agent, &old);
        }
        tracing::debug!("{agent} -> {kind}");
    }

    /// Drop the agent's mission, if any.
    pub(crate) fn abort(&mut self, agent: AgentId) {
        if let Some(old) = self.missions.abort(agent) {
            self.release(agent, &old);
        }
    }

    /// Assign a mission found this cycle and put the agent up for transport
    /// if it now needs a carrier.
    pub(crate) fn assign_new(&mut self, agent: AgentId, mission: Mission) {
        self.assign(agent, mission);
        self.state.set_reason(agent, Reason::New);
        let t = Transportable::Agent(agent);
        let source = {
            let ctx = self.world.ctx(self.turn, self.oracle);
            transportable::requests_transport(t, &ctx, self.missions)
                .then(|| transportable::source(t, &ctx))
                .flatten()
        };
        if let Some(source) = source {
            self.state.index.add_supply(t, source);
        }
    }

    /// `true` if the agent holds a mission that is still valid.
    pub(crate) fn has_valid_mission(&self, agent: AgentId) -> bool {
        let ctx = self.world.ctx(self.turn, self.oracle);
        self.missions.get(agent).is_some_and(|m| m.is_valid(agent, &ctx, self.catalogue))
    }

    fn release(&mut self, agent: AgentId, old: &Mission) {
        let Mission::WishRealization { wish, .. } = *old else {
            return;
        };
        if self.missions.get(agent).is_some_and(|m| matches!(m, Mission::WishRealization { wish: w, .. } if *w == wish)) {
            return;
        }
        self.unbind(wish, agent);
    }

    fn unbind(&mut self, wish: WishId, agent: AgentId) {
        if let Some(w) = self.world.wishes.get_mut(wish) {
            if w.transportable == Some(Transportable::Agent(agent)) {
                w.transportable = None;
            }
        }
    }
}
