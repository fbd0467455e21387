//! The faction state a planner works on.

use tp_agent::{AgentStore, AgentStoreBuilder};
use tp_colony::{ColonyStore, GoodsStore, WishStore};
use tp_core::{FactionRules, Ruleset, Turn};
use tp_mission::PlanContext;
use tp_spatial::DistanceOracle;

/// Everything one faction owns, minus its missions.
///
/// Missions live in a separate [`MissionBook`][tp_mission::MissionBook] so a
/// [`PlanContext`] borrowed from here can stay alive while missions are
/// reassigned.
pub struct FactionWorld {
    pub ruleset:  Ruleset,
    pub rules:    FactionRules,
    pub agents:   AgentStore,
    pub colonies: ColonyStore,
    pub goods:    GoodsStore,
    pub wishes:   WishStore,
}

impl FactionWorld {
    pub fn new(ruleset: Ruleset, agents: AgentStore) -> Self {
        Self {
            ruleset,
            rules:    FactionRules::default(),
            agents,
            colonies: ColonyStore::new(),
            goods:    GoodsStore::new(),
            wishes:   WishStore::new(),
        }
    }

    /// A faction with no agents, colonies, or known types.
    pub fn empty() -> Self {
        Self::new(Ruleset::default(), AgentStoreBuilder::new().build())
    }

    /// Borrow a read-only snapshot for `turn`.
    pub fn ctx<'a>(&'a self, turn: Turn, oracle: &'a dyn DistanceOracle) -> PlanContext<'a> {
        PlanContext {
            turn,
            ruleset:  &self.ruleset,
            rules:    &self.rules,
            agents:   &self.agents,
            colonies: &self.colonies,
            goods:    &self.goods,
            wishes:   &self.wishes,
            oracle,
        }
    }
}
