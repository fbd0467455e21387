//! Fluent builder for constructing a [`Planner`].

use tp_core::{PlanRng, PlannerConfig, Turn};
use tp_mission::{MissionBook, MissionCatalogue};
use tp_spatial::DistanceOracle;

use crate::{config, FactionWorld, ImprovementMap, Planner, PlannerError, PlannerResult};

/// Fluent builder for [`Planner<O, C>`].
///
/// # Required inputs
///
/// - [`FactionWorld`] — ruleset, faction rules, agents, colonies, goods, wishes
/// - `O: DistanceOracle` — travel times (e.g. [`tp_spatial::MapOracle`])
/// - `C: MissionCatalogue` — mission targets (e.g. [`tp_mission::TargetCatalogue`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                              |
/// |-----------------|--------------------------------------|
/// | `.config(c)`    | `PlannerConfig::default()`           |
/// | `.turn(t)`      | `Turn::FIRST`                        |
/// | `.missions(b)`  | An empty slot per agent              |
/// | `.seed(s)`      | `0`                                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut planner = PlannerBuilder::new(world, MapOracle::new(map, 2), targets)
///     .config(load_config("planner.toml")?)
///     .seed(7)
///     .build()?;
/// planner.start_turn(&mut NoopExecutor, &mut NoopObserver);
/// ```
pub struct PlannerBuilder<O: DistanceOracle, C: MissionCatalogue> {
    world:     FactionWorld,
    oracle:    O,
    catalogue: C,
    config:    Option<PlannerConfig>,
    turn:      Turn,
    missions:  Option<MissionBook>,
    seed:      u64,
}

impl<O: DistanceOracle, C: MissionCatalogue> PlannerBuilder<O, C> {
    pub fn new(world: FactionWorld, oracle: O, catalogue: C) -> Self {
        Self {
            world,
            oracle,
            catalogue,
            config:   None,
            turn:     Turn::FIRST,
            missions: None,
            seed:     0,
        }
    }

    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The turn to plan first.  Anything but the first turn skips mission
    /// initialization.
    pub fn turn(mut self, turn: Turn) -> Self {
        self.turn = turn;
        self
    }

    /// Missions carried over from an earlier session (must have one slot
    /// per agent).
    pub fn missions(mut self, missions: MissionBook) -> Self {
        self.missions = Some(missions);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate inputs and return a ready-to-run [`Planner`].
    pub fn build(self) -> PlannerResult<Planner<O, C>> {
        let agent_count = self.world.agents.count;

        let missions = match self.missions {
            Some(book) => {
                if book.len() != agent_count {
                    return Err(PlannerError::AgentCountMismatch {
                        expected: agent_count,
                        got:      book.len(),
                        what:     "mission book",
                    });
                }
                book
            }
            None => MissionBook::new(agent_count),
        };

        let config = self.config.unwrap_or_default();
        config::validate(&config)?;

        Ok(Planner {
            config,
            turn:         self.turn,
            world:        self.world,
            missions,
            oracle:       self.oracle,
            catalogue:    self.catalogue,
            rng:          PlanRng::new(self.seed),
            improvements: ImprovementMap::default(),
            cycle:        None,
            initialized:  false,
        })
    }
}
