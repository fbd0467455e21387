//! The `Planner` struct and its turn loop.

use tp_core::{AgentId, PlanRng, PlannerConfig, Transportable, Turn};
use tp_mission::{MissionBook, MissionCatalogue};
use tp_spatial::DistanceOracle;

use crate::cycle::Cycle;
use crate::execute::do_missions;
use crate::{CycleState, ExecutionReport, FactionWorld, ImprovementMap, MissionExecutor, PlanObserver, RetargetOutcome};

/// Allocation cycles per turn, each followed by an execution phase.
pub const CYCLES_PER_TURN: usize = 2;

/// Summary of one [`Planner::start_turn`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub turn:      Turn,
    pub cycles:    usize,
    pub execution: ExecutionReport,
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Mission planner for one faction.
///
/// `Planner<O, C>` owns the faction's world and mission book and drives the
/// turn:
///
/// 1. **Initialize** (first turn only): ships carrying colonists get a
///    colony site; everyone else a fallback mission.
/// 2. **Improvement map**: prune colony improvement plans and index the best
///    per tile.
/// 3. **Cycle**, twice: rebuild the wish registry, verify claims, rebuild the
///    transport index, bump waiting priorities, allocate missions and match
///    cargo to carriers; then hand every mission to the executor.
/// 4. **End**: drop the cycle state and the improvement map.
///
/// Create via [`PlannerBuilder`][crate::PlannerBuilder].
pub struct Planner<O: DistanceOracle, C: MissionCatalogue> {
    /// Search ranges, quota constants, urgent-list sizing.
    pub config:       PlannerConfig,
    /// The turn the next call to [`start_turn`][Self::start_turn] plans.
    pub turn:         Turn,
    pub world:        FactionWorld,
    /// One mission slot per agent, parallel to `world.agents`.
    pub missions:     MissionBook,
    pub oracle:       O,
    pub catalogue:    C,
    pub rng:          PlanRng,
    pub improvements: ImprovementMap,
    pub(crate) cycle:       Option<CycleState>,
    pub(crate) initialized: bool,
}

impl<O: DistanceOracle, C: MissionCatalogue> Planner<O, C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Plan and execute the current turn.
    ///
    /// Planning never fails: agents that cannot be planned for are excluded
    /// or idled, and executor errors are logged, reported to `observer`, and
    /// counted in the returned report.
    pub fn start_turn<X, B>(&mut self, executor: &mut X, observer: &mut B) -> TurnReport
    where
        X: MissionExecutor + ?Sized,
        B: PlanObserver + ?Sized,
    {
        let turn = self.turn;
        observer.on_turn_start(turn);
        if turn.is_first() && !self.initialized {
            self.initialize_missions();
        }
        self.build_improvement_map();

        let mut report = TurnReport { turn, ..TurnReport::default() };
        for pass in 0..CYCLES_PER_TURN {
            let state = self.run_cycle();
            observer.on_cycle_end(turn, pass, state);
            report.cycles += 1;
            report.execution.absorb(self.execute(executor, observer));
        }
        self.end_turn();

        tracing::debug!(
            "{turn}: {} cycles, {} missions executed, {} failed",
            report.cycles,
            report.execution.executed,
            report.execution.failed,
        );
        observer.on_turn_end(turn, &report);
        report
    }

    /// Move on to the following turn.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.next();
    }

    /// One allocation cycle: rebuild every derived index from the world,
    /// then give out missions and match transport.  The state stays
    /// readable through [`cycle_state`][Self::cycle_state] until the turn
    /// ends.
    pub fn run_cycle(&mut self) -> &CycleState {
        let mut state = self.rebuild_state();
        state.index.bump_priorities(self.config.priority_bump, &mut self.world.agents, &mut self.world.goods);
        self.with_state(&mut state, |cycle| cycle.give_normal_missions());
        self.cycle.insert(state)
    }

    /// Hand every mission to `executor`: non-transport first, then
    /// transport.
    pub fn execute<X, B>(&mut self, executor: &mut X, observer: &mut B) -> ExecutionReport
    where
        X: MissionExecutor + ?Sized,
        B: PlanObserver + ?Sized,
    {
        let ctx = self.world.ctx(self.turn, &self.oracle);
        do_missions(executor, observer, &ctx, &mut self.missions)
    }

    /// The most recent cycle's registry, index, quotas, and reasons.
    pub fn cycle_state(&self) -> Option<&CycleState> {
        self.cycle.as_ref()
    }

    /// Drop everything derived for this turn.
    pub fn end_turn(&mut self) {
        self.cycle = None;
        self.improvements.clear();
    }

    /// Rebuild the tile-improvement map from the colonies' plans.
    pub fn build_improvement_map(&mut self) {
        self.improvements = ImprovementMap::build(&mut self.world.colonies);
    }

    /// First-turn setup.  Runs at most once per planner.
    pub fn initialize_missions(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.with_cycle(|cycle| cycle.initialize_missions());
    }

    /// Give `t`, carried by `carrier`, somewhere useful to go.
    ///
    /// Uses the current cycle's registry, index and quotas, building a fresh
    /// cycle state if none is live.  A state built here does not bump
    /// transport priorities.
    pub fn retarget_cargo(&mut self, t: Transportable, carrier: AgentId) -> RetargetOutcome {
        self.with_cycle(|cycle| cycle.retarget_cargo(t, carrier))
    }

    /// The supply entry `carrier` should fetch next, from the current cycle's
    /// index.  `None` outside a cycle.
    pub fn best_transportable(&self, carrier: AgentId) -> Option<Transportable> {
        let state = self.cycle.as_ref()?;
        let ctx = self.world.ctx(self.turn, &self.oracle);
        state.index.best_transportable(carrier, &ctx)
    }

    // ── Cycle plumbing ────────────────────────────────────────────────────

    fn rebuild_state(&mut self) -> CycleState {
        CycleState::rebuild(
            self.turn,
            &self.config,
            &mut self.world,
            &self.missions,
            &self.oracle,
            &self.catalogue,
            self.improvements.len(),
        )
    }

    /// Run `f` against the live cycle state, building one if needed.
    pub(crate) fn with_cycle<R>(&mut self, f: impl FnOnce(&mut Cycle<'_>) -> R) -> R {
        let mut state = match self.cycle.take() {
            Some(state) => state,
            None => self.rebuild_state(),
        };
        let out = self.with_state(&mut state, f);
        self.cycle = Some(state);
        out
    }

    /// Split `self` into a [`Cycle`] over `state`.
    fn with_state<R>(&mut self, state: &mut CycleState, f: impl FnOnce(&mut Cycle<'_>) -> R) -> R {
        let mut cycle = Cycle {
            turn:         self.turn,
            config:       &self.config,
            world:        &mut self.world,
            missions:     &mut self.missions,
            oracle:       &self.oracle,
            catalogue:    &self.catalogue,
            rng:          &mut self.rng,
            improvements: &mut self.improvements,
            state,
        };
        f(&mut cycle)
    }
}
