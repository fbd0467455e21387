//! Planner observer trait for progress reporting and data collection.

use tp_core::{AgentId, Turn};

use crate::{CycleState, PlannerError, TurnReport};

/// Callbacks invoked by [`Planner::start_turn`][crate::Planner::start_turn].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — reason tally
///
/// ```rust,ignore
/// struct UnusedCounter(usize);
///
/// impl PlanObserver for UnusedCounter {
///     fn on_cycle_end(&mut self, _turn: Turn, _pass: usize, state: &CycleState) {
///         self.0 += state.reasons().filter(|(_, r)| **r == Reason::Unused).count();
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called before first-turn initialization and the first cycle.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called after each allocation cycle (`pass` 0 and 1), before its
    /// missions are executed.
    fn on_cycle_end(&mut self, _turn: Turn, _pass: usize, _state: &CycleState) {}

    /// Called for every executor error.  The phase carries on regardless.
    fn on_execution_error(&mut self, _agent: AgentId, _error: &PlannerError) {}

    /// Called once the turn's cycle state has been dropped.
    fn on_turn_end(&mut self, _turn: Turn, _report: &TurnReport) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
