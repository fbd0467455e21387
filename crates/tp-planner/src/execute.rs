//! The execution boundary: running missions after they are assigned.

use tp_core::AgentId;
use tp_mission::{Mission, MissionBook, PlanContext};

use crate::{PlanObserver, PlannerResult};

/// Carries out one agent's mission for the turn.
///
/// Planning only decides; an executor acts (moves units, loads cargo,
/// founds colonies).  Errors are logged and counted by the planner and
/// never stop the phase.
pub trait MissionExecutor {
    fn execute(&mut self, agent: AgentId, mission: &mut Mission, ctx: &PlanContext<'_>) -> PlannerResult<()>;
}

/// A [`MissionExecutor`] that does nothing.
pub struct NoopExecutor;

impl MissionExecutor for NoopExecutor {
    fn execute(&mut self, _agent: AgentId, _mission: &mut Mission, _ctx: &PlanContext<'_>) -> PlannerResult<()> {
        Ok(())
    }
}

/// Outcome of one execution phase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub executed: usize,
    pub failed:   usize,
}

impl ExecutionReport {
    pub fn absorb(&mut self, other: ExecutionReport) {
        self.executed += other.executed;
        self.failed += other.failed;
    }
}

/// Run every mission: non-transport missions first, so units are where
/// they want to be picked up before carriers move, then transport missions.
pub fn do_missions<X, B>(
    executor: &mut X,
    observer: &mut B,
    ctx:      &PlanContext<'_>,
    missions: &mut MissionBook,
) -> ExecutionReport
where
    X: MissionExecutor + ?Sized,
    B: PlanObserver + ?Sized,
{
    let mut report = ExecutionReport::default();
    for transport_phase in [false, true] {
        for agent in ctx.agents.agent_ids() {
            let Some(mission) = missions.get_mut(agent) else {
                continue;
            };
            if mission.as_transport().is_some() != transport_phase {
                continue;
            }
            report.executed += 1;
            if let Err(e) = executor.execute(agent, mission, ctx) {
                tracing::warn!("mission execution failed for {agent}: {e}");
                observer.on_execution_error(agent, &e);
                report.failed += 1;
            }
        }
    }
    report
}
