//! Mission allocation: the per-cycle pass that gives every agent a mission.
//!
//! ```text
//! classify ─► builder pass ─► scout pass ─► pioneer pass
//!          ─► land fallback ─► naval fallback ─► transport matcher
//!          ─► idle everything left
//! ```

use tp_agent::UnitState;
use tp_core::{AgentId, Transportable};
use tp_mission::{Mission, MissionKind};

use crate::cycle::{Cycle, Reason};
use crate::suitability::{self, UNSUITABLE};

/// Where an agent goes after classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Classification {
    /// Keeps whatever it has, for the given reason.
    Excluded(Reason),
    /// A valid mission; a transport mission with spare room is a matcher
    /// candidate.
    HasValidMission { candidate: bool },
    NeedsMission { naval: bool },
}

impl Cycle<'_> {
    /// Run one allocation pass over every agent.
    pub(crate) fn give_normal_missions(&mut self) {
        let mut land: Vec<AgentId> = Vec::new();
        let mut naval: Vec<AgentId> = Vec::new();
        let mut candidates: Vec<AgentId> = Vec::new();

        for agent in self.world.agents.agent_ids() {
            match self.classify(agent) {
                Classification::Excluded(reason) => self.state.set_reason(agent, reason),
                Classification::HasValidMission { candidate } => {
                    if candidate {
                        candidates.push(agent);
                    }
                    self.state.set_reason(agent, Reason::Valid);
                }
                Classification::NeedsMission { naval: true } => naval.push(agent),
                Classification::NeedsMission { naval: false } => land.push(agent),
            }
        }

        tracing::debug!(
            "{}: colonies={} all-units={} free-land-units={} free-naval-units={} builders={} pioneers={} scouts={} naval-deficit={}",
            self.turn,
            self.world.colonies.len(),
            self.world.agents.count,
            land.len(),
            naval.len(),
            self.state.quotas.builders,
            self.state.quotas.pioneers,
            self.state.quotas.scouts,
            self.state.index.naval_carrier_deficit(),
        );

        for kind in [MissionKind::BuildColony, MissionKind::Scout, MissionKind::Pioneer] {
            self.quota_pass(kind, &mut land);
        }

        land.retain(|&agent| match self.simple_mission(agent) {
            Some(mission) => {
                self.assign_new(agent, mission);
                false
            }
            None => true,
        });

        let mut i = 0;
        while i < naval.len() {
            let carrier = naval[i];
            let Some(mission) = self.simple_mission(carrier) else {
                i += 1;
                continue;
            };
            naval.remove(i);
            let room = mission.as_transport().map(|m| m.destination_capacity());
            self.assign(carrier, mission);
            self.state.set_reason(carrier, Reason::New);
            if let Some(room) = room {
                if room > 0 {
                    candidates.push(carrier);
                }
                self.take_on_passengers(carrier, &mut land);
            }
        }

        self.allocate_transportables(candidates);

        for agent in land.into_iter().chain(naval) {
            if self.missions.get(agent).is_some_and(|m| !m.is_one_time()) && self.has_valid_mission(agent) {
                continue;
            }
            if !matches!(self.missions.get(agent), Some(Mission::IdleAtSettlement)) {
                self.assign(agent, Mission::IdleAtSettlement);
            }
            self.state.set_reason(agent, Reason::Unused);
        }
    }

    /// Sort an agent into excluded, valid, or needing a mission.
    ///
    /// Side effects: a sole colony worker is put to work inside it, a
    /// valid quota mission counts against its quota, and an invalid
    /// mission on an agent needing a new one is aborted.
    pub(crate) fn classify(&mut self, agent: AgentId) -> Classification {
        if !self.world.agents.is_alive(agent) {
            return Classification::Excluded(Reason::Invalid);
        }
        let state = self.world.agents.state[agent.index()];

        if state == UnitState::InColony {
            let colony = self.world.agents.location[agent.index()]
                .colony()
                .and_then(|c| self.world.colonies.get(c))
                .filter(|c| c.workers <= 1)
                .map(|c| (c.id, c.name.clone()));
            if let Some((colony, name)) = colony {
                if !matches!(self.missions.get(agent), Some(Mission::WorkInsideColony { .. })) {
                    tracing::warn!("{agent} should work inside {name}");
                    self.assign(agent, Mission::WorkInsideColony { colony });
                }
                return Classification::Excluded(Reason::Vital(name));
            }
        }

        if let Some(carrier) = self.world.agents.carrier_of(agent) {
            if self.missions.is_carrying(carrier, Transportable::Agent(agent)) {
                return Classification::Excluded(Reason::InMission);
            }
        }

        let invalid = {
            let ctx = self.world.ctx(self.turn, self.oracle);
            self.missions.get(agent).map(|m| (m.is_one_time(), m.invalid_reason(agent, &ctx, self.catalogue)))
        };
        if let Some((false, None)) = invalid {
            let candidate = match self.missions.get(agent) {
                Some(m) => {
                    self.state.quotas.take(m.kind());
                    m.as_transport().is_some_and(|t| t.destination_capacity() > 0)
                }
                None => false,
            };
            return Classification::HasValidMission { candidate };
        }

        if state == UnitState::AtSea {
            return Classification::Excluded(Reason::AtSea);
        }
        if self.world.agents.is_naval(agent) {
            return Classification::NeedsMission { naval: true };
        }
        if let Some((_, Some(reason))) = invalid {
            tracing::debug!("{agent} aborts its mission: {reason}");
            self.abort(agent);
        }
        Classification::NeedsMission { naval: false }
    }

    /// Hand out missions of a quota kind, best-suited agents first, until
    /// the quota runs out, the next agent is unsuitable, or no target is
    /// found for it.
    fn quota_pass(&mut self, kind: MissionKind, pool: &mut Vec<AgentId>) {
        if self.state.quotas.remaining(kind) == 0 || pool.is_empty() {
            return;
        }
        let mut scores = {
            let ctx = self.world.ctx(self.turn, self.oracle);
            suitability::rank(kind, pool, &ctx, self.catalogue)
        };

        while self.state.quotas.remaining(kind) > 0 && !pool.is_empty() {
            if scores[0] <= UNSUITABLE {
                break;
            }
            let agent = pool[0];
            let Some(mission) = self.quota_mission(kind, agent) else {
                break;
            };
            pool.remove(0);
            scores.remove(0);
            self.assign_new(agent, mission);
            self.state.quotas.take(kind);
        }
    }

    /// A freshly assigned transport mission takes charge of whoever is on
    /// board: passengers still in the land pool are retargeted, and any
    /// passenger with a destination is queued for drop-off.
    pub(crate) fn take_on_passengers(&mut self, carrier: AgentId, pool: &mut Vec<AgentId>) {
        let passengers: Vec<AgentId> = self.world.agents.passengers(carrier).collect();
        for passenger in passengers {
            if pool.contains(&passenger) {
                if !self.has_valid_mission(passenger) {
                    self.retarget_cargo(Transportable::Agent(passenger), carrier);
                }
                if self.has_valid_mission(passenger) {
                    pool.retain(|&a| a != passenger);
                    self.state.set_reason(passenger, Reason::New);
                }
            }
            self.queue_on_board(Transportable::Agent(passenger), carrier);
        }
    }
}
