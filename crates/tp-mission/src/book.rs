//! One mission slot per agent.

use tp_core::{AgentId, Transportable};

use crate::{Mission, TransportMission};

/// Missions indexed by `AgentId`, parallel to `AgentStore`.
///
/// Assigning a mission drops whatever the slot held before; a mission is
/// never shared between agents.
#[derive(Clone, Debug, Default)]
pub struct MissionBook {
    slots: Vec<Option<Mission>>,
}

impl MissionBook {
    /// An empty slot for each of `count` agents.
    pub fn new(count: usize) -> Self {
        Self { slots: vec![None; count] }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Mission> {
        self.slots.get(agent.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Mission> {
        self.slots.get_mut(agent.index()).and_then(Option::as_mut)
    }

    /// Give `agent` a new mission, returning the one it replaces.
    pub fn assign(&mut self, agent: AgentId, mission: Mission) -> Option<Mission> {
        self.slots.get_mut(agent.index()).and_then(|slot| slot.replace(mission))
    }

    /// Remove the agent's mission.
    pub fn abort(&mut self, agent: AgentId) -> Option<Mission> {
        self.slots.get_mut(agent.index()).and_then(Option::take)
    }

    pub fn transport(&self, carrier: AgentId) -> Option<&TransportMission> {
        self.get(carrier).and_then(Mission::as_transport)
    }

    pub fn transport_mut(&mut self, carrier: AgentId) -> Option<&mut TransportMission> {
        self.get_mut(carrier).and_then(Mission::as_transport_mut)
    }

    /// `true` if `carrier` holds a transport mission that has `t` queued.
    pub fn is_carrying(&self, carrier: AgentId, t: Transportable) -> bool {
        self.transport(carrier).is_some_and(|m| m.is_transporting(t))
    }

    /// Every assigned mission in agent order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Mission)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.as_ref().map(|m| (AgentId(i as u32), m)))
    }
}
