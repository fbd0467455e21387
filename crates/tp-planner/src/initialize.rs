//! First-turn mission setup.

use tp_core::{AgentId, Transportable};
use tp_mission::{Mission, MissionKind, TransportMission};

use crate::cycle::Cycle;

impl Cycle<'_> {
    /// Send every ship that arrives loaded with colonists off to found a
    /// colony, then give everyone still without a mission a fallback one.
    ///
    /// The first passenger picks the site (within three times the normal
    /// building range, searched from the ship); the rest follow it there.
    /// A ship whose first passenger finds no site is left alone.
    pub(crate) fn initialize_missions(&mut self) {
        let range = self.config.building_range.saturating_mul(3);

        for carrier in self.world.agents.agent_ids() {
            if self.missions.get(carrier).is_some()
                || !self.world.agents.is_alive(carrier)
                || !self.world.agents.is_naval(carrier)
            {
                continue;
            }
            let passengers: Vec<AgentId> = self.world.agents.passengers(carrier).collect();
            let Some(&first) = passengers.first() else {
                continue;
            };
            let target = {
                let ctx = self.world.ctx(self.turn, self.oracle);
                self.catalogue.find_target(MissionKind::BuildColony, first, range, false, &ctx, self.rng)
            };
            let Some(target) = target else {
                continue;
            };

            for &p in &passengers {
                self.assign(p, Mission::BuildColony { target });
            }
            let slots = self.world.agents.profile(carrier).cargo_slots;
            self.assign(carrier, Mission::Transport(TransportMission::new(carrier, slots)));
            for &p in &passengers {
                self.queue_on_board(Transportable::Agent(p), carrier);
            }
            tracing::debug!("{carrier} carries {} colonists to {target}", passengers.len());
        }

        for agent in self.world.agents.agent_ids() {
            if !self.world.agents.is_alive(agent) || self.missions.get(agent).is_some() {
                continue;
            }
            if let Some(mission) = self.simple_mission(agent) {
                self.assign(agent, mission);
            }
        }
    }
}
