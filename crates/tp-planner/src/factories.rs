//! Mission factories and the fallback chain.
//!
//! Every factory answers "could this agent start a mission of this kind
//! right now?" and returns `None` when the agent is incapable or no target
//! is in range.  None of them assign anything; the caller decides.

use tp_core::{AgentId, ColonyId, CostPolicy, Location, TileId, Transportable, WishId};
use tp_mission::{Mission, MissionKind, TransportMission};

use crate::cycle::Cycle;

impl Cycle<'_> {
    // ── Shared lookups ────────────────────────────────────────────────────

    fn capable(&self, kind: MissionKind, agent: AgentId) -> bool {
        let ctx = self.world.ctx(self.turn, self.oracle);
        self.catalogue.invalid_reason(kind, agent, &ctx).is_none()
    }

    fn find_target(&mut self, kind: MissionKind, agent: AgentId, range: u32, from_home_port: bool) -> Option<Location> {
        let ctx = self.world.ctx(self.turn, self.oracle);
        self.catalogue.find_target(kind, agent, range, from_home_port, &ctx, self.rng)
    }

    // ── Quota missions ────────────────────────────────────────────────────

    pub(crate) fn build_colony_mission(&mut self, agent: AgentId) -> Option<Mission> {
        if !self.capable(MissionKind::BuildColony, agent) {
            return None;
        }
        let range = self.config.building_range;
        let from_home_port = self.world.agents.in_home_port(agent);
        let target = self.find_target(MissionKind::BuildColony, agent, range, from_home_port)?;
        Some(Mission::BuildColony { target })
    }

    /// Prefers the nearest tile from the improvement map and claims its
    /// plan; falls back to the catalogue when no mapped tile is in range.
    pub(crate) fn pioneering_mission(&mut self, agent: AgentId) -> Option<Mission> {
        if !self.capable(MissionKind::Pioneer, agent) {
            return None;
        }
        let range = self.config.pioneering_range;
        let mapped: Option<TileId> = {
            let ctx = self.world.ctx(self.turn, self.oracle);
            self.improvements.nearest(agent, range, &ctx)
        };
        if let Some(tile) = mapped {
            self.improvements.assign(tile, agent, &mut self.world.colonies);
            return Some(Mission::Pioneer { target: Location::Tile(tile) });
        }
        let target = self.find_target(MissionKind::Pioneer, agent, range, true)?;
        Some(Mission::Pioneer { target })
    }

    pub(crate) fn scouting_mission(&mut self, agent: AgentId) -> Option<Mission> {
        if !self.capable(MissionKind::Scout, agent) {
            return None;
        }
        let range = self.config.scouting_range;
        let target = self.find_target(MissionKind::Scout, agent, range, true)?;
        Some(Mission::Scout { target })
    }

    /// Factory for one of the quota kinds.
    pub(crate) fn quota_mission(&mut self, kind: MissionKind, agent: AgentId) -> Option<Mission> {
        match kind {
            MissionKind::BuildColony => self.build_colony_mission(agent),
            MissionKind::Pioneer     => self.pioneering_mission(agent),
            MissionKind::Scout       => self.scouting_mission(agent),
            _                        => None,
        }
    }

    // ── Land missions ─────────────────────────────────────────────────────

    pub(crate) fn cash_in_mission(&mut self, agent: AgentId) -> Option<Mission> {
        if !self.capable(MissionKind::CashInTreasure, agent) {
            return None;
        }
        let range = self.config.cash_in_range;
        let from_home_port = self.world.agents.in_home_port(agent);
        let target = self.find_target(MissionKind::CashInTreasure, agent, range, from_home_port)?;
        Some(Mission::CashInTreasure { target })
    }

    /// Defend the worst-off badly defended colony.
    ///
    /// A colony the agent is already standing in wins outright; otherwise
    /// the lowest `defence_ratio * 100 / turns`.  `policy` decides how the
    /// turns are counted.
    pub(crate) fn defend_mission(&mut self, agent: AgentId, policy: CostPolicy) -> Option<Mission> {
        if !self.capable(MissionKind::Defend, agent) {
            return None;
        }
        let ctx = self.world.ctx(self.turn, self.oracle);
        let mut worst: Option<(f64, ColonyId)> = None;
        for colony in ctx.colonies.iter().filter(|c| c.badly_defended) {
            let Some(turns) = ctx.turns_carried(agent, colony.location(), policy).get() else {
                continue;
            };
            if turns == 0 {
                worst = Some((f64::NEG_INFINITY, colony.id));
                break;
            }
            let value = colony.defence_ratio * 100.0 / f64::from(turns);
            if worst.is_none_or(|(w, _)| value < w) {
                worst = Some((value, colony.id));
            }
        }
        worst.map(|(_, colony)| Mission::Defend { colony })
    }

    pub(crate) fn missionary_mission(&mut self, agent: AgentId) -> Option<Mission> {
        if !self.capable(MissionKind::Missionary, agent) {
            return None;
        }
        let range = self.config.missionary_range;
        let target = self.find_target(MissionKind::Missionary, agent, range, true)?;
        Some(Mission::Missionary { target })
    }

    pub(crate) fn seek_and_destroy_mission(&mut self, agent: AgentId, range: u32) -> Option<Mission> {
        if !self.capable(MissionKind::SeekAndDestroy, agent) {
            return None;
        }
        let target = self.find_target(MissionKind::SeekAndDestroy, agent, range, false)?;
        Some(Mission::SeekAndDestroy { target })
    }

    /// Always available to offensive units; the target is only a hint.
    pub(crate) fn wander_hostile_mission(&mut self, agent: AgentId) -> Option<Mission> {
        if !self.capable(MissionKind::WanderHostile, agent) {
            return None;
        }
        let range = self.config.wander_range;
        let target = self.find_target(MissionKind::WanderHostile, agent, range, false);
        Some(Mission::WanderHostile { target })
    }

    // ── Carriers ──────────────────────────────────────────────────────────

    pub(crate) fn privateer_mission(&mut self, agent: AgentId) -> Option<Mission> {
        self.capable(MissionKind::Privateer, agent).then_some(Mission::Privateer)
    }

    pub(crate) fn transport_mission(&mut self, agent: AgentId) -> Option<Mission> {
        if !self.capable(MissionKind::Transport, agent) {
            return None;
        }
        let slots = self.world.agents.profile(agent).cargo_slots;
        Some(Mission::Transport(TransportMission::new(agent, slots)))
    }

    // ── Wishes ────────────────────────────────────────────────────────────

    /// The worker wish `agent` should realize.
    ///
    /// Among reachable wishes for its unit type the best `value / turns`
    /// (a wish where the agent already stands beats everything); with none
    /// reachable, the most valuable unreachable one.
    pub(crate) fn best_worker_wish(&self, agent: AgentId) -> Option<WishId> {
        let ctx = self.world.ctx(self.turn, self.oracle);
        let unit_type = ctx.agents.profile(agent).unit_type;
        let mut reachable: Option<(f32, WishId)> = None;
        let mut unreachable: Option<(i32, WishId)> = None;

        for &id in self.state.registry.worker_wishes(unit_type) {
            let Some(wish) = ctx.wishes.get(id).filter(|w| w.is_outstanding()) else {
                continue;
            };
            match ctx.turns_carried(agent, wish.destination, CostPolicy::Strict).get() {
                Some(turns) => {
                    let value = if turns == 0 { f32::INFINITY } else { wish.value as f32 / turns as f32 };
                    if reachable.is_none_or(|(best, _)| best < value) {
                        reachable = Some((value, id));
                    }
                }
                None => {
                    if unreachable.is_none_or(|(best, _)| best < wish.value) {
                        unreachable = Some((wish.value, id));
                    }
                }
            }
        }
        reachable.map(|(_, id)| id).or(unreachable.map(|(_, id)| id))
    }

    /// Take `wish` out of circulation and bind it to `agent`.
    ///
    /// The wish leaves the registry and every demand list, so no other agent
    /// can consume it this cycle and no later rebuild indexes it again.
    pub(crate) fn consume_worker_wish(&mut self, agent: AgentId, wish: WishId) -> Option<Mission> {
        self.state.registry.remove(wish);
        self.state.index.remove_demand(wish);
        let w = self.world.wishes.get_mut(wish)?;
        w.transportable = Some(Transportable::Agent(agent));
        Some(Mission::WishRealization { wish, destination: w.destination })
    }

    pub(crate) fn wish_realization_mission(&mut self, agent: AgentId) -> Option<Mission> {
        if !self.capable(MissionKind::WishRealization, agent) {
            return None;
        }
        let wish = self.best_worker_wish(agent)?;
        self.consume_worker_wish(agent, wish)
    }

    // ── Fallback chain ────────────────────────────────────────────────────

    /// The first mission the agent's chain yields.
    ///
    /// * ships: privateer, transport, seek-and-destroy nearby, wander;
    /// * wagon trains: transport only;
    /// * everyone else: cash in, defend, wish realization (experts only),
    ///   seek-and-destroy nearby, missionary, wish realization, defend with
    ///   relaxed costs, seek-and-destroy further out, wander.
    ///
    /// Capability gates (defensive, offensive, …) come from the catalogue.
    pub(crate) fn simple_mission(&mut self, agent: AgentId) -> Option<Mission> {
        let near = self.config.seek_near_range;
        let far = self.config.seek_far_range;
        let profile = *self.world.agents.profile(agent);

        if profile.caps.naval {
            return self
                .privateer_mission(agent)
                .or_else(|| self.transport_mission(agent))
                .or_else(|| self.seek_and_destroy_mission(agent, near))
                .or_else(|| self.wander_hostile_mission(agent));
        }
        if profile.caps.carrier {
            return self.transport_mission(agent);
        }

        let expert = profile.caps.colonist && profile.skill > 0;
        self.cash_in_mission(agent)
            .or_else(|| self.defend_mission(agent, CostPolicy::Strict))
            .or_else(|| if expert { self.wish_realization_mission(agent) } else { None })
            .or_else(|| self.seek_and_destroy_mission(agent, near))
            .or_else(|| self.missionary_mission(agent))
            .or_else(|| self.wish_realization_mission(agent))
            .or_else(|| self.defend_mission(agent, CostPolicy::Relaxed))
            .or_else(|| self.seek_and_destroy_mission(agent, far))
            .or_else(|| self.wander_hostile_mission(agent))
    }
}
