//! Finding a new destination for cargo that has lost its own.

use tp_core::{AgentId, CostPolicy, Location, ParcelId, Transportable, WishId};
use tp_mission::{transportable, Mission, MissionKind};

use crate::cycle::Cycle;

/// Result of [`Planner::retarget_cargo`][crate::Planner::retarget_cargo].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RetargetOutcome {
    /// The transportable now heads for this location.
    Rebound(Location),
    /// Its current destination (or its mission) is still fine.
    Unchanged,
    /// Nowhere better was found; the destination was left as it was.
    Unresolved,
}

impl Cycle<'_> {
    /// Find somewhere for `t`, carried or about to be carried by `carrier`,
    /// to go.
    ///
    /// In order: keep a destination that is still reachable; prefer a stop
    /// the carrier is already scheduled to make that has a matching wish;
    /// then, for agents, a new quota or fallback mission that needs the
    /// carrier, and for goods, another goods wish, a colony that imports
    /// the whole parcel, or the home port.
    pub(crate) fn retarget_cargo(&mut self, t: Transportable, carrier: AgentId) -> RetargetOutcome {
        if self.destination_holds(t, carrier) {
            return RetargetOutcome::Unchanged;
        }
        if let Some(found) = self.retarget_on_course(t, carrier) {
            tracing::trace!("retargeted {t} on course to {found}");
            return RetargetOutcome::Rebound(found);
        }
        let found = match t {
            Transportable::Agent(agent) => self.retarget_agent(agent),
            Transportable::Goods(parcel) => self.retarget_goods(parcel, carrier),
        };
        match found {
            Some(location) => {
                tracing::trace!("retargeted {t} to {location}");
                RetargetOutcome::Rebound(location)
            }
            None => RetargetOutcome::Unresolved,
        }
    }

    /// A reachable existing destination, or an agent whose valid mission
    /// simply needs no carrier.
    fn destination_holds(&self, t: Transportable, carrier: AgentId) -> bool {
        let ctx = self.world.ctx(self.turn, self.oracle);
        match (t, transportable::destination(t, &ctx, self.missions)) {
            (Transportable::Agent(agent), Some(dst)) => {
                ctx.turns_carried(agent, dst, CostPolicy::Strict).is_reachable()
            }
            (Transportable::Agent(agent), None) => {
                self.missions.get(agent).is_some_and(|m| m.is_valid(agent, &ctx, self.catalogue))
            }
            (Transportable::Goods(_), Some(dst)) => {
                let here = ctx.agents.resolved_location(carrier);
                ctx.turns(here, dst, ctx.mover(carrier), CostPolicy::Strict).is_reachable()
            }
            (Transportable::Goods(_), None) => false,
        }
    }

    /// Look for demand at the carrier's scheduled stops.
    fn retarget_on_course(&mut self, t: Transportable, carrier: AgentId) -> Option<Location> {
        let stops = self.missions.transport(carrier).map(|m| m.scheduled_stops()).unwrap_or_default();
        for stop in stops {
            let found: Option<WishId> = {
                let ctx = self.world.ctx(self.turn, self.oracle);
                self.state.index.demand_at(stop).iter().copied().find(|&id| {
                    let Some(wish) = ctx.wishes.get(id).filter(|w| w.is_outstanding()) else {
                        return false;
                    };
                    match t {
                        Transportable::Agent(agent) => {
                            wish.transportable.is_none()
                                && wish.unit_type() == Some(ctx.agents.profile(agent).unit_type)
                        }
                        Transportable::Goods(p) => {
                            ctx.goods.get(p).is_some_and(|g| wish.goods_type() == Some(g.goods_type))
                        }
                    }
                })
            };
            let Some(wish) = found else { continue };

            match t {
                Transportable::Agent(agent) => {
                    let mission = self.consume_worker_wish(agent, wish)?;
                    self.assign(agent, mission);
                }
                Transportable::Goods(parcel) => {
                    self.set_parcel_destination(parcel, stop);
                    self.settle_goods_wish(parcel, wish);
                }
            }
            self.state.index.remove_demand(wish);
            return Some(stop);
        }
        None
    }

    /// A quota mission while quotas last, else a fallback mission that
    /// needs a carrier to reach its target.
    fn retarget_agent(&mut self, agent: AgentId) -> Option<Location> {
        for kind in [MissionKind::BuildColony, MissionKind::Pioneer, MissionKind::Scout] {
            if self.state.quotas.remaining(kind) == 0 {
                continue;
            }
            let Some(mission) = self.quota_mission(kind, agent) else {
                continue;
            };
            let Some(target) = mission.target() else {
                continue;
            };
            self.state.quotas.take(kind);
            self.assign(agent, mission);
            return Some(target);
        }

        let mission = self.simple_mission(agent)?;
        let destination = {
            let ctx = self.world.ctx(self.turn, self.oracle);
            mission.transport_destination(agent, &ctx)
        };
        match destination {
            Some(dst) => {
                self.assign(agent, mission);
                Some(dst)
            }
            None => {
                // A consumed wish has to go back if the mission is discarded.
                if let Mission::WishRealization { wish, .. } = mission {
                    if let Some(w) = self.world.wishes.get_mut(wish) {
                        w.transportable = None;
                    }
                }
                None
            }
        }
    }

    /// Another goods wish, else the nearest colony importing the whole
    /// parcel, else the home port when trade allows and it is closer.
    fn retarget_goods(&mut self, parcel: ParcelId, carrier: AgentId) -> Option<Location> {
        let (wish, fallback) = {
            let ctx = self.world.ctx(self.turn, self.oracle);
            let goods = ctx.goods.get(parcel)?;
            let here = ctx.agents.resolved_location(carrier);
            let mover = ctx.mover(carrier);
            let turns = |to: Location| ctx.turns(here, to, mover, CostPolicy::Strict).get();

            let mut best_wish: Option<(f32, WishId, Location)> = None;
            for &id in self.state.registry.goods_wishes(goods.goods_type) {
                let Some(wish) = ctx.wishes.get(id).filter(|w| w.is_outstanding()) else {
                    continue;
                };
                let Some(n) = turns(wish.destination) else { continue };
                let value = if n == 0 { f32::INFINITY } else { wish.value as f32 / n as f32 };
                if best_wish.is_none_or(|(b, _, _)| b < value) {
                    best_wish = Some((value, id, wish.destination));
                }
            }

            let mut fallback: Option<(u32, Location)> = None;
            for colony in ctx.colonies.iter() {
                if colony.import_capacity(goods.goods_type) < goods.amount {
                    continue;
                }
                let Some(n) = turns(colony.location()) else { continue };
                if fallback.is_none_or(|(b, _)| n < b) {
                    fallback = Some((n, colony.location()));
                }
            }
            if ctx.rules.can_trade(ctx.ruleset, goods.goods_type) {
                if let Some(n) = turns(Location::HomePort) {
                    if fallback.is_none_or(|(b, _)| n < b) {
                        fallback = Some((n, Location::HomePort));
                    }
                }
            }
            (best_wish.map(|(_, id, dst)| (id, dst)), fallback.map(|(_, dst)| dst))
        };

        if let Some((id, dst)) = wish {
            self.set_parcel_destination(parcel, dst);
            self.settle_goods_wish(parcel, id);
            self.state.index.remove_demand(id);
            return Some(dst);
        }
        let dst = fallback?;
        self.set_parcel_destination(parcel, dst);
        Some(dst)
    }

    fn set_parcel_destination(&mut self, parcel: ParcelId, destination: Location) {
        if let Some(g) = self.world.goods.get_mut(parcel) {
            g.destination = Some(destination);
        }
    }

    /// Count the parcel against the wish: a parcel at least as large
    /// completes it, a smaller one shrinks it.
    fn settle_goods_wish(&mut self, parcel: ParcelId, wish: WishId) {
        let amount = self.world.goods.get(parcel).map_or(0, |g| g.amount);
        let wanted = self.world.wishes.get(wish).map_or(0, |w| w.goods_amount());
        if amount >= wanted {
            self.state.registry.complete_wish(&mut self.world.wishes, wish);
        } else {
            self.world.wishes.shrink_goods(wish, amount);
        }
    }
}
