//! Building the index from a world snapshot.

use tp_agent::AgentStore;
use tp_colony::{ColonyStore, GoodsStore};
use tp_core::{Location, Transportable};
use tp_mission::{transportable, MissionBook, MissionCatalogue, PlanContext};

use crate::TransportIndex;

/// Clear every claim whose carrier no longer has `t` queued on a transport
/// mission.  Returns the number of claims cleared.
///
/// Run before [`TransportIndex::build`] so that abandoned transportables
/// re-enter supply in the same cycle.
pub fn verify_claims(
    agents:   &mut AgentStore,
    goods:    &mut GoodsStore,
    colonies: &ColonyStore,
    missions: &MissionBook,
) -> usize {
    let mut stale: Vec<Transportable> = Vec::new();

    for a in agents.agent_ids() {
        if let Some(carrier) = agents.transport[a.index()] {
            let t = Transportable::Agent(a);
            if !missions.is_carrying(carrier, t) {
                stale.push(t);
            }
        }
    }
    for colony in colonies.iter() {
        for &p in &colony.export_goods {
            if let Some(carrier) = goods.get(p).and_then(|g| g.transport) {
                let t = Transportable::Goods(p);
                if !missions.is_carrying(carrier, t) {
                    stale.push(t);
                }
            }
        }
    }

    for &t in &stale {
        tracing::debug!("clearing stale transport claim on {t}");
        transportable::set_claim(t, None, agents, goods);
    }
    stale.len()
}

impl TransportIndex {
    /// Build this cycle's index from the world.
    ///
    /// Agents whose current mission is invalid are skipped entirely: they
    /// are about to be given a new mission, and with it a new destination.
    pub fn build(ctx: &PlanContext<'_>, missions: &MissionBook, catalogue: &dyn MissionCatalogue) -> Self {
        let mut index = TransportIndex::new();
        let contiguity = |loc: Location| ctx.oracle.contiguity_of(ctx.resolve(loc));

        // Landmasses with a connected port can use wagons.
        for colony in ctx.colonies.iter() {
            if colony.connected_port {
                index.change_wagons(contiguity(colony.location()), 0);
            }
        }

        for a in ctx.agents.agent_ids() {
            if !ctx.agents.is_alive(a) {
                continue;
            }
            if missions.get(a).is_some_and(|m| !m.is_valid(a, ctx, catalogue)) {
                continue;
            }
            if ctx.agents.is_carrier(a) {
                if ctx.agents.is_naval(a) {
                    index.naval_carrier_deficit -= 1;
                } else {
                    index.change_wagons(contiguity(ctx.agents.location[a.index()]), -1);
                }
                continue;
            }
            let t = Transportable::Agent(a);
            if transportable::requests_transport(t, ctx, missions) {
                if let Some(src) = transportable::source(t, ctx) {
                    index.add_supply(t, src);
                    index.naval_carrier_deficit += 1;
                }
            }
        }

        for colony in ctx.colonies.iter() {
            for &p in &colony.export_goods {
                let t = Transportable::Goods(p);
                if !transportable::requests_transport(t, ctx, missions) {
                    continue;
                }
                let (Some(src), Some(dst)) =
                    (transportable::source(t, ctx), transportable::destination(t, ctx, missions))
                else {
                    continue;
                };
                index.add_supply(t, src);
                if !ctx.oracle.same_contiguity(ctx.resolve(src), ctx.resolve(dst)) {
                    index.naval_carrier_deficit += 1;
                }
            }
            if !colony.connected_port {
                index.change_wagons(contiguity(colony.location()), 1);
            }
        }

        for wish in ctx.wishes.iter().filter(|w| w.is_outstanding()) {
            match wish.transportable {
                None => index.add_demand(wish.id, wish.destination),
                Some(t) => {
                    if transportable::claim(t, ctx).is_none() {
                        if let Some(dst) = transportable::destination(t, ctx, missions) {
                            index.add_demand(wish.id, dst);
                        }
                    }
                }
            }
        }

        tracing::trace!(
            "transport index: supply={} at {:?}, demand={}, wagons={:?}, naval deficit={}",
            index.supply_len(),
            index.supply_locations(),
            index.demand_len(),
            index.wagons_needed,
            index.naval_carrier_deficit,
        );
        index
    }

    /// Raise the priority of everything in supply by `by`.
    pub fn bump_priorities(&self, by: u32, agents: &mut AgentStore, goods: &mut GoodsStore) {
        for list in self.supply.values() {
            for &t in list {
                transportable::bump_priority(t, by, agents, goods);
            }
        }
    }
}
