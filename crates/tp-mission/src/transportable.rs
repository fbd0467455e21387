//! Accessors over [`Transportable`] handles.
//!
//! Agents and goods parcels keep their transport state in different stores;
//! these functions give the index and the matcher one view of both.

use tp_agent::AgentStore;
use tp_colony::GoodsStore;
use tp_core::{AgentId, Location, Transportable};

use crate::{MissionBook, PlanContext};

/// Where `t` is now.  `None` for disposed agents and parcels.
pub fn source(t: Transportable, ctx: &PlanContext<'_>) -> Option<Location> {
    match t {
        Transportable::Agent(a) => ctx.agents.is_alive(a).then(|| ctx.agents.location[a.index()]),
        Transportable::Goods(p) => ctx.goods.get(p).filter(|g| !g.disposed).map(|g| g.location),
    }
}

/// Where `t` wants a carrier to take it.
///
/// Agents derive it from their mission; parcels carry it explicitly.
pub fn destination(t: Transportable, ctx: &PlanContext<'_>, missions: &MissionBook) -> Option<Location> {
    match t {
        Transportable::Agent(a) => missions.get(a)?.transport_destination(a, ctx),
        Transportable::Goods(p) => ctx.goods.get(p)?.destination,
    }
}

pub fn priority(t: Transportable, ctx: &PlanContext<'_>) -> u32 {
    match t {
        Transportable::Agent(a) => ctx.agents.transport_priority.get(a.index()).copied().unwrap_or(0),
        Transportable::Goods(p) => ctx.goods.get(p).map_or(0, |g| g.priority),
    }
}

/// The carrier that has claimed `t`.
pub fn claim(t: Transportable, ctx: &PlanContext<'_>) -> Option<AgentId> {
    match t {
        Transportable::Agent(a) => ctx.agents.transport.get(a.index()).copied().flatten(),
        Transportable::Goods(p) => ctx.goods.get(p).and_then(|g| g.transport),
    }
}

/// Already on board some carrier.
pub fn is_riding(t: Transportable, ctx: &PlanContext<'_>) -> bool {
    source(t, ctx).is_some_and(|s| s.carrier().is_some())
}

/// Unclaimed, with somewhere to go, somewhere to start from, and not
/// already riding.
pub fn requests_transport(t: Transportable, ctx: &PlanContext<'_>, missions: &MissionBook) -> bool {
    claim(t, ctx).is_none()
        && destination(t, ctx, missions).is_some()
        && source(t, ctx).is_some()
        && !is_riding(t, ctx)
}

/// Ships carry anything; wagon trains carry goods only.  Nothing carries
/// itself.
pub fn carriable_by(t: Transportable, carrier: AgentId, ctx: &PlanContext<'_>) -> bool {
    if !ctx.agents.is_alive(carrier) || !ctx.agents.is_carrier(carrier) {
        return false;
    }
    match t {
        Transportable::Agent(a) => a != carrier && ctx.agents.is_naval(carrier) && !ctx.agents.is_naval(a),
        Transportable::Goods(_) => true,
    }
}

// ── Mutators ──────────────────────────────────────────────────────────────────

/// Set or clear the carrier claim on `t`.
pub fn set_claim(t: Transportable, carrier: Option<AgentId>, agents: &mut AgentStore, goods: &mut GoodsStore) {
    match t {
        Transportable::Agent(a) => {
            if let Some(slot) = agents.transport.get_mut(a.index()) {
                *slot = carrier;
            }
        }
        Transportable::Goods(p) => {
            if let Some(g) = goods.get_mut(p) {
                g.transport = carrier;
            }
        }
    }
}

pub fn bump_priority(t: Transportable, by: u32, agents: &mut AgentStore, goods: &mut GoodsStore) {
    match t {
        Transportable::Agent(a) => {
            if let Some(p) = agents.transport_priority.get_mut(a.index()) {
                *p = p.saturating_add(by);
            }
        }
        Transportable::Goods(p) => {
            if let Some(g) = goods.get_mut(p) {
                g.priority = g.priority.saturating_add(by);
            }
        }
    }
}
