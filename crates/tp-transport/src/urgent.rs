//! Choosing what to move first.

use std::cmp::Reverse;

use tp_core::{AgentId, CostPolicy, PlannerConfig, Transportable};
use tp_mission::{transportable, PlanContext};

use crate::TransportIndex;

impl TransportIndex {
    /// The most urgent slice of supply: highest priority first, ties in
    /// handle order, cut to [`PlannerConfig::urgent_len`].
    pub fn urgent(&self, ctx: &PlanContext<'_>, config: &PlannerConfig) -> Vec<Transportable> {
        let mut all: Vec<Transportable> = self.supply.values().flatten().copied().collect();
        all.sort_unstable_by_key(|&t| (Reverse(transportable::priority(t, ctx)), t));
        all.truncate(config.urgent_len(all.len()));
        all
    }

    /// The transportable `carrier` should fetch next, looking only at the
    /// front of each supply list.
    ///
    /// Something waiting where the carrier already is wins outright;
    /// otherwise the best `priority / (turns + 1)` among reachable pickups.
    pub fn best_transportable(&self, carrier: AgentId, ctx: &PlanContext<'_>) -> Option<Transportable> {
        let here = ctx.agents.resolved_location(carrier).up();
        let mover = ctx.mover(carrier);
        let mut best: Option<(f32, Transportable)> = None;

        for loc in self.supply_locations() {
            let mut waiting: Vec<Transportable> = self.transportables_at(loc).to_vec();
            waiting.sort_unstable_by_key(|&t| (Reverse(transportable::priority(t, ctx)), t));
            let Some(t) = waiting.into_iter().find(|&t| {
                transportable::carriable_by(t, carrier, ctx)
                    && transportable::source(t, ctx).is_some_and(|s| s.up() == loc)
            }) else {
                continue;
            };
            if loc == here {
                return Some(t);
            }
            let Some(turns) = ctx.turns(here, loc, mover, CostPolicy::Strict).get() else {
                continue;
            };
            let value = transportable::priority(t, ctx) as f32 / (turns + 1) as f32;
            if best.is_none_or(|(b, _)| b < value) {
                best = Some((value, t));
            }
        }
        best.map(|(_, t)| t)
    }
}
