//! Greedy matching of urgent transportables to carriers.

use tp_core::{AgentId, Location, Transportable};
use tp_mission::{transportable, Cargo, MissionBook, PlanContext};

use crate::cycle::Cycle;

/// The matcher's verdict for one transportable.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Pick {
    /// Some carrier judged it uncarriable; stop considering it.
    Drop,
    /// No carrier had room or a reachable leg.
    Skip,
    Carrier { carrier: AgentId, cargo: Cargo, source: Location },
}

/// Choose the best carrier for `t` among `carriers`.
///
/// A zero-turn leg scores the carrier's remaining capacity; once one has
/// been seen, only zero-turn legs compete.  Anything else scores
/// `priority / (turns + 1)` and unreachable legs are skipped.
pub(crate) fn pick_carrier(
    t:        Transportable,
    carriers: &[AgentId],
    ctx:      &PlanContext<'_>,
    missions: &MissionBook,
) -> Pick {
    let Some(source) = transportable::source(t, ctx) else {
        return Pick::Drop;
    };
    let priority = transportable::priority(t, ctx) as f32;
    let mut best: Option<(AgentId, Cargo)> = None;
    let mut best_value = 0.0_f32;
    let mut present = false;

    for &carrier in carriers {
        let Some(mission) = missions.transport(carrier) else {
            continue;
        };
        if !mission.space_available(t, ctx) {
            continue;
        }
        let Some(cargo) = mission.make_cargo(t, ctx, missions) else {
            return Pick::Drop;
        };
        let value = if cargo.turns.is_zero() {
            if !present {
                best_value = 0.0;
                present = true;
            }
            mission.destination_capacity() as f32
        } else if present {
            continue;
        } else if let Some(turns) = cargo.turns.get() {
            priority / (turns + 1) as f32
        } else {
            continue;
        };
        if best_value < value {
            best_value = value;
            best = Some((carrier, cargo));
        }
    }

    match best {
        Some((carrier, cargo)) => Pick::Carrier { carrier, cargo, source },
        None => Pick::Skip,
    }
}

impl Cycle<'_> {
    /// Queue the urgent transportables on the carrier `candidates`.
    ///
    /// A successful queue claims the transportable out of supply; a carrier
    /// drops out when full or when a queue attempt fails.  With no
    /// candidates or nothing urgent the index is left untouched.
    pub(crate) fn allocate_transportables(&mut self, candidates: Vec<AgentId>) {
        if candidates.is_empty() {
            return;
        }
        let urgent = {
            let ctx = self.world.ctx(self.turn, self.oracle);
            self.state.index.urgent(&ctx, self.config)
        };
        if urgent.is_empty() {
            return;
        }
        tracing::info!(
            "allocating transportables to {} carriers: [{}]",
            candidates.len(),
            urgent.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
        );

        let mut carriers = candidates;
        for t in urgent {
            if carriers.is_empty() {
                break;
            }
            let pick = {
                let ctx = self.world.ctx(self.turn, self.oracle);
                pick_carrier(t, &carriers, &ctx, self.missions)
            };
            let Pick::Carrier { carrier, cargo, source } = pick else {
                continue;
            };
            let Some(mission) = self.missions.transport_mut(carrier) else {
                carriers.retain(|&c| c != carrier);
                continue;
            };
            if mission.queue_transportable(cargo, false) {
                tracing::trace!("queued {t} on {carrier}");
                let full = mission.destination_capacity() == 0;
                self.state.index.claim(t, source);
                transportable::set_claim(t, Some(carrier), &mut self.world.agents, &mut self.world.goods);
                if full {
                    carriers.retain(|&c| c != carrier);
                }
            } else {
                tracing::warn!("failed to queue {t} on {carrier}");
                carriers.retain(|&c| c != carrier);
            }
        }
    }

    /// Queue something already on board `carrier` for drop-off and claim it.
    pub(crate) fn queue_on_board(&mut self, t: Transportable, carrier: AgentId) -> bool {
        let cargo = {
            let ctx = self.world.ctx(self.turn, self.oracle);
            self.missions.transport(carrier).and_then(|m| m.make_cargo(t, &ctx, self.missions))
        };
        let queued = match (cargo, self.missions.transport_mut(carrier)) {
            (Some(cargo), Some(mission)) => mission.queue_transportable(cargo, false),
            _ => false,
        };
        if queued {
            transportable::set_claim(t, Some(carrier), &mut self.world.agents, &mut self.world.goods);
        }
        queued
    }
}
