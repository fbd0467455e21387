//! Transport missions: a carrier with a bounded, ordered cargo queue.
//!
//! The queue holds one [`Cargo`] per transportable the carrier has promised
//! to move.  Entries are ordered by the turns to their next leg, nearest
//! first, so a carrier always serves what it is already standing on before
//! sailing off for something far away.

use tp_core::{AgentId, CostPolicy, Location, Transportable, Turns};

use crate::{transportable, MissionBook, PlanContext};

/// Which end of the trip a cargo entry is waiting for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CargoLeg {
    Pickup,
    Dropoff,
}

/// One queued transportable and its next leg.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Cargo {
    pub transportable: Transportable,
    pub leg:           CargoLeg,
    /// Where the carrier has to be for the leg.
    pub target:        Location,
    /// Carrier turns to `target`; may be `Turns::UNREACHABLE`.
    pub turns:         Turns,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransportMission {
    pub carrier:  AgentId,
    /// Slots available to this mission.
    pub capacity: u32,
    cargo:        Vec<Cargo>,
}

impl TransportMission {
    pub fn new(carrier: AgentId, capacity: u32) -> Self {
        Self { carrier, capacity, cargo: Vec::new() }
    }

    pub fn cargo(&self) -> &[Cargo] {
        &self.cargo
    }

    #[inline]
    pub fn is_transporting(&self, t: Transportable) -> bool {
        self.cargo.iter().any(|c| c.transportable == t)
    }

    /// Slots not yet promised to a transportable.
    #[inline]
    pub fn destination_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.cargo.len() as u32)
    }

    /// Could `t` be added to the queue right now?
    pub fn space_available(&self, t: Transportable, ctx: &PlanContext<'_>) -> bool {
        self.destination_capacity() > 0
            && !self.is_transporting(t)
            && transportable::carriable_by(t, self.carrier, ctx)
    }

    /// Work out the next leg for `t`.
    ///
    /// `None` means `t` cannot be carried at all (no source, no destination,
    /// already there, or aboard a different carrier).  An unreachable leg is
    /// still returned, with `Turns::UNREACHABLE`, because another carrier may
    /// do better.
    pub fn make_cargo(&self, t: Transportable, ctx: &PlanContext<'_>, missions: &MissionBook) -> Option<Cargo> {
        let source = transportable::source(t, ctx)?;
        let destination = transportable::destination(t, ctx, missions)?;
        if source.up() == destination.up() {
            return None;
        }

        let here = ctx.agents.resolved_location(self.carrier);
        let mover = ctx.mover(self.carrier);
        match source.carrier() {
            Some(c) if c == self.carrier => Some(Cargo {
                transportable: t,
                leg:           CargoLeg::Dropoff,
                target:        destination,
                turns:         ctx.turns(here, destination, mover, CostPolicy::Strict),
            }),
            Some(_) => None,
            None => Some(Cargo {
                transportable: t,
                leg:           CargoLeg::Pickup,
                target:        source,
                turns:         ctx.turns(here, source, mover, CostPolicy::Strict),
            }),
        }
    }

    /// Add `cargo` to the queue.
    ///
    /// An already-queued transportable is only re-inserted when `requeue` is
    /// set.  Fails when the queue is full.
    pub fn queue_transportable(&mut self, cargo: Cargo, requeue: bool) -> bool {
        if let Some(pos) = self.cargo.iter().position(|c| c.transportable == cargo.transportable) {
            if !requeue {
                return false;
            }
            self.cargo.remove(pos);
        } else if self.destination_capacity() == 0 {
            return false;
        }
        let at = self.cargo.partition_point(|c| c.turns <= cargo.turns);
        self.cargo.insert(at, cargo);
        true
    }

    /// Drop `t` from the queue.  Returns `true` if it was queued.
    pub fn remove(&mut self, t: Transportable) -> bool {
        let before = self.cargo.len();
        self.cargo.retain(|c| c.transportable != t);
        self.cargo.len() != before
    }

    /// Distinct leg targets in queue order.
    pub fn scheduled_stops(&self) -> Vec<Location> {
        let mut stops: Vec<Location> = Vec::with_capacity(self.cargo.len());
        for c in &self.cargo {
            let stop = c.target.up();
            if !stops.contains(&stop) {
                stops.push(stop);
            }
        }
        stops
    }
}
