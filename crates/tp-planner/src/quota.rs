//! Soft quotas for the missions the faction wants a fixed number of.

use tp_colony::ColonyStore;
use tp_core::{FactionRules, PlannerConfig, Turn};
use tp_mission::MissionKind;

/// Builders, pioneers, and scouts still wanted this cycle.
///
/// Recomputed from scratch every cycle, then decremented once for each
/// agent already holding a valid mission of that kind and once for each new
/// assignment.  Counts never go below zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Quotas {
    pub builders: u32,
    pub pioneers: u32,
    pub scouts:   u32,
}

impl Quotas {
    /// Fresh quotas for a cycle.  `improvements` is the size of the
    /// tile-improvement map.
    pub fn compute(
        config:       &PlannerConfig,
        turn:         Turn,
        rules:        &FactionRules,
        colonies:     &ColonyStore,
        improvements: usize,
    ) -> Self {
        Self {
            builders: builders_needed(rules, colonies, config.colony_size_threshold),
            pioneers: (improvements / 2) as u32,
            scouts:   config.scouts_for_age(turn.age),
        }
    }

    /// Remaining count for `kind`; zero for kinds without a quota.
    pub fn remaining(&self, kind: MissionKind) -> u32 {
        match kind {
            MissionKind::BuildColony => self.builders,
            MissionKind::Pioneer     => self.pioneers,
            MissionKind::Scout       => self.scouts,
            _                        => 0,
        }
    }

    /// Count one agent against the quota for `kind`.
    pub fn take(&mut self, kind: MissionKind) {
        let slot = match kind {
            MissionKind::BuildColony => &mut self.builders,
            MissionKind::Pioneer     => &mut self.pioneers,
            MissionKind::Scout       => &mut self.scouts,
            _ => return,
        };
        *slot = slot.saturating_sub(1);
    }
}

/// Colony founders wanted.
///
/// At least two colonies and one port first; after that another builder only
/// when the lone port has grown to three workers or the average colony size
/// is above `threshold`.
pub fn builders_needed(rules: &FactionRules, colonies: &ColonyStore, threshold: f64) -> u32 {
    if !rules.can_build_colonies {
        return 0;
    }
    let ports = colonies.port_count();
    let workers = colonies.worker_count();
    if colonies.is_empty() || ports == 0 {
        2
    } else if ports == 1 && workers >= 3 {
        1
    } else if workers as f64 / colonies.len() as f64 > threshold {
        1
    } else {
        0
    }
}
