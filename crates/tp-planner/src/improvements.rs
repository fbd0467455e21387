//! The tile-improvement map: which tiles pioneers should work on.

use rustc_hash::FxHashMap;

use tp_colony::ColonyStore;
use tp_core::{AgentId, ColonyId, CostPolicy, Location, TileId};
use tp_mission::PlanContext;

/// The colony plan chosen for a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlanRef {
    pub colony: ColonyId,
    pub value:  i32,
}

/// Best unassigned improvement plan per tile, rebuilt once per turn.
///
/// Half its size is the pioneer quota.
#[derive(Clone, Debug, Default)]
pub struct ImprovementMap {
    best: FxHashMap<TileId, PlanRef>,
}

impl ImprovementMap {
    /// Prune finished and worthless plans from every colony, then index the
    /// most valuable plan per tile that has no pioneer yet.
    ///
    /// Plans with a pioneer are left alone until complete.  When two
    /// colonies want the same tile the higher value wins; on a tie the
    /// earlier colony keeps it.
    pub fn build(colonies: &mut ColonyStore) -> Self {
        let mut best: FxHashMap<TileId, PlanRef> = FxHashMap::default();
        for colony in colonies.colonies.iter_mut() {
            colony.improvements.retain(|p| !p.complete && (p.pioneer.is_some() || p.is_valid()));
            for plan in colony.improvements.iter().filter(|p| p.pioneer.is_none()) {
                let candidate = PlanRef { colony: colony.id, value: plan.value };
                best.entry(plan.tile)
                    .and_modify(|b| {
                        if b.value < candidate.value {
                            *b = candidate;
                        }
                    })
                    .or_insert(candidate);
            }
        }
        Self { best }
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn get(&self, tile: TileId) -> Option<PlanRef> {
        self.best.get(&tile).copied()
    }

    /// Indexed tiles in ascending order.
    pub fn tiles(&self) -> Vec<TileId> {
        let mut tiles: Vec<TileId> = self.best.keys().copied().collect();
        tiles.sort_unstable();
        tiles
    }

    pub fn clear(&mut self) {
        self.best.clear();
    }

    /// The closest indexed tile `agent` can reach within `range` turns.
    pub fn nearest(&self, agent: AgentId, range: u32, ctx: &PlanContext<'_>) -> Option<TileId> {
        self.tiles()
            .into_iter()
            .filter_map(|tile| {
                let turns = ctx.turns_carried(agent, Location::Tile(tile), CostPolicy::Strict).get()?;
                (turns <= range).then_some((turns, tile))
            })
            .min()
            .map(|(_, tile)| tile)
    }

    /// Give the plan on `tile` to `pioneer` and stop offering it.
    pub fn assign(&mut self, tile: TileId, pioneer: AgentId, colonies: &mut ColonyStore) -> bool {
        let Some(plan_ref) = self.best.remove(&tile) else {
            return false;
        };
        let plan = colonies.get_mut(plan_ref.colony).and_then(|c| {
            c.improvements
                .iter_mut()
                .find(|p| p.tile == tile && p.value == plan_ref.value && p.pioneer.is_none())
        });
        match plan {
            Some(plan) => {
                plan.pioneer = Some(pioneer);
                true
            }
            None => false,
        }
    }
}
