//! Distance oracle trait and the reference tile-map implementation.
//!
//! # Pluggability
//!
//! The planner calls travel-time queries via the [`DistanceOracle`] trait, so
//! applications can plug in their own pathfinder.  The default [`MapOracle`]
//! runs Dijkstra over a [`TileMap`] and is sufficient for tests and demos.
//!
//! # Cost units
//!
//! Edge costs are move points (u32).  A duration in turns is
//! `ceil(cost / mover.moves_per_turn)`; the home port adds a fixed sailing
//! time on top of reaching any high-seas tile.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tp_core::{ContiguityId, CostPolicy, Location, TileId, Turns};

use crate::map::TileMap;

// ── Mover ─────────────────────────────────────────────────────────────────────

/// Which tiles a mover may cross.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    /// Land tiles only (colonists on foot, wagons).
    Land,
    /// Water tiles; land only as the first or last tile of a leg (ships
    /// docking at a coastal colony or picking up from a beach).
    Naval,
    /// Anything: a land unit carried by a ship for the sea part.
    Amphibious,
}

/// The thing being moved, as far as the oracle cares.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mover {
    pub traversal:      Traversal,
    pub moves_per_turn: u32,
}

impl Mover {
    pub const fn land(moves_per_turn: u32) -> Self {
        Self { traversal: Traversal::Land, moves_per_turn }
    }

    pub const fn naval(moves_per_turn: u32) -> Self {
        Self { traversal: Traversal::Naval, moves_per_turn }
    }

    pub const fn amphibious(moves_per_turn: u32) -> Self {
        Self { traversal: Traversal::Amphibious, moves_per_turn }
    }
}

// ── DistanceOracle trait ──────────────────────────────────────────────────────

/// Travel-time and region queries.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so several factions can be planned
/// in parallel against the same map.
pub trait DistanceOracle: Send + Sync {
    /// Whole turns for `mover` to get from `from` to `to`, or
    /// [`Turns::UNREACHABLE`].  `from == to` is zero turns.
    ///
    /// `Location::Aboard` cannot be resolved here; callers substitute the
    /// carrier's own location first.
    fn turns_to_reach(&self, from: Location, to: Location, mover: Mover, policy: CostPolicy) -> Turns;

    /// Region id of `location`, or `ContiguityId::INVALID` for locations off
    /// the map (the home port, unresolved carriers).
    fn contiguity_of(&self, location: Location) -> ContiguityId;

    /// `true` if both locations are in the same valid region.
    fn same_contiguity(&self, a: Location, b: Location) -> bool {
        let ca = self.contiguity_of(a);
        ca.is_valid() && ca == self.contiguity_of(b)
    }
}

// ── MapOracle ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Endpoint {
    Tile(TileId),
    HomePort,
}

/// Dijkstra over a [`TileMap`].
pub struct MapOracle {
    pub map:        TileMap,
    /// Turns between any high-seas tile and the home port.
    pub sail_turns: u32,
}

impl MapOracle {
    pub fn new(map: TileMap, sail_turns: u32) -> Self {
        Self { map, sail_turns }
    }

    fn endpoint(&self, location: Location) -> Option<Endpoint> {
        let tile = match location {
            Location::Tile(t)                  => t,
            Location::Colony(c)                => self.map.colony_tile(c)?,
            Location::WorkSite { colony, .. }  => self.map.colony_tile(colony)?,
            Location::HomePort                 => return Some(Endpoint::HomePort),
            Location::Aboard(_)                => return None,
        };
        self.map.contains(tile).then_some(Endpoint::Tile(tile))
    }

    fn to_turns(cost: u32, mover: Mover) -> Turns {
        if cost == u32::MAX {
            return Turns::UNREACHABLE;
        }
        Turns(cost.div_ceil(mover.moves_per_turn.max(1)))
    }

    /// Cheapest way from `tile` to any high-seas tile, in turns, plus the
    /// crossing itself.
    fn turns_to_home_port(&self, tile: TileId, mover: Mover, policy: CostPolicy) -> Turns {
        if mover.traversal == Traversal::Land {
            return Turns::UNREACHABLE;
        }
        let dist = search(&self.map, tile, None, mover, policy);
        let best = dist
            .iter()
            .zip(&self.map.high_seas)
            .filter(|&(_, &high)| high)
            .map(|(&d, _)| d)
            .min()
            .unwrap_or(u32::MAX);
        Self::to_turns(best, mover).plus(Turns(self.sail_turns))
    }
}

impl DistanceOracle for MapOracle {
    fn turns_to_reach(&self, from: Location, to: Location, mover: Mover, policy: CostPolicy) -> Turns {
        let (Some(a), Some(b)) = (self.endpoint(from), self.endpoint(to)) else {
            return Turns::UNREACHABLE;
        };
        match (a, b) {
            (Endpoint::HomePort, Endpoint::HomePort) => Turns::ZERO,
            // The graph is undirected, so the outbound and inbound crossings cost the same.
            (Endpoint::HomePort, Endpoint::Tile(t)) | (Endpoint::Tile(t), Endpoint::HomePort) => {
                self.turns_to_home_port(t, mover, policy)
            }
            (Endpoint::Tile(s), Endpoint::Tile(t)) => {
                if s == t {
                    return Turns::ZERO;
                }
                let dist = search(&self.map, s, Some(t), mover, policy);
                Self::to_turns(dist[t.index()], mover)
            }
        }
    }

    fn contiguity_of(&self, location: Location) -> ContiguityId {
        match self.endpoint(location) {
            Some(Endpoint::Tile(t)) => self.map.contiguity[t.index()],
            _ => ContiguityId::INVALID,
        }
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Move cost of entering edge `e` under `policy`.
#[inline]
fn edge_cost(map: &TileMap, e: usize, policy: CostPolicy) -> u32 {
    match policy {
        CostPolicy::Strict  => map.edge_cost[e].max(1),
        CostPolicy::Relaxed => 1,
    }
}

/// May `mover` enter `tile`?  Naval movers touch land only at the target.
#[inline]
fn can_enter(map: &TileMap, tile: TileId, target: Option<TileId>, mover: Mover) -> bool {
    match mover.traversal {
        Traversal::Land       => map.is_land(tile),
        Traversal::Naval      => !map.is_land(tile) || target == Some(tile),
        Traversal::Amphibious => true,
    }
}

/// Single-source Dijkstra.  Returns the cost to every tile (`u32::MAX` for
/// unreached); stops early once `target` is settled.
fn search(map: &TileMap, from: TileId, target: Option<TileId>, mover: Mover, policy: CostPolicy) -> Vec<u32> {
    let n = map.tile_count();
    let mut dist = vec![u32::MAX; n];
    if from.index() >= n {
        return dist;
    }
    dist[from.index()] = 0;

    // Min-heap: (cost, tile). Secondary key TileId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, TileId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, tile))) = heap.pop() {
        if Some(tile) == target {
            break;
        }
        // Skip stale heap entries.
        if cost > dist[tile.index()] {
            continue;
        }
        // A naval mover that has reached land cannot continue over it.
        if tile != from && mover.traversal == Traversal::Naval && map.is_land(tile) {
            continue;
        }
        for e in map.out_edges(tile) {
            let next = map.edge_to[e];
            if !can_enter(map, next, target, mover) {
                continue;
            }
            let new_cost = cost.saturating_add(edge_cost(map, e, policy));
            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                heap.push(Reverse((new_cost, next)));
            }
        }
    }
    dist
}
