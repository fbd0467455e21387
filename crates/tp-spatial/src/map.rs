//! Tile map representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `TileId t`, its neighbours occupy the slice:
//!
//! ```text
//! edge_to[ tile_out_start[t] .. tile_out_start[t+1] ]
//! ```
//!
//! with the matching move cost in `edge_cost`.  Iteration over a tile's
//! neighbours is a contiguous scan, which keeps Dijkstra's inner loop tight.
//!
//! # Contiguity
//!
//! `build()` flood-fills same-terrain regions and stores one `ContiguityId`
//! per tile.  Land regions and water regions are numbered from the same
//! counter, so a land id never equals a water id.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use tp_core::{ColonyId, ContiguityId, TileId};

use crate::{SpatialError, SpatialResult};

/// Surface type of a tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Land,
    Water,
}

// ── TileMap ───────────────────────────────────────────────────────────────────

/// Undirected tile graph in CSR format plus terrain, high-seas flags,
/// contiguity ids, and colony placements.
///
/// Do not construct directly; use [`TileMapBuilder`].
pub struct TileMap {
    // ── Tile data ─────────────────────────────────────────────────────────
    pub terrain:    Vec<Terrain>,
    /// Water tiles from which a ship can sail to the home port.
    pub high_seas:  Vec<bool>,
    pub contiguity: Vec<ContiguityId>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Length = `tile_count + 1`.
    pub tile_out_start: Vec<u32>,
    pub edge_to:        Vec<TileId>,
    /// Move points needed to enter `edge_to[e]`.
    pub edge_cost:      Vec<u32>,

    colony_tiles: FxHashMap<ColonyId, TileId>,
}

impl TileMap {
    pub fn empty() -> Self {
        TileMapBuilder::new().build()
    }

    pub fn tile_count(&self) -> usize {
        self.terrain.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terrain.is_empty()
    }

    #[inline]
    pub fn contains(&self, tile: TileId) -> bool {
        tile.index() < self.tile_count()
    }

    /// Edge indices of all neighbours of `tile`.
    #[inline]
    pub fn out_edges(&self, tile: TileId) -> std::ops::Range<usize> {
        let start = self.tile_out_start[tile.index()] as usize;
        let end   = self.tile_out_start[tile.index() + 1] as usize;
        start..end
    }

    #[inline]
    pub fn is_land(&self, tile: TileId) -> bool {
        self.terrain[tile.index()] == Terrain::Land
    }

    /// The tile a colony stands on.
    pub fn colony_tile(&self, colony: ColonyId) -> Option<TileId> {
        self.colony_tiles.get(&colony).copied()
    }

    /// `true` if any neighbour of `tile` is water.
    pub fn is_coastal(&self, tile: TileId) -> bool {
        self.out_edges(tile).any(|e| !self.is_land(self.edge_to[e]))
    }
}

// ── TileMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`TileMap`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tp_spatial::{Terrain, TileMapBuilder};
///
/// let mut b = TileMapBuilder::new();
/// let a = b.add_tile(Terrain::Land);
/// let c = b.add_tile(Terrain::Land);
/// b.connect(a, c, 1);
/// let map = b.build();
/// assert_eq!(map.tile_count(), 2);
/// assert_eq!(map.edge_count(), 2); // both directions
/// assert_eq!(map.contiguity[0], map.contiguity[1]);
/// ```
pub struct TileMapBuilder {
    terrain:      Vec<Terrain>,
    high_seas:    Vec<bool>,
    raw_edges:    Vec<(TileId, TileId, u32)>,
    colony_tiles: FxHashMap<ColonyId, TileId>,
}

impl TileMapBuilder {
    pub fn new() -> Self {
        Self {
            terrain:      Vec::new(),
            high_seas:    Vec::new(),
            raw_edges:    Vec::new(),
            colony_tiles: FxHashMap::default(),
        }
    }

    /// Add a tile and return its `TileId` (sequential from 0).
    pub fn add_tile(&mut self, terrain: Terrain) -> TileId {
        let id = TileId(self.terrain.len() as u32);
        self.terrain.push(terrain);
        self.high_seas.push(false);
        id
    }

    /// Add a water tile that connects to the home port.
    pub fn add_high_seas(&mut self) -> TileId {
        let id = self.add_tile(Terrain::Water);
        self.high_seas[id.index()] = true;
        id
    }

    /// Make `a` and `b` neighbours.  `cost` is the move points needed to
    /// enter either tile from the other.
    pub fn connect(&mut self, a: TileId, b: TileId, cost: u32) {
        self.raw_edges.push((a, b, cost));
        self.raw_edges.push((b, a, cost));
    }

    /// Record that `colony` stands on `tile`.
    pub fn place_colony(&mut self, colony: ColonyId, tile: TileId) -> SpatialResult<()> {
        let terrain = self.terrain.get(tile.index()).ok_or(SpatialError::TileNotFound(tile))?;
        if *terrain != Terrain::Land {
            return Err(SpatialError::ColonyOnWater { colony, tile });
        }
        if self.colony_tiles.insert(colony, tile).is_some() {
            return Err(SpatialError::DuplicateColony(colony));
        }
        Ok(())
    }

    pub fn tile_count(&self) -> usize { self.terrain.len() }

    /// Consume the builder and produce a [`TileMap`].
    pub fn build(self) -> TileMap {
        let tile_count = self.terrain.len();

        let mut raw = self.raw_edges;
        raw.retain(|(a, b, _)| a.index() < tile_count && b.index() < tile_count);
        raw.sort_unstable_by_key(|&(from, to, _)| (from.0, to.0));

        let edge_to:   Vec<TileId> = raw.iter().map(|e| e.1).collect();
        let edge_cost: Vec<u32>    = raw.iter().map(|e| e.2).collect();

        let mut tile_out_start = vec![0u32; tile_count + 1];
        for e in &raw {
            tile_out_start[e.0.index() + 1] += 1;
        }
        for i in 1..=tile_count {
            tile_out_start[i] += tile_out_start[i - 1];
        }

        let mut map = TileMap {
            terrain: self.terrain,
            high_seas: self.high_seas,
            contiguity: vec![ContiguityId::INVALID; tile_count],
            tile_out_start,
            edge_to,
            edge_cost,
            colony_tiles: self.colony_tiles,
        };
        label_contiguity(&mut map);
        map
    }
}

impl Default for TileMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Breadth-first flood fill over same-terrain neighbours, visiting seeds in
/// tile-id order so region numbering is deterministic.
fn label_contiguity(map: &mut TileMap) {
    let mut next = 0u32;
    let mut queue = VecDeque::new();
    for seed in 0..map.tile_count() {
        if map.contiguity[seed].is_valid() {
            continue;
        }
        let region = ContiguityId(next);
        next += 1;
        let terrain = map.terrain[seed];
        map.contiguity[seed] = region;
        queue.push_back(TileId(seed as u32));
        while let Some(tile) = queue.pop_front() {
            for e in map.out_edges(tile) {
                let n = map.edge_to[e];
                if map.terrain[n.index()] == terrain && !map.contiguity[n.index()].is_valid() {
                    map.contiguity[n.index()] = region;
                    queue.push_back(n);
                }
            }
        }
    }
}
