//! The skirmish map: a mainland, an offshore island, and open sea.
//!
//! ```text
//!   mainland:  0 ─2─ 1 ─ 2 (Fort)          8 (Haven)   9 ─ 10
//!                        │                  │           │
//!   sea:                 3 ─ 4 ─ 5 ─ 6 ─ 7 ─┴───────────┘
//!                                    │
//!                                    11 (high seas)
//! ```

use tp_core::{ColonyId, TileId};
use tp_spatial::{MapOracle, SpatialResult, Terrain, TileMapBuilder};

pub const FORT: ColonyId = ColonyId(0);
pub const HAVEN: ColonyId = ColonyId(1);

/// Turns from any high-seas tile to the home port.
const SAIL_TURNS: u32 = 3;

/// Build the map and place the two colonies on it.
pub fn build_coast() -> SpatialResult<MapOracle> {
    let mut b = TileMapBuilder::new();

    let land = |b: &mut TileMapBuilder| b.add_tile(Terrain::Land);
    let sea = |b: &mut TileMapBuilder| b.add_tile(Terrain::Water);

    let mainland: Vec<TileId> = (0..3).map(|_| land(&mut b)).collect();
    let water: Vec<TileId> = (0..5).map(|_| sea(&mut b)).collect();
    let island: Vec<TileId> = (0..3).map(|_| land(&mut b)).collect();
    let seas = b.add_high_seas();

    b.connect(mainland[0], mainland[1], 2);
    b.connect(mainland[1], mainland[2], 1);
    b.connect(mainland[2], water[0], 1);
    for w in water.windows(2) {
        b.connect(w[0], w[1], 1);
    }
    b.connect(water[4], island[0], 1);
    b.connect(island[0], island[1], 1);
    b.connect(island[1], island[2], 1);
    b.connect(water[4], island[1], 1);
    b.connect(water[3], seas, 1);

    b.place_colony(FORT, mainland[2])?;
    b.place_colony(HAVEN, island[0])?;
    Ok(MapOracle::new(b.build(), SAIL_TURNS))
}
