//! `tp-spatial` — travel-time queries between locations.
//!
//! The planner never paths units itself; it asks a [`DistanceOracle`] how many
//! turns a leg takes and which contiguous region a location belongs to.  This
//! crate defines that seam and ships a reference oracle over a small tile map
//! for tests, demos, and applications without their own pathfinder.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`map`]    | `TileMap` (CSR adjacency + contiguity), `TileMapBuilder`, `Terrain` |
//! | [`oracle`] | `DistanceOracle` trait, `Mover`, `Traversal`, `MapOracle`     |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod map;
pub mod oracle;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use map::{Terrain, TileMap, TileMapBuilder};
pub use oracle::{DistanceOracle, MapOracle, Mover, Traversal};
