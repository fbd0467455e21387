//! Spatial-subsystem error type.

use thiserror::Error;

use tp_core::{ColonyId, TileId};

/// Errors produced by `tp-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("tile {0} not found in map")]
    TileNotFound(TileId),

    #[error("colony {colony} cannot be placed on water tile {tile}")]
    ColonyOnWater { colony: ColonyId, tile: TileId },

    #[error("colony {0} placed twice")]
    DuplicateColony(ColonyId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
