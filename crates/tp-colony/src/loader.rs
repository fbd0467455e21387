//! CSV wish loader.
//!
//! # CSV format
//!
//! One row per wish.  `amount` is ignored for worker wishes.
//!
//! ```csv
//! colony_id,kind,type_id,amount,value,destination
//! 0,worker,3,,120,
//! 0,goods,1,100,60,
//! 1,goods,2,50,40,site:4
//! ```
//!
//! **`destination`** field:
//!
//! | Value      | Meaning                                           |
//! |------------|---------------------------------------------------|
//! | *(empty)*  | `Location::Colony(colony_id)`                     |
//! | `site:<n>` | `Location::WorkSite { colony: colony_id, slot: n }` |
//! | `tile:<n>` | `Location::Tile(TileId(n))`                       |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tp_core::{ColonyId, GoodsTypeId, Location, TileId, UnitTypeId};

use crate::{ColonyError, ColonyStore, WishKind, WishStore};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WishRecord {
    colony_id:   u32,
    kind:        String,
    type_id:     u16,
    amount:      Option<u32>,
    value:       i32,
    destination: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load wishes from a CSV file into `wishes`, listing each on its colony.
///
/// Returns the number of wishes raised.
pub fn load_wishes_csv(
    path:     &Path,
    colonies: &mut ColonyStore,
    wishes:   &mut WishStore,
) -> Result<usize, ColonyError> {
    let file = std::fs::File::open(path).map_err(ColonyError::Io)?;
    load_wishes_reader(file, colonies, wishes)
}

/// Like [`load_wishes_csv`] but accepts any `Read` source.
pub fn load_wishes_reader<R: Read>(
    reader:   R,
    colonies: &mut ColonyStore,
    wishes:   &mut WishStore,
) -> Result<usize, ColonyError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut raised = 0;

    for result in csv_reader.deserialize::<WishRecord>() {
        let row = result.map_err(|e| ColonyError::Parse(e.to_string()))?;
        let colony_id = ColonyId(row.colony_id);
        let colony = colonies.get_mut(colony_id).ok_or(ColonyError::UnknownColony(colony_id))?;

        let kind = parse_kind(&row)?;
        let destination = parse_destination(colony_id, row.destination.as_deref())?;
        wishes.raise(colony, destination, row.value, kind);
        raised += 1;
    }

    Ok(raised)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(row: &WishRecord) -> Result<WishKind, ColonyError> {
    match row.kind.trim() {
        "worker" => Ok(WishKind::Worker { unit_type: UnitTypeId(row.type_id) }),
        "goods" => {
            let amount = row.amount.ok_or_else(|| {
                ColonyError::Parse(format!("goods wish for colony {} has no amount", row.colony_id))
            })?;
            Ok(WishKind::Goods { goods_type: GoodsTypeId(row.type_id), amount })
        }
        other => Err(ColonyError::Parse(format!(
            "invalid wish kind {other:?}: expected \"worker\" or \"goods\""
        ))),
    }
}

fn parse_destination(colony: ColonyId, s: Option<&str>) -> Result<Location, ColonyError> {
    let s = s.map(str::trim).unwrap_or("");
    if s.is_empty() {
        return Ok(Location::Colony(colony));
    }
    let invalid = || {
        ColonyError::Parse(format!(
            "invalid destination {s:?}: expected empty, \"site:<slot>\", or \"tile:<id>\""
        ))
    };
    match s.split_once(':') {
        Some(("site", n)) => n
            .parse::<u16>()
            .map(|slot| Location::WorkSite { colony, slot })
            .map_err(|_| invalid()),
        Some(("tile", n)) => n.parse::<u32>().map(|t| Location::Tile(TileId(t))).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
