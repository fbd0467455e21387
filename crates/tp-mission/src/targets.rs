//! A table-driven [`MissionCatalogue`] and its CSV loader.
//!
//! # CSV format
//!
//! ```csv
//! kind,location
//! build_colony,tile:14
//! missionary,tile:22
//! seek_and_destroy,colony:3
//! cash_in_treasure,home
//! ```
//!
//! **`location`** field:
//!
//! | Value        | Meaning                          |
//! |--------------|----------------------------------|
//! | `tile:<n>`   | `Location::Tile(TileId(n))`      |
//! | `colony:<n>` | `Location::Colony(ColonyId(n))`  |
//! | `home`       | `Location::HomePort`             |

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use tp_core::{AgentId, ColonyId, CostPolicy, Location, PlanRng, TileId, Turns};

use crate::{MissionCatalogue, MissionError, MissionKind, PlanContext};

// ── TargetCatalogue ───────────────────────────────────────────────────────────

/// Fixed candidate targets per mission kind.
///
/// `find_target` returns the nearest candidate within range; for
/// `WanderHostile` it picks a random reachable one instead.
#[derive(Clone, Debug, Default)]
pub struct TargetCatalogue {
    candidates: FxHashMap<MissionKind, Vec<Location>>,
}

impl TargetCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`add`][Self::add].
    pub fn with(mut self, kind: MissionKind, target: Location) -> Self {
        self.add(kind, target);
        self
    }

    /// Register `target` for `kind`.  Duplicates are ignored.
    pub fn add(&mut self, kind: MissionKind, target: Location) {
        let list = self.candidates.entry(kind).or_default();
        if !list.contains(&target) {
            list.push(target);
        }
    }

    /// Remove `target` (e.g. once a colony has been founded there).
    pub fn remove(&mut self, kind: MissionKind, target: Location) -> bool {
        let Some(list) = self.candidates.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|&l| l != target);
        list.len() != before
    }

    pub fn candidates(&self, kind: MissionKind) -> &[Location] {
        self.candidates.get(&kind).map_or(&[], Vec::as_slice)
    }
}

impl MissionCatalogue for TargetCatalogue {
    fn find_target(
        &self,
        kind:           MissionKind,
        agent:          AgentId,
        range:          u32,
        from_home_port: bool,
        ctx:            &PlanContext<'_>,
        rng:            &mut PlanRng,
    ) -> Option<Location> {
        if ctx.agents.in_home_port(agent) && !from_home_port {
            return None;
        }
        let here = ctx.agents.resolved_location(agent);
        let mover = ctx.carried_mover(agent);

        let mut reachable: Vec<(Turns, Location)> = self
            .candidates(kind)
            .iter()
            .map(|&target| (ctx.turns(here, target, mover, CostPolicy::Strict), target))
            .filter(|&(turns, _)| turns.get().is_some_and(|t| t <= range))
            .collect();

        if kind == MissionKind::WanderHostile {
            // Candidate order is insertion order; sort so the draw depends only on the seed.
            reachable.sort_unstable_by_key(|&(_, l)| l);
            return rng.choose(&reachable).map(|&(_, l)| l);
        }
        reachable.into_iter().min().map(|(_, l)| l)
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TargetRecord {
    kind:     String,
    location: String,
}

/// Load mission targets from a CSV file.
pub fn load_targets_csv(path: &Path) -> Result<TargetCatalogue, MissionError> {
    let file = std::fs::File::open(path).map_err(MissionError::Io)?;
    load_targets_reader(file)
}

/// Like [`load_targets_csv`] but accepts any `Read` source.
pub fn load_targets_reader<R: Read>(reader: R) -> Result<TargetCatalogue, MissionError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut catalogue = TargetCatalogue::new();

    for result in csv_reader.deserialize::<TargetRecord>() {
        let row = result.map_err(|e| MissionError::Parse(e.to_string()))?;
        let kind: MissionKind = row.kind.parse()?;
        catalogue.add(kind, parse_location(&row.location)?);
    }

    Ok(catalogue)
}

fn parse_location(s: &str) -> Result<Location, MissionError> {
    let s = s.trim();
    if s == "home" {
        return Ok(Location::HomePort);
    }
    let invalid = || {
        MissionError::Parse(format!(
            "invalid location {s:?}: expected \"tile:<id>\", \"colony:<id>\", or \"home\""
        ))
    };
    match s.split_once(':') {
        Some(("tile", n)) => n.parse::<u32>().map(|t| Location::Tile(TileId(t))).map_err(|_| invalid()),
        Some(("colony", n)) => n.parse::<u32>().map(|c| Location::Colony(ColonyId(c))).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
