//! Colonies as seen by the planner.
//!
//! Only the facts that drive mission allocation live here: size, defence,
//! what the colony can equip, what it imports, what it wants, and what it
//! wants shipped out.  Production and growth are someone else's problem.

use rustc_hash::FxHashMap;

use tp_core::{AgentId, ColonyId, GoodsTypeId, Location, ParcelId, TileId, WishId};

// ── ImprovementPlan ───────────────────────────────────────────────────────────

/// A tile the colony wants a pioneer to improve (road, plough, clear forest).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImprovementPlan {
    pub tile:     TileId,
    /// Benefit to the colony; non-positive means not worth doing.
    pub value:    i32,
    /// Pioneer already assigned to this plan.
    pub pioneer:  Option<AgentId>,
    pub complete: bool,
}

impl ImprovementPlan {
    pub fn new(tile: TileId, value: i32) -> Self {
        Self { tile, value, pioneer: None, complete: false }
    }

    /// Worth doing and not yet done.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.value > 0 && !self.complete
    }
}

// ── Colony ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colony {
    pub id:   ColonyId,
    pub name: String,
    pub tile: TileId,

    // ── Status ────────────────────────────────────────────────────────────
    /// Coastal with a sea route to the high seas.
    pub connected_port: bool,
    /// Units working inside the colony.
    pub workers:        u32,
    pub badly_defended: bool,
    /// Defence strength over threat.  Lower is more urgent.
    pub defence_ratio:  f64,
    /// Has the horses to mount a scout.
    pub equips_scouts:   bool,
    /// Has the tools to equip a pioneer.
    pub equips_pioneers: bool,

    // ── Trade ─────────────────────────────────────────────────────────────
    /// Amount of each goods type the colony will accept right now.
    pub imports: FxHashMap<GoodsTypeId, u32>,

    // ── Outstanding work ──────────────────────────────────────────────────
    pub wishes:       Vec<WishId>,
    pub export_goods: Vec<ParcelId>,
    pub improvements: Vec<ImprovementPlan>,
}

impl Colony {
    pub fn new(id: ColonyId, name: impl Into<String>, tile: TileId) -> Self {
        Self {
            id,
            name: name.into(),
            tile,
            connected_port:  false,
            workers:         0,
            badly_defended:  false,
            defence_ratio:   1.0,
            equips_scouts:   false,
            equips_pioneers: false,
            imports:         FxHashMap::default(),
            wishes:          Vec::new(),
            export_goods:    Vec::new(),
            improvements:    Vec::new(),
        }
    }

    #[inline]
    pub fn location(&self) -> Location {
        Location::Colony(self.id)
    }

    /// How much of `goods` the colony will take.
    #[inline]
    pub fn import_capacity(&self, goods: GoodsTypeId) -> u32 {
        self.imports.get(&goods).copied().unwrap_or(0)
    }
}

// ── ColonyStore ───────────────────────────────────────────────────────────────

/// All colonies of the planning faction, indexed by `ColonyId`.
#[derive(Clone, Debug, Default)]
pub struct ColonyStore {
    pub colonies: Vec<Colony>,
}

impl ColonyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Found a colony and return its id.
    pub fn add(&mut self, name: impl Into<String>, tile: TileId) -> ColonyId {
        let id = ColonyId(self.colonies.len() as u32);
        self.colonies.push(Colony::new(id, name, tile));
        id
    }

    #[inline]
    pub fn get(&self, id: ColonyId) -> Option<&Colony> {
        self.colonies.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: ColonyId) -> Option<&mut Colony> {
        self.colonies.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Colony> {
        self.colonies.iter()
    }

    pub fn len(&self) -> usize {
        self.colonies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colonies.is_empty()
    }

    /// Colonies reachable by sea.
    pub fn port_count(&self) -> usize {
        self.colonies.iter().filter(|c| c.connected_port).count()
    }

    /// Total workers over all colonies.
    pub fn worker_count(&self) -> u32 {
        self.colonies.iter().map(|c| c.workers).sum()
    }
}
