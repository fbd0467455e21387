//! Where things are, and the handle for things that want to move.

use std::fmt;

use crate::{AgentId, ColonyId, ParcelId, TileId};

// ── Location ──────────────────────────────────────────────────────────────────

/// A place an agent or goods parcel can occupy or travel to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    /// A map tile outside any colony.
    Tile(TileId),
    /// A colony, addressed as a whole.
    Colony(ColonyId),
    /// A building or field slot inside a colony.
    WorkSite { colony: ColonyId, slot: u16 },
    /// The faction's overseas home port.
    HomePort,
    /// Carried on board another agent.
    Aboard(AgentId),
}

impl Location {
    /// Collapse a work site to its enclosing colony.  Every other variant is
    /// returned unchanged.
    ///
    /// Demand and supply are always keyed by the up-levelled location so that
    /// two work sites in the same colony meet at the same index entry.
    #[inline]
    pub fn up(self) -> Location {
        match self {
            Location::WorkSite { colony, .. } => Location::Colony(colony),
            other => other,
        }
    }

    /// The colony this location belongs to, if any.
    #[inline]
    pub fn colony(self) -> Option<ColonyId> {
        match self {
            Location::Colony(c) | Location::WorkSite { colony: c, .. } => Some(c),
            _ => None,
        }
    }

    /// The carrier holding this location, if it is on board one.
    #[inline]
    pub fn carrier(self) -> Option<AgentId> {
        match self {
            Location::Aboard(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn is_home_port(self) -> bool {
        matches!(self, Location::HomePort)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Tile(t)                    => write!(f, "{t}"),
            Location::Colony(c)                  => write!(f, "{c}"),
            Location::WorkSite { colony, slot }  => write!(f, "{colony}#{slot}"),
            Location::HomePort                   => f.write_str("HomePort"),
            Location::Aboard(a)                  => write!(f, "aboard {a}"),
        }
    }
}

// ── Transportable ─────────────────────────────────────────────────────────────

/// Anything that may request carriage: an agent or a goods parcel.
///
/// Agents order before goods, then by id, which gives the urgent list a
/// stable secondary key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transportable {
    Agent(AgentId),
    Goods(ParcelId),
}

impl Transportable {
    #[inline]
    pub fn agent(self) -> Option<AgentId> {
        match self {
            Transportable::Agent(a) => Some(a),
            Transportable::Goods(_) => None,
        }
    }

    #[inline]
    pub fn parcel(self) -> Option<ParcelId> {
        match self {
            Transportable::Goods(p) => Some(p),
            Transportable::Agent(_) => None,
        }
    }
}

impl fmt::Display for Transportable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transportable::Agent(a) => write!(f, "{a}"),
            Transportable::Goods(p) => write!(f, "{p}"),
        }
    }
}
