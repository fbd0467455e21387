//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Ordering doubles as creation order,
//! which the planner relies on for deterministic tie-breaks.
//!
//! The inner integer is `pub` so stores can index their `Vec`s directly, but
//! callers should prefer `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — the inner type's `MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the faction roster (SoA storage).
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a map tile.
    pub struct TileId(u32);
}

typed_id! {
    /// Index of a colony owned by the planning faction.
    pub struct ColonyId(u32);
}

typed_id! {
    /// Index of a goods parcel awaiting shipment.
    pub struct ParcelId(u32);
}

typed_id! {
    /// Index of a colony wish in the wish store.
    pub struct WishId(u32);
}

typed_id! {
    /// Unit type from the application's ruleset.
    /// Using `u16` keeps profile arrays compact (max 65,535 unit types).
    pub struct UnitTypeId(u16);
}

typed_id! {
    pub struct GoodsTypeId(u16);
}

typed_id! {
    /// Connected region of same-terrain tiles.  Two locations with equal,
    /// valid contiguity ids can be joined without crossing terrain.
    pub struct ContiguityId(u32);
}
