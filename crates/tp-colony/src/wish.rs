//! Colony wishes: a worker of some type, or an amount of some goods.

use tp_core::{ColonyId, GoodsTypeId, Location, Transportable, UnitTypeId, WishId};

use crate::Colony;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WishKind {
    Worker { unit_type: UnitTypeId },
    Goods  { goods_type: GoodsTypeId, amount: u32 },
}

/// A colony's request for a worker or goods to be delivered.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wish {
    pub id:            WishId,
    pub colony:        ColonyId,
    pub destination:   Location,
    pub value:         i32,
    pub kind:          WishKind,
    /// The agent or parcel promised to fulfil this wish.
    pub transportable: Option<Transportable>,
    /// Fulfilled or withdrawn; never matched again.
    pub consumed:      bool,
}

impl Wish {
    pub fn unit_type(&self) -> Option<UnitTypeId> {
        match self.kind {
            WishKind::Worker { unit_type } => Some(unit_type),
            WishKind::Goods { .. } => None,
        }
    }

    pub fn goods_type(&self) -> Option<GoodsTypeId> {
        match self.kind {
            WishKind::Goods { goods_type, .. } => Some(goods_type),
            WishKind::Worker { .. } => None,
        }
    }

    /// Goods still wanted; zero for worker wishes.
    pub fn goods_amount(&self) -> u32 {
        match self.kind {
            WishKind::Goods { amount, .. } => amount,
            WishKind::Worker { .. } => 0,
        }
    }

    #[inline]
    pub fn is_outstanding(&self) -> bool {
        !self.consumed
    }
}

#[derive(Clone, Debug, Default)]
pub struct WishStore {
    pub wishes: Vec<Wish>,
}

impl WishStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a wish on behalf of `colony` and list it on the colony.
    pub fn raise(&mut self, colony: &mut Colony, destination: Location, value: i32, kind: WishKind) -> WishId {
        let id = WishId(self.wishes.len() as u32);
        self.wishes.push(Wish {
            id,
            colony: colony.id,
            destination,
            value,
            kind,
            transportable: None,
            consumed: false,
        });
        colony.wishes.push(id);
        id
    }

    #[inline]
    pub fn get(&self, id: WishId) -> Option<&Wish> {
        self.wishes.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: WishId) -> Option<&mut Wish> {
        self.wishes.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wish> {
        self.wishes.iter()
    }

    pub fn len(&self) -> usize {
        self.wishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }

    /// Reduce a goods wish by `delivered`.  Returns the amount still wanted.
    pub fn shrink_goods(&mut self, id: WishId, delivered: u32) -> u32 {
        match self.wishes.get_mut(id.index()).map(|w| &mut w.kind) {
            Some(WishKind::Goods { amount, .. }) => {
                *amount = amount.saturating_sub(delivered);
                *amount
            }
            _ => 0,
        }
    }
}
