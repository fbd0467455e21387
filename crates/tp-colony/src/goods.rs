//! Goods parcels awaiting shipment.

use tp_core::{AgentId, ColonyId, GoodsTypeId, Location, ParcelId};

/// Transport priority a fresh parcel starts with.
pub const BASE_GOODS_PRIORITY: u32 = 40;

/// A quantity of one goods type that a colony wants moved somewhere.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoodsParcel {
    pub id:          ParcelId,
    pub goods_type:  GoodsTypeId,
    pub amount:      u32,
    pub owner:       ColonyId,
    /// Where the parcel is now (also its transport source).
    pub location:    Location,
    pub destination: Option<Location>,
    /// Carrier that has claimed the parcel.
    pub transport:   Option<AgentId>,
    pub priority:    u32,
    pub disposed:    bool,
}

#[derive(Clone, Debug, Default)]
pub struct GoodsStore {
    pub parcels: Vec<GoodsParcel>,
}

impl GoodsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parcel and return its id.  The caller lists it in the
    /// owning colony's `export_goods`.
    pub fn add(
        &mut self,
        owner:       ColonyId,
        goods_type:  GoodsTypeId,
        amount:      u32,
        destination: Option<Location>,
    ) -> ParcelId {
        let id = ParcelId(self.parcels.len() as u32);
        self.parcels.push(GoodsParcel {
            id,
            goods_type,
            amount,
            owner,
            location: Location::Colony(owner),
            destination,
            transport: None,
            priority: BASE_GOODS_PRIORITY,
            disposed: false,
        });
        id
    }

    #[inline]
    pub fn get(&self, id: ParcelId) -> Option<&GoodsParcel> {
        self.parcels.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: ParcelId) -> Option<&mut GoodsParcel> {
        self.parcels.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }
}
