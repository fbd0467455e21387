//! Game rules the planner needs to know about.

use crate::{GoodsTypeId, UnitTypeId};

/// Per-goods-type flags from the ruleset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoodsTypeInfo {
    pub id:       GoodsTypeId,
    pub name:     String,
    /// Can be stored in a warehouse and therefore wished for.
    pub storable: bool,
    /// Can be sold at the home port.
    pub tradable: bool,
}

/// Unit and goods types known to the game.
///
/// The wish registry keys its per-type lists by these, so a type missing here
/// can never be matched.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ruleset {
    pub unit_types:  Vec<UnitTypeId>,
    pub goods_types: Vec<GoodsTypeInfo>,
}

impl Ruleset {
    pub fn goods_type(&self, id: GoodsTypeId) -> Option<&GoodsTypeInfo> {
        self.goods_types.iter().find(|g| g.id == id)
    }

    pub fn storable_goods(&self) -> impl Iterator<Item = GoodsTypeId> + '_ {
        self.goods_types.iter().filter(|g| g.storable).map(|g| g.id)
    }
}

/// What the planning faction is currently allowed to do.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactionRules {
    /// `false` once the faction has declared independence or is otherwise
    /// barred from founding new colonies.
    pub can_build_colonies: bool,
    /// The faction still trades with its home port.
    pub has_home_port:      bool,
    /// Goods the home port refuses to buy.
    pub embargoed:          Vec<GoodsTypeId>,
}

impl Default for FactionRules {
    fn default() -> Self {
        Self { can_build_colonies: true, has_home_port: true, embargoed: Vec::new() }
    }
}

impl FactionRules {
    /// Whether `goods` may be sold at the home port.
    pub fn can_trade(&self, ruleset: &Ruleset, goods: GoodsTypeId) -> bool {
        self.has_home_port
            && !self.embargoed.contains(&goods)
            && ruleset.goods_type(goods).is_some_and(|g| g.tradable)
    }
}
