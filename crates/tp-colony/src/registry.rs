//! Per-type wish index.
//!
//! Rebuilt from the colonies' raw wish lists at the start of every planning
//! cycle, then consumed destructively by the allocator and the retargeter.

use rustc_hash::FxHashMap;

use tp_core::{GoodsTypeId, Ruleset, UnitTypeId, WishId};

use crate::{ColonyStore, WishKind, WishStore};

/// Outstanding wishes keyed by the unit type or goods type that satisfies them.
#[derive(Clone, Debug, Default)]
pub struct WishRegistry {
    worker_wishes: FxHashMap<UnitTypeId, Vec<WishId>>,
    goods_wishes:  FxHashMap<GoodsTypeId, Vec<WishId>>,
}

impl WishRegistry {
    /// Index every colony's raw wishes.
    ///
    /// Lists exist for every unit type and every storable goods type in the
    /// ruleset.  Skipped: consumed wishes, worker wishes already bound to a
    /// transportable, goods wishes whose destination is not a colony, and
    /// types the ruleset does not know.
    pub fn rebuild(ruleset: &Ruleset, colonies: &ColonyStore, wishes: &WishStore) -> Self {
        let mut worker_wishes: FxHashMap<UnitTypeId, Vec<WishId>> =
            ruleset.unit_types.iter().map(|&ut| (ut, Vec::new())).collect();
        let mut goods_wishes: FxHashMap<GoodsTypeId, Vec<WishId>> =
            ruleset.storable_goods().map(|gt| (gt, Vec::new())).collect();

        for colony in colonies.iter() {
            for &id in &colony.wishes {
                let Some(wish) = wishes.get(id) else { continue };
                if wish.consumed {
                    continue;
                }
                match wish.kind {
                    WishKind::Worker { unit_type } => {
                        if wish.transportable.is_some() {
                            continue;
                        }
                        if let Some(list) = worker_wishes.get_mut(&unit_type) {
                            list.push(id);
                        }
                    }
                    WishKind::Goods { goods_type, .. } => {
                        if wish.destination.colony().is_none() {
                            continue;
                        }
                        if let Some(list) = goods_wishes.get_mut(&goods_type) {
                            list.push(id);
                        }
                    }
                }
            }
        }

        Self { worker_wishes, goods_wishes }
    }

    /// Every outstanding wish across all colonies, highest value first
    /// (ties by id).
    pub fn all_wishes(colonies: &ColonyStore, wishes: &WishStore) -> Vec<WishId> {
        let mut all: Vec<WishId> = colonies
            .iter()
            .flat_map(|c| c.wishes.iter().copied())
            .filter(|&w| wishes.get(w).is_some_and(|w| w.is_outstanding()))
            .collect();
        all.sort_by(|&a, &b| {
            let va = wishes.get(a).map_or(i32::MIN, |w| w.value);
            let vb = wishes.get(b).map_or(i32::MIN, |w| w.value);
            vb.cmp(&va).then(a.cmp(&b))
        });
        all
    }

    pub fn worker_wishes(&self, unit_type: UnitTypeId) -> &[WishId] {
        self.worker_wishes.get(&unit_type).map_or(&[], Vec::as_slice)
    }

    pub fn goods_wishes(&self, goods_type: GoodsTypeId) -> &[WishId] {
        self.goods_wishes.get(&goods_type).map_or(&[], Vec::as_slice)
    }

    /// Drop `wish` from whichever typed list holds it.  Returns `true` if it
    /// was indexed.
    pub fn remove(&mut self, wish: WishId) -> bool {
        let lists = self.worker_wishes.values_mut().chain(self.goods_wishes.values_mut());
        let mut removed = false;
        for list in lists {
            if let Some(pos) = list.iter().position(|&w| w == wish) {
                list.remove(pos);
                removed = true;
            }
        }
        removed
    }

    /// Mark `wish` fulfilled and drop it from the index.  Calling this again
    /// for the same wish is a no-op.
    pub fn complete_wish(&mut self, wishes: &mut WishStore, wish: WishId) {
        self.remove(wish);
        if let Some(w) = wishes.get_mut(wish) {
            w.consumed = true;
        }
    }

    /// Total number of indexed wishes.
    pub fn len(&self) -> usize {
        self.worker_wishes.values().chain(self.goods_wishes.values()).map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
