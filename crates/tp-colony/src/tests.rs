//! Unit tests for tp-colony.

#[cfg(test)]
mod helpers {
    use tp_core::{GoodsTypeId, GoodsTypeInfo, Location, Ruleset, TileId, UnitTypeId};
    use crate::{ColonyStore, WishKind, WishStore};

    pub const FARMER: UnitTypeId = UnitTypeId(0);
    pub const SMITH: UnitTypeId = UnitTypeId(1);
    pub const TOOLS: GoodsTypeId = GoodsTypeId(0);
    pub const BELLS: GoodsTypeId = GoodsTypeId(1);

    pub fn ruleset() -> Ruleset {
        Ruleset {
            unit_types:  vec![FARMER, SMITH],
            goods_types: vec![
                GoodsTypeInfo { id: TOOLS, name: "tools".into(), storable: true, tradable: true },
                GoodsTypeInfo { id: BELLS, name: "bells".into(), storable: false, tradable: false },
            ],
        }
    }

    /// Two colonies; colony 0 wants a farmer (value 50) and tools (value 80),
    /// colony 1 wants a smith (value 120).
    pub fn two_colonies() -> (ColonyStore, WishStore) {
        let mut colonies = ColonyStore::new();
        let a = colonies.add("Jamestown", TileId(0));
        let b = colonies.add("Plymouth", TileId(5));
        let mut wishes = WishStore::new();
        let ca = colonies.get_mut(a).unwrap();
        wishes.raise(ca, Location::Colony(a), 50, WishKind::Worker { unit_type: FARMER });
        wishes.raise(ca, Location::Colony(a), 80, WishKind::Goods { goods_type: TOOLS, amount: 100 });
        let cb = colonies.get_mut(b).unwrap();
        wishes.raise(cb, Location::Colony(b), 120, WishKind::Worker { unit_type: SMITH });
        (colonies, wishes)
    }
}

// ── Colonies & stores ─────────────────────────────────────────────────────────

#[cfg(test)]
mod colony {
    use tp_core::{ColonyId, GoodsTypeId, Location, TileId};
    use crate::{ColonyStore, GoodsStore, ImprovementPlan, BASE_GOODS_PRIORITY};

    #[test]
    fn counts() {
        let mut colonies = ColonyStore::new();
        let a = colonies.add("A", TileId(0));
        let b = colonies.add("B", TileId(1));
        colonies.get_mut(a).unwrap().connected_port = true;
        colonies.get_mut(a).unwrap().workers = 3;
        colonies.get_mut(b).unwrap().workers = 2;
        assert_eq!(colonies.port_count(), 1);
        assert_eq!(colonies.worker_count(), 5);
        assert_eq!(colonies.get(b).unwrap().location(), Location::Colony(ColonyId(1)));
    }

    #[test]
    fn import_capacity_defaults_to_zero() {
        let mut colonies = ColonyStore::new();
        let a = colonies.add("A", TileId(0));
        let c = colonies.get_mut(a).unwrap();
        c.imports.insert(GoodsTypeId(2), 100);
        assert_eq!(c.import_capacity(GoodsTypeId(2)), 100);
        assert_eq!(c.import_capacity(GoodsTypeId(3)), 0);
    }

    #[test]
    fn improvement_validity() {
        assert!(ImprovementPlan::new(TileId(1), 10).is_valid());
        assert!(!ImprovementPlan::new(TileId(1), 0).is_valid());
        let mut done = ImprovementPlan::new(TileId(1), 10);
        done.complete = true;
        assert!(!done.is_valid());
    }

    #[test]
    fn parcels_start_at_owner() {
        let mut goods = GoodsStore::new();
        let p = goods.add(ColonyId(2), GoodsTypeId(0), 100, None);
        let parcel = goods.get(p).unwrap();
        assert_eq!(parcel.location, Location::Colony(ColonyId(2)));
        assert_eq!(parcel.priority, BASE_GOODS_PRIORITY);
        assert!(parcel.transport.is_none());
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use tp_core::{AgentId, ColonyId, Location, TileId, Transportable, WishId};
    use super::helpers::*;
    use crate::{WishKind, WishRegistry};

    #[test]
    fn rebuild_keys_by_type() {
        let (colonies, wishes) = two_colonies();
        let reg = WishRegistry::rebuild(&ruleset(), &colonies, &wishes);
        assert_eq!(reg.worker_wishes(FARMER), &[WishId(0)]);
        assert_eq!(reg.worker_wishes(SMITH), &[WishId(2)]);
        assert_eq!(reg.goods_wishes(TOOLS), &[WishId(1)]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn rebuild_skips_bound_and_off_colony() {
        let (mut colonies, mut wishes) = two_colonies();
        wishes.get_mut(WishId(0)).unwrap().transportable = Some(Transportable::Agent(AgentId(3)));
        let c = colonies.get_mut(ColonyId(1)).unwrap();
        wishes.raise(c, Location::Tile(TileId(9)), 10, WishKind::Goods { goods_type: TOOLS, amount: 5 });
        // Bells are not storable, so no list exists for them.
        wishes.raise(c, Location::Colony(ColonyId(1)), 10, WishKind::Goods { goods_type: BELLS, amount: 5 });

        let reg = WishRegistry::rebuild(&ruleset(), &colonies, &wishes);
        assert!(reg.worker_wishes(FARMER).is_empty());
        assert_eq!(reg.goods_wishes(TOOLS), &[WishId(1)]);
        assert!(reg.goods_wishes(BELLS).is_empty());
    }

    #[test]
    fn all_wishes_sorted_by_value() {
        let (colonies, wishes) = two_colonies();
        let all = WishRegistry::all_wishes(&colonies, &wishes);
        assert_eq!(all, vec![WishId(2), WishId(1), WishId(0)]);
    }

    #[test]
    fn complete_wish_is_idempotent_and_sticky() {
        let (colonies, mut wishes) = two_colonies();
        let mut reg = WishRegistry::rebuild(&ruleset(), &colonies, &wishes);
        reg.complete_wish(&mut wishes, WishId(2));
        reg.complete_wish(&mut wishes, WishId(2));
        assert!(reg.worker_wishes(SMITH).is_empty());
        assert!(wishes.get(WishId(2)).unwrap().consumed);

        // A fresh rebuild does not bring it back.
        let reg = WishRegistry::rebuild(&ruleset(), &colonies, &wishes);
        assert!(reg.worker_wishes(SMITH).is_empty());
        assert!(!WishRegistry::all_wishes(&colonies, &wishes).contains(&WishId(2)));
    }

    #[test]
    fn shrink_goods_saturates() {
        let (_, mut wishes) = two_colonies();
        assert_eq!(wishes.shrink_goods(WishId(1), 30), 70);
        assert_eq!(wishes.shrink_goods(WishId(1), 500), 0);
        assert_eq!(wishes.shrink_goods(WishId(0), 10), 0, "worker wishes have no amount");
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use tp_core::{ColonyId, GoodsTypeId, Location, TileId, UnitTypeId};
    use crate::{load_wishes_reader, ColonyError, ColonyStore, WishKind, WishStore};

    fn colonies() -> ColonyStore {
        let mut c = ColonyStore::new();
        c.add("A", TileId(0));
        c.add("B", TileId(1));
        c
    }

    #[test]
    fn parses_rows() {
        let csv = "colony_id,kind,type_id,amount,value,destination\n\
                   0,worker,3,,120,\n\
                   1,goods,2,50,40,site:4\n\
                   1,goods,1,10,5,tile:7\n";
        let mut cs = colonies();
        let mut ws = WishStore::new();
        let n = load_wishes_reader(Cursor::new(csv), &mut cs, &mut ws).unwrap();
        assert_eq!(n, 3);
        assert_eq!(ws.wishes[0].kind, WishKind::Worker { unit_type: UnitTypeId(3) });
        assert_eq!(ws.wishes[0].destination, Location::Colony(ColonyId(0)));
        assert_eq!(ws.wishes[1].kind, WishKind::Goods { goods_type: GoodsTypeId(2), amount: 50 });
        assert_eq!(ws.wishes[1].destination, Location::WorkSite { colony: ColonyId(1), slot: 4 });
        assert_eq!(ws.wishes[2].destination, Location::Tile(TileId(7)));
        assert_eq!(cs.get(ColonyId(1)).unwrap().wishes.len(), 2);
    }

    #[test]
    fn unknown_colony() {
        let csv = "colony_id,kind,type_id,amount,value,destination\n9,worker,0,,1,\n";
        let err = load_wishes_reader(Cursor::new(csv), &mut colonies(), &mut WishStore::new()).unwrap_err();
        assert!(matches!(err, ColonyError::UnknownColony(ColonyId(9))));
    }

    #[test]
    fn goods_without_amount() {
        let csv = "colony_id,kind,type_id,amount,value,destination\n0,goods,0,,1,\n";
        let err = load_wishes_reader(Cursor::new(csv), &mut colonies(), &mut WishStore::new()).unwrap_err();
        assert!(matches!(err, ColonyError::Parse(_)));
    }

    #[test]
    fn bad_destination() {
        let csv = "colony_id,kind,type_id,amount,value,destination\n0,worker,0,,1,harbour\n";
        let err = load_wishes_reader(Cursor::new(csv), &mut colonies(), &mut WishStore::new()).unwrap_err();
        assert!(matches!(err, ColonyError::Parse(_)));
    }
}
