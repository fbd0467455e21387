//! Unit tests for tp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ContiguityId, UnitTypeId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(UnitTypeId::INVALID.0, u16::MAX);
        assert!(!ContiguityId::default().is_valid());
        assert!(ContiguityId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod location {
    use crate::{AgentId, ColonyId, Location, ParcelId, TileId, Transportable};

    #[test]
    fn up_collapses_work_sites_only() {
        let site = Location::WorkSite { colony: ColonyId(3), slot: 2 };
        assert_eq!(site.up(), Location::Colony(ColonyId(3)));
        assert_eq!(Location::Tile(TileId(9)).up(), Location::Tile(TileId(9)));
        assert_eq!(Location::HomePort.up(), Location::HomePort);
    }

    #[test]
    fn colony_and_carrier_accessors() {
        assert_eq!(Location::WorkSite { colony: ColonyId(1), slot: 0 }.colony(), Some(ColonyId(1)));
        assert_eq!(Location::Tile(TileId(1)).colony(), None);
        assert_eq!(Location::Aboard(AgentId(4)).carrier(), Some(AgentId(4)));
        assert!(Location::HomePort.is_home_port());
    }

    #[test]
    fn transportables_order_agents_first() {
        let mut v = vec![
            Transportable::Goods(ParcelId(0)),
            Transportable::Agent(AgentId(5)),
            Transportable::Agent(AgentId(1)),
        ];
        v.sort();
        assert_eq!(v[0], Transportable::Agent(AgentId(1)));
        assert_eq!(v[2], Transportable::Goods(ParcelId(0)));
    }
}

#[cfg(test)]
mod time {
    use crate::{Turn, Turns};

    #[test]
    fn first_turn() {
        assert!(Turn::FIRST.is_first());
        assert!(!Turn::FIRST.next().is_first());
        assert_eq!(Turn::new(4, 1).next(), Turn::new(5, 1));
    }

    #[test]
    fn unreachable_is_absorbing_and_sorts_last() {
        assert_eq!(Turns(3).plus(Turns::UNREACHABLE), Turns::UNREACHABLE);
        assert_eq!(Turns(3).plus(Turns(4)), Turns(7));
        assert!(Turns(1_000_000) < Turns::UNREACHABLE);
        assert_eq!(Turns::UNREACHABLE.get(), None);
        assert_eq!(Turns::UNREACHABLE.to_string(), "unreachable");
    }
}

#[cfg(test)]
mod config {
    use crate::PlannerConfig;

    #[test]
    fn defaults_match_constants() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.building_range, 5);
        assert_eq!(cfg.seek_near_range, 8);
        assert_eq!(cfg.seek_far_range, 16);
        assert_eq!(cfg.scouts_for_age(0), 3);
        assert_eq!(cfg.scouts_for_age(1), 3);
        assert_eq!(cfg.scouts_for_age(2), 1);
    }

    #[test]
    fn urgent_len_bounds() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.urgent_len(0), 0);
        assert_eq!(cfg.urgent_len(1), 1);
        assert_eq!(cfg.urgent_len(2), 2);
        assert_eq!(cfg.urgent_len(15), 2);
        assert_eq!(cfg.urgent_len(21), 3);
        assert_eq!(cfg.urgent_len(100), 10);
    }
}

#[cfg(test)]
mod rules {
    use crate::{FactionRules, GoodsTypeId, GoodsTypeInfo, Ruleset};

    fn ruleset() -> Ruleset {
        Ruleset {
            unit_types:  vec![],
            goods_types: vec![
                GoodsTypeInfo { id: GoodsTypeId(0), name: "furs".into(), storable: true, tradable: true },
                GoodsTypeInfo { id: GoodsTypeId(1), name: "bells".into(), storable: false, tradable: false },
            ],
        }
    }

    #[test]
    fn storable_goods_filters() {
        let r = ruleset();
        assert_eq!(r.storable_goods().collect::<Vec<_>>(), vec![GoodsTypeId(0)]);
    }

    #[test]
    fn trade_respects_embargo_and_home_port() {
        let r = ruleset();
        let mut rules = FactionRules::default();
        assert!(rules.can_trade(&r, GoodsTypeId(0)));
        assert!(!rules.can_trade(&r, GoodsTypeId(1)));
        rules.embargoed.push(GoodsTypeId(0));
        assert!(!rules.can_trade(&r, GoodsTypeId(0)));
        rules.embargoed.clear();
        rules.has_home_port = false;
        assert!(!rules.can_trade(&r, GoodsTypeId(0)));
    }
}

#[cfg(test)]
mod rng {
    use crate::PlanRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PlanRng::new(12345);
        let mut r2 = PlanRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = PlanRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }
}
