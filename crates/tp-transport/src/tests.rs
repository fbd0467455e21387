//! Unit tests for tp-transport.

#[cfg(test)]
mod helpers {
    use tp_agent::{AgentProfile, AgentStore, AgentStoreBuilder};
    use tp_colony::{ColonyStore, GoodsStore, WishStore};
    use tp_core::{
        AgentId, ColonyId, FactionRules, GoodsTypeId, GoodsTypeInfo, Location, ParcelId, Ruleset, TileId, Turn,
        UnitTypeId,
    };
    use tp_mission::PlanContext;
    use tp_spatial::{MapOracle, Terrain, TileMapBuilder};

    pub const FARMER: UnitTypeId = UnitTypeId(0);
    pub const FURS: GoodsTypeId = GoodsTypeId(0);

    pub const SETTLER: AgentId = AgentId(0);
    pub const PASSENGER: AgentId = AgentId(1);
    pub const SHIP: AgentId = AgentId(2);
    pub const TRAIN: AgentId = AgentId(3);

    pub const HOME: ColonyId = ColonyId(0);
    pub const ISLAND: ColonyId = ColonyId(1);
    /// Placed on the map at tile 0 but only in the colony store when a test
    /// adds it.
    pub const INLAND: ColonyId = ColonyId(2);

    pub struct World {
        pub ruleset:  Ruleset,
        pub rules:    FactionRules,
        pub agents:   AgentStore,
        pub colonies: ColonyStore,
        pub goods:    GoodsStore,
        pub wishes:   WishStore,
        pub oracle:   MapOracle,
    }

    impl World {
        pub fn ctx(&self) -> PlanContext<'_> {
            PlanContext {
                turn:     Turn::new(4, 1),
                ruleset:  &self.ruleset,
                rules:    &self.rules,
                agents:   &self.agents,
                colonies: &self.colonies,
                goods:    &self.goods,
                wishes:   &self.wishes,
                oracle:   &self.oracle,
            }
        }

        /// A furs parcel exported by `owner`, listed on the colony.
        pub fn export(&mut self, owner: ColonyId, amount: u32, destination: Option<Location>) -> ParcelId {
            let p = self.goods.add(owner, FURS, amount, destination);
            self.colonies.get_mut(owner).unwrap().export_goods.push(p);
            p
        }
    }

    pub fn tile(n: u32) -> Location {
        Location::Tile(TileId(n))
    }

    /// ```text
    ///   land:   0 ─3─ 1 ─ 2 (Home, port)     6 (Island)
    ///                     │                  │
    ///   water:            3 ─ 4 ─ 5 ─────────┘
    ///                         │
    ///                         7 (high seas)
    /// ```
    ///
    /// Settler on tile 0, passenger aboard the ship, ship (4 moves, 2 slots)
    /// on tile 3, wagon train in Home.
    pub fn world() -> World {
        let mut b = TileMapBuilder::new();
        let t: Vec<TileId> = [
            Terrain::Land, Terrain::Land, Terrain::Land,
            Terrain::Water, Terrain::Water, Terrain::Water,
            Terrain::Land,
        ]
        .into_iter()
        .map(|terrain| b.add_tile(terrain))
        .collect();
        let seas = b.add_high_seas();
        b.connect(t[0], t[1], 3);
        b.connect(t[1], t[2], 1);
        b.connect(t[2], t[3], 1);
        b.connect(t[3], t[4], 1);
        b.connect(t[4], t[5], 1);
        b.connect(t[5], t[6], 1);
        b.connect(t[4], seas, 1);
        b.place_colony(HOME, t[2]).unwrap();
        b.place_colony(ISLAND, t[6]).unwrap();
        b.place_colony(INLAND, t[0]).unwrap();

        let mut colonies = ColonyStore::new();
        colonies.add("Home", t[2]);
        colonies.add("Island", t[6]);
        colonies.get_mut(HOME).unwrap().connected_port = true;

        let mut ab = AgentStoreBuilder::new();
        ab.add(AgentProfile::colonist(FARMER, 0), tile(0));
        ab.add(AgentProfile::colonist(FARMER, 0), Location::Aboard(SHIP));
        ab.add(AgentProfile::ship(UnitTypeId(1), 2, 4), tile(3));
        ab.add(AgentProfile::wagon(UnitTypeId(2), 1), Location::Colony(HOME));

        World {
            ruleset: Ruleset {
                unit_types:  vec![FARMER, UnitTypeId(1), UnitTypeId(2)],
                goods_types: vec![GoodsTypeInfo { id: FURS, name: "furs".into(), storable: true, tradable: true }],
            },
            rules: FactionRules::default(),
            agents: ab.build(),
            colonies,
            goods: GoodsStore::new(),
            wishes: WishStore::new(),
            oracle: MapOracle::new(b.build(), 2),
        }
    }
}

// ── Point operations ──────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use tp_core::{ContiguityId, Location, ParcelId, Transportable, WishId};

    use super::helpers::*;
    use crate::TransportIndex;

    #[test]
    fn supply_is_keyed_by_collapsed_location() {
        let mut idx = TransportIndex::new();
        let t = Transportable::Goods(ParcelId(0));
        assert!(idx.add_supply(t, Location::WorkSite { colony: HOME, slot: 3 }));
        assert!(!idx.add_supply(t, Location::Colony(HOME)));
        assert_eq!(idx.transportables_at(Location::Colony(HOME)), &[t]);
        assert_eq!(idx.supply_len(), 1);
    }

    #[test]
    fn claim_is_exclusive() {
        let mut idx = TransportIndex::new();
        let t = Transportable::Agent(SETTLER);
        idx.add_supply(t, tile(0));
        assert!(!idx.claim(t, tile(1)));
        assert!(idx.claim(t, tile(0)));
        assert!(!idx.claim(t, tile(0)));
        assert!(!idx.is_supplied(t));
        assert!(idx.supply_locations().is_empty());
    }

    #[test]
    fn demand_removal_reaches_every_list() {
        let mut idx = TransportIndex::new();
        idx.add_demand(WishId(4), Location::Colony(HOME));
        idx.add_demand(WishId(4), Location::Colony(ISLAND));
        idx.add_demand(WishId(5), Location::WorkSite { colony: HOME, slot: 0 });
        assert_eq!(idx.demand_at(Location::Colony(HOME)), &[WishId(4), WishId(5)]);
        assert!(idx.remove_demand(WishId(4)));
        assert!(!idx.remove_demand(WishId(4)));
        assert_eq!(idx.demand_at(Location::Colony(HOME)), &[WishId(5)]);
        assert!(idx.demand_at(Location::Colony(ISLAND)).is_empty());
    }

    #[test]
    fn wagon_counter_needs_seeding() {
        let mut idx = TransportIndex::new();
        let land = ContiguityId(3);
        idx.change_wagons(land, 1);
        assert_eq!(idx.wagons_needed(land), 0);
        assert_eq!(idx.tracked_contiguities(), 0);

        idx.change_wagons(land, 0);
        idx.change_wagons(land, 2);
        idx.change_wagons(land, 0);
        idx.change_wagons(land, -1);
        assert_eq!(idx.wagons_needed(land), 1);

        idx.change_wagons(ContiguityId::INVALID, 0);
        assert_eq!(idx.tracked_contiguities(), 1);
    }
}

// ── Rebuild ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rebuild {
    use tp_agent::BASE_PRIORITY;
    use tp_colony::{WishKind, BASE_GOODS_PRIORITY};
    use tp_core::{Location, Transportable, Turns};
    use tp_mission::{transportable, Cargo, CargoLeg, Mission, MissionBook, NoTargets, TransportMission};
    use tp_spatial::DistanceOracle;

    use super::helpers::*;
    use crate::{verify_claims, TransportIndex};

    fn island_book(w: &World) -> MissionBook {
        let mut book = MissionBook::new(w.agents.count);
        book.assign(SETTLER, Mission::BuildColony { target: Location::Colony(ISLAND) });
        book
    }

    #[test]
    fn stale_claims_are_cleared() {
        let mut w = world();
        let mut book = island_book(&w);
        let settler = Transportable::Agent(SETTLER);
        transportable::set_claim(settler, Some(SHIP), &mut w.agents, &mut w.goods);
        assert_eq!(verify_claims(&mut w.agents, &mut w.goods, &w.colonies, &book), 1);
        assert_eq!(w.agents.transport[SETTLER.index()], None);

        let mut tm = TransportMission::new(SHIP, 2);
        tm.queue_transportable(
            Cargo { transportable: settler, leg: CargoLeg::Pickup, target: tile(0), turns: Turns(2) },
            false,
        );
        book.assign(SHIP, Mission::Transport(tm));
        transportable::set_claim(settler, Some(SHIP), &mut w.agents, &mut w.goods);
        assert_eq!(verify_claims(&mut w.agents, &mut w.goods, &w.colonies, &book), 0);
        assert_eq!(w.agents.transport[SETTLER.index()], Some(SHIP));
    }

    #[test]
    fn stale_goods_claims_are_cleared() {
        let mut w = world();
        let p = w.export(HOME, 100, Some(Location::Colony(ISLAND)));
        w.goods.get_mut(p).unwrap().transport = Some(TRAIN);
        let book = MissionBook::new(w.agents.count);
        assert_eq!(verify_claims(&mut w.agents, &mut w.goods, &w.colonies, &book), 1);
        assert_eq!(w.goods.get(p).unwrap().transport, None);
    }

    #[test]
    fn supply_and_naval_deficit() {
        let mut w = world();
        let p = w.export(HOME, 100, Some(Location::Colony(ISLAND)));
        let book = island_book(&w);
        let idx = TransportIndex::build(&w.ctx(), &book, &NoTargets);

        assert_eq!(idx.transportables_at(tile(0)), &[Transportable::Agent(SETTLER)]);
        assert_eq!(idx.transportables_at(Location::Colony(HOME)), &[Transportable::Goods(p)]);
        // The passenger rides already; the ship offsets one request.
        assert!(!idx.is_supplied(Transportable::Agent(PASSENGER)));
        assert_eq!(idx.naval_carrier_deficit(), 1);
    }

    #[test]
    fn invalid_missions_are_skipped() {
        let w = world();
        let mut book = MissionBook::new(w.agents.count);
        book.assign(SETTLER, Mission::BuildColony { target: tile(50) });
        book.assign(SHIP, Mission::Transport(TransportMission::new(TRAIN, 1)));
        let idx = TransportIndex::build(&w.ctx(), &book, &NoTargets);
        assert_eq!(idx.supply_len(), 0);
        assert_eq!(idx.naval_carrier_deficit(), 0);
    }

    #[test]
    fn same_landmass_goods_do_not_need_ships() {
        let mut w = world();
        w.export(HOME, 40, Some(tile(1)));
        let book = MissionBook::new(w.agents.count);
        let idx = TransportIndex::build(&w.ctx(), &book, &NoTargets);
        assert_eq!(idx.supply_len(), 1);
        assert_eq!(idx.naval_carrier_deficit(), -1);
    }

    #[test]
    fn wagons_per_landmass() {
        let mut w = world();
        let book = MissionBook::new(w.agents.count);
        let land = w.oracle.contiguity_of(Location::Colony(HOME));
        let island = w.oracle.contiguity_of(Location::Colony(ISLAND));

        let idx = TransportIndex::build(&w.ctx(), &book, &NoTargets);
        assert_eq!(idx.wagons_needed(land), -1);
        assert_eq!(idx.tracked_contiguities(), 1);
        assert_eq!(idx.wagons_needed(island), 0);

        w.colonies.add("Inland", tp_core::TileId(0));
        let idx = TransportIndex::build(&w.ctx(), &book, &NoTargets);
        assert_eq!(idx.wagons_needed(land), 0);
    }

    #[test]
    fn demand_from_outstanding_wishes() {
        let mut w = world();
        let island = w.colonies.get_mut(ISLAND).unwrap();
        let open = w.wishes.raise(
            island,
            Location::WorkSite { colony: ISLAND, slot: 1 },
            60,
            WishKind::Worker { unit_type: FARMER },
        );
        let bound = w.wishes.raise(island, Location::Colony(ISLAND), 80, WishKind::Worker { unit_type: FARMER });
        let done = w.wishes.raise(
            island,
            Location::Colony(ISLAND),
            90,
            WishKind::Goods { goods_type: FURS, amount: 10 },
        );
        w.wishes.get_mut(bound).unwrap().transportable = Some(Transportable::Agent(SETTLER));
        w.wishes.get_mut(done).unwrap().consumed = true;

        let book = island_book(&w);
        let idx = TransportIndex::build(&w.ctx(), &book, &NoTargets);
        assert_eq!(idx.demand_at(Location::Colony(ISLAND)), &[open, bound]);

        transportable::set_claim(Transportable::Agent(SETTLER), Some(SHIP), &mut w.agents, &mut w.goods);
        let idx = TransportIndex::build(&w.ctx(), &book, &NoTargets);
        assert_eq!(idx.demand_at(Location::Colony(ISLAND)), &[open]);
    }

    #[test]
    fn bumping_touches_supply_only() {
        let mut w = world();
        let p = w.export(HOME, 100, Some(Location::Colony(ISLAND)));
        let idle = w.export(HOME, 100, None);
        let book = island_book(&w);
        let idx = TransportIndex::build(&w.ctx(), &book, &NoTargets);
        idx.bump_priorities(10, &mut w.agents, &mut w.goods);

        assert_eq!(w.agents.transport_priority[SETTLER.index()], BASE_PRIORITY + 10);
        assert_eq!(w.agents.transport_priority[PASSENGER.index()], BASE_PRIORITY);
        assert_eq!(w.goods.get(p).unwrap().priority, BASE_GOODS_PRIORITY + 10);
        assert_eq!(w.goods.get(idle).unwrap().priority, BASE_GOODS_PRIORITY);
    }
}

// ── Urgent list ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod urgent {
    use proptest::prelude::*;

    use tp_core::{Location, PlannerConfig, Transportable};
    use tp_mission::transportable;

    use super::helpers::*;
    use crate::TransportIndex;

    fn stocked(priorities: &[u32]) -> (World, TransportIndex) {
        let mut w = world();
        let mut idx = TransportIndex::new();
        for &prio in priorities {
            let p = w.export(HOME, 10, Some(Location::Colony(ISLAND)));
            w.goods.get_mut(p).unwrap().priority = prio;
            idx.add_supply(Transportable::Goods(p), Location::Colony(HOME));
        }
        (w, idx)
    }

    #[test]
    fn small_pools_are_returned_whole() {
        let config = PlannerConfig::default();
        for n in 0..2 {
            let (w, idx) = stocked(&vec![5; n]);
            assert_eq!(idx.urgent(&w.ctx(), &config).len(), n);
        }
    }

    #[test]
    fn ties_break_by_handle() {
        let (mut w, mut idx) = stocked(&[7, 7, 3]);
        idx.add_supply(Transportable::Agent(SETTLER), tile(0));
        w.agents.transport_priority[SETTLER.index()] = 7;
        let urgent = idx.urgent(&w.ctx(), &PlannerConfig::default());
        assert_eq!(urgent, vec![Transportable::Agent(SETTLER), Transportable::Goods(tp_core::ParcelId(0))]);
    }

    #[test]
    fn colocated_pickup_wins() {
        let (w, idx) = stocked(&[1]);
        assert_eq!(idx.best_transportable(TRAIN, &w.ctx()), Some(Transportable::Goods(tp_core::ParcelId(0))));
    }

    #[test]
    fn unreachable_pickups_are_ignored() {
        let (w, mut idx) = stocked(&[1]);
        idx.add_supply(Transportable::Agent(SETTLER), tile(0));
        // The settler outranks the parcel but no ship can reach tile 0.
        assert_eq!(idx.best_transportable(SHIP, &w.ctx()), Some(Transportable::Goods(tp_core::ParcelId(0))));
        assert_eq!(TransportIndex::new().best_transportable(SHIP, &w.ctx()), None);
    }

    proptest! {
        #[test]
        fn urgent_len_bounds(priorities in prop::collection::vec(0u32..500, 0..60)) {
            let (w, idx) = stocked(&priorities);
            let ctx = w.ctx();
            let urgent = idx.urgent(&ctx, &PlannerConfig::default());
            let n = priorities.len();
            let expected = if n < 2 { n } else { n.div_ceil(10).max(2) };
            prop_assert_eq!(urgent.len(), expected);

            let prio: Vec<u32> = urgent.iter().map(|&t| transportable::priority(t, &ctx)).collect();
            prop_assert!(prio.windows(2).all(|p| p[0] >= p[1]));
            if let Some(&last) = prio.last() {
                let above = priorities.iter().filter(|&&p| p > last).count();
                prop_assert!(above <= urgent.len());
            }
        }
    }
}
