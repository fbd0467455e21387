//! Unit tests for tp-spatial.
//!
//! All tests use a hand-crafted map.

#[cfg(test)]
mod helpers {
    use tp_core::{ColonyId, TileId};
    use crate::{MapOracle, Terrain, TileMapBuilder};

    /// A small coast with an island.
    ///
    /// ```text
    ///   land:   0 ─ 1 ─ 2            6 (island)
    ///                   │            │
    ///   water:          3 ─ 4 ─ 5 ───┘
    ///                       │
    ///                       7 (high seas)
    /// ```
    ///
    /// Land edges cost 3 (hills between 0 and 1) and 1 elsewhere.
    /// Colony 0 sits on tile 2 (coastal), colony 1 on tile 6 (island).
    pub fn coast() -> (MapOracle, [TileId; 8]) {
        let mut b = TileMapBuilder::new();
        let t0 = b.add_tile(Terrain::Land);
        let t1 = b.add_tile(Terrain::Land);
        let t2 = b.add_tile(Terrain::Land);
        let t3 = b.add_tile(Terrain::Water);
        let t4 = b.add_tile(Terrain::Water);
        let t5 = b.add_tile(Terrain::Water);
        let t6 = b.add_tile(Terrain::Land);
        let t7 = b.add_high_seas();

        b.connect(t0, t1, 3);
        b.connect(t1, t2, 1);
        b.connect(t2, t3, 1);
        b.connect(t3, t4, 1);
        b.connect(t4, t5, 1);
        b.connect(t5, t6, 1);
        b.connect(t4, t7, 1);

        b.place_colony(ColonyId(0), t2).unwrap();
        b.place_colony(ColonyId(1), t6).unwrap();

        (MapOracle::new(b.build(), 2), [t0, t1, t2, t3, t4, t5, t6, t7])
    }
}

// ── Builder & map structure ───────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use tp_core::ColonyId;
    use crate::{SpatialError, Terrain, TileMapBuilder};

    #[test]
    fn empty_build() {
        let map = TileMapBuilder::new().build();
        assert_eq!(map.tile_count(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn csr_degrees() {
        let (oracle, t) = super::helpers::coast();
        let map = &oracle.map;
        assert_eq!(map.out_edges(t[4]).len(), 3);
        assert_eq!(map.out_edges(t[0]).len(), 1);
        assert!(map.is_coastal(t[2]));
        assert!(!map.is_coastal(t[0]));
    }

    #[test]
    fn colony_on_water_rejected() {
        let mut b = TileMapBuilder::new();
        let w = b.add_tile(Terrain::Water);
        let err = b.place_colony(ColonyId(0), w).unwrap_err();
        assert!(matches!(err, SpatialError::ColonyOnWater { .. }));
    }

    #[test]
    fn duplicate_colony_rejected() {
        let mut b = TileMapBuilder::new();
        let a = b.add_tile(Terrain::Land);
        b.place_colony(ColonyId(0), a).unwrap();
        assert!(matches!(b.place_colony(ColonyId(0), a), Err(SpatialError::DuplicateColony(_))));
    }
}

// ── Contiguity ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod contiguity {
    use tp_core::{ColonyId, Location};
    use crate::DistanceOracle;

    #[test]
    fn land_regions_split_by_water() {
        let (oracle, t) = super::helpers::coast();
        let c = &oracle.map.contiguity;
        assert_eq!(c[t[0].index()], c[t[2].index()]);
        assert_ne!(c[t[2].index()], c[t[6].index()], "island is its own region");
        assert_eq!(c[t[3].index()], c[t[7].index()], "all water is one region");
        assert_ne!(c[t[2].index()], c[t[3].index()]);
    }

    #[test]
    fn colonies_resolve_to_their_tile() {
        let (oracle, t) = super::helpers::coast();
        assert_eq!(
            oracle.contiguity_of(Location::Colony(ColonyId(0))),
            oracle.contiguity_of(Location::Tile(t[0])),
        );
        assert!(oracle.same_contiguity(
            Location::WorkSite { colony: ColonyId(0), slot: 1 },
            Location::Tile(t[1]),
        ));
        assert!(!oracle.contiguity_of(Location::HomePort).is_valid());
    }
}

// ── Turn queries ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod turns {
    use tp_core::{AgentId, ColonyId, CostPolicy, Location, Turns};
    use crate::{DistanceOracle, Mover};

    const STRICT: CostPolicy = CostPolicy::Strict;

    #[test]
    fn same_location_is_zero() {
        let (oracle, t) = super::helpers::coast();
        let here = Location::Tile(t[1]);
        assert_eq!(oracle.turns_to_reach(here, here, Mover::land(1), STRICT), Turns::ZERO);
        assert_eq!(
            oracle.turns_to_reach(Location::HomePort, Location::HomePort, Mover::naval(4), STRICT),
            Turns::ZERO,
        );
    }

    #[test]
    fn land_walk_uses_move_costs() {
        let (oracle, t) = super::helpers::coast();
        // 0→1 costs 3, 1→2 costs 1 → 4 move points, 1 per turn → 4 turns.
        let turns = oracle.turns_to_reach(Location::Tile(t[0]), Location::Colony(ColonyId(0)), Mover::land(1), STRICT);
        assert_eq!(turns, Turns(4));
        // Relaxed counts tiles: 2.
        let relaxed = oracle.turns_to_reach(
            Location::Tile(t[0]), Location::Colony(ColonyId(0)), Mover::land(1), CostPolicy::Relaxed,
        );
        assert_eq!(relaxed, Turns(2));
        // 3 moves per turn → ceil(4 / 3) = 2.
        let fast = oracle.turns_to_reach(Location::Tile(t[0]), Location::Tile(t[2]), Mover::land(3), STRICT);
        assert_eq!(fast, Turns(2));
    }

    #[test]
    fn island_unreachable_on_foot() {
        let (oracle, t) = super::helpers::coast();
        let turns = oracle.turns_to_reach(Location::Tile(t[0]), Location::Colony(ColonyId(1)), Mover::land(1), STRICT);
        assert_eq!(turns, Turns::UNREACHABLE);
    }

    #[test]
    fn ship_docks_at_coastal_colonies_but_not_inland() {
        let (oracle, t) = super::helpers::coast();
        let ship = Mover::naval(1);
        let from = Location::Colony(ColonyId(0));
        // 2→3→4→5→6 = 4 moves.
        assert_eq!(oracle.turns_to_reach(from, Location::Colony(ColonyId(1)), ship, STRICT), Turns(4));
        // Tile 0 is inland: the ship would have to cross land.
        assert_eq!(oracle.turns_to_reach(from, Location::Tile(t[0]), ship, STRICT), Turns::UNREACHABLE);
    }

    #[test]
    fn amphibious_crosses_both() {
        let (oracle, t) = super::helpers::coast();
        let turns = oracle.turns_to_reach(
            Location::Tile(t[0]), Location::Colony(ColonyId(1)), Mover::amphibious(1), STRICT,
        );
        // 3 + 1 + 1 + 1 + 1 + 1 = 8.
        assert_eq!(turns, Turns(8));
    }

    #[test]
    fn home_port_by_sea_only() {
        let (oracle, _) = super::helpers::coast();
        let colony = Location::Colony(ColonyId(0));
        // 2→3→4→7 = 3 moves, plus 2 turns of sailing.
        assert_eq!(oracle.turns_to_reach(colony, Location::HomePort, Mover::naval(1), STRICT), Turns(5));
        assert_eq!(oracle.turns_to_reach(Location::HomePort, colony, Mover::naval(1), STRICT), Turns(5));
        assert_eq!(
            oracle.turns_to_reach(colony, Location::HomePort, Mover::land(1), STRICT),
            Turns::UNREACHABLE,
        );
    }

    #[test]
    fn aboard_is_unresolvable() {
        let (oracle, t) = super::helpers::coast();
        let turns = oracle.turns_to_reach(
            Location::Aboard(AgentId(0)), Location::Tile(t[0]), Mover::amphibious(1), STRICT,
        );
        assert_eq!(turns, Turns::UNREACHABLE);
    }
}
