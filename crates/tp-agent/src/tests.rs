//! Unit tests for tp-agent.

#[cfg(test)]
mod builder {
    use tp_core::{AgentId, ColonyId, Location, TileId, UnitTypeId};
    use crate::{AgentProfile, AgentStoreBuilder, UnitState, BASE_PRIORITY};

    #[test]
    fn sequential_ids_and_defaults() {
        let mut b = AgentStoreBuilder::with_capacity(2);
        let a = b.add(AgentProfile::colonist(UnitTypeId(0), 0), Location::Tile(TileId(0)));
        let c = b.add(AgentProfile::ship(UnitTypeId(1), 2, 4), Location::HomePort);
        assert_eq!((a, c), (AgentId(0), AgentId(1)));

        let store = b.build();
        assert_eq!(store.count, 2);
        assert_eq!(store.transport, vec![None, None]);
        assert_eq!(store.transport_priority, vec![BASE_PRIORITY; 2]);
        assert_eq!(store.state, vec![UnitState::Active; 2]);
    }

    #[test]
    fn work_site_means_in_colony() {
        let store = AgentStoreBuilder::new()
            .agent(AgentProfile::colonist(UnitTypeId(0), 0), Location::WorkSite { colony: ColonyId(0), slot: 0 })
            .build();
        assert_eq!(store.state[0], UnitState::InColony);
    }

    #[test]
    fn state_override() {
        let store = AgentStoreBuilder::new()
            .agent(AgentProfile::colonist(UnitTypeId(0), 0), Location::HomePort)
            .state(AgentId(0), UnitState::Uninitialized)
            .state(AgentId(9), UnitState::Disposed)
            .build();
        assert_eq!(store.state[0], UnitState::Uninitialized);
        assert!(!store.is_alive(AgentId(0)));
    }
}

#[cfg(test)]
mod store {
    use tp_core::{AgentId, ColonyId, Location, TileId, UnitTypeId};
    use crate::{AgentProfile, AgentStore, AgentStoreBuilder};

    /// Ship 0 on tile 5 carrying colonists 1 and 2; wagon 3 in colony 0;
    /// ship 4 docked at the home port carrying colonist 5.
    fn fleet() -> AgentStore {
        AgentStoreBuilder::new()
            .agent(AgentProfile::ship(UnitTypeId(9), 2, 4), Location::Tile(TileId(5)))
            .agent(AgentProfile::colonist(UnitTypeId(0), 0), Location::Aboard(AgentId(0)))
            .agent(AgentProfile::colonist(UnitTypeId(0), 1), Location::Aboard(AgentId(0)))
            .agent(AgentProfile::wagon(UnitTypeId(8), 2), Location::Colony(ColonyId(0)))
            .agent(AgentProfile::ship(UnitTypeId(9), 4, 4), Location::HomePort)
            .agent(AgentProfile::colonist(UnitTypeId(0), 0), Location::Aboard(AgentId(4)))
            .build()
    }

    #[test]
    fn passengers_in_id_order() {
        let store = fleet();
        let p: Vec<_> = store.passengers(AgentId(0)).collect();
        assert_eq!(p, vec![AgentId(1), AgentId(2)]);
        assert_eq!(store.carrier_of(AgentId(2)), Some(AgentId(0)));
        assert_eq!(store.carrier_of(AgentId(3)), None);
    }

    #[test]
    fn disposed_passengers_are_skipped() {
        let mut store = fleet();
        store.dispose(AgentId(1));
        let p: Vec<_> = store.passengers(AgentId(0)).collect();
        assert_eq!(p, vec![AgentId(2)]);
    }

    #[test]
    fn resolved_location_follows_carrier() {
        let store = fleet();
        assert_eq!(store.resolved_location(AgentId(1)), Location::Tile(TileId(5)));
        assert!(store.is_on_map(AgentId(1)));
        assert!(store.in_home_port(AgentId(5)));
        assert!(!store.is_on_map(AgentId(5)));
    }

    #[test]
    fn carrier_kinds() {
        let store = fleet();
        assert!(store.is_naval(AgentId(0)) && store.is_carrier(AgentId(0)));
        assert!(store.is_land_carrier(AgentId(3)));
        assert!(!store.is_land_carrier(AgentId(0)));
        assert!(!store.is_carrier(AgentId(1)));
    }
}
