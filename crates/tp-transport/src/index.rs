//! Demand/supply maps and their point queries.

use rustc_hash::FxHashMap;

use tp_core::{ContiguityId, Location, Transportable, WishId};

/// Everything that wants moving and everywhere that wants something, keyed
/// by the collapsed (`Location::up`) location.
///
/// # Counters
///
/// * `wagons_needed` — per landmass, colonies without a connected port minus
///   wagon trains already there.  Only landmasses that contain at least one
///   connected port have an entry; elsewhere a wagon would have nowhere to
///   haul to.
/// * `naval_carrier_deficit` — transport requests needing a ship minus
///   ships available.  Negative means spare ships.
#[derive(Clone, Debug, Default)]
pub struct TransportIndex {
    pub(crate) demand:                FxHashMap<Location, Vec<WishId>>,
    pub(crate) supply:                FxHashMap<Location, Vec<Transportable>>,
    pub(crate) wagons_needed:         FxHashMap<ContiguityId, i32>,
    pub(crate) naval_carrier_deficit: i32,
}

impl TransportIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Supply ────────────────────────────────────────────────────────────

    /// Add `t` to the supply list at `location`.  Already-present entries
    /// are left where they are.
    pub fn add_supply(&mut self, t: Transportable, location: Location) -> bool {
        let list = self.supply.entry(location.up()).or_default();
        if list.contains(&t) {
            return false;
        }
        list.push(t);
        true
    }

    /// Take `t` out of the supply list at `location`.  Returns `true` if it
    /// was there; a carrier that gets `false` must not queue it.
    pub fn claim(&mut self, t: Transportable, location: Location) -> bool {
        let Some(list) = self.supply.get_mut(&location.up()) else {
            return false;
        };
        match list.iter().position(|&x| x == t) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Transportables waiting at `location`, in insertion order.
    pub fn transportables_at(&self, location: Location) -> &[Transportable] {
        self.supply.get(&location.up()).map_or(&[], Vec::as_slice)
    }

    /// Total number of transportables waiting anywhere.
    pub fn supply_len(&self) -> usize {
        self.supply.values().map(Vec::len).sum()
    }

    pub fn is_supplied(&self, t: Transportable) -> bool {
        self.supply.values().any(|l| l.contains(&t))
    }

    /// Supply locations in ascending order.
    pub fn supply_locations(&self) -> Vec<Location> {
        let mut locs: Vec<Location> =
            self.supply.iter().filter(|(_, l)| !l.is_empty()).map(|(&k, _)| k).collect();
        locs.sort_unstable();
        locs
    }

    // ── Demand ────────────────────────────────────────────────────────────

    pub fn add_demand(&mut self, wish: WishId, location: Location) {
        let list = self.demand.entry(location.up()).or_default();
        if !list.contains(&wish) {
            list.push(wish);
        }
    }

    /// Wishes waiting for delivery at `location`.
    pub fn demand_at(&self, location: Location) -> &[WishId] {
        self.demand.get(&location.up()).map_or(&[], Vec::as_slice)
    }

    /// Drop `wish` from every demand list.  Returns `true` if it was listed.
    pub fn remove_demand(&mut self, wish: WishId) -> bool {
        let mut found = false;
        for list in self.demand.values_mut() {
            let before = list.len();
            list.retain(|&w| w != wish);
            found |= list.len() != before;
        }
        found
    }

    pub fn demand_len(&self) -> usize {
        self.demand.values().map(Vec::len).sum()
    }

    // ── Counters ──────────────────────────────────────────────────────────

    /// Wagon trains still wanted on `contiguity`; zero when untracked.
    pub fn wagons_needed(&self, contiguity: ContiguityId) -> i32 {
        self.wagons_needed.get(&contiguity).copied().unwrap_or(0)
    }

    /// Adjust the wagon counter for `contiguity`.
    ///
    /// An `amount` of zero starts tracking the landmass (leaving an existing
    /// count alone); any other amount only changes landmasses already
    /// tracked.  Invalid contiguities are ignored.
    pub fn change_wagons(&mut self, contiguity: ContiguityId, amount: i32) {
        if !contiguity.is_valid() {
            return;
        }
        if amount == 0 {
            self.wagons_needed.entry(contiguity).or_insert(0);
        } else if let Some(n) = self.wagons_needed.get_mut(&contiguity) {
            *n += amount;
        }
    }

    /// Landmasses with a wagon counter.
    pub fn tracked_contiguities(&self) -> usize {
        self.wagons_needed.len()
    }

    #[inline]
    pub fn naval_carrier_deficit(&self) -> i32 {
        self.naval_carrier_deficit
    }
}
