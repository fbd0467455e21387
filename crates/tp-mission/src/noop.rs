//! A catalogue that knows no targets.

use tp_core::{AgentId, Location, PlanRng};

use crate::{MissionCatalogue, MissionKind, PlanContext};

/// A [`MissionCatalogue`] whose `find_target` always returns `None`.
///
/// Agents planned against it only ever receive missions that need no
/// external target: defence, wish realization, transport, privateering,
/// working inside a colony, or idling.
pub struct NoTargets;

impl MissionCatalogue for NoTargets {
    fn find_target(
        &self,
        _kind:           MissionKind,
        _agent:          AgentId,
        _range:          u32,
        _from_home_port: bool,
        _ctx:            &PlanContext<'_>,
        _rng:            &mut PlanRng,
    ) -> Option<Location> {
        None
    }
}
