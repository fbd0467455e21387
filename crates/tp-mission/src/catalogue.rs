//! The `MissionCatalogue` trait — the game-knowledge extension point.

use tp_colony::Colony;
use tp_core::{AgentId, Location, PlanRng};

use crate::{InvalidReason, MissionKind, PlanContext};

/// Mission rules that need knowledge the planner does not have.
///
/// Implement this trait to tell the planner where colonies may be founded,
/// which settlements a missionary could visit, whom to attack, and so on.
///
/// # Required methods
///
/// Only [`find_target`][Self::find_target] is required.
/// [`invalid_reason`][Self::invalid_reason] defaults to the capability rules
/// in [`capability_reason`].
///
/// # Thread safety
///
/// Several factions may be planned in parallel against one catalogue, so
/// implementations must be `Send + Sync`.
pub trait MissionCatalogue: Send + Sync {
    /// `None` if `agent` may carry out a mission of `kind` at all.
    fn invalid_reason(
        &self,
        kind:  MissionKind,
        agent: AgentId,
        ctx:   &PlanContext<'_>,
    ) -> Option<InvalidReason> {
        capability_reason(kind, agent, ctx)
    }

    /// A target for a new `kind` mission within `range` turns of `agent`.
    ///
    /// With `from_home_port` set, an agent in the home port searches from
    /// there; without it, such an agent gets no target.  `None` means the
    /// mission cannot be started now.
    fn find_target(
        &self,
        kind:           MissionKind,
        agent:          AgentId,
        range:          u32,
        from_home_port: bool,
        ctx:            &PlanContext<'_>,
        rng:            &mut PlanRng,
    ) -> Option<Location>;
}

/// Capability requirements shared by every catalogue.
pub fn capability_reason(kind: MissionKind, agent: AgentId, ctx: &PlanContext<'_>) -> Option<InvalidReason> {
    let caps = ctx.agents.caps(agent);
    let fail = |what| Some(InvalidReason::Incapable(what));

    match kind {
        MissionKind::BuildColony => {
            if !caps.colonist || caps.naval {
                return fail("colonist");
            }
            if !ctx.rules.can_build_colonies {
                return fail("colony-building");
            }
            None
        }
        MissionKind::Scout => {
            if !caps.colonist {
                return fail("colonist");
            }
            let equips = |c: &Colony| c.equips_scouts;
            (!(caps.scout || can_equip_at(agent, ctx, equips))).then_some(InvalidReason::Incapable("scout"))
        }
        MissionKind::Pioneer => {
            if !caps.colonist {
                return fail("colonist");
            }
            let equips = |c: &Colony| c.equips_pioneers;
            (!(caps.pioneer || can_equip_at(agent, ctx, equips))).then_some(InvalidReason::Incapable("pioneer"))
        }
        MissionKind::Defend => (!caps.defensive).then_some(InvalidReason::Incapable("defensive")),
        MissionKind::SeekAndDestroy | MissionKind::WanderHostile => {
            (!caps.offensive).then_some(InvalidReason::Incapable("offensive"))
        }
        MissionKind::Missionary => (!caps.missionary).then_some(InvalidReason::Incapable("missionary")),
        MissionKind::CashInTreasure => (!caps.treasure).then_some(InvalidReason::Incapable("treasure")),
        MissionKind::Transport => (!caps.carrier).then_some(InvalidReason::Incapable("carrier")),
        MissionKind::Privateer => {
            (!(caps.naval && caps.privateer)).then_some(InvalidReason::Incapable("privateer"))
        }
        MissionKind::WishRealization | MissionKind::WorkInsideColony => {
            (!caps.colonist).then_some(InvalidReason::Incapable("colonist"))
        }
        MissionKind::IdleAtSettlement => None,
    }
}

/// The agent stands where role equipment can be bought: the home port or a
/// colony for which `equips` holds.
fn can_equip_at(agent: AgentId, ctx: &PlanContext<'_>, equips: impl Fn(&Colony) -> bool) -> bool {
    if ctx.agents.in_home_port(agent) {
        return true;
    }
    ctx.colony_at(ctx.agents.location[agent.index()]).is_some_and(equips)
}
