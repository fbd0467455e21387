//! Ranking agents for the quota missions.
//!
//! Higher is better.  [`UNSUITABLE`] marks an agent the pass must not pick;
//! pools are sorted by score descending with the agent id as tie-break, so
//! the same world always yields the same order.

use std::cmp::Reverse;

use tp_colony::Colony;
use tp_core::AgentId;
use tp_mission::{MissionCatalogue, MissionKind, PlanContext};

pub const UNSUITABLE: i32 = -1000;

/// Score for founding a colony.
///
/// Unequipped free colonists first, then servants and criminals, then
/// experts; anyone already on the map gets a small bonus.
pub fn builder_score(agent: AgentId, ctx: &PlanContext<'_>, catalogue: &dyn MissionCatalogue) -> i32 {
    if !ctx.agents.is_alive(agent) || catalogue.invalid_reason(MissionKind::BuildColony, agent, ctx).is_some() {
        return UNSUITABLE;
    }
    let profile = ctx.agents.profile(agent);
    let base = if profile.equipped {
        0
    } else if profile.skill > 0 {
        100
    } else {
        500 + 100 * i32::from(profile.skill)
    };
    if ctx.agents.is_on_map(agent) { base + 50 } else { base }
}

/// Score for scouting.
pub fn scout_score(agent: AgentId, ctx: &PlanContext<'_>) -> i32 {
    if !ctx.agents.is_alive(agent) || !ctx.agents.caps(agent).colonist {
        return UNSUITABLE;
    }
    let caps = ctx.agents.caps(agent);
    if caps.scout {
        return 900 + on_map_bonus(agent, ctx);
    }
    if caps.expert_scout {
        return 600;
    }
    let profile = ctx.agents.profile(agent);
    let mut base = equip_base(agent, ctx, |c| c.equips_scouts);
    if profile.equipped {
        base -= 400;
    } else if profile.skill > 0 {
        base -= 200;
    }
    base
}

/// Score for improving terrain.  Mirrors [`scout_score`], but also prefers
/// free colonists over servants and criminals.
pub fn pioneer_score(agent: AgentId, ctx: &PlanContext<'_>) -> i32 {
    if !ctx.agents.is_alive(agent) || !ctx.agents.caps(agent).colonist {
        return UNSUITABLE;
    }
    let caps = ctx.agents.caps(agent);
    if caps.pioneer {
        return 900 + on_map_bonus(agent, ctx);
    }
    if caps.expert_pioneer {
        return 600;
    }
    let profile = ctx.agents.profile(agent);
    let mut base = equip_base(agent, ctx, |c| c.equips_pioneers);
    if profile.equipped {
        base -= 400;
    } else if profile.skill > 0 {
        base -= 200;
    } else {
        base += 150 * i32::from(profile.skill);
    }
    base
}

/// Score `agent` for a quota mission of `kind`.
pub fn score(kind: MissionKind, agent: AgentId, ctx: &PlanContext<'_>, catalogue: &dyn MissionCatalogue) -> i32 {
    match kind {
        MissionKind::BuildColony => builder_score(agent, ctx, catalogue),
        MissionKind::Scout       => scout_score(agent, ctx),
        MissionKind::Pioneer     => pioneer_score(agent, ctx),
        _                        => UNSUITABLE,
    }
}

/// Sort `pool` best-first for `kind` and return the scores in the same
/// order.
pub fn rank(
    kind:      MissionKind,
    pool:      &mut Vec<AgentId>,
    ctx:       &PlanContext<'_>,
    catalogue: &dyn MissionCatalogue,
) -> Vec<i32> {
    let mut scored: Vec<(i32, AgentId)> = pool.iter().map(|&a| (score(kind, a, ctx, catalogue), a)).collect();
    scored.sort_by_key(|&(s, a)| (Reverse(s), a));
    pool.clear();
    pool.extend(scored.iter().map(|&(_, a)| a));
    scored.into_iter().map(|(s, _)| s).collect()
}

#[inline]
fn on_map_bonus(agent: AgentId, ctx: &PlanContext<'_>) -> i32 {
    if ctx.agents.is_on_map(agent) { 100 } else { 0 }
}

/// Where the agent could pick up the role equipment: the home port beats a
/// colony that stocks it.
fn equip_base(agent: AgentId, ctx: &PlanContext<'_>, equips: impl Fn(&Colony) -> bool) -> i32 {
    if ctx.agents.in_home_port(agent) {
        500
    } else if ctx.colony_at(ctx.agents.location[agent.index()]).is_some_and(equips) {
        400
    } else {
        UNSUITABLE
    }
}
