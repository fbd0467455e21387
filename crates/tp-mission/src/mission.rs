//! The mission sum type.

use std::fmt;
use std::str::FromStr;

use tp_core::{AgentId, ColonyId, CostPolicy, Location, Transportable, WishId};

use crate::{MissionCatalogue, MissionError, PlanContext, TransportMission};

// ── MissionKind ───────────────────────────────────────────────────────────────

/// Discriminant of [`Mission`], used as a key by catalogues and quotas.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum MissionKind {
    BuildColony,
    Pioneer,
    Scout,
    Defend,
    SeekAndDestroy,
    Missionary,
    CashInTreasure,
    Transport,
    Privateer,
    WanderHostile,
    WishRealization,
    WorkInsideColony,
    IdleAtSettlement,
}

impl MissionKind {
    pub const ALL: [MissionKind; 13] = [
        MissionKind::BuildColony,
        MissionKind::Pioneer,
        MissionKind::Scout,
        MissionKind::Defend,
        MissionKind::SeekAndDestroy,
        MissionKind::Missionary,
        MissionKind::CashInTreasure,
        MissionKind::Transport,
        MissionKind::Privateer,
        MissionKind::WanderHostile,
        MissionKind::WishRealization,
        MissionKind::WorkInsideColony,
        MissionKind::IdleAtSettlement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MissionKind::BuildColony      => "build_colony",
            MissionKind::Pioneer          => "pioneer",
            MissionKind::Scout            => "scout",
            MissionKind::Defend           => "defend",
            MissionKind::SeekAndDestroy   => "seek_and_destroy",
            MissionKind::Missionary       => "missionary",
            MissionKind::CashInTreasure   => "cash_in_treasure",
            MissionKind::Transport        => "transport",
            MissionKind::Privateer        => "privateer",
            MissionKind::WanderHostile    => "wander_hostile",
            MissionKind::WishRealization  => "wish_realization",
            MissionKind::WorkInsideColony => "work_inside_colony",
            MissionKind::IdleAtSettlement => "idle_at_settlement",
        }
    }
}

impl fmt::Display for MissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissionKind {
    type Err = MissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MissionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| MissionError::UnknownKind(s.to_string()))
    }
}

// ── InvalidReason ─────────────────────────────────────────────────────────────

/// Why a mission can no longer be carried out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    /// The agent was disposed or never placed.
    AgentGone,
    /// The agent lacks the capability (`what` names it).
    Incapable(&'static str),
    TargetUnreachable,
    ColonyLost,
    /// The wish was completed or handed to someone else.
    WishGone,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::AgentGone         => f.write_str("agent-gone"),
            InvalidReason::Incapable(what)   => write!(f, "incapable({what})"),
            InvalidReason::TargetUnreachable => f.write_str("target-unreachable"),
            InvalidReason::ColonyLost        => f.write_str("colony-lost"),
            InvalidReason::WishGone          => f.write_str("wish-gone"),
        }
    }
}

// ── Mission ───────────────────────────────────────────────────────────────────

/// A standing order for one agent.
#[derive(Clone, Debug, PartialEq)]
pub enum Mission {
    BuildColony { target: Location },
    Pioneer { target: Location },
    Scout { target: Location },
    Defend { colony: ColonyId },
    SeekAndDestroy { target: Location },
    Missionary { target: Location },
    CashInTreasure { target: Location },
    Transport(TransportMission),
    Privateer,
    /// Roam hostile territory; the target is a hint and may be absent.
    WanderHostile { target: Option<Location> },
    /// Deliver this agent to a colony that asked for its unit type.
    WishRealization { wish: WishId, destination: Location },
    WorkInsideColony { colony: ColonyId },
    IdleAtSettlement,
}

impl Mission {
    pub fn kind(&self) -> MissionKind {
        match self {
            Mission::BuildColony { .. }      => MissionKind::BuildColony,
            Mission::Pioneer { .. }          => MissionKind::Pioneer,
            Mission::Scout { .. }            => MissionKind::Scout,
            Mission::Defend { .. }           => MissionKind::Defend,
            Mission::SeekAndDestroy { .. }   => MissionKind::SeekAndDestroy,
            Mission::Missionary { .. }       => MissionKind::Missionary,
            Mission::CashInTreasure { .. }   => MissionKind::CashInTreasure,
            Mission::Transport(_)            => MissionKind::Transport,
            Mission::Privateer               => MissionKind::Privateer,
            Mission::WanderHostile { .. }    => MissionKind::WanderHostile,
            Mission::WishRealization { .. }  => MissionKind::WishRealization,
            Mission::WorkInsideColony { .. } => MissionKind::WorkInsideColony,
            Mission::IdleAtSettlement        => MissionKind::IdleAtSettlement,
        }
    }

    /// Where the mission takes the agent, if anywhere.
    pub fn target(&self) -> Option<Location> {
        match self {
            Mission::BuildColony { target }
            | Mission::Pioneer { target }
            | Mission::Scout { target }
            | Mission::SeekAndDestroy { target }
            | Mission::Missionary { target }
            | Mission::CashInTreasure { target } => Some(*target),
            Mission::Defend { colony } | Mission::WorkInsideColony { colony } => Some(Location::Colony(*colony)),
            Mission::WishRealization { destination, .. } => Some(*destination),
            Mission::WanderHostile { target } => *target,
            Mission::Transport(_) | Mission::Privateer | Mission::IdleAtSettlement => None,
        }
    }

    /// One-time missions are re-evaluated every cycle even while valid.
    #[inline]
    pub fn is_one_time(&self) -> bool {
        matches!(self, Mission::IdleAtSettlement)
    }

    pub fn as_transport(&self) -> Option<&TransportMission> {
        match self {
            Mission::Transport(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_transport_mut(&mut self) -> Option<&mut TransportMission> {
        match self {
            Mission::Transport(t) => Some(t),
            _ => None,
        }
    }

    /// `None` if the mission can still be carried out by `agent`.
    pub fn invalid_reason(
        &self,
        agent:     AgentId,
        ctx:       &PlanContext<'_>,
        catalogue: &dyn MissionCatalogue,
    ) -> Option<InvalidReason> {
        if !ctx.agents.is_alive(agent) {
            return Some(InvalidReason::AgentGone);
        }
        if let Some(reason) = catalogue.invalid_reason(self.kind(), agent, ctx) {
            return Some(reason);
        }
        match self {
            Mission::Defend { colony } | Mission::WorkInsideColony { colony }
                if ctx.colonies.get(*colony).is_none() =>
            {
                return Some(InvalidReason::ColonyLost);
            }
            Mission::WishRealization { wish, .. } => {
                let bound = ctx.wishes.get(*wish).is_some_and(|w| {
                    !w.consumed && w.transportable == Some(Transportable::Agent(agent))
                });
                if !bound {
                    return Some(InvalidReason::WishGone);
                }
            }
            Mission::Transport(t) if t.carrier != agent => {
                return Some(InvalidReason::Incapable("carrier"));
            }
            _ => {}
        }
        let target = self.target()?;
        if !ctx.turns_carried(agent, target, CostPolicy::Strict).is_reachable() {
            return Some(InvalidReason::TargetUnreachable);
        }
        None
    }

    #[inline]
    pub fn is_valid(&self, agent: AgentId, ctx: &PlanContext<'_>, catalogue: &dyn MissionCatalogue) -> bool {
        self.invalid_reason(agent, ctx, catalogue).is_none()
    }

    /// The location a carrier should take `agent` to: the mission target,
    /// when the agent cannot walk there but could be shipped.
    pub fn transport_destination(&self, agent: AgentId, ctx: &PlanContext<'_>) -> Option<Location> {
        if ctx.agents.is_naval(agent) {
            return None;
        }
        let target = self.target()?;
        if ctx.turns_for(agent, target, CostPolicy::Strict).is_reachable() {
            return None;
        }
        ctx.turns_carried(agent, target, CostPolicy::Strict).is_reachable().then_some(target)
    }
}
