//! skirmish — smallest end-to-end run of the turnplan faction planner.
//!
//! One faction with a loaded galleon, a wagon train, two colonies, and a
//! handful of land units plans three turns on a two-landmass coast.  Wishes
//! and mission targets come from embedded CSV, tuning from embedded TOML.
//!
//! Set `RUST_LOG=tp_planner=debug` to watch every assignment.

mod coast;

use std::collections::BTreeMap;
use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tp_agent::{AgentProfile, AgentStoreBuilder, Capabilities};
use tp_colony::{load_wishes_reader, ColonyStore};
use tp_core::{AgentId, GoodsTypeId, GoodsTypeInfo, Location, Ruleset, TileId, Turn, UnitTypeId};
use tp_mission::{load_targets_reader, Mission, PlanContext};
use tp_planner::{
    parse_config, CycleState, FactionWorld, MissionExecutor, PlanObserver, PlannerBuilder, PlannerResult,
    TurnReport,
};

use coast::{build_coast, FORT, HAVEN};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:  u64 = 42;
const TURNS: u32 = 3;

const FARMER:   UnitTypeId = UnitTypeId(0);
const GALLEON:  UnitTypeId = UnitTypeId(1);
const WAGON:    UnitTypeId = UnitTypeId(2);
const SOLDIER:  UnitTypeId = UnitTypeId(3);
const TREASURE: UnitTypeId = UnitTypeId(4);
const FURS:     GoodsTypeId = GoodsTypeId(0);

// ── Embedded inputs ───────────────────────────────────────────────────────────

const CONFIG_TOML: &str = "\
building_range = 6
early_scouts   = 1
priority_bump  = 15
";

// Haven wants a farmer and furs; Fort wants a few furs back.
const WISHES_CSV: &str = "\
colony_id,kind,type_id,amount,value,destination\n\
1,worker,0,,120,\n\
1,goods,0,100,60,\n\
0,goods,0,30,20,\n\
";

const TARGETS_CSV: &str = "\
kind,location\n\
build_colony,tile:0\n\
build_colony,tile:10\n\
scout,tile:10\n\
cash_in_treasure,colony:0\n\
wander_hostile,tile:9\n\
";

// ── Executor ──────────────────────────────────────────────────────────────────

/// Counts what would be executed; moving units is left to the game.
#[derive(Default)]
struct TallyExecutor {
    by_kind: BTreeMap<&'static str, usize>,
}

impl MissionExecutor for TallyExecutor {
    fn execute(&mut self, _agent: AgentId, mission: &mut Mission, _ctx: &PlanContext<'_>) -> PlannerResult<()> {
        *self.by_kind.entry(mission.kind().as_str()).or_default() += 1;
        Ok(())
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Keeps the reasons from the last cycle of the turn, which are otherwise
/// dropped with the cycle state.
#[derive(Default)]
struct ReasonLog {
    reasons: Vec<(AgentId, String)>,
    reports: Vec<TurnReport>,
}

impl PlanObserver for ReasonLog {
    fn on_cycle_end(&mut self, _turn: Turn, _pass: usize, state: &CycleState) {
        self.reasons = state.reasons().map(|(a, r)| (a, r.to_string())).collect();
    }

    fn on_turn_end(&mut self, _turn: Turn, report: &TurnReport) {
        self.reports.push(*report);
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

fn build_world() -> Result<FactionWorld> {
    let ruleset = Ruleset {
        unit_types:  vec![FARMER, GALLEON, WAGON, SOLDIER, TREASURE],
        goods_types: vec![GoodsTypeInfo { id: FURS, name: "furs".into(), storable: true, tradable: true }],
    };

    let mut ab = AgentStoreBuilder::new();
    let galleon = ab.add(AgentProfile::ship(GALLEON, 4, 6), Location::Tile(TileId(4)));
    ab.add(AgentProfile::colonist(FARMER, 0), Location::Aboard(galleon));
    ab.add(AgentProfile::colonist(FARMER, -1), Location::Aboard(galleon));
    ab.add(AgentProfile::wagon(WAGON, 2), Location::Colony(FORT));
    ab.add(AgentProfile::colonist(FARMER, 2), Location::WorkSite { colony: FORT, slot: 0 });
    ab.add(
        AgentProfile::colonist(SOLDIER, 0).with_caps(Capabilities::soldier()).with_equipment(),
        Location::Tile(TileId(1)),
    );
    ab.add(
        AgentProfile::colonist(FARMER, 0).with_caps(Capabilities { scout: true, ..Capabilities::colonist() }),
        Location::Tile(TileId(0)),
    );
    ab.add(
        AgentProfile::colonist(TREASURE, 0).with_caps(Capabilities { treasure: true, ..Capabilities::default() }),
        Location::Tile(TileId(0)),
    );

    let mut world = FactionWorld::new(ruleset, ab.build());

    let mut colonies = ColonyStore::new();
    colonies.add("Fort", TileId(2));
    colonies.add("Haven", TileId(8));
    if let Some(fort) = colonies.get_mut(FORT) {
        fort.connected_port = true;
        fort.workers = 1;
    }
    if let Some(haven) = colonies.get_mut(HAVEN) {
        haven.connected_port = true;
        haven.workers = 2;
        haven.badly_defended = true;
        haven.defence_ratio = 0.4;
        haven.imports.insert(FURS, 100);
    }
    world.colonies = colonies;

    let raised = load_wishes_reader(Cursor::new(WISHES_CSV), &mut world.colonies, &mut world.wishes)?;
    tracing::info!("raised {raised} wishes");

    let furs = world.goods.add(FORT, FURS, 80, Some(Location::Colony(HAVEN)));
    if let Some(fort) = world.colonies.get_mut(FORT) {
        fort.export_goods.push(furs);
    }
    Ok(world)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== skirmish — turnplan faction planner ===");
    println!("Turns: {TURNS}  |  Seed: {SEED}");
    println!();

    // 1. Map, world, targets, config.
    let oracle = build_coast()?;
    println!("Map: {} tiles, {} edges", oracle.map.tile_count(), oracle.map.edge_count());
    let world = build_world()?;
    let targets = load_targets_reader(Cursor::new(TARGETS_CSV))?;
    let config = parse_config(CONFIG_TOML)?;
    let agent_count = world.agents.count;

    // 2. Planner.
    let mut planner = PlannerBuilder::new(world, oracle, targets).config(config).seed(SEED).build()?;

    // 3. Plan.
    let mut executor = TallyExecutor::default();
    let mut log = ReasonLog::default();
    let t0 = Instant::now();
    for _ in 0..TURNS {
        planner.start_turn(&mut executor, &mut log);
        planner.advance_turn();
    }
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!("Planned {TURNS} turns in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    for report in &log.reports {
        println!(
            "  {}: {} cycles, {} missions executed, {} failed",
            report.turn, report.cycles, report.execution.executed, report.execution.failed,
        );
    }
    println!();
    println!("Executions by kind:");
    for (kind, n) in &executor.by_kind {
        println!("  {kind:<20} {n}");
    }
    println!();

    // 5. Final missions table.
    println!("{:<8} {:<20} {:<14} {:<10}", "Agent", "Mission", "Target", "Reason");
    println!("{}", "-".repeat(54));
    for i in 0..agent_count {
        let agent = AgentId(i as u32);
        let mission = planner.missions.get(agent);
        let kind = mission.map_or("-".to_string(), |m| m.kind().to_string());
        let target = mission.and_then(Mission::target).map_or("-".to_string(), |t| t.to_string());
        let reason = log
            .reasons
            .iter()
            .find(|(a, _)| *a == agent)
            .map_or("-", |(_, r)| r.as_str());
        println!("{:<8} {:<20} {:<14} {:<10}", agent.to_string(), kind, target, reason);
    }
    if let Some(transport) = planner.missions.get(AgentId(0)).and_then(Mission::as_transport) {
        println!();
        println!("Galleon cargo:");
        for cargo in transport.cargo() {
            println!("  {:?} {} at {} ({})", cargo.leg, cargo.transportable, cargo.target, cargo.turns);
        }
    }

    Ok(())
}
