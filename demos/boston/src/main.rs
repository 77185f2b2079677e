//! boston — route comparison across traffic scenarios.
//!
//! Builds the embedded landmark network, derives the base, rush-hour and
//! disrupted scenarios from one seed, and prints the fastest route between
//! two landmarks in both directions for each.
//!
//! Usage: `boston [SEED]` (default 42).  Set `RUST_LOG=debug` for the
//! library's tracing output.

mod network;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use rc_core::ScenarioConfig;
use rc_graph::{DijkstraRouter, Route, RouteGraph, Router};
use rc_scenario::ScenarioSet;

use network::build_network;

const START: &str = "Fenway Park";
const END:   &str = "Massachusetts State House";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>().with_context(|| format!("invalid seed {arg:?}"))?,
        None => ScenarioConfig::default().seed,
    };
    let config = ScenarioConfig { seed, ..Default::default() };

    let base = build_network().context("loading embedded network")?;
    println!("=== boston — route scenarios ===");
    println!("{base}  |  Seed: {seed}");
    if let (Ok(a), Ok(b)) = (base.location(START), base.location(END)) {
        if let Some(km) = a.distance_km(b) {
            println!("Straight-line {START} -> {END}: {km:.2} km");
        }
    }
    println!();

    let mut rng = config.make_rng();
    let scenarios = ScenarioSet::generate(&base, &config, &mut rng)?;

    println!("Event edges:");
    for (edge, outcome) in scenarios.outcomes().iter() {
        let state = if outcome.triggered { "TRIGGERED" } else { "quiet" };
        println!("  {:<60} {:<6} {state}", edge.to_string(), outcome.action.to_string());
    }
    println!();

    for (kind, graph) in scenarios.iter() {
        println!("--- {kind} ---");
        print_route(graph, START, END)?;
        print_route(graph, END, START)?;
        println!();
    }

    Ok(())
}

fn print_route(graph: &RouteGraph, from: &str, to: &str) -> Result<()> {
    let route: Route = DijkstraRouter.route(graph, from, to)?;
    if !route.is_reachable() {
        println!("  {from} -> {to}: unreachable");
        return Ok(());
    }

    let mut line = String::new();
    for (a, b) in route.legs() {
        let minutes = graph.duration(a.name(), b.name()).unwrap_or(f64::INFINITY);
        line.push_str(&format!("{a} ({minutes:.1} {}) -> ", graph.time_units()));
    }
    line.push_str(to);
    println!("  {from} -> {to}: {:.2} {}", route.total_duration, graph.time_units());
    println!("    {line}");
    Ok(())
}
