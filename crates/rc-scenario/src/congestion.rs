//! Rush-hour congestion.
//!
//! Each undirected route draws one multiplier from
//! `Normal(mean, stdev)`, clamped to `[min_multiplier, max_multiplier]`,
//! and both directions are scaled by that same value.  With the clamp's
//! lower bound at 1.0 no route ever gets faster.

use indexmap::IndexMap;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use rc_core::{CongestionConfig, ScenarioRng};
use rc_graph::{EdgeKey, RouteGraph};

use crate::{ScenarioError, ScenarioResult};

/// Draw one clamped multiplier per undirected route of `graph`, in
/// canonical-edge order.
pub fn congestion_multipliers(
    graph: &RouteGraph,
    config: &CongestionConfig,
    rng: &mut ScenarioRng,
) -> ScenarioResult<IndexMap<EdgeKey, f64>> {
    config.validate()?;
    let normal = Normal::new(config.mean, config.stdev)
        .map_err(|e| ScenarioError::Distribution(e.to_string()))?;

    Ok(graph
        .edges()
        .map(|(key, _)| {
            let raw = normal.sample(rng.inner());
            (key, config.clamp(raw))
        })
        .collect())
}

/// Build a new graph with every route scaled by its multiplier.
///
/// Routes missing from `multipliers` are copied unchanged.  An infinite
/// multiplier closes the route (duration `f64::INFINITY`), even one of
/// zero duration.  Node and neighbour order follow `graph`.
pub fn apply_multipliers(
    graph: &RouteGraph,
    multipliers: &IndexMap<EdgeKey, f64>,
) -> ScenarioResult<RouteGraph> {
    let derived = graph.map_routes(|key, duration| {
        let m = multipliers.get(key).copied().unwrap_or(1.0);
        Some(if m.is_infinite() { f64::INFINITY } else { duration * m })
    })?;
    Ok(derived)
}

/// The rush-hour variant of `graph`.
pub fn apply_congestion(
    graph: &RouteGraph,
    config: &CongestionConfig,
    rng: &mut ScenarioRng,
) -> ScenarioResult<RouteGraph> {
    let multipliers = congestion_multipliers(graph, config, rng)?;
    debug!(routes = multipliers.len(), mean = config.mean, "applying congestion");
    apply_multipliers(graph, &multipliers)
}
