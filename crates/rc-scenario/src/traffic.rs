//! Spread-traffic model.
//!
//! A share `distribution` of the undirected routes (rounded down) is
//! affected.  `blockages` of the affected routes are closed (duration
//! `f64::INFINITY`); the others get a multiplier drawn from
//! `Normal((min+max)/2, (max-min)/6)` clamped to `[min_delay, max_delay]`.
//! Unaffected routes keep multiplier 1.  Which routes get which multiplier
//! is decided by a shuffle.

use indexmap::IndexMap;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use rc_core::{ScenarioRng, TrafficConfig};
use rc_graph::{EdgeKey, RouteGraph};

use crate::congestion::apply_multipliers;
use crate::{ScenarioError, ScenarioResult};

pub fn simulate_traffic(
    graph: &RouteGraph,
    config: &TrafficConfig,
    rng: &mut ScenarioRng,
) -> ScenarioResult<RouteGraph> {
    config.validate()?;

    let edges: Vec<EdgeKey> = graph.edges().map(|(key, _)| key).collect();
    let total = edges.len();
    let affected = ((total as f64 * config.distribution).floor() as usize).min(total);
    if config.blockages > affected {
        return Err(ScenarioError::TooManyBlockages { blockages: config.blockages, affected });
    }

    let normal = Normal::new(config.mean(), config.stdev())
        .map_err(|e| ScenarioError::Distribution(e.to_string()))?;

    let mut multipliers = Vec::with_capacity(total);
    multipliers.resize(total - affected, 1.0);
    multipliers.resize(total - affected + config.blockages, f64::INFINITY);
    for _ in 0..affected - config.blockages {
        let raw: f64 = normal.sample(rng.inner());
        multipliers.push(raw.clamp(config.min_delay, config.max_delay));
    }
    rng.shuffle(&mut multipliers);

    debug!(total, affected, blockages = config.blockages, "simulating traffic");
    let by_edge: IndexMap<EdgeKey, f64> = edges.into_iter().zip(multipliers).collect();
    apply_multipliers(graph, &by_edge)
}
