//! Disruption events: severe delays and blockages on a few routes.
//!
//! # Protocol
//!
//! 1. [`select_event_edges`] samples distinct undirected routes to put at
//!    risk.
//! 2. [`generate_outcomes`] assigns each one an action and draws whether it
//!    fires, producing a [`DisruptionOutcomes`] record.
//! 3. [`apply_outcomes`] derives a new graph from any base graph using that
//!    record.
//!
//! The record is the unit of determinism: applying the same record to the
//! base graph and to its rush-hour variant disrupts the same routes in the
//! same way, so the two can be compared directly.
//!
//! A triggered blockage removes the route from the derived graph in both
//! directions.  Its endpoints stay registered.

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, info};

use rc_core::{DisruptionConfig, DisruptionPolicy, ScenarioRng};
use rc_graph::{EdgeKey, RouteGraph};

use crate::{ScenarioError, ScenarioResult};

// ── Outcome record ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisruptionAction {
    /// Duration multiplied by the severe-delay factor.
    Delay,
    /// Route closed.
    Block,
}

impl fmt::Display for DisruptionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisruptionAction::Delay => f.write_str("delay"),
            DisruptionAction::Block => f.write_str("block"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisruptionOutcome {
    pub action:    DisruptionAction,
    pub triggered: bool,
}

/// Realized outcome per at-risk route, keyed canonically, in sampling order.
#[derive(Clone, Debug, PartialEq)]
pub struct DisruptionOutcomes {
    outcomes:            IndexMap<EdgeKey, DisruptionOutcome>,
    severe_delay_factor: f64,
}

impl DisruptionOutcomes {
    pub fn new(severe_delay_factor: f64) -> Self {
        Self { outcomes: IndexMap::new(), severe_delay_factor }
    }

    /// Record (or replace) the outcome for `edge`.
    pub fn insert(&mut self, edge: EdgeKey, outcome: DisruptionOutcome) {
        self.outcomes.insert(edge, outcome);
    }

    pub fn get(&self, edge: &EdgeKey) -> Option<&DisruptionOutcome> {
        self.outcomes.get(edge)
    }

    pub fn severe_delay_factor(&self) -> f64 {
        self.severe_delay_factor
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EdgeKey, &DisruptionOutcome)> + '_ {
        self.outcomes.iter()
    }

    /// The at-risk routes, in sampling order.
    pub fn event_edges(&self) -> impl Iterator<Item = &EdgeKey> + '_ {
        self.outcomes.keys()
    }

    /// Routes whose event fired.
    pub fn triggered(&self) -> impl Iterator<Item = (&EdgeKey, DisruptionAction)> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, o)| o.triggered)
            .map(|(k, o)| (k, o.action))
    }

    /// Routes closed when this record is applied.
    pub fn blocked(&self) -> impl Iterator<Item = &EdgeKey> + '_ {
        self.triggered()
            .filter(|(_, a)| *a == DisruptionAction::Block)
            .map(|(k, _)| k)
    }

    /// Routes slowed by the severe-delay factor when this record is applied.
    pub fn delayed(&self) -> impl Iterator<Item = &EdgeKey> + '_ {
        self.triggered()
            .filter(|(_, a)| *a == DisruptionAction::Delay)
            .map(|(k, _)| k)
    }
}

// ── Protocol ──────────────────────────────────────────────────────────────────

/// Sample `count` distinct undirected routes of `graph` uniformly without
/// replacement.  The result is in sampling order.
pub fn select_event_edges(
    graph: &RouteGraph,
    count: usize,
    rng: &mut ScenarioRng,
) -> ScenarioResult<Vec<EdgeKey>> {
    let edges: Vec<EdgeKey> = graph.edges().map(|(key, _)| key).collect();
    if edges.len() < count {
        return Err(ScenarioError::InsufficientEdges {
            required:  count,
            available: edges.len(),
        });
    }

    let picked: Vec<EdgeKey> = rng
        .sample_indices(edges.len(), count)
        .into_iter()
        .map(|i| edges[i].clone())
        .collect();
    debug!(count, available = edges.len(), "selected event edges");
    Ok(picked)
}

/// Assign an action to each event edge and draw whether it fires.
///
/// Under [`DisruptionPolicy::FirstDelayRestBlock`] the first edge is the
/// delay candidate and the rest are blockage candidates.  Under
/// [`DisruptionPolicy::Uniform`] each edge draws its action independently.
/// Each edge then fires when a uniform `[0, 1)` draw falls below
/// `trigger_probability`.
pub fn generate_outcomes(
    event_edges: &[EdgeKey],
    config: &DisruptionConfig,
    rng: &mut ScenarioRng,
) -> ScenarioResult<DisruptionOutcomes> {
    config.validate_draws()?;
    let mut outcomes = DisruptionOutcomes::new(config.severe_delay_factor);

    for (i, edge) in event_edges.iter().enumerate() {
        let action = match config.policy {
            DisruptionPolicy::FirstDelayRestBlock if i == 0 => DisruptionAction::Delay,
            DisruptionPolicy::FirstDelayRestBlock => DisruptionAction::Block,
            DisruptionPolicy::Uniform { delay_probability } => {
                if rng.gen_bool(delay_probability) {
                    DisruptionAction::Delay
                } else {
                    DisruptionAction::Block
                }
            }
        };
        let triggered = rng.random::<f64>() < config.trigger_probability;
        if triggered {
            info!(edge = %edge, %action, "disruption triggered");
        }
        outcomes.insert(edge.clone(), DisruptionOutcome { action, triggered });
    }

    Ok(outcomes)
}

/// Derive a new graph from `graph` with `outcomes` applied.
///
/// Routes without an outcome, or whose event did not fire, are copied
/// unchanged.  A fired delay multiplies the duration by the record's
/// severe-delay factor; a fired blockage omits the route.  Outcomes for
/// routes absent from `graph` have no effect.  Node and neighbour order
/// follow `graph`.
pub fn apply_outcomes(
    graph: &RouteGraph,
    outcomes: &DisruptionOutcomes,
) -> ScenarioResult<RouteGraph> {
    let derived = graph.map_routes(|key, duration| match outcomes.get(key) {
        Some(DisruptionOutcome { triggered: true, action: DisruptionAction::Block }) => None,
        Some(DisruptionOutcome { triggered: true, action: DisruptionAction::Delay }) => {
            Some(duration * outcomes.severe_delay_factor())
        }
        _ => Some(duration),
    })?;

    debug!(
        routes_in = graph.edge_count(),
        routes_out = derived.edge_count(),
        "applied disruption outcomes"
    );
    Ok(derived)
}
