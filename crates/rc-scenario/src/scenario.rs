//! The four standard scenarios, derived together.
//!
//! | Kind                | Graph                                          |
//! |---------------------|------------------------------------------------|
//! | `Base`              | the input graph                                |
//! | `RushHour`          | base with congestion multipliers               |
//! | `Disrupted`         | base with the disruption record applied        |
//! | `DisruptedRushHour` | rush hour with the *same* record applied       |
//!
//! Event edges are sampled from the base graph once and one outcome record
//! is shared by both disrupted variants.

use std::fmt;

use tracing::debug;

use rc_core::{ScenarioConfig, ScenarioRng};
use rc_graph::{EdgeKey, Route, RouteGraph, Router};

use crate::congestion::apply_congestion;
use crate::disruption::{apply_outcomes, generate_outcomes, select_event_edges, DisruptionOutcomes};
use crate::ScenarioResult;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    Base,
    RushHour,
    Disrupted,
    DisruptedRushHour,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Base,
        ScenarioKind::RushHour,
        ScenarioKind::Disrupted,
        ScenarioKind::DisruptedRushHour,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::Base => "Base Case",
            ScenarioKind::RushHour => "Rush Hour",
            ScenarioKind::Disrupted => "Base Case + Uncertain Events",
            ScenarioKind::DisruptedRushHour => "Rush Hour + Uncertain Events",
        }
    }

    /// `true` for the variants carrying disruption events.
    pub fn is_disrupted(self) -> bool {
        matches!(self, ScenarioKind::Disrupted | ScenarioKind::DisruptedRushHour)
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct ScenarioSet {
    base:                RouteGraph,
    rush_hour:           RouteGraph,
    disrupted:           RouteGraph,
    disrupted_rush_hour: RouteGraph,
    outcomes:            DisruptionOutcomes,
}

impl ScenarioSet {
    /// Derive every scenario from `base`.
    ///
    /// Draw order on `rng`: congestion multipliers, event-edge sample,
    /// outcome draws.
    pub fn generate(
        base: &RouteGraph,
        config: &ScenarioConfig,
        rng: &mut ScenarioRng,
    ) -> ScenarioResult<Self> {
        config.validate()?;

        let rush_hour = apply_congestion(base, &config.congestion, rng)?;
        let event_edges = select_event_edges(base, config.disruption.event_count, rng)?;
        let outcomes = generate_outcomes(&event_edges, &config.disruption, rng)?;
        let disrupted = apply_outcomes(base, &outcomes)?;
        let disrupted_rush_hour = apply_outcomes(&rush_hour, &outcomes)?;

        debug!(
            events = outcomes.len(),
            triggered = outcomes.triggered().count(),
            "generated scenario set"
        );

        Ok(Self {
            base: base.clone(),
            rush_hour,
            disrupted,
            disrupted_rush_hour,
            outcomes,
        })
    }

    pub fn graph(&self, kind: ScenarioKind) -> &RouteGraph {
        match kind {
            ScenarioKind::Base => &self.base,
            ScenarioKind::RushHour => &self.rush_hour,
            ScenarioKind::Disrupted => &self.disrupted,
            ScenarioKind::DisruptedRushHour => &self.disrupted_rush_hour,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScenarioKind, &RouteGraph)> + '_ {
        ScenarioKind::ALL.into_iter().map(move |kind| (kind, self.graph(kind)))
    }

    /// The shared disruption record.
    pub fn outcomes(&self) -> &DisruptionOutcomes {
        &self.outcomes
    }

    pub fn event_edges(&self) -> impl Iterator<Item = &EdgeKey> + '_ {
        self.outcomes.event_edges()
    }

    /// Fastest route from `from` to `to` under every scenario.
    pub fn compare<R: Router + ?Sized>(
        &self,
        router: &R,
        from: &str,
        to: &str,
    ) -> ScenarioResult<Vec<(ScenarioKind, Route)>> {
        self.iter()
            .map(|(kind, graph)| -> ScenarioResult<(ScenarioKind, Route)> {
                Ok((kind, router.route(graph, from, to)?))
            })
            .collect()
    }
}
