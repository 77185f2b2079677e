//! `rc-scenario` — traffic scenarios derived from a base route graph.
//!
//! Every transform reads its input graph and returns a new, independent
//! `RouteGraph`; the base graph is never mutated, so any number of variants
//! can be derived from it.  All randomness comes from a caller-supplied
//! [`ScenarioRng`](rc_core::ScenarioRng).
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`congestion`] | rush-hour multipliers, one draw per undirected route      |
//! | [`disruption`] | event-edge sampling, outcome record, outcome application  |
//! | [`traffic`]    | spread-traffic model with optional blockages              |
//! | [`scenario`]   | `ScenarioSet`: base / rush hour / with events, compared   |
//! | [`error`]      | `ScenarioError`, `ScenarioResult<T>`                      |

pub mod congestion;
pub mod disruption;
pub mod error;
pub mod scenario;
pub mod traffic;


pub use congestion::{apply_congestion, apply_multipliers, congestion_multipliers};
pub use disruption::{
    apply_outcomes, generate_outcomes, select_event_edges, DisruptionAction, DisruptionOutcome,
    DisruptionOutcomes,
};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{ScenarioKind, ScenarioSet};
pub use traffic::simulate_traffic;
