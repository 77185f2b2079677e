//! `rc-core` — foundational types for the `route_calc` workspace.
//!
//! This crate is a dependency of every other `rc-*` crate.  It has no
//! `rc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`location`]    | `Location` (name-keyed graph node)                    |
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`ids`]         | `NodeId` (dense index into a graph's node order)      |
//! | [`rng`]         | `ScenarioRng` (single seeded source per run)          |
//! | [`config`]      | `ScenarioConfig` and per-transform configs            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to locations and configs.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod location;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    CongestionConfig, DisruptionConfig, DisruptionPolicy, ScenarioConfig, TrafficConfig,
};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::NodeId;
pub use location::Location;
pub use rng::ScenarioRng;
