//! `rc-graph` — route graph, shortest paths, and loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `RouteGraph` (symmetric adjacency), `EdgeKey`               |
//! | [`router`]  | `Router` trait, `DijkstraRouter`, `ShortestPaths`, `Route`  |
//! | [`loader`]  | `read_locations*`, `read_routes*` (CSV)                     |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |

pub mod error;
pub mod graph;
pub mod loader;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{EdgeKey, RouteGraph};
pub use loader::{read_locations, read_locations_reader, read_routes, read_routes_reader};
pub use router::{
    reconstruct_path, shortest_paths, shortest_paths_until, DijkstraRouter, Route, Router,
    ShortestPaths,
};
