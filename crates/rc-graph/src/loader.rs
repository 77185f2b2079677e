//! CSV location and route loaders.
//!
//! # CSV formats
//!
//! Locations, one row per place:
//!
//! ```csv
//! name,latitude,longitude
//! Fenway Park,42.346268,-71.095764
//! Symphony Hall,42.342025,-71.085784
//! ```
//!
//! Routes, one row per undirected route:
//!
//! ```csv
//! start,end,duration
//! Fenway Park,Symphony Hall,6
//! ```
//!
//! Route endpoints that match a known location by name carry its
//! coordinates into the graph; any other name becomes a bare `Location`.
//! A repeated pair overwrites the earlier duration.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rc_core::Location;

use crate::{GraphError, GraphResult, RouteGraph};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    name:      String,
    latitude:  f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RouteRecord {
    start:    String,
    end:      String,
    duration: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load locations from a CSV file.
pub fn read_locations(path: &Path) -> GraphResult<Vec<Location>> {
    let file = std::fs::File::open(path)?;
    read_locations_reader(file)
}

/// Like [`read_locations`] but accepts any `Read` source.
pub fn read_locations_reader<R: Read>(reader: R) -> GraphResult<Vec<Location>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<LocationRecord>()
        .map(|row| {
            let row = row.map_err(|e| GraphError::Parse(e.to_string()))?;
            Ok(Location::with_coordinates(row.name.trim(), row.latitude, row.longitude))
        })
        .collect()
}

/// Load a route graph from a CSV file.
///
/// `locations` supplies coordinates for endpoints by name; pass `&[]` when
/// none are known.
pub fn read_routes(path: &Path, locations: &[Location]) -> GraphResult<RouteGraph> {
    let file = std::fs::File::open(path)?;
    read_routes_reader(file, locations)
}

/// Like [`read_routes`] but accepts any `Read` source.
pub fn read_routes_reader<R: Read>(reader: R, locations: &[Location]) -> GraphResult<RouteGraph> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut graph = RouteGraph::new();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let start = resolve(row.start.trim(), locations);
        let end = resolve(row.end.trim(), locations);
        graph.add_route(start, end, row.duration)?;
    }

    Ok(graph)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn resolve(name: &str, locations: &[Location]) -> Location {
    locations
        .iter()
        .find(|loc| *loc == name)
        .cloned()
        .unwrap_or_else(|| Location::new(name))
}
