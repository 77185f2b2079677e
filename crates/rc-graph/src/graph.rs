//! Undirected route graph.
//!
//! # Data layout
//!
//! An insertion-ordered adjacency map:
//!
//! ```text
//! Location -> { neighbour Location -> duration }
//! ```
//!
//! Every route is stored twice, once per direction, with the identical
//! duration.  [`RouteGraph::add_route`] always writes both entries and
//! [`RouteGraph::map_routes`] derives both directions from one canonical
//! key, so the symmetry holds by construction.
//!
//! Both map levels keep insertion order (`indexmap`), which makes node
//! iteration, canonical-edge iteration and therefore every seeded random
//! draw over them reproducible.  The position of a location in the outer
//! map is its [`NodeId`].
//!
//! A duration of `f64::INFINITY` is a blocked route: it stays in the graph
//! but can never improve a shortest path.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use rc_core::{Location, NodeId};

use crate::{GraphError, GraphResult};

// ── EdgeKey ───────────────────────────────────────────────────────────────────

/// Canonical key of an undirected route: its two endpoints ordered by name.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)`, so both travel directions of
/// a route map to one key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    low:  Location,
    high: Location,
}

impl EdgeKey {
    pub fn new(a: &Location, b: &Location) -> Self {
        if a <= b {
            Self { low: a.clone(), high: b.clone() }
        } else {
            Self { low: b.clone(), high: a.clone() }
        }
    }

    /// Endpoint whose name sorts first.
    #[inline]
    pub fn first(&self) -> &Location {
        &self.low
    }

    #[inline]
    pub fn second(&self) -> &Location {
        &self.high
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct RouteGraph {
    adjacency:  IndexMap<Location, IndexMap<Location, f64>>,
    /// Label for the unit of every duration (e.g. "minutes").
    time_units: String,
}

impl RouteGraph {
    /// An empty graph measured in minutes.
    pub fn new() -> Self {
        Self::with_time_units("minutes")
    }

    pub fn with_time_units(time_units: impl Into<String>) -> Self {
        Self { adjacency: IndexMap::new(), time_units: time_units.into() }
    }

    /// A new graph with every route's duration replaced by `f(key, duration)`,
    /// or the route dropped when `f` returns `None`.
    ///
    /// Every node is kept, and each node's neighbour order is preserved, so
    /// a tied search over the derived graph discovers neighbours in the same
    /// order as over `self`.  `f` is called once per direction and must give
    /// both directions of a route the same answer.  Fails on a negative or
    /// NaN result.
    pub fn map_routes<F>(&self, mut f: F) -> GraphResult<RouteGraph>
    where
        F: FnMut(&EdgeKey, f64) -> Option<f64>,
    {
        let mut adjacency = IndexMap::with_capacity(self.adjacency.len());
        for (u, routes) in &self.adjacency {
            let mut mapped = IndexMap::with_capacity(routes.len());
            for (v, &w) in routes {
                let Some(duration) = f(&EdgeKey::new(u, v), w) else {
                    continue;
                };
                if duration.is_nan() || duration < 0.0 {
                    return Err(GraphError::InvalidWeight {
                        start: u.name().to_owned(),
                        end: v.name().to_owned(),
                        duration,
                    });
                }
                mapped.insert(v.clone(), duration);
            }
            adjacency.insert(u.clone(), mapped);
        }
        Ok(Self { adjacency, time_units: self.time_units.clone() })
    }

    pub fn time_units(&self) -> &str {
        &self.time_units
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Register `location` without any route.  Returns its `NodeId`; a name
    /// that is already present keeps its original entry.
    pub fn add_location(&mut self, location: Location) -> NodeId {
        let (index, _) = self.register(location);
        NodeId(index as u32)
    }

    /// Insert (or overwrite) the route `start <-> end` in both directions.
    ///
    /// Unknown endpoints are registered.  Fails without touching the graph
    /// when `duration` is negative or NaN, or when `start == end`.
    pub fn add_route(
        &mut self,
        start: impl Into<Location>,
        end: impl Into<Location>,
        duration: f64,
    ) -> GraphResult<()> {
        let start = start.into();
        let end = end.into();

        if duration.is_nan() || duration < 0.0 {
            return Err(GraphError::InvalidWeight {
                start: start.name().to_owned(),
                end: end.name().to_owned(),
                duration,
            });
        }
        if start == end {
            return Err(GraphError::SelfLoop(start.name().to_owned()));
        }

        let (_, start) = self.register(start);
        let (_, end) = self.register(end);

        if let Some(routes) = self.adjacency.get_mut(start.name()) {
            routes.insert(end.clone(), duration);
        }
        if let Some(routes) = self.adjacency.get_mut(end.name()) {
            routes.insert(start, duration);
        }
        Ok(())
    }

    /// Index and stored key of `location`, inserting it if new.
    fn register(&mut self, location: Location) -> (usize, Location) {
        if let Some((index, key, _)) = self.adjacency.get_full(location.name()) {
            return (index, key.clone());
        }
        debug!(location = %location, "registering new location");
        let (index, _) = self.adjacency.insert_full(location.clone(), IndexMap::new());
        (index, location)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Neighbour -> duration map of the location named `name`.
    pub fn neighbors(&self, name: &str) -> GraphResult<&IndexMap<Location, f64>> {
        self.adjacency
            .get(name)
            .ok_or_else(|| GraphError::NotFound(name.to_owned()))
    }

    /// The registered `Location` named `name` (with its coordinates).
    pub fn location(&self, name: &str) -> GraphResult<&Location> {
        self.adjacency
            .get_key_value(name)
            .map(|(loc, _)| loc)
            .ok_or_else(|| GraphError::NotFound(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Duration of the route `a -> b`, if one exists.
    pub fn duration(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency.get(a)?.get(b).copied()
    }

    /// All registered locations in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Location> + '_ {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected routes.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Every undirected route once, keyed canonically, in the order its
    /// first direction was encountered.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, (u, routes))| {
            routes.iter().filter_map(move |(v, &w)| {
                // Report the pair from whichever endpoint comes first.
                let j = self.adjacency.get_index_of(v.name())?;
                (j > i).then(|| (EdgeKey::new(u, v), w))
            })
        })
    }

    /// Every directed entry `(from, to, duration)`.
    pub fn directed_edges(&self) -> impl Iterator<Item = (&Location, &Location, f64)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(u, routes)| routes.iter().map(move |(v, &w)| (u, v, w)))
    }

    /// `true` when every directed entry has a mirror with the same duration.
    pub fn is_symmetric(&self) -> bool {
        self.directed_edges()
            .all(|(u, v, w)| self.duration(v.name(), u.name()) == Some(w))
    }

    // ── Index access (used by the router) ─────────────────────────────────

    pub fn index_of(&self, name: &str) -> Option<NodeId> {
        self.adjacency.get_index_of(name).map(|i| NodeId(i as u32))
    }

    pub fn location_at(&self, id: NodeId) -> Option<&Location> {
        self.adjacency.get_index(id.index()).map(|(loc, _)| loc)
    }

    /// Neighbours of `id` as `(NodeId, duration)` pairs.
    pub(crate) fn neighbors_at(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency
            .get_index(id.index())
            .into_iter()
            .flat_map(move |(_, routes)| {
                routes.iter().filter_map(move |(v, &w)| Some((self.index_of(v.name())?, w)))
            })
    }
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same locations, same duration per ordered pair.
/// Insertion order and time units are ignored.
impl PartialEq for RouteGraph {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl fmt::Display for RouteGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RouteGraph of {} locations and {} routes",
            self.node_count(),
            self.edge_count()
        )
    }
}
