//! Single-source shortest paths and path reconstruction.
//!
//! # Algorithm
//!
//! Classic Dijkstra with a binary min-heap and lazy deletion: a popped
//! entry whose cost exceeds the node's best known distance is stale and is
//! skipped.  Durations are `f64`; a blocked route (`f64::INFINITY`) yields an
//! infinite candidate that never compares below any distance, so it is
//! never relaxed.  No special case is needed for it.
//!
//! Heap entries carry a monotonically increasing sequence number.  Among
//! entries of equal cost the one pushed first pops first, which makes the
//! predecessor map deterministic under tied durations.
//!
//! # Pluggability
//!
//! Drivers call routing via the [`Router`] trait, so an alternative engine
//! can be swapped in without touching scenario code.  [`DijkstraRouter`] is
//! the default.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use indexmap::IndexMap;
use tracing::debug;

use rc_core::{Location, NodeId};

use crate::graph::RouteGraph;
use crate::{GraphError, GraphResult};

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// The complete output of one search from `source`: best distance and
/// predecessor for every node of the graph.
///
/// Unreached nodes have distance `f64::INFINITY` and no predecessor.  The
/// same result answers path queries to any destination.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source:       Location,
    distances:    IndexMap<Location, f64>,
    predecessors: IndexMap<Location, Option<Location>>,
}

impl ShortestPaths {
    pub fn source(&self) -> &Location {
        &self.source
    }

    /// Distance from the source to `name`; `None` if `name` is not a node of
    /// the searched graph.
    pub fn distance(&self, name: &str) -> Option<f64> {
        self.distances.get(name).copied()
    }

    pub fn is_reachable(&self, name: &str) -> bool {
        self.distance(name).is_some_and(f64::is_finite)
    }

    pub fn predecessor(&self, name: &str) -> Option<&Location> {
        self.predecessors.get(name)?.as_ref()
    }

    pub fn distances(&self) -> &IndexMap<Location, f64> {
        &self.distances
    }

    pub fn predecessors(&self) -> &IndexMap<Location, Option<Location>> {
        &self.predecessors
    }

    /// Ordered stops from the source to `destination`, inclusive.  Empty when
    /// the destination is unknown or unreachable.
    pub fn path_to(&self, destination: &str) -> Vec<Location> {
        if !self.is_reachable(destination) {
            return Vec::new();
        }
        reconstruct_path(&self.predecessors, self.source.name(), destination)
    }

    pub fn route_to(&self, destination: &str) -> Route {
        Route {
            stops:          self.path_to(destination),
            total_duration: self.distance(destination).unwrap_or(f64::INFINITY),
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a point-to-point query.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Locations to visit in order, source and destination included.
    /// Empty when the destination cannot be reached.
    pub stops: Vec<Location>,
    /// Cumulative duration; `f64::INFINITY` when unreachable.
    pub total_duration: f64,
}

impl Route {
    pub fn is_reachable(&self) -> bool {
        !self.stops.is_empty() && self.total_duration.is_finite()
    }

    /// `true` if the source and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() == 1
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (&Location, &Location)> + '_ {
        self.stops.windows(2).map(|w| (&w[0], &w[1]))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router: Send + Sync {
    /// Search from `source` over the whole graph.
    ///
    /// Fails with [`GraphError::NotFound`] if `source` is not in `graph`.
    fn shortest_paths(&self, graph: &RouteGraph, source: &str) -> GraphResult<ShortestPaths>;

    /// Fastest route from `from` to `to`.
    ///
    /// Both names must be in `graph`.  An unreachable `to` is a normal
    /// result: empty `stops` and infinite `total_duration`.
    fn route(&self, graph: &RouteGraph, from: &str, to: &str) -> GraphResult<Route> {
        graph.location(to)?;
        Ok(self.shortest_paths(graph, from)?.route_to(to))
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_paths(&self, graph: &RouteGraph, source: &str) -> GraphResult<ShortestPaths> {
        shortest_paths(graph, source)
    }

    fn route(&self, graph: &RouteGraph, from: &str, to: &str) -> GraphResult<Route> {
        graph.location(to)?;
        Ok(shortest_paths_until(graph, from, to)?.route_to(to))
    }
}

/// Run Dijkstra from `source` to exhaustion.
pub fn shortest_paths(graph: &RouteGraph, source: &str) -> GraphResult<ShortestPaths> {
    dijkstra(graph, source, None)
}

/// Run Dijkstra from `source`, stopping as soon as `target` is settled.
///
/// Distances and predecessors of every node settled before the stop are
/// identical to those of [`shortest_paths`]; nodes not yet settled may hold
/// tentative values.  An unknown `target` simply runs to exhaustion.
pub fn shortest_paths_until(
    graph: &RouteGraph,
    source: &str,
    target: &str,
) -> GraphResult<ShortestPaths> {
    dijkstra(graph, source, graph.index_of(target))
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Min-heap entry ordered by cost, then by push order.
#[derive(Copy, Clone, Debug)]
struct QueueEntry {
    cost: f64,
    seq:  u64,
    node: NodeId,
}

// Reversed so `BinaryHeap` (a max-heap) pops the cheapest, oldest entry.
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

fn dijkstra(
    graph: &RouteGraph,
    source: &str,
    stop_at: Option<NodeId>,
) -> GraphResult<ShortestPaths> {
    let from = graph
        .index_of(source)
        .ok_or_else(|| GraphError::NotFound(source.to_owned()))?;
    let source_loc = graph.location(source)?.clone();

    let n = graph.node_count();
    // dist[v] = best known duration to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = node that reached v; NodeId::INVALID for the source and unreached nodes.
    let mut prev = vec![NodeId::INVALID; n];
    let mut seq: u64 = 0;

    dist[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry { cost: 0.0, seq, node: from });

    let mut settled = 0usize;
    while let Some(QueueEntry { cost, node, .. }) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }
        settled += 1;

        if Some(node) == stop_at {
            break;
        }

        for (neighbor, duration) in graph.neighbors_at(node) {
            let candidate = cost + duration;
            if candidate < dist[neighbor.index()] {
                dist[neighbor.index()] = candidate;
                prev[neighbor.index()] = node;
                seq += 1;
                heap.push(QueueEntry { cost: candidate, seq, node: neighbor });
            }
        }
    }

    debug!(source, settled, nodes = n, "shortest-path search complete");
    Ok(collect(graph, source_loc, &dist, &prev))
}

/// Translate the index tables back into location-keyed maps.
fn collect(graph: &RouteGraph, source: Location, dist: &[f64], prev: &[NodeId]) -> ShortestPaths {
    let mut distances = IndexMap::with_capacity(dist.len());
    let mut predecessors = IndexMap::with_capacity(prev.len());

    for (i, loc) in graph.nodes().enumerate() {
        distances.insert(loc.clone(), dist[i]);
        let parent = Some(prev[i])
            .filter(|p| p.is_valid())
            .and_then(|p| graph.location_at(p))
            .cloned();
        predecessors.insert(loc.clone(), parent);
    }

    ShortestPaths { source, distances, predecessors }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

/// Walk `predecessors` back from `destination` and return the stops from
/// `source` to `destination`, inclusive.
///
/// Returns an empty `Vec` when the walk does not end at `source` (the
/// destination was never reached, is unknown, or the map belongs to a
/// different source).  A cyclic map also yields an empty `Vec`.
pub fn reconstruct_path(
    predecessors: &IndexMap<Location, Option<Location>>,
    source: &str,
    destination: &str,
) -> Vec<Location> {
    let mut path = Vec::new();
    let mut cur = predecessors.get_key_value(destination).map(|(loc, _)| loc);

    while let Some(loc) = cur {
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        path.push(loc.clone());
        cur = predecessors.get(loc.name()).and_then(Option::as_ref);
    }
    path.reverse();

    match path.first() {
        Some(head) if *head == source => path,
        _ => Vec::new(),
    }
}
