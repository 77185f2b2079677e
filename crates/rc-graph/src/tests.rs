//! Unit tests for rc-graph.
//!
//! All tests use hand-crafted graphs so they run without any data files.

#[cfg(test)]
mod helpers {
    use crate::RouteGraph;

    /// A–B = 4, B–C = 3, A–C = 10.  Shortest A→C is A→B→C = 7.
    pub fn triangle() -> RouteGraph {
        let mut g = RouteGraph::new();
        g.add_route("A", "B", 4.0).unwrap();
        g.add_route("B", "C", 3.0).unwrap();
        g.add_route("A", "C", 10.0).unwrap();
        g
    }

    /// Five nodes 0..4:
    ///
    ///   0–1 = 4, 0–2 = 8, 1–2 = 3, 1–4 = 6, 2–3 = 2, 3–4 = 10
    ///
    /// From 0: {0:0, 1:4, 2:7, 3:9, 4:10}.
    pub fn pentagon() -> RouteGraph {
        let mut g = RouteGraph::new();
        g.add_route("0", "1", 4.0).unwrap();
        g.add_route("0", "2", 8.0).unwrap();
        g.add_route("1", "2", 3.0).unwrap();
        g.add_route("1", "4", 6.0).unwrap();
        g.add_route("2", "3", 2.0).unwrap();
        g.add_route("3", "4", 10.0).unwrap();
        g
    }

    pub fn names(path: &[rc_core::Location]) -> Vec<&str> {
        path.iter().map(|l| l.name()).collect()
    }
}

// ── Graph structure ───────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use rc_core::Location;

    use crate::{EdgeKey, GraphError, RouteGraph};

    #[test]
    fn empty_graph() {
        let g = RouteGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.time_units(), "minutes");
    }

    #[test]
    fn add_route_is_symmetric() {
        let g = super::helpers::triangle();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.duration("A", "B"), Some(4.0));
        assert_eq!(g.duration("B", "A"), Some(4.0));
        assert!(g.is_symmetric());
    }

    #[test]
    fn overwrite_updates_both_directions() {
        let mut g = super::helpers::triangle();
        g.add_route("B", "A", 1.5).unwrap();
        assert_eq!(g.duration("A", "B"), Some(1.5));
        assert_eq!(g.duration("B", "A"), Some(1.5));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn negative_duration_rejected_without_mutation() {
        let mut g = RouteGraph::new();
        let err = g.add_route("A", "B", -5.0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { duration, .. } if duration == -5.0));
        assert!(g.is_empty());

        let mut g = super::helpers::triangle();
        let before = g.clone();
        assert!(g.add_route("A", "D", -1.0).is_err());
        assert_eq!(g, before);
        assert!(!g.contains("D"));
    }

    #[test]
    fn nan_duration_rejected() {
        let mut g = RouteGraph::new();
        assert!(matches!(
            g.add_route("A", "B", f64::NAN),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn infinite_duration_accepted() {
        let mut g = RouteGraph::new();
        g.add_route("A", "B", f64::INFINITY).unwrap();
        assert_eq!(g.duration("B", "A"), Some(f64::INFINITY));
    }

    #[test]
    fn self_loop_rejected() {
        let mut g = RouteGraph::new();
        assert!(matches!(g.add_route("A", "A", 1.0), Err(GraphError::SelfLoop(_))));
        assert!(g.is_empty());
    }

    #[test]
    fn neighbors_and_not_found() {
        let g = super::helpers::triangle();
        let n = g.neighbors("A").unwrap();
        assert_eq!(n.len(), 2);
        assert_eq!(n.get("C"), Some(&10.0));
        assert!(matches!(g.neighbors("Z"), Err(GraphError::NotFound(name)) if name == "Z"));
    }

    #[test]
    fn isolated_location() {
        let mut g = super::helpers::triangle();
        let id = g.add_location(Location::new("D"));
        assert_eq!(id.index(), 3);
        assert!(g.neighbors("D").unwrap().is_empty());
        // Re-registering returns the existing id.
        assert_eq!(g.add_location(Location::new("A")).index(), 0);
        assert_eq!(g.node_count(), 4);
    }

    #[test]
    fn nodes_in_insertion_order() {
        let mut g = RouteGraph::new();
        g.add_route("Z", "M", 1.0).unwrap();
        g.add_route("A", "M", 1.0).unwrap();
        let names: Vec<&str> = g.nodes().map(Location::name).collect();
        assert_eq!(names, ["Z", "M", "A"]);
    }

    #[test]
    fn coordinates_kept_from_first_registration() {
        let mut g = RouteGraph::new();
        g.add_route(Location::with_coordinates("A", 1.0, 2.0), "B", 3.0).unwrap();
        g.add_route(Location::new("A"), "C", 3.0).unwrap();
        assert_eq!(g.location("A").unwrap().latitude(), Some(1.0));
    }

    #[test]
    fn edges_are_canonical_and_unique() {
        let g = super::helpers::triangle();
        let edges: Vec<(EdgeKey, f64)> = g.edges().collect();
        assert_eq!(edges.len(), 3);
        let ab = EdgeKey::new(&Location::new("B"), &Location::new("A"));
        assert_eq!(ab.first().name(), "A");
        assert_eq!(ab.second().name(), "B");
        assert!(edges.contains(&(ab, 4.0)));
        assert_eq!(g.directed_edges().count(), 6);
    }

    #[test]
    fn edge_key_orientation_free() {
        let a = Location::new("Fenway Park");
        let b = Location::new("Boston Common");
        assert_eq!(EdgeKey::new(&a, &b), EdgeKey::new(&b, &a));
        assert_eq!(EdgeKey::new(&a, &b).to_string(), "(Boston Common, Fenway Park)");
    }

    #[test]
    fn structural_equality() {
        let mut a = RouteGraph::new();
        a.add_route("A", "B", 5.0).unwrap();
        a.add_route("A", "C", 10.5).unwrap();
        a.add_route("C", "B", 50.0).unwrap();

        let mut b = RouteGraph::with_time_units("seconds");
        assert_ne!(a, b);
        b.add_route("C", "B", 50.0).unwrap();
        assert_ne!(a, b);
        b.add_route("A", "C", 10.5).unwrap();
        assert_ne!(a, b);
        b.add_route("A", "B", 5.0).unwrap();
        // Different insertion order and units, same structure.
        assert_eq!(a, b);
    }

    #[test]
    fn equality_treats_infinity_as_equal() {
        let mut a = RouteGraph::new();
        a.add_route("A", "B", f64::INFINITY).unwrap();
        let mut b = RouteGraph::new();
        b.add_route("B", "A", f64::INFINITY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn map_routes_keeps_nodes_units_and_neighbour_order() {
        let mut g = RouteGraph::with_time_units("seconds");
        g.add_route("A", "T", 1.0).unwrap();
        g.add_route("S", "B", 1.0).unwrap();
        g.add_route("S", "A", 1.0).unwrap();
        g.add_location(Location::new("Isolated"));

        let m = g.map_routes(|_, w| Some(w * 2.0)).unwrap();
        let nodes: Vec<&str> = m.nodes().map(Location::name).collect();
        assert_eq!(nodes, ["A", "T", "S", "B", "Isolated"]);
        let s_order: Vec<&str> = m.neighbors("S").unwrap().keys().map(Location::name).collect();
        assert_eq!(s_order, ["B", "A"]);
        assert_eq!(m.duration("S", "A"), Some(2.0));
        assert_eq!(m.time_units(), "seconds");
        assert!(m.is_symmetric());
    }

    #[test]
    fn map_routes_drops_both_directions() {
        let g = super::helpers::triangle();
        let ac = EdgeKey::new(&Location::new("A"), &Location::new("C"));
        let m = g.map_routes(|key, w| (*key != ac).then_some(w)).unwrap();
        assert_eq!(m.node_count(), 3);
        assert_eq!(m.edge_count(), 2);
        assert_eq!(m.duration("A", "C"), None);
        assert_eq!(m.duration("C", "A"), None);
        assert!(m.is_symmetric());
    }

    #[test]
    fn map_routes_rejects_invalid_results() {
        let g = super::helpers::triangle();
        assert!(matches!(
            g.map_routes(|_, _| Some(f64::NAN)),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.map_routes(|_, w| Some(-w)),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn display_summary() {
        let g = super::helpers::triangle();
        assert_eq!(g.to_string(), "RouteGraph of 3 locations and 3 routes");
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use rc_core::Location;

    use super::helpers::{names, pentagon, triangle};
    use crate::{
        reconstruct_path, shortest_paths, shortest_paths_until, DijkstraRouter, GraphError,
        RouteGraph, Router,
    };

    #[test]
    fn triangle_distances_and_path() {
        let sp = shortest_paths(&triangle(), "A").unwrap();
        assert_eq!(sp.distance("A"), Some(0.0));
        assert_eq!(sp.distance("B"), Some(4.0));
        assert_eq!(sp.distance("C"), Some(7.0));
        assert_eq!(names(&sp.path_to("C")), ["A", "B", "C"]);
        assert!(sp.predecessor("A").is_none());
        assert_eq!(sp.predecessor("C").map(Location::name), Some("B"));
    }

    #[test]
    fn blocked_direct_route_is_ignored() {
        let mut g = triangle();
        g.add_route("A", "C", f64::INFINITY).unwrap();
        let sp = shortest_paths(&g, "A").unwrap();
        assert_eq!(sp.distance("C"), Some(7.0));
        assert_eq!(names(&sp.path_to("C")), ["A", "B", "C"]);
    }

    #[test]
    fn pentagon_distances() {
        let sp = shortest_paths(&pentagon(), "0").unwrap();
        let got: Vec<f64> = ["0", "1", "2", "3", "4"]
            .iter()
            .map(|n| sp.distance(n).unwrap())
            .collect();
        assert_eq!(got, [0.0, 4.0, 7.0, 9.0, 10.0]);
        assert_eq!(names(&sp.path_to("3")), ["0", "1", "2", "3"]);
        assert_eq!(names(&sp.path_to("4")), ["0", "1", "4"]);
    }

    #[test]
    fn unknown_source_is_not_found() {
        assert!(matches!(
            shortest_paths(&triangle(), "Z"),
            Err(GraphError::NotFound(_))
        ));
    }

    #[test]
    fn unreachable_destination() {
        let mut g = triangle();
        g.add_route("X", "Y", 1.0).unwrap();
        let sp = shortest_paths(&g, "A").unwrap();
        assert_eq!(sp.distance("X"), Some(f64::INFINITY));
        assert!(!sp.is_reachable("X"));
        assert!(sp.path_to("X").is_empty());
        // Unknown destination: no distance, empty path.
        assert!(sp.distance("Q").is_none());
        assert!(sp.path_to("Q").is_empty());
    }

    #[test]
    fn only_blocked_route_is_unreachable() {
        let mut g = RouteGraph::new();
        g.add_route("A", "B", f64::INFINITY).unwrap();
        let sp = shortest_paths(&g, "A").unwrap();
        assert_eq!(sp.distance("B"), Some(f64::INFINITY));
        assert!(sp.predecessor("B").is_none());
        assert!(sp.path_to("B").is_empty());
    }

    #[test]
    fn path_to_source_is_single_stop() {
        let sp = shortest_paths(&triangle(), "B").unwrap();
        assert_eq!(names(&sp.path_to("B")), ["B"]);
        assert!(sp.route_to("B").is_trivial());
    }

    #[test]
    fn symmetric_distances() {
        let g = pentagon();
        let names: Vec<String> = g.nodes().map(|l| l.name().to_owned()).collect();
        for u in &names {
            let from_u = shortest_paths(&g, u).unwrap();
            for v in &names {
                let from_v = shortest_paths(&g, v).unwrap();
                assert_eq!(from_u.distance(v), from_v.distance(u), "{u} <-> {v}");
            }
        }
    }

    #[test]
    fn path_weight_matches_distance() {
        let g = pentagon();
        let sp = shortest_paths(&g, "0").unwrap();
        for dest in ["0", "1", "2", "3", "4"] {
            let route = sp.route_to(dest);
            assert_eq!(route.stops.first().map(Location::name), Some("0"));
            assert_eq!(route.stops.last().map(Location::name), Some(dest));
            let sum: f64 = route
                .legs()
                .map(|(a, b)| g.duration(a.name(), b.name()).unwrap())
                .sum();
            assert_eq!(sum, route.total_duration);
        }
    }

    #[test]
    fn ties_broken_by_discovery_order() {
        // Two equal routes S→A→T and S→B→T; A is discovered first even
        // though B holds the lower node index.
        let mut g = RouteGraph::new();
        g.add_location(Location::new("B"));
        g.add_route("S", "A", 1.0).unwrap();
        g.add_route("S", "B", 1.0).unwrap();
        g.add_route("A", "T", 1.0).unwrap();
        g.add_route("B", "T", 1.0).unwrap();
        for _ in 0..10 {
            let sp = shortest_paths(&g, "S").unwrap();
            assert_eq!(names(&sp.path_to("T")), ["S", "A", "T"]);
        }
    }

    #[test]
    fn zero_duration_routes() {
        let mut g = RouteGraph::new();
        g.add_route("A", "B", 0.0).unwrap();
        g.add_route("B", "C", 0.0).unwrap();
        let sp = shortest_paths(&g, "A").unwrap();
        assert_eq!(sp.distance("C"), Some(0.0));
        assert_eq!(names(&sp.path_to("C")), ["A", "B", "C"]);
    }

    #[test]
    fn early_stop_agrees_on_settled_nodes() {
        let g = pentagon();
        let full = shortest_paths(&g, "0").unwrap();
        let partial = shortest_paths_until(&g, "0", "2").unwrap();
        // 0, 1 and 2 are settled before the stop.
        for n in ["0", "1", "2"] {
            assert_eq!(partial.distance(n), full.distance(n));
            assert_eq!(partial.predecessor(n), full.predecessor(n));
        }
        assert_eq!(partial.path_to("2"), full.path_to("2"));
    }

    #[test]
    fn reconstruct_requires_matching_source() {
        let sp = shortest_paths(&triangle(), "A").unwrap();
        let preds = sp.predecessors();
        assert_eq!(names(&reconstruct_path(preds, "A", "C")), ["A", "B", "C"]);
        assert!(reconstruct_path(preds, "B", "C").is_empty());
        assert!(reconstruct_path(preds, "A", "missing").is_empty());
    }

    #[test]
    fn router_trait_route() {
        let g = pentagon();
        let r = DijkstraRouter.route(&g, "0", "3").unwrap();
        assert_eq!(r.total_duration, 9.0);
        assert!(r.is_reachable());
        assert_eq!(r.legs().count(), 3);

        assert!(matches!(DijkstraRouter.route(&g, "0", "nope"), Err(GraphError::NotFound(_))));
        assert!(matches!(DijkstraRouter.route(&g, "nope", "0"), Err(GraphError::NotFound(_))));
    }

    #[test]
    fn router_unreachable_route() {
        let mut g = triangle();
        g.add_location(Location::new("D"));
        let r = DijkstraRouter.route(&g, "A", "D").unwrap();
        assert!(!r.is_reachable());
        assert!(r.stops.is_empty());
        assert_eq!(r.total_duration, f64::INFINITY);
    }
}

// ── CSV loaders ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{read_locations, read_locations_reader, read_routes, read_routes_reader, GraphError};

    const LOCATIONS: &[u8] = b"\
name,latitude,longitude\n\
Fenway Park,42.346268,-71.095764\n\
Symphony Hall,42.342025,-71.085784\n\
Boston Common,42.355083,-71.06588\n\
";

    const ROUTES: &[u8] = b"\
start,end,duration\n\
Fenway Park,Symphony Hall,6\n\
Symphony Hall,Boston Common,9.5\n\
Boston Common,Faneuil Hall,7\n\
Fenway Park,Symphony Hall,5\n\
";

    #[test]
    fn reads_locations() {
        let locs = read_locations_reader(Cursor::new(LOCATIONS)).unwrap();
        assert_eq!(locs.len(), 3);
        assert_eq!(locs[0], "Fenway Park");
        assert_eq!(locs[0].latitude(), Some(42.346268));
        assert_eq!(locs[2].longitude(), Some(-71.06588));
    }

    #[test]
    fn reads_routes_with_coordinates() {
        let locs = read_locations_reader(Cursor::new(LOCATIONS)).unwrap();
        let g = read_routes_reader(Cursor::new(ROUTES), &locs).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        // Duplicate row overwrote the first.
        assert_eq!(g.duration("Symphony Hall", "Fenway Park"), Some(5.0));
        assert!(g.location("Fenway Park").unwrap().coordinates().is_some());
        // Not in the locations table.
        assert!(g.location("Faneuil Hall").unwrap().coordinates().is_none());
    }

    #[test]
    fn negative_duration_fails() {
        let bad = b"start,end,duration\nA,B,-3\n";
        let result = read_routes_reader(Cursor::new(bad.as_slice()), &[]);
        assert!(matches!(result, Err(GraphError::InvalidWeight { .. })));
    }

    #[test]
    fn malformed_row_fails() {
        let bad = b"start,end,duration\nA,B,soon\n";
        let result = read_routes_reader(Cursor::new(bad.as_slice()), &[]);
        assert!(matches!(result, Err(GraphError::Parse(_))));
    }

    #[test]
    fn reads_from_files() {
        let mut loc_file = tempfile::NamedTempFile::new().unwrap();
        loc_file.write_all(LOCATIONS).unwrap();
        let mut route_file = tempfile::NamedTempFile::new().unwrap();
        route_file.write_all(ROUTES).unwrap();

        let locs = read_locations(loc_file.path()).unwrap();
        let g = read_routes(route_file.path(), &locs).unwrap();
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_routes(std::path::Path::new("/nonexistent/routes.csv"), &[]);
        assert!(matches!(result, Err(GraphError::Io(_))));
    }
}
