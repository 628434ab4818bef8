use egress::algo::{distances_from, shortest_route, RouteOutcome};
use egress::config::QueryConfig;
use egress::graph::{GraphError, GraphStore, Vertex};
use egress::{Distance, PathError, Reconstruction};

fn strategies() -> Vec<QueryConfig> {
    [Reconstruction::Predecessor, Reconstruction::DistanceBacktrace]
        .into_iter()
        .map(|strategy| QueryConfig {
            strategy,
            ..QueryConfig::default()
        })
        .collect()
}

#[test]
fn test_line_shortest_path() {
    // A(0) - B(1) - C(2), weights 10 and 5
    let mut store = GraphStore::with_capacity(3, 2);
    let a = store.add_vertex(Vertex::new("A", 0, 0)).unwrap();
    let b = store.add_vertex(Vertex::new("B", 10, 0)).unwrap();
    let c = store.add_vertex(Vertex::new("C", 20, 0)).unwrap();
    store.add_weighted_edge(a, b, 10).unwrap();
    store.add_weighted_edge(b, c, 5).unwrap();

    for config in strategies() {
        let outcome = shortest_route(&store, a, c, &config).unwrap();
        let route = outcome.route().unwrap();
        assert_eq!(route.distance, 15);
        assert_eq!(route.path, vec![a, b, c]);
        assert_eq!(route.label, "Begin->A->B->C");
    }
}

#[test]
fn test_disconnected_vertices_unreachable() {
    let mut store = GraphStore::with_capacity(2, 1);
    let x = store.add_vertex(Vertex::unplaced("X")).unwrap();
    let y = store.add_vertex(Vertex::unplaced("Y")).unwrap();

    let table = distances_from(&store, x).unwrap();
    assert_eq!(table.distance(y), Some(Distance::Infinite));

    for config in strategies() {
        let outcome = shortest_route(&store, x, y, &config).unwrap();
        assert_eq!(
            outcome,
            RouteOutcome::Unreachable {
                source: x,
                destination: y
            }
        );
    }
}

#[test]
fn test_source_is_destination() {
    let mut store = GraphStore::with_capacity(2, 1);
    let x = store.add_vertex(Vertex::unplaced("X")).unwrap();
    store.add_vertex(Vertex::unplaced("Y")).unwrap();

    let outcome = shortest_route(&store, x, x, &QueryConfig::default()).unwrap();
    let route = outcome.route().unwrap();
    assert_eq!(route.distance, 0);
    assert_eq!(route.path, vec![x]);
    assert_eq!(route.label, "Begin->X");
}

#[test]
fn test_equivalent_exits_render_first_reached() {
    // Z reaches O for 3 and S for 7; S and O are one exit
    let mut store = GraphStore::with_capacity(3, 3);
    let z = store.add_vertex(Vertex::unplaced("Z")).unwrap();
    let s = store.add_vertex(Vertex::unplaced("S")).unwrap();
    let o = store.add_vertex(Vertex::unplaced("O")).unwrap();
    store.add_weighted_edge(z, s, 7).unwrap();
    store.add_weighted_edge(z, o, 3).unwrap();
    store.add_weighted_edge(s, o, 0).unwrap();

    for mut config in strategies() {
        config.exit_groups = vec![vec!["S".to_string(), "O".to_string()]];

        let to_s = shortest_route(&store, z, s, &config).unwrap();
        let route = to_s.route().unwrap();
        assert_eq!(route.distance, 3);
        assert_eq!(route.path, vec![z, o, s]);
        assert_eq!(route.label, "Begin->Z->O");

        let to_o = shortest_route(&store, z, o, &config).unwrap();
        assert_eq!(to_o.route().unwrap().label, "Begin->Z->O");
    }
}

#[test]
fn test_restriction_reroutes_and_keeps_weight() {
    // Square A-B-D and A-C-D, A-B-D cheaper until B-D is restricted
    let mut store = GraphStore::with_capacity(4, 4);
    for name in ["A", "B", "C", "D"] {
        store.add_vertex(Vertex::unplaced(name)).unwrap();
    }
    store.add_weighted_edge(0, 1, 1).unwrap();
    store.add_weighted_edge(1, 3, 1).unwrap();
    store.add_weighted_edge(0, 2, 4).unwrap();
    store.add_weighted_edge(2, 3, 4).unwrap();

    let config = QueryConfig::default();
    let before = shortest_route(&store, 0, 3, &config).unwrap();
    assert_eq!(before.route().unwrap().path, vec![0, 1, 3]);

    store.restrict(1, 3).unwrap();
    for config in strategies() {
        let after = shortest_route(&store, 0, 3, &config).unwrap();
        let route = after.route().unwrap();
        assert_eq!(route.path, vec![0, 2, 3]);
        assert_eq!(route.distance, 8);
    }
    assert_eq!(store.weight(1, 3).unwrap(), 1);
}

#[test]
fn test_repeated_queries_identical() {
    let mut store = GraphStore::with_capacity(5, 6);
    for name in ["A", "B", "C", "D", "E"] {
        store.add_vertex(Vertex::unplaced(name)).unwrap();
    }
    store.add_weighted_edge(0, 1, 2).unwrap();
    store.add_weighted_edge(1, 2, 2).unwrap();
    store.add_weighted_edge(0, 3, 3).unwrap();
    store.add_weighted_edge(3, 2, 1).unwrap();
    store.add_weighted_edge(2, 4, 6).unwrap();

    for config in strategies() {
        let first = shortest_route(&store, 0, 4, &config).unwrap();
        for _ in 0..5 {
            assert_eq!(shortest_route(&store, 0, 4, &config).unwrap(), first);
        }
    }
}

#[test]
fn test_out_of_range_is_error() {
    let mut store = GraphStore::with_capacity(4, 1);
    store.add_vertex(Vertex::unplaced("A")).unwrap();

    assert!(shortest_route(&store, 0, 1, &QueryConfig::default()).is_err());
    assert!(shortest_route(&store, 3, 0, &QueryConfig::default()).is_err());
    assert!(distances_from(&store, 1).is_err());
}

#[test]
fn test_distance_beyond_weight_range_is_error() {
    let mut store = GraphStore::with_capacity(3, 2);
    for name in ["A", "B", "C"] {
        store.add_vertex(Vertex::unplaced(name)).unwrap();
    }
    store.add_weighted_edge(0, 1, u64::MAX).unwrap();
    store.add_weighted_edge(1, 2, 1).unwrap();

    for config in strategies() {
        assert_eq!(
            shortest_route(&store, 0, 2, &config).unwrap_err(),
            GraphError::Path(PathError::WeightOverflow { at: 2 })
        );
    }
}
