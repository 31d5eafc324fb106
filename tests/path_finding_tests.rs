use heap_dijkstra::algorithm::dijkstra::Dijkstra;
use heap_dijkstra::algorithm::traits::ShortestPathAlgorithm;
use heap_dijkstra::graph::generators::{generate_grid, random_geometric, random_graph};
use heap_dijkstra::graph::{Edge, Graph, MutableGraph, UndirectedGraph};
use heap_dijkstra::{Error, ShortestPathResult};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type UndirectedDijkstra = dyn ShortestPathAlgorithm<f64, UndirectedGraph<f64>>;

// Six points a..f: a path a-b-c-d-e with a branch c-f
fn create_branch_graph() -> UndirectedGraph<f64> {
    let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 1.0), (4.0, 2.0), (3.0, -1.0)];
    let mut graph = UndirectedGraph::with_vertices(points.len());
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (2, 5)] {
        let edge = Edge::euclidean(a, b, points[a], points[b]);
        graph.add_edge(edge.a, edge.b, edge.weight).unwrap();
    }
    graph
}

// Minimum weight over every simple path from source, by depth-first enumeration
fn exhaustive_distances(graph: &UndirectedGraph<f64>, source: usize) -> Vec<f64> {
    fn visit(
        graph: &UndirectedGraph<f64>,
        vertex: usize,
        dist: f64,
        on_path: &mut Vec<bool>,
        best: &mut Vec<f64>,
    ) {
        if dist < best[vertex] {
            best[vertex] = dist;
        }
        on_path[vertex] = true;
        for edge in graph.edges() {
            if let Some(next) = edge.other(vertex) {
                if !on_path[next] {
                    visit(graph, next, dist + edge.weight, on_path, best);
                }
            }
        }
        on_path[vertex] = false;
    }

    let n = graph.vertex_count();
    let mut best = vec![f64::INFINITY; n];
    let mut on_path = vec![false; n];
    visit(graph, source, 0.0, &mut on_path, &mut best);
    best
}

#[test]
fn test_branch_paths() {
    let graph = create_branch_graph();
    let result = Dijkstra::build(&graph, 0).unwrap();

    assert_eq!(result.get_path(4).unwrap(), vec![0, 1, 2, 3, 4]);
    assert_eq!(result.get_path(5).unwrap(), vec![0, 1, 2, 5]);
    assert_eq!(result.get_path(0).unwrap(), vec![0]);

    let expected_e = 2.0 + 2.0 * 2.0_f64.sqrt();
    assert!((result.distance(4) - expected_e).abs() < 1e-9);
}

#[test]
fn test_path_reconstruction_is_idempotent() {
    let graph = create_branch_graph();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 2).unwrap();

    for target in 0..graph.vertex_count() {
        let algorithm: &UndirectedDijkstra = &dijkstra;
        let first = algorithm.get_path(&result, target).unwrap();
        let second = algorithm.get_path(&result, target).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0], 2, "Path should start at source");
        assert_eq!(*first.last().unwrap(), target, "Path should end at target");
    }
}

#[test]
fn test_matches_exhaustive_search() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let n = rng.gen_range(1..7);
        let m = rng.gen_range(0..10);
        let graph = random_graph(n, m, &mut rng);
        let source = rng.gen_range(0..n);

        let result = Dijkstra::new()
            .with_heap_validation(true)
            .compute_shortest_paths(&graph, source)
            .unwrap();
        let expected = exhaustive_distances(&graph, source);

        for v in 0..n {
            if expected[v].is_infinite() {
                assert_eq!(result.distance(v), f64::INFINITY);
                assert!(!result.is_reachable(v));
            } else {
                assert!(
                    (result.distance(v) - expected[v]).abs() < 1e-9,
                    "vertex {}: got {}, expected {}",
                    v,
                    result.distance(v),
                    expected[v]
                );
            }
        }
    }
}

#[test]
fn test_paths_follow_edges_and_sum_to_distance() {
    let mut rng = StdRng::seed_from_u64(99);
    let (graph, _) = random_geometric(300, 900, &mut rng);
    let result = Dijkstra::build(&graph, 0).unwrap();

    for target in 0..graph.vertex_count() {
        let Some(path) = result.path_if_reachable(target) else {
            continue;
        };
        let mut total = 0.0;
        for step in path.windows(2) {
            let weight = graph
                .edges()
                .filter(|e| e.other(step[0]) == Some(step[1]))
                .map(|e| e.weight)
                .fold(f64::INFINITY, f64::min);
            assert!(weight.is_finite(), "Path should only use existing edges");
            total += weight;
        }
        assert!((total - result.distance(target)).abs() < 1e-9);
    }
}

#[test]
fn test_unreachable_vertex() {
    let graph = UndirectedGraph::from_edges(3, vec![(0, 1, 1.0)]).unwrap();
    let result = Dijkstra::build(&graph, 0).unwrap();

    assert_eq!(result.distance(2), f64::INFINITY);
    assert_eq!(result.predecessor(2), None);
    // Same shape as the root's path
    assert_eq!(result.get_path(2).unwrap(), vec![2]);
    assert_eq!(result.path_if_reachable(2), None);
    assert_eq!(result.path_if_reachable(0), Some(vec![0]));
}

#[test]
fn test_invalid_root_and_target() {
    let graph = generate_grid(3, 3);
    assert_eq!(Dijkstra::build(&graph, 9).unwrap_err(), Error::SourceNotFound(9));

    let result = Dijkstra::build(&graph, 0).unwrap();
    assert_eq!(result.get_path(42), Err(Error::InvalidVertex(42)));
    assert_eq!(result.distance(42), f64::INFINITY);
}

#[test]
fn test_predecessor_cycle_is_reported() {
    let result = ShortestPathResult {
        distances: vec![0.0, 1.0, 2.0],
        predecessors: vec![None, Some(2), Some(1)],
        source: 0,
        settled: vec![0, 1, 2],
    };
    assert_eq!(result.get_path(1), Err(Error::PredecessorCycle(1)));
    assert_eq!(result.get_path(0), Ok(vec![0]));
}

#[test]
fn test_heap_validation_through_many_decreases() {
    // Dense weights on a small vertex set force repeated decreases per vertex
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(40, 600, &mut rng);

    let checked = Dijkstra::new()
        .with_heap_validation(true)
        .compute_shortest_paths(&graph, 0)
        .unwrap();
    let plain = Dijkstra::build(&graph, 0).unwrap();

    assert_eq!(checked.distances, plain.distances);
    assert_eq!(checked.predecessors, plain.predecessors);
    assert_eq!(checked.settled_order(), plain.settled_order());
}

#[test]
fn test_weight_validation() {
    let graph = UndirectedGraph::from_edges(2, vec![(0, 1, -1.0)]).unwrap();
    assert_eq!(Dijkstra::build(&graph, 0).unwrap_err(), Error::NegativeWeight(-1.0));

    let nan = UndirectedGraph::from_edges(2, vec![(0, 1, f64::NAN)]).unwrap();
    assert_eq!(Dijkstra::build(&nan, 0).unwrap_err(), Error::InvalidWeight);

    // The check can be handed to the caller
    let result = Dijkstra::new()
        .with_weight_validation(false)
        .compute_shortest_paths(&graph, 0)
        .unwrap();
    assert_eq!(result.distance(1), -1.0);
}

#[test]
fn test_grid_with_ordered_float_weights() {
    let width = 10;
    let mut graph: UndirectedGraph<OrderedFloat<f64>> = UndirectedGraph::with_vertices(width * width);
    for y in 0..width {
        for x in 0..width {
            let v = y * width + x;
            if x + 1 < width {
                graph.add_edge(v, v + 1, OrderedFloat(1.0)).unwrap();
            }
            if y + 1 < width {
                graph.add_edge(v, v + width, OrderedFloat(1.0)).unwrap();
            }
        }
    }

    let result = Dijkstra::build(&graph, 0).unwrap();
    assert_eq!(result.distance(99), OrderedFloat(18.0));
    let path = result.get_path(99).unwrap();
    assert_eq!(path.len(), 19);
    assert_eq!(path[0], 0);
}

#[test]
fn test_zero_weight_edges_and_self_loops() {
    let graph = UndirectedGraph::from_edges(
        4,
        vec![(0, 1, 0.0), (1, 1, 5.0), (1, 2, 0.0), (2, 3, 3.0), (0, 3, 3.0)],
    )
    .unwrap();
    let result = Dijkstra::build(&graph, 0).unwrap();

    assert_eq!(result.distance(2), 0.0);
    assert_eq!(result.distance(3), 3.0);
    assert_eq!(result.get_path(2).unwrap(), vec![0, 1, 2]);
    assert_eq!(result.settled_order().len(), 4);
}
