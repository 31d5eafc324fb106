use crate::graph::{Edge, MutableGraph, UndirectedGraph};
use rand::prelude::*;

/// Generates a graph with `n` vertices and `m` random edges.
/// Weights are drawn uniformly from `[1, 100)`; self-loops and parallel edges may occur.
pub fn random_graph<R: Rng>(n: usize, m: usize, rng: &mut R) -> UndirectedGraph<f64> {
    let mut graph = UndirectedGraph::with_vertices(n);
    if n == 0 {
        return graph;
    }

    for _ in 0..m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let weight = rng.gen_range(1.0..100.0);
        // Both endpoints come from 0..n, so insertion cannot fail
        let _ = graph.add_edge(a, b, weight);
    }

    graph
}

/// Generates `n` points in the unit square and `m` random edges between them,
/// each weighted by the straight-line distance of its endpoints.
///
/// Returns the graph together with the point coordinates.
pub fn random_geometric<R: Rng>(
    n: usize,
    m: usize,
    rng: &mut R,
) -> (UndirectedGraph<f64>, Vec<(f64, f64)>) {
    let points: Vec<(f64, f64)> = (0..n).map(|_| (rng.gen::<f64>(), rng.gen::<f64>())).collect();
    let mut graph = UndirectedGraph::with_vertices(n);
    if n == 0 {
        return (graph, points);
    }

    for _ in 0..m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let edge = Edge::euclidean(a, b, points[a], points[b]);
        let _ = graph.add_edge(edge.a, edge.b, edge.weight);
    }

    (graph, points)
}

/// Generates a `width` x `height` grid with 4-neighbour edges of unit weight
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<f64> {
    let mut graph = UndirectedGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                let _ = graph.add_edge(vertex, vertex + 1, 1.0);
            }
            if y + 1 < height {
                let _ = graph.add_edge(vertex, vertex + width, 1.0);
            }
        }
    }

    graph
}
