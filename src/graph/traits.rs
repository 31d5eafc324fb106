use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Edge;
use crate::Result;

/// Trait representing a fixed weighted graph topology.
///
/// Vertices are the dense ids `0..vertex_count()`. Edges are identified by
/// their position in the edge list and are traversable in both directions.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every edge in id order
    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Returns the edge with the given id
    fn edge(&self, id: usize) -> Option<Edge<W>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Trait for building a graph before it is handed to an algorithm
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds an undirected edge between two existing vertices and returns its ID
    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> Result<usize>;
}
