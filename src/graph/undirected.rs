use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::Edge;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// An undirected graph stored as a node count and an edge list
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Edges in insertion order; an edge's id is its index
    edges: Vec<Edge<W>>,
}

impl<W> Default for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            vertex_count: 0,
            edges: Vec::new(),
        }
    }

    /// Creates a graph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        UndirectedGraph {
            vertex_count: vertices,
            edges: Vec::new(),
        }
    }

    /// Creates a graph from a vertex count and an edge list
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges.iter().all(|edge| edge.weight >= W::zero())
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn edge(&self, id: usize) -> Option<Edge<W>> {
        self.edges.get(id).copied()
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.vertex_count;
        self.vertex_count += 1;
        new_id
    }

    /// Weights are stored as given; sign checks happen when an algorithm runs
    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> Result<usize> {
        if !self.has_vertex(a) || !self.has_vertex(b) {
            return Err(Error::InvalidEdge(a, b));
        }
        self.edges.push(Edge::new(a, b, weight));
        Ok(self.edges.len() - 1)
    }
}
