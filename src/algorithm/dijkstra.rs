use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::{Error, Result};

/// Dijkstra's algorithm driven by an [`IndexedMinHeap`].
///
/// Every vertex is loaded into the heap up front; relaxations lower the
/// priority of the neighbour in place instead of pushing duplicates.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Reject negative and NaN weights before running
    validate_weights: bool,
    /// Run the O(n) heap validator after every heap mutation
    validate_heap: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            validate_weights: true,
            validate_heap: false,
        }
    }

    /// Enable or disable the non-negative weight check. When disabled,
    /// non-negative weights are the caller's obligation.
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    /// Enable or disable heap validation during the run
    pub fn with_heap_validation(mut self, enabled: bool) -> Self {
        self.validate_heap = enabled;
        self
    }

    /// Runs the default engine from `root` to completion
    pub fn build<W, G>(graph: &G, root: usize) -> Result<ShortestPathResult<W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        Self::new().compute_shortest_paths(graph, root)
    }

    fn check_weights<W, G>(&self, graph: &G) -> Result<()>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        for edge in graph.edges() {
            if edge.weight.is_nan() {
                return Err(Error::InvalidWeight);
            }
            if edge.weight < W::zero() {
                return Err(Error::NegativeWeight(edge.weight.to_f64().unwrap_or(f64::NAN)));
            }
        }
        Ok(())
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }
        if self.validate_weights {
            self.check_weights(graph)?;
        }

        debug!(
            "Dijkstra from {} over {} vertices and {} edges",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        Run::initialize(graph, source, self.validate_heap)?.execute()
    }
}

/// Vertex-indexed neighbour lists, each edge stored once per endpoint
#[derive(Debug)]
struct Adjacency<W> {
    /// `neighbors[offsets[v]..offsets[v + 1]]` are the neighbours of `v`
    offsets: Vec<usize>,
    neighbors: Vec<(usize, W)>,
}

impl<W> Adjacency<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn build<G: Graph<W>>(graph: &G) -> Result<Self> {
        let n = graph.vertex_count();
        let mut offsets = vec![0usize; n + 1];
        let mut self_loops = 0usize;

        for edge in graph.edges() {
            if !graph.has_vertex(edge.a) || !graph.has_vertex(edge.b) {
                return Err(Error::InvalidEdge(edge.a, edge.b));
            }
            if edge.is_self_loop() {
                self_loops += 1;
            }
            offsets[edge.a + 1] += 1;
            offsets[edge.b + 1] += 1;
        }
        if self_loops > 0 {
            warn!("Graph contains {} self-loops, they never shorten a path", self_loops);
        }

        for v in 0..n {
            offsets[v + 1] += offsets[v];
        }

        let mut cursor = offsets.clone();
        let mut neighbors = vec![(0usize, W::zero()); offsets[n]];
        for edge in graph.edges() {
            neighbors[cursor[edge.a]] = (edge.b, edge.weight);
            cursor[edge.a] += 1;
            neighbors[cursor[edge.b]] = (edge.a, edge.weight);
            cursor[edge.b] += 1;
        }

        Ok(Adjacency { offsets, neighbors })
    }

    fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        &self.neighbors[self.offsets[vertex]..self.offsets[vertex + 1]]
    }
}

/// One run of the algorithm from a single root. Consumed by `execute`.
struct Run<W>
where
    W: Float + Zero + Debug + Copy,
{
    source: usize,
    adjacency: Adjacency<W>,
    heap: IndexedMinHeap<W>,
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    visited: Vec<bool>,
    settled: Vec<usize>,
    validate_heap: bool,
}

impl<W> Run<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds the adjacency, seeds distances and loads every vertex into the heap
    fn initialize<G: Graph<W>>(graph: &G, source: usize, validate_heap: bool) -> Result<Self> {
        let n = graph.vertex_count();
        let adjacency = Adjacency::build(graph)?;

        let mut heap = IndexedMinHeap::with_capacity(n);
        for v in 0..n {
            let dist = if v == source { W::zero() } else { W::infinity() };
            heap.insert(v, dist)?;
            if validate_heap {
                heap.validate()?;
            }
        }

        Ok(Run {
            source,
            adjacency,
            heap,
            distances: vec![W::infinity(); n],
            predecessors: vec![None; n],
            visited: vec![false; n],
            settled: Vec::with_capacity(n),
            validate_heap,
        })
    }

    fn check_heap(&self) -> Result<()> {
        if self.validate_heap {
            self.heap.validate()?;
        }
        Ok(())
    }

    /// Drains the heap, relaxing the neighbours of every extracted vertex
    fn execute(mut self) -> Result<ShortestPathResult<W>> {
        let mut decreases = 0usize;

        while !self.heap.is_empty() {
            let (curr, dist_curr) = self.heap.extract_min()?;
            self.check_heap()?;
            self.visited[curr] = true;
            self.distances[curr] = dist_curr;
            self.settled.push(curr);

            for &(other, weight) in self.adjacency.neighbors(curr) {
                if self.visited[other] {
                    continue;
                }

                // Unvisited vertices are still in the heap
                let current = self.heap.priority(other).ok_or(Error::NodeNotInHeap(other))?;
                let candidate = dist_curr + weight;
                if candidate < current {
                    trace!("relax {} -> {}: {:?} -> {:?}", curr, other, current, candidate);
                    self.predecessors[other] = Some(curr);
                    self.heap.decrease_priority(other, candidate)?;
                    self.check_heap()?;
                    decreases += 1;
                }
            }
        }

        let reachable = self.distances.iter().filter(|d| d.is_finite()).count();
        debug!(
            "Dijkstra from {} settled {} vertices ({} reachable) with {} decreases",
            self.source,
            self.settled.len(),
            reachable,
            decreases
        );

        Ok(ShortestPathResult {
            distances: self.distances,
            predecessors: self.predecessors,
            source: self.source,
            settled: self.settled,
        })
    }
}
