use std::fmt::Debug;
use log::warn;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::{Error, Result};

/// Settled state of a single-source shortest path run
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex, infinity when unreachable
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Vertices in the order they were settled
    pub settled: Vec<usize>,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The settled shortest distance to `vertex`.
    /// Unreachable and unknown vertices report positive infinity.
    pub fn distance(&self, vertex: usize) -> W {
        self.distances.get(vertex).copied().unwrap_or_else(W::infinity)
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_finite()
    }

    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Vertices in the order they were extracted from the heap
    pub fn settled_order(&self) -> &[usize] {
        &self.settled
    }

    /// Walks predecessor links back from `target` and returns the path in
    /// source-to-target order.
    ///
    /// A vertex without a predecessor yields `[target]`. This holds for the
    /// source and for unreached vertices alike; use
    /// [`path_if_reachable`](Self::path_if_reachable) to tell them apart.
    pub fn get_path(&self, target: usize) -> Result<Vec<usize>> {
        if target >= self.predecessors.len() {
            return Err(Error::InvalidVertex(target));
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(pred) = self.predecessor(current) {
            // A predecessor chain visits each vertex once
            if path.len() > self.predecessors.len() {
                warn!("Cycle in predecessor links while reconstructing path to {}", target);
                return Err(Error::PredecessorCycle(target));
            }
            path.push(pred);
            current = pred;
        }

        path.reverse();
        Ok(path)
    }

    /// Like [`get_path`](Self::get_path) but returns None for vertices the run never reached
    pub fn path_if_reachable(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        self.get_path(target).ok()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Vec<usize>> {
        result.get_path(target)
    }
}
