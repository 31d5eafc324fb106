use std::fmt::Debug;
use num_traits::{Float, Zero};

/// An undirected weighted edge between two vertex ids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub a: usize,
    pub b: usize,
    pub weight: W,
}

impl<W> Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(a: usize, b: usize, weight: W) -> Self {
        Edge { a, b, weight }
    }

    /// Creates an edge weighted by the straight-line distance between two points
    pub fn euclidean(a: usize, b: usize, from: (W, W), to: (W, W)) -> Self {
        let dx = from.0 - to.0;
        let dy = from.1 - to.1;
        Edge::new(a, b, dx.hypot(dy))
    }

    /// Returns the endpoint opposite to `vertex`, or None if `vertex` is not an endpoint
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}
