//! Heap Dijkstra - single-source shortest paths over an indexable binary min-heap
//!
//! The engine runs Dijkstra's algorithm on an undirected graph with
//! non-negative edge weights. Its priority queue is a fixed-capacity binary
//! min-heap that tracks the slot of every node it holds, so any node's
//! priority can be lowered in O(log n) without searching the heap.
//!
//! Overall running time is O((|E| + |V|) log |V|).

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use data_structures::IndexedMinHeap;
/// Re-export main types for convenient use
pub use graph::{Edge, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight is not a number")]
    InvalidWeight,

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Cannot insert into the heap after an extraction")]
    InsertAfterExtraction,

    #[error("Heap is full (capacity {0})")]
    HeapFull(usize),

    #[error("Node {0} was already inserted into the heap")]
    DuplicateNode(usize),

    #[error("Node {node} is outside the heap capacity {capacity}")]
    NodeOutOfRange { node: usize, capacity: usize },

    #[error("Priority for node {0} is not a number")]
    InvalidPriority(usize),

    #[error("Cannot extract from an empty heap")]
    EmptyHeap,

    #[error("New priority {requested} for node {node} is not smaller than {current}")]
    NotImprovingPriority {
        node: usize,
        current: f64,
        requested: f64,
    },

    #[error("Node {0} is not in the heap")]
    NodeNotInHeap(usize),

    #[error("Predecessor links form a cycle on the path to {0}")]
    PredecessorCycle(usize),

    #[error("Heap invariant violated: {0}")]
    HeapInvariant(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
