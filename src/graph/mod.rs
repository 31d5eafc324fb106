pub mod edge;
pub mod generators;
pub mod traits;
pub mod undirected;

pub use edge::Edge;
pub use traits::{Graph, MutableGraph};
pub use undirected::UndirectedGraph;
