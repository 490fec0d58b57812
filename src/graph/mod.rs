pub mod traits;
pub mod vertex;
pub mod undirected;
pub mod generators;

pub use traits::{infinity, Graph, Weight};
pub use undirected::UndirectedGraph;
pub use vertex::{Edge, EdgeId, Vertex, VertexState};
