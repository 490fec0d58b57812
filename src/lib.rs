//! Span Paths - shortest paths and minimum spanning trees over weighted undirected graphs
//!
//! The graph keeps its vertices and edges in flat arenas addressed by id. A single
//! indexed binary min-heap is shared by Dijkstra's algorithm and the frontier
//! (Prim-style) spanning tree; the union-find (Kruskal-style) spanning tree walks
//! a weight-ordered edge list instead and never touches the heap.
//!
//! A typical run builds the graph, computes shortest paths, resets the vertex
//! state and then computes a spanning tree:
//!
//! ```
//! use span_paths::UndirectedGraph;
//!
//! let mut graph: UndirectedGraph<u32> = UndirectedGraph::new(3, 1).unwrap();
//! graph.add_edge(1, 2, 4).unwrap();
//! graph.add_edge(2, 3, 1).unwrap();
//! graph.add_edge(1, 3, 2).unwrap();
//!
//! let paths = graph.run_shortest_paths().unwrap();
//! assert_eq!(paths.distances[2], Some(3));
//!
//! graph.reset_state();
//! let tree = graph.run_spanning_tree_by_frontier().unwrap();
//! assert_eq!(tree.total_weight, 3);
//! ```

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod input;
pub mod report;

pub use algorithm::{
    dijkstra::Dijkstra, kruskal::UnionFindSpanningTree, prim::FrontierSpanningTree,
    ShortestPathAlgorithm, ShortestPathResult, SpanningStrategy, SpanningTreeAlgorithm,
    SpanningTreeResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;
pub use graph::Weight;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Graph must contain at least one vertex")]
    EmptyGraph,

    #[error("Source vertex {0} is outside the graph")]
    SourceNotFound(usize),

    #[error("Vertex {0} admitted to the heap while not unreached")]
    HeapPrecondition(usize),

    #[error("Union-find must cover at least one element")]
    EmptyUnionFind,

    #[error("Negative edge weight: {0}")]
    NegativeWeight(i64),

    #[error("Edge weight {0} does not fit the weight type")]
    WeightOverflow(u64),

    #[error("Heap is exhausted; reset the vertex state before running another pass")]
    StateNotReset,

    #[error("Edges cannot be added once a pass has run; reset the vertex state first")]
    GraphInUse,

    #[error("Distance to vertex {0} does not fit the weight type")]
    DistanceOverflow(usize),

    #[error("Spanning tree weight does not fit the weight type")]
    TotalWeightOverflow,

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
