pub mod traits;
pub mod dijkstra;
pub mod prim;
pub mod kruskal;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::graph::{UndirectedGraph, Weight};
use crate::{Error, Result};

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, SpanningTreeAlgorithm, SpanningTreeResult};

/// Selects which spanning tree algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanningStrategy {
    /// Prim-style growth through the shared heap
    #[default]
    Frontier,
    /// Kruskal-style scan of the weight-ordered edges
    UnionFind,
}

impl SpanningStrategy {
    /// Runs the selected algorithm on the graph
    pub fn run<W: Weight>(&self, graph: &mut UndirectedGraph<W>) -> Result<SpanningTreeResult<W>> {
        match self {
            SpanningStrategy::Frontier => prim::FrontierSpanningTree::new().compute_spanning_tree(graph),
            SpanningStrategy::UnionFind => kruskal::UnionFindSpanningTree::new().compute_spanning_tree(graph),
        }
    }
}

impl FromStr for SpanningStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "frontier" | "prim" => Ok(SpanningStrategy::Frontier),
            "union-find" | "unionfind" | "kruskal" => Ok(SpanningStrategy::UnionFind),
            other => Err(Error::Config(format!("unknown spanning strategy '{}'", other))),
        }
    }
}

impl fmt::Display for SpanningStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanningStrategy::Frontier => write!(f, "frontier"),
            SpanningStrategy::UnionFind => write!(f, "union-find"),
        }
    }
}
