use log::warn;

use crate::graph::{UndirectedGraph, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex id; `None` if unreached (index 0 is unused)
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Snapshots distances and predecessors of every vertex in the graph
    pub fn from_graph(graph: &UndirectedGraph<W>) -> Self {
        let mut distances = vec![None];
        let mut predecessors = vec![None];
        for id in 1..=crate::graph::Graph::vertex_count(graph) {
            let vertex = graph.vertex(id).ok();
            distances.push(vertex.and_then(|v| v.reached_distance()));
            predecessors.push(vertex.and_then(|v| v.previous));
        }
        ShortestPathResult {
            distances,
            predecessors,
            source: graph.source(),
        }
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Result of a spanning tree algorithm execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanningTreeResult<W>
where
    W: Weight,
{
    /// Sum of the selected edge weights
    pub total_weight: W,

    /// Number of edges flagged as spanning
    pub edge_count: usize,
}

impl<W> SpanningTreeResult<W>
where
    W: Weight,
{
    /// Checks that another strategy found a spanning forest of the same size and weight
    pub fn agrees_with(&self, other: &SpanningTreeResult<W>) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(Error::AlgorithmError(format!(
                "spanning tree strategies disagree: {} edges weighing {} vs {} edges weighing {}",
                self.edge_count, self.total_weight, other.edge_count, other.total_weight
            )))
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W>
where
    W: Weight,
{
    /// Compute shortest paths from the graph's source to all other vertices
    fn compute_shortest_paths(&self, graph: &mut UndirectedGraph<W>) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.predecessors.len() || result.distances[target].is_none() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != result.source {
            current = result.predecessors[current]?;
            path.push(current);

            if path.len() > result.predecessors.len() {
                warn!("predecessor chain from {} does not reach the source", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for minimum spanning tree algorithms
pub trait SpanningTreeAlgorithm<W>
where
    W: Weight,
{
    /// Flag the spanning edges of the graph and return the tree's total weight
    fn compute_spanning_tree(&self, graph: &mut UndirectedGraph<W>) -> Result<SpanningTreeResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
