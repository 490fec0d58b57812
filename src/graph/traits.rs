use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};

/// Edge weight and distance type: any unsigned primitive integer.
///
/// `W::max_value()` is the "infinity" sentinel for vertices that have not been reached.
pub trait Weight: PrimInt + Unsigned + Debug + Display {}

impl<W> Weight for W where W: PrimInt + Unsigned + Debug + Display {}

/// Returns the sentinel distance for an unreached vertex
pub fn infinity<W: Weight>() -> W {
    W::max_value()
}

/// Trait representing a weighted undirected graph with vertex ids `1..=vertex_count`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertex ids the graph was sized for
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over `(neighbor, weight)` pairs, ordered by neighbor id
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex id lies in the graph's range
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).any(|(n, _)| n == b)
    }

    /// Gets the smallest weight among the edges joining two vertices
    fn get_edge_weight(&self, a: usize, b: usize) -> Option<W> {
        self.neighbors(a)
            .filter(|&(n, _)| n == b)
            .map(|(_, w)| w)
            .min()
    }
}
