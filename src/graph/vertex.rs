use crate::graph::traits::{infinity, Weight};

/// Index of an edge inside the graph's edge arena
pub type EdgeId = usize;

/// Lifecycle of a vertex across a heap-driven pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexState {
    /// No edge has referenced the vertex yet; it is not in the heap
    Undiscovered,
    /// Resident in the heap with the sentinel distance
    Unreached,
    /// Resident in the heap with a finite tentative distance
    Frontier,
    /// Removed from the heap; distance and predecessor are final
    Known,
}

/// A vertex of the graph together with the mutable per-pass fields
#[derive(Debug, Clone)]
pub struct Vertex<W>
where
    W: Weight,
{
    /// Vertex id in `1..=vertex_count`
    pub id: usize,
    /// Best known key: path cost for shortest paths, connecting edge weight for spanning trees
    pub distance: W,
    /// Predecessor on the current best path or tree
    pub previous: Option<usize>,
    /// Edge through which `previous` last lowered `distance`
    pub admitted_by: Option<EdgeId>,
    /// Current slot in the heap's backing array
    pub heap_index: usize,
    pub state: VertexState,
}

impl<W> Vertex<W>
where
    W: Weight,
{
    /// Creates a vertex that has not been referenced by any edge
    pub fn new(id: usize) -> Self {
        Vertex {
            id,
            distance: infinity(),
            previous: None,
            admitted_by: None,
            heap_index: 0,
            state: VertexState::Undiscovered,
        }
    }

    /// Creates the source vertex, which starts on the frontier with distance zero
    pub fn source(id: usize) -> Self {
        Vertex {
            distance: W::zero(),
            state: VertexState::Frontier,
            ..Vertex::new(id)
        }
    }

    pub fn is_known(&self) -> bool {
        self.state == VertexState::Known
    }

    pub fn is_discovered(&self) -> bool {
        self.state != VertexState::Undiscovered
    }

    /// Returns the distance, or `None` while it is still the sentinel
    pub fn reached_distance(&self) -> Option<W> {
        if self.distance == infinity() {
            None
        } else {
            Some(self.distance)
        }
    }
}

/// An undirected weighted edge stored in the graph's edge arena
#[derive(Debug, Clone)]
pub struct Edge<W>
where
    W: Weight,
{
    left: usize,
    right: usize,
    weight: W,
    /// Set by a spanning tree pass, cleared once reported
    pub spanning: bool,
    /// Next edge in the graph-wide ascending weight order
    pub(crate) next_by_weight: Option<EdgeId>,
}

impl<W> Edge<W>
where
    W: Weight,
{
    pub fn new(left: usize, right: usize, weight: W) -> Self {
        Edge {
            left,
            right,
            weight,
            spanning: false,
            next_by_weight: None,
        }
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.left, self.right)
    }

    /// Returns the endpoint opposite to `vertex`
    pub fn neighbor(&self, vertex: usize) -> usize {
        if self.right == vertex {
            self.left
        } else {
            self.right
        }
    }
}
