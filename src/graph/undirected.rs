use log::{debug, trace};

use crate::algorithm::{
    dijkstra::Dijkstra, kruskal::UnionFindSpanningTree, prim::FrontierSpanningTree,
    ShortestPathAlgorithm, ShortestPathResult, SpanningTreeAlgorithm, SpanningTreeResult,
};
use crate::data_structures::IndexedMinHeap;
use crate::graph::traits::{infinity, Graph, Weight};
use crate::graph::vertex::{Edge, EdgeId, Vertex, VertexState};
use crate::{Error, Result};

/// An undirected weighted graph over vertex ids `1..=vertex_count`.
///
/// Vertices and edges live in flat arenas. Each vertex's adjacency is a list of edge
/// ids sorted by neighbor id, and all edges are additionally threaded into one list
/// sorted by ascending weight. The graph also owns the heap shared by the
/// heap-driven algorithms; vertices enter it the first time an edge mentions them.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Weight,
{
    /// Vertex arena indexed by id; slot 0 is a placeholder
    vertices: Vec<Vertex<W>>,

    /// Edge arena indexed by `EdgeId`
    edges: Vec<Edge<W>>,

    /// Incident edges of each vertex, sorted by neighbor id
    adjacency: Vec<Vec<EdgeId>>,

    /// Lightest edge; the rest follow through `Edge::next_by_weight`
    weight_head: Option<EdgeId>,

    heap: IndexedMinHeap,

    source: usize,
}

impl<W> UndirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with room for `vertex_count` vertices, holding only the source
    pub fn new(vertex_count: usize, source: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::EmptyGraph);
        }
        if source == 0 || source > vertex_count {
            return Err(Error::SourceNotFound(source));
        }

        let mut vertices: Vec<Vertex<W>> = (0..=vertex_count).map(Vertex::new).collect();
        vertices[source] = Vertex::source(source);
        let heap = IndexedMinHeap::new(vertex_count, &mut vertices[source]);

        Ok(UndirectedGraph {
            vertices,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count + 1],
            weight_head: None,
            heap,
            source,
        })
    }

    fn check_vertex(&self, id: usize) -> Result<()> {
        if self.has_vertex(id) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(id))
        }
    }

    /// Adds an undirected edge and returns its id.
    ///
    /// Endpoints seen for the first time are admitted to the heap. Parallel edges are
    /// kept as separate edges. The sentinel weight is rejected, and so is any edge
    /// added after a heap-driven pass until `reset_state` runs.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<EdgeId> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight == infinity() {
            return Err(Error::WeightOverflow(weight.to_u64().unwrap_or(u64::MAX)));
        }
        if self.heap.len() != self.heap.resident_count() {
            return Err(Error::GraphInUse);
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));

        self.discover(to)?;
        self.discover(from)?;

        self.insert_adjacent(to, id);
        if from != to {
            self.insert_adjacent(from, id);
        }
        self.insert_by_weight(id);

        trace!("added edge {} ({} - {}, weight {})", id, from, to, weight);
        Ok(id)
    }

    fn discover(&mut self, id: usize) -> Result<()> {
        if self.vertices[id].state == VertexState::Undiscovered {
            self.vertices[id].state = VertexState::Unreached;
            self.heap.insert(&mut self.vertices, id)?;
        }
        Ok(())
    }

    /// Places the edge before any existing edge to the same or a larger neighbor id
    fn insert_adjacent(&mut self, vertex: usize, edge: EdgeId) {
        let edges = &self.edges;
        let neighbor = edges[edge].neighbor(vertex);
        let list = &mut self.adjacency[vertex];
        let position = list.partition_point(|&e| edges[e].neighbor(vertex) < neighbor);
        list.insert(position, edge);
    }

    /// Places the edge before the first edge of the same or a larger weight
    fn insert_by_weight(&mut self, edge: EdgeId) {
        let weight = self.edges[edge].weight();

        let head = match self.weight_head {
            Some(head) if self.edges[head].weight() < weight => head,
            head => {
                self.edges[edge].next_by_weight = head;
                self.weight_head = Some(edge);
                return;
            }
        };

        let mut current = head;
        while let Some(next) = self.edges[current].next_by_weight {
            if self.edges[next].weight() >= weight {
                break;
            }
            current = next;
        }
        self.edges[edge].next_by_weight = self.edges[current].next_by_weight;
        self.edges[current].next_by_weight = Some(edge);
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn heap(&self) -> &IndexedMinHeap {
        &self.heap
    }

    pub fn vertex(&self, id: usize) -> Result<&Vertex<W>> {
        self.check_vertex(id)?;
        Ok(&self.vertices[id])
    }

    /// Returns the whole vertex arena, indexed by id (slot 0 is a placeholder)
    pub fn vertices(&self) -> &[Vertex<W>] {
        &self.vertices
    }

    /// Iterates over the vertices referenced by at least one edge (and the source), by id
    pub fn discovered_vertices(&self) -> impl Iterator<Item = &Vertex<W>> + '_ {
        self.vertices[1..].iter().filter(|v| v.is_discovered())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<W>> {
        self.edges.get(id)
    }

    /// Returns the ids of the edges incident to `vertex`, sorted by neighbor id
    pub fn adjacent_edges(&self, vertex: usize) -> Result<&[EdgeId]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Iterates over all edge ids in ascending weight order
    pub fn edges_by_weight(&self) -> WeightOrder<'_, W> {
        WeightOrder {
            edges: &self.edges,
            next: self.weight_head,
        }
    }

    /// Returns the vertex's distance, or `None` while it holds the sentinel
    pub fn distance(&self, id: usize) -> Result<Option<W>> {
        Ok(self.vertex(id)?.reached_distance())
    }

    pub fn predecessor(&self, id: usize) -> Result<Option<usize>> {
        Ok(self.vertex(id)?.previous)
    }

    /// Follows predecessors back to the root and returns the chain root-first
    pub fn path_to(&self, id: usize) -> Result<Vec<usize>> {
        self.check_vertex(id)?;
        let mut path = vec![id];
        let mut current = id;
        while let Some(previous) = self.vertices[current].previous {
            path.push(previous);
            current = previous;
            if path.len() > self.vertices.len() {
                return Err(Error::InvalidVertex(id));
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Renders the predecessor chain ending in `id` as space separated ids, root first
    pub fn describe_path(&self, id: usize) -> Result<String> {
        self.check_vertex(id)?;
        let mut out = String::new();
        self.write_chain(id, &mut out);
        Ok(out)
    }

    fn write_chain(&self, id: usize, out: &mut String) {
        if let Some(previous) = self.vertices[id].previous {
            self.write_chain(previous, out);
            out.push(' ');
        }
        out.push_str(&id.to_string());
    }

    /// Returns every edge flagged as spanning as `(vertex, neighbor)` and clears the flags.
    ///
    /// Vertices are walked by id and their edges by neighbor id; since the flag is
    /// cleared on first sight, an edge is reported from its lower-visited endpoint only.
    pub fn take_spanning_edges(&mut self) -> Vec<(usize, usize)> {
        let mut spanning = Vec::new();
        for vertex in 1..self.vertices.len() {
            for &edge in &self.adjacency[vertex] {
                let edge = &mut self.edges[edge];
                if edge.spanning {
                    spanning.push((vertex, edge.neighbor(vertex)));
                    edge.spanning = false;
                }
            }
        }
        spanning
    }

    /// Restores distances, predecessors and heap so another heap-driven pass can run
    pub fn reset_state(&mut self) {
        self.heap.reset(&mut self.vertices);
        for edge in &mut self.edges {
            edge.spanning = false;
        }
        debug!("reset {} resident vertices", self.heap.len());
    }

    pub(crate) fn begin_heap_pass(&self) -> Result<()> {
        if self.heap.is_empty() {
            Err(Error::StateNotReset)
        } else {
            Ok(())
        }
    }

    /// Returns `(edge, neighbor, weight)` for every edge incident to `vertex`
    pub(crate) fn incident(&self, vertex: usize) -> Vec<(EdgeId, usize, W)> {
        self.adjacency[vertex]
            .iter()
            .map(|&e| (e, self.edges[e].neighbor(vertex), self.edges[e].weight()))
            .collect()
    }

    /// Removes the minimum vertex from the heap and marks it known
    pub(crate) fn settle_min(&mut self) -> Option<usize> {
        let min = self.heap.delete_min(&mut self.vertices)?;
        self.vertices[min].state = VertexState::Known;
        Some(min)
    }

    /// Lowers a frontier vertex's key and repairs the heap around it
    pub(crate) fn lower_key(&mut self, vertex: usize, key: W, previous: usize, via: EdgeId) {
        let v = &mut self.vertices[vertex];
        v.distance = key;
        v.previous = Some(previous);
        v.admitted_by = Some(via);
        v.state = VertexState::Frontier;
        let slot = v.heap_index;
        self.heap.percolate_up(&mut self.vertices, slot);
    }

    pub(crate) fn mark_spanning(&mut self, edge: EdgeId) {
        self.edges[edge].spanning = true;
    }

    /// Runs Dijkstra's algorithm from the source
    pub fn run_shortest_paths(&mut self) -> Result<ShortestPathResult<W>> {
        Dijkstra::new().compute_shortest_paths(self)
    }

    /// Grows a spanning tree from the source through the shared heap
    pub fn run_spanning_tree_by_frontier(&mut self) -> Result<SpanningTreeResult<W>> {
        FrontierSpanningTree::new().compute_spanning_tree(self)
    }

    /// Builds a spanning tree from the weight-ordered edge list with a union-find
    pub fn run_spanning_tree_by_union_find(&mut self) -> Result<SpanningTreeResult<W>> {
        UnionFindSpanningTree::new().compute_spanning_tree(self)
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len() - 1
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(list) if vertex > 0 => Box::new(list.iter().map(move |&e| {
                let edge = &self.edges[e];
                (edge.neighbor(vertex), edge.weight())
            })),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex >= 1 && vertex < self.vertices.len()
    }
}

/// Iterator over edge ids in ascending weight order
#[derive(Debug, Clone)]
pub struct WeightOrder<'a, W>
where
    W: Weight,
{
    edges: &'a [Edge<W>],
    next: Option<EdgeId>,
}

impl<'a, W> Iterator for WeightOrder<'a, W>
where
    W: Weight,
{
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        let current = self.next?;
        self.next = self.edges[current].next_by_weight;
        Some(current)
    }
}
