use log::trace;

use crate::graph::traits::{infinity, Weight};
use crate::graph::vertex::{Vertex, VertexState};
use crate::{Error, Result};

/// A 1-indexed binary min-heap over vertex ids, keyed by each vertex's `distance`.
///
/// The heap does not own the vertices: every operation takes the vertex arena
/// (indexed by id) and keeps `Vertex::heap_index` equal to the vertex's slot, so a
/// decreased key can be repaired with [`IndexedMinHeap::percolate_up`] without searching.
///
/// Removed vertices stay in the backing array past the live region. This is what
/// lets [`IndexedMinHeap::reset`] restore the full heap without rebuilding it.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    /// Vertex ids by slot; slot 0 is unused
    slots: Vec<usize>,
    /// Number of live slots, `1..=len`
    len: usize,
    /// Maximum number of resident vertices
    capacity: usize,
    /// The vertex that owns slot 1 after a reset
    source: usize,
}

impl IndexedMinHeap {
    /// Creates a heap of the given capacity whose only resident is the minimum vertex
    pub fn new<W: Weight>(capacity: usize, min: &mut Vertex<W>) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(0);
        slots.push(min.id);
        min.heap_index = 1;

        IndexedMinHeap {
            slots,
            len: 1,
            capacity,
            source: min.id,
        }
    }

    /// Returns true when no live vertex remains
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the size of the live region
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns how many vertices were ever admitted
    pub fn resident_count(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the id of the minimum vertex without removing it
    pub fn peek_min(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[1])
        }
    }

    /// Returns the vertex id held at `slot`, if the slot is live
    pub fn vertex_at(&self, slot: usize) -> Option<usize> {
        if slot >= 1 && slot <= self.len {
            Some(self.slots[slot])
        } else {
            None
        }
    }

    /// Appends a vertex at the next free slot.
    ///
    /// No up-heap pass is made: the vertex must still carry the sentinel distance,
    /// which is never smaller than anything already resident.
    pub fn insert<W: Weight>(&mut self, vertices: &mut [Vertex<W>], id: usize) -> Result<()> {
        let vertex = vertices.get_mut(id).ok_or(Error::InvalidVertex(id))?;
        if vertex.state != VertexState::Unreached || vertex.distance != infinity() {
            return Err(Error::HeapPrecondition(id));
        }
        if self.resident_count() >= self.capacity {
            return Err(Error::HeapPrecondition(id));
        }
        // Appending past a shrunken live region would strand the vertex outside it
        if self.len != self.resident_count() {
            return Err(Error::GraphInUse);
        }

        self.slots.push(id);
        self.len += 1;
        vertex.heap_index = self.slots.len() - 1;
        trace!("heap admitted vertex {} at slot {}", id, vertex.heap_index);
        Ok(())
    }

    /// Removes and returns the vertex with the smallest distance.
    ///
    /// The last live vertex moves to the root and sinks; the removed vertex is parked
    /// just past the shrunken live region.
    pub fn delete_min<W: Weight>(&mut self, vertices: &mut [Vertex<W>]) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let min = self.slots[1];
        self.swap(vertices, 1, self.len);
        self.len -= 1;
        self.percolate_down(vertices, 1);
        Some(min)
    }

    /// Restores heap order after the distance of the vertex at `slot` was decreased
    pub fn percolate_up<W: Weight>(&mut self, vertices: &mut [Vertex<W>], slot: usize) {
        let mut child = slot;
        while child > 1 {
            let parent = child / 2;
            if self.distance_of(vertices, child) < self.distance_of(vertices, parent) {
                self.swap(vertices, child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }

    fn percolate_down<W: Weight>(&mut self, vertices: &mut [Vertex<W>], slot: usize) {
        let mut parent = slot;
        loop {
            let child = self.lesser_child(vertices, parent);
            if child > self.len {
                break;
            }
            if self.distance_of(vertices, child) < self.distance_of(vertices, parent) {
                self.swap(vertices, child, parent);
                parent = child;
            } else {
                break;
            }
        }
    }

    /// The left child wins only when strictly smaller; ties go right.
    fn lesser_child<W: Weight>(&self, vertices: &[Vertex<W>], parent: usize) -> usize {
        let left = 2 * parent;
        let right = left + 1;
        if self.distance_of(vertices, left) < self.distance_of(vertices, right) {
            left
        } else {
            right
        }
    }

    /// Slots beyond the live region count as infinitely far
    fn distance_of<W: Weight>(&self, vertices: &[Vertex<W>], slot: usize) -> W {
        if slot > self.len {
            infinity()
        } else {
            vertices[self.slots[slot]].distance
        }
    }

    fn swap<W: Weight>(&mut self, vertices: &mut [Vertex<W>], a: usize, b: usize) {
        self.slots.swap(a, b);
        vertices[self.slots[a]].heap_index = a;
        vertices[self.slots[b]].heap_index = b;
    }

    /// Restores every resident vertex to its pre-pass state and the live region to
    /// all residents.
    ///
    /// Only the source has a finite distance afterwards, so swapping it back into
    /// slot 1 is enough to re-establish heap order.
    pub fn reset<W: Weight>(&mut self, vertices: &mut [Vertex<W>]) {
        self.len = self.resident_count();
        for slot in 1..=self.len {
            let vertex = &mut vertices[self.slots[slot]];
            vertex.previous = None;
            vertex.admitted_by = None;
            if vertex.id == self.source {
                vertex.distance = W::zero();
                vertex.state = VertexState::Frontier;
            } else {
                vertex.distance = infinity();
                vertex.state = VertexState::Unreached;
            }
        }

        let source_slot = vertices[self.source].heap_index;
        self.swap(vertices, 1, source_slot);
    }

    /// Checks the back-pointers of all residents and the min-heap order of the live region
    pub fn is_consistent<W: Weight>(&self, vertices: &[Vertex<W>]) -> bool {
        let positions_match = (1..self.slots.len())
            .all(|slot| vertices[self.slots[slot]].heap_index == slot);
        let ordered = (2..=self.len)
            .all(|slot| self.distance_of(vertices, slot / 2) <= self.distance_of(vertices, slot));
        positions_match && ordered
    }
}
