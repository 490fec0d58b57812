pub mod indexed_heap;
pub mod union_find;

pub use indexed_heap::IndexedMinHeap;
pub use union_find::UnionFind;
