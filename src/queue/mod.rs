use crate::graphs::{Distance, VertexId};

pub mod indexed_binary_heap;

/// A min-priority queue of vertices keyed by vertex id.
///
/// Every vertex is present at most once. Lookups by vertex id are constant
/// time, which makes `decrease_key` possible without scanning the queue.
/// Violating a precondition is a bug in the caller and panics.
pub trait VertexDistanceQueue {
    /// Removes all vertices, keeping the capacity.
    fn clear(&mut self);

    /// Inserts `vertex` with priority `distance`.
    ///
    /// Panics if the queue is full, the vertex is out of range or the vertex
    /// is already present.
    fn insert(&mut self, vertex: VertexId, distance: Distance);

    /// Lowers the priority of `vertex` to `distance`.
    ///
    /// Panics if the vertex is not present or `distance` is not strictly
    /// smaller than its current priority.
    fn decrease_key(&mut self, vertex: VertexId, distance: Distance);

    /// The vertex with the smallest priority and that priority, or `None` if
    /// the queue is empty. Ties go to the vertex inserted first.
    fn peek_min(&self) -> Option<(VertexId, Distance)>;

    /// Removes and returns the vertex with the smallest priority, or `None`
    /// if the queue is empty.
    fn pop_min(&mut self) -> Option<(VertexId, Distance)>;

    fn contains(&self, vertex: VertexId) -> bool;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}
