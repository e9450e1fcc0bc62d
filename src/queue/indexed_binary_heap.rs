use super::VertexDistanceQueue;
use crate::graphs::{Distance, VertexId};

const ABSENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    distance: Distance,
    // Insertion counter, breaks ties between equal distances.
    rank: u64,
    vertex: VertexId,
}

impl HeapEntry {
    fn key(&self) -> (Distance, u64) {
        (self.distance, self.rank)
    }
}

/// Array-backed binary min-heap with a side table from vertex id to heap
/// position.
///
/// `insert`, `decrease_key` and `pop_min` run in `O(log n)`, `contains` and
/// `peek_min` in `O(1)`. Among equal distances the vertex that was inserted
/// first wins; `decrease_key` keeps a vertex's original insertion rank.
#[derive(Clone, Debug)]
pub struct IndexedBinaryHeap {
    entries: Vec<HeapEntry>,
    positions: Vec<usize>,
    next_rank: u64,
}

impl IndexedBinaryHeap {
    /// Creates a queue for the vertices `0..capacity`.
    pub fn new(capacity: usize) -> IndexedBinaryHeap {
        IndexedBinaryHeap {
            entries: Vec::with_capacity(capacity),
            positions: vec![ABSENT; capacity],
            next_rank: 0,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].vertex as usize] = a;
        self.positions[self.entries[b].vertex as usize] = b;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].key() >= self.entries[parent].key() {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < self.entries.len()
                && self.entries[left].key() < self.entries[smallest].key()
            {
                smallest = left;
            }
            if right < self.entries.len()
                && self.entries[right].key() < self.entries[smallest].key()
            {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.swap(index, smallest);
            index = smallest;
        }
    }
}

impl VertexDistanceQueue for IndexedBinaryHeap {
    fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.positions[entry.vertex as usize] = ABSENT;
        }
        self.next_rank = 0;
    }

    fn insert(&mut self, vertex: VertexId, distance: Distance) {
        assert!(!self.is_full(), "insert of vertex {} into a full queue", vertex);
        assert!(
            (vertex as usize) < self.positions.len(),
            "vertex {} is out of range for a queue of capacity {}",
            vertex,
            self.positions.len()
        );
        assert!(
            !self.contains(vertex),
            "vertex {} is already in the queue",
            vertex
        );

        let index = self.entries.len();
        self.entries.push(HeapEntry {
            distance,
            rank: self.next_rank,
            vertex,
        });
        self.positions[vertex as usize] = index;
        self.next_rank += 1;
        self.sift_up(index);
    }

    fn decrease_key(&mut self, vertex: VertexId, distance: Distance) {
        assert!(
            self.contains(vertex),
            "decrease key of vertex {} which is not in the queue",
            vertex
        );
        let index = self.positions[vertex as usize];
        let current = self.entries[index].distance;
        assert!(
            distance < current,
            "decrease key of vertex {} from {} to {} does not decrease",
            vertex,
            current,
            distance
        );

        self.entries[index].distance = distance;
        self.sift_up(index);
    }

    fn peek_min(&self) -> Option<(VertexId, Distance)> {
        let entry = self.entries.first()?;
        Some((entry.vertex, entry.distance))
    }

    fn pop_min(&mut self) -> Option<(VertexId, Distance)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let entry = self.entries.pop()?;
        self.positions[entry.vertex as usize] = ABSENT;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((entry.vertex, entry.distance))
    }

    fn contains(&self, vertex: VertexId) -> bool {
        self.positions
            .get(vertex as usize)
            .map_or(false, |&position| position != ABSENT)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.positions.len()
    }
}
