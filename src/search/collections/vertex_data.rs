use crate::graphs::{Distance, VertexId};

/// Shortest path working state of a single vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexState {
    /// `Distance::MAX` until the vertex is reached.
    pub distance: Distance,
    /// Set once the distance is final. Never unset during a query.
    pub known: bool,
    pub predecessor: Option<VertexId>,
}

impl Default for VertexState {
    fn default() -> Self {
        VertexState {
            distance: Distance::MAX,
            known: false,
            predecessor: None,
        }
    }
}

/// Per query state of all vertices of a graph.
///
/// Kept apart from the graph so that the edges can be shared read only while
/// every query works on its own `VertexData`.
#[derive(Clone, Debug)]
pub struct VertexData {
    vertices: Vec<VertexState>,
}

impl VertexData {
    pub fn new(number_of_vertices: u32) -> Self {
        VertexData {
            vertices: vec![VertexState::default(); number_of_vertices as usize],
        }
    }

    /// Forgets all distances, known flags and predecessors.
    pub fn reset(&mut self) {
        self.vertices.fill(VertexState::default());
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn get_distance(&self, vertex: VertexId) -> Distance {
        self.vertices[vertex as usize].distance
    }

    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.get_distance(vertex) != Distance::MAX
    }

    pub fn is_known(&self, vertex: VertexId) -> bool {
        self.vertices[vertex as usize].known
    }

    pub fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.vertices[vertex as usize].predecessor
    }

    /// Records a (better) tentative distance reached via `predecessor`.
    ///
    /// Panics if the vertex is already known, as its distance is final.
    pub fn relax(&mut self, vertex: VertexId, distance: Distance, predecessor: Option<VertexId>) {
        let state = &mut self.vertices[vertex as usize];
        assert!(
            !state.known,
            "distance of known vertex {} must not change",
            vertex
        );
        state.distance = distance;
        state.predecessor = predecessor;
    }

    pub fn set_known(&mut self, vertex: VertexId) {
        self.vertices[vertex as usize].known = true;
    }

    pub fn number_of_known(&self) -> usize {
        self.vertices.iter().filter(|state| state.known).count()
    }
}
