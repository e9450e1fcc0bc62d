use edge::IncidentEdge;

pub mod edge;
pub mod undirected_graph;

pub type VertexId = u32;
pub type EdgeId = u32;
pub type Weight = u32;
pub type Distance = u64;

/// Upper bound on the vertex count of a graph that is read from a file.
pub const MAX_NUMBER_OF_VERTICES: u32 = 1 << 28;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32;

    /// All edges that have `vertex` as one of their endpoints, seen from
    /// `vertex`. Parallel edges are reported individually.
    fn incident_edges(
        &self,
        vertex: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = IncidentEdge> + Send + '_>;

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + Send + '_> {
        Box::new(0..self.number_of_vertices())
    }

    /// Sum of the weights along `vertices`, taking the lightest parallel edge
    /// between consecutive vertices. `None` if two consecutive vertices are not
    /// adjacent.
    fn get_path_distance(&self, vertices: &[VertexId]) -> Option<Distance> {
        vertices
            .windows(2)
            .map(|pair| {
                self.incident_edges(pair[0])
                    .filter(|edge| edge.neighbor() == pair[1])
                    .map(|edge| edge.weight() as Distance)
                    .min()
            })
            .sum()
    }
}
