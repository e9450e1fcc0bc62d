use serde::{Deserialize, Serialize};

use super::{collections::vertex_data::VertexData, path::Path};
use crate::graphs::{Distance, VertexId};

/// Result of a single source query.
///
/// Unreachable vertices have neither a distance nor a predecessor. The source
/// has distance zero and no predecessor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub fn from_vertex_data(source: VertexId, data: &VertexData) -> ShortestPathTree {
        let vertices = 0..data.number_of_vertices();
        let distances = vertices
            .clone()
            .map(|vertex| data.is_reached(vertex).then(|| data.get_distance(vertex)))
            .collect();
        let predecessors = vertices.map(|vertex| data.get_predecessor(vertex)).collect();

        ShortestPathTree {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances[vertex as usize]
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[vertex as usize]
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn distances(&self) -> &[Option<Distance>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    pub fn number_of_reachable(&self) -> usize {
        self.distances.iter().filter(|distance| distance.is_some()).count()
    }

    /// Path from the source to `target`, or `None` if `target` is
    /// unreachable.
    pub fn path(&self, target: VertexId) -> Option<Path> {
        let distance = self.distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}
