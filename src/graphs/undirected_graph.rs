use serde::{Deserialize, Serialize};

use super::{
    edge::{IncidentEdge, UndirectedWeightedEdge},
    EdgeId, Graph, VertexId, Weight, MAX_NUMBER_OF_VERTICES,
};
use crate::error::GraphError;

/// Undirected multigraph with a fixed number of vertices.
///
/// Every edge lives exactly once in `edges`. Each vertex keeps the ids of the
/// edges it is an endpoint of, so an edge is reachable from both endpoints
/// without being stored twice.
///
/// Serialized as the vertex count and the edge list. Deserializing rebuilds
/// the incidence lists through `add_edge`, so a stored graph is held to the
/// same rules as one built in memory.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "StoredGraph", into = "StoredGraph")]
pub struct UndirectedGraph {
    edges: Vec<UndirectedWeightedEdge>,
    incidence: Vec<Vec<EdgeId>>,
}

#[derive(Serialize, Deserialize)]
struct StoredGraph {
    number_of_vertices: u32,
    edges: Vec<UndirectedWeightedEdge>,
}

impl From<UndirectedGraph> for StoredGraph {
    fn from(graph: UndirectedGraph) -> Self {
        StoredGraph {
            number_of_vertices: graph.number_of_vertices(),
            edges: graph.edges,
        }
    }
}

impl TryFrom<StoredGraph> for UndirectedGraph {
    type Error = GraphError;

    fn try_from(stored: StoredGraph) -> Result<Self, Self::Error> {
        check_number_of_vertices(stored.number_of_vertices)?;
        let mut graph = UndirectedGraph::new(stored.number_of_vertices);
        for edge in stored.edges {
            graph.add_edge(edge.low(), edge.high(), edge.weight())?;
        }
        Ok(graph)
    }
}

pub fn check_number_of_vertices(number_of_vertices: u32) -> Result<(), GraphError> {
    if number_of_vertices <= MAX_NUMBER_OF_VERTICES {
        Ok(())
    } else {
        Err(GraphError::TooManyVertices {
            number_of_vertices,
            max: MAX_NUMBER_OF_VERTICES,
        })
    }
}

impl UndirectedGraph {
    pub fn new(number_of_vertices: u32) -> UndirectedGraph {
        UndirectedGraph {
            edges: Vec::new(),
            incidence: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(
        number_of_vertices: u32,
        edges: &[(VertexId, VertexId, Weight)],
    ) -> Result<UndirectedGraph, GraphError> {
        let mut graph = UndirectedGraph::new(number_of_vertices);
        for &(a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    pub fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if (vertex as usize) < self.incidence.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            })
        }
    }

    /// Adds the undirected edge `{a, b}`. Parallel edges are kept.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        let edge = UndirectedWeightedEdge::new(a, b, weight).ok_or(GraphError::SelfLoop(a))?;

        let edge_id = self.edges.len() as EdgeId;
        self.incidence[edge.low() as usize].push(edge_id);
        self.incidence[edge.high() as usize].push(edge_id);
        self.edges.push(edge);

        Ok(())
    }

    pub fn edges(&self) -> &[UndirectedWeightedEdge] {
        &self.edges
    }
}

impl Graph for UndirectedGraph {
    fn number_of_vertices(&self) -> u32 {
        self.incidence.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    fn incident_edges(
        &self,
        vertex: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = IncidentEdge> + Send + '_> {
        // Struct is needed as vertex would otherwise not live long enough.
        struct IncidentEdgeIterator<'a> {
            edge_ids: std::slice::Iter<'a, EdgeId>,
            edges: &'a [UndirectedWeightedEdge],
            vertex: VertexId,
        }

        impl<'a> Iterator for IncidentEdgeIterator<'a> {
            type Item = IncidentEdge;

            fn next(&mut self) -> Option<Self::Item> {
                let &edge_id = self.edge_ids.next()?;
                self.edges[edge_id as usize].incident_from(self.vertex)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_ids.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for IncidentEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_ids.len()
            }
        }

        Box::new(IncidentEdgeIterator {
            edge_ids: self.incidence[vertex as usize].iter(),
            edges: &self.edges,
            vertex,
        })
    }
}
