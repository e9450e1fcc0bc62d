use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// An undirected edge stored once in canonical orientation, `low < high`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct UndirectedWeightedEdge {
    low: VertexId,
    high: VertexId,
    weight: Weight,
}

impl UndirectedWeightedEdge {
    /// Returns `None` for self loops. The endpoints may be given in any order.
    pub fn new(a: VertexId, b: VertexId, weight: Weight) -> Option<UndirectedWeightedEdge> {
        if a == b {
            return None;
        }

        Some(UndirectedWeightedEdge {
            low: a.min(b),
            high: a.max(b),
            weight,
        })
    }

    pub fn low(&self) -> VertexId {
        self.low
    }

    pub fn high(&self) -> VertexId {
        self.high
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The endpoint opposite to `vertex`, or `None` if `vertex` is not an
    /// endpoint of this edge.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.low {
            Some(self.high)
        } else if vertex == self.high {
            Some(self.low)
        } else {
            None
        }
    }

    /// The edge as seen from `vertex`.
    pub fn incident_from(&self, vertex: VertexId) -> Option<IncidentEdge> {
        let neighbor = self.opposite(vertex)?;
        Some(IncidentEdge {
            neighbor,
            weight: self.weight,
        })
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentEdge {
    neighbor: VertexId,
    weight: Weight,
}

impl IncidentEdge {
    pub fn new(neighbor: VertexId, weight: Weight) -> IncidentEdge {
        IncidentEdge { neighbor, weight }
    }

    pub fn neighbor(&self) -> VertexId {
        self.neighbor
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
