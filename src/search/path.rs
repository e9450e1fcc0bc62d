use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, VertexId};

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path, starting at the
/// source of a query, and the total weight of traversing this path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub distance: Distance,
}
