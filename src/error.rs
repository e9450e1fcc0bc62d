use thiserror::Error;

use crate::graphs::VertexId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        number_of_vertices: u32,
    },
    #[error("self loop on vertex {0} is not a valid undirected edge")]
    SelfLoop(VertexId),
    #[error("vertex count {number_of_vertices} exceeds the maximum of {max}")]
    TooManyVertices { number_of_vertices: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing {0} line")]
    MissingLine(&'static str),
    #[error("line {line}: unable to parse {field} from {value:?}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: expected {expected} fields but found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: negative weight {value:?}")]
    NegativeWeight { line: usize, value: String },
    #[error("line {line}: {source}")]
    InvalidEdge { line: usize, source: GraphError },
    #[error("line {line}: {source}")]
    InvalidVertexCount { line: usize, source: GraphError },
    #[error("invalid source: {0}")]
    InvalidSource(GraphError),
    #[error("graph must have at least one vertex")]
    EmptyGraph,
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}
