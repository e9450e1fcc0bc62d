use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read},
    path::Path,
    str::FromStr,
};

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::LoadError,
    graphs::{
        undirected_graph::{check_number_of_vertices, UndirectedGraph},
        Graph, VertexId, Weight,
    },
};

#[derive(Debug, ValueEnum, Clone)]
pub enum FileType {
    /// Vertex count, source and one `a b weight` edge per line
    Text,
    /// Instance written by `text_to_bincode`
    Bincode,
}

/// A fully built graph together with the source vertex to query from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Instance {
    pub graph: UndirectedGraph,
    pub source: VertexId,
}

fn parse_field<T: FromStr>(line: usize, field: &'static str, value: &str) -> Result<T, LoadError> {
    value.parse().map_err(|_| LoadError::Parse {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_weight(line: usize, value: &str) -> Result<Weight, LoadError> {
    if value.starts_with('-') && value.parse::<i64>().is_ok() {
        return Err(LoadError::NegativeWeight {
            line,
            value: value.to_string(),
        });
    }
    parse_field(line, "weight", value)
}

/// Reads an instance in the text format:
///
/// ```text
/// 4
/// 2
/// 0 1 5
/// 3 2 2
/// ```
///
/// The first line is the number of vertices, the second the source, every
/// further line an undirected edge. Blank lines are skipped. Nothing is
/// returned unless every line is valid.
pub fn read_text<R: BufRead>(reader: R) -> Result<Instance, LoadError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|line| (index + 1, line)))
        .filter(|line| {
            line.as_ref()
                .map_or(true, |(_, line)| !line.trim().is_empty())
        });

    let (line, value) = lines.next().ok_or(LoadError::MissingLine("vertex count"))??;
    let number_of_vertices: u32 = parse_field(line, "vertex count", value.trim())?;
    if number_of_vertices == 0 {
        return Err(LoadError::EmptyGraph);
    }
    check_number_of_vertices(number_of_vertices)
        .map_err(|source| LoadError::InvalidVertexCount { line, source })?;

    let (line, value) = lines.next().ok_or(LoadError::MissingLine("source"))??;
    let source: VertexId = parse_field(line, "source", value.trim())?;

    let mut graph = UndirectedGraph::new(number_of_vertices);
    graph.check_vertex(source).map_err(LoadError::InvalidSource)?;

    for edge_line in lines {
        let (line, value) = edge_line?;
        let fields: Vec<&str> = value.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(LoadError::FieldCount {
                line,
                expected: 3,
                found: fields.len(),
            });
        }

        let a: VertexId = parse_field(line, "vertex", fields[0])?;
        let b: VertexId = parse_field(line, "vertex", fields[1])?;
        let weight = parse_weight(line, fields[2])?;
        graph
            .add_edge(a, b, weight)
            .map_err(|source| LoadError::InvalidEdge { line, source })?;
    }

    Ok(Instance { graph, source })
}

pub fn read_text_file(path: &Path) -> Result<Instance, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    read_text(reader)
}

/// Reads an instance written by `write_bincode_file`.
///
/// Edges are checked while the graph is rebuilt, the vertex count and the
/// source are checked afterwards, with the same rules as `read_text`.
pub fn read_bincode<R: Read>(reader: R) -> Result<Instance, LoadError> {
    let instance: Instance = bincode::deserialize_from(reader)?;
    if instance.graph.number_of_vertices() == 0 {
        return Err(LoadError::EmptyGraph);
    }
    instance
        .graph
        .check_vertex(instance.source)
        .map_err(LoadError::InvalidSource)?;
    Ok(instance)
}

pub fn read_bincode_file(path: &Path) -> Result<Instance, LoadError> {
    read_bincode(BufReader::new(File::open(path)?))
}

pub fn write_bincode_file(path: &Path, instance: &Instance) -> Result<(), LoadError> {
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, instance)?;
    Ok(())
}

pub fn read_instance(path: &Path, file_type: &FileType) -> Result<Instance, LoadError> {
    let instance = match file_type {
        FileType::Text => read_text_file(path)?,
        FileType::Bincode => read_bincode_file(path)?,
    };
    info!(
        "read graph with {} vertices and {} edges from {}",
        instance.graph.number_of_vertices(),
        instance.graph.number_of_edges(),
        path.display()
    );
    Ok(instance)
}
