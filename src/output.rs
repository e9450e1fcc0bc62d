use std::io::{self, Write};

use itertools::Itertools;

use crate::search::shortest_path_tree::ShortestPathTree;

/// Writes one line per vertex with its distance and predecessor, optionally
/// followed by the full path from the source.
pub fn write_routes<W: Write>(
    writer: &mut W,
    tree: &ShortestPathTree,
    with_paths: bool,
) -> io::Result<()> {
    for vertex in 0..tree.number_of_vertices() {
        let distance = tree
            .distance(vertex)
            .map_or("unreachable".to_string(), |distance| distance.to_string());
        let predecessor = tree
            .predecessor(vertex)
            .map_or("none".to_string(), |predecessor| predecessor.to_string());
        write!(
            writer,
            "Vertex {} shortest path has a distance of {}, prev = {}",
            vertex, distance, predecessor
        )?;

        if with_paths {
            if let Some(path) = tree.path(vertex) {
                write!(writer, ", path = {}", path.vertices.iter().join(" "))?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, tree: &ShortestPathTree) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::undirected_graph::UndirectedGraph, search::dijkstra::shortest_path_tree,
    };

    fn tree() -> ShortestPathTree {
        let graph = UndirectedGraph::from_edges(5, &[(0, 1, 5), (3, 2, 2), (0, 3, 7), (3, 1, 6)])
            .unwrap();
        shortest_path_tree(&graph, 2).unwrap()
    }

    #[test]
    fn routes_mark_unreachable_vertices() {
        let mut buffer = Vec::new();
        write_routes(&mut buffer, &tree(), false).unwrap();

        let expected = "\
Vertex 0 shortest path has a distance of 9, prev = 3
Vertex 1 shortest path has a distance of 8, prev = 3
Vertex 2 shortest path has a distance of 0, prev = none
Vertex 3 shortest path has a distance of 2, prev = 2
Vertex 4 shortest path has a distance of unreachable, prev = none
";
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[test]
    fn routes_with_paths() {
        let mut buffer = Vec::new();
        write_routes(&mut buffer, &tree(), true).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("distance of 9, prev = 3, path = 2 3 0\n"));
        assert!(text.contains("distance of unreachable, prev = none\n"));
    }

    #[test]
    fn json_uses_null_for_unreachable() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &tree()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["source"], 2);
        assert_eq!(value["distances"][1], 8);
        assert!(value["distances"][4].is_null());
        assert!(value["predecessors"][2].is_null());

        let parsed: ShortestPathTree = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, tree());
    }
}
