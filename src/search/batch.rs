use indicatif::ParallelProgressIterator;
use log::info;
use rayon::prelude::*;

use super::{dijkstra::Dijkstra, shortest_path_tree::ShortestPathTree};
use crate::{
    error::GraphError,
    graphs::{Graph, VertexId},
    utility::get_progressbar,
};

/// Runs one independent query per source in parallel.
///
/// The graph is shared read only. Every rayon worker owns its own engine and
/// with it its own vertex state and queue. The trees are returned in the
/// order of `sources`.
pub fn shortest_path_trees(
    graph: &dyn Graph,
    sources: &[VertexId],
) -> Result<Vec<ShortestPathTree>, GraphError> {
    info!("running {} queries in parallel", sources.len());

    sources
        .par_iter()
        .progress_with(get_progressbar("Dijkstra", sources.len() as u64))
        .map_init(
            || Dijkstra::new(graph),
            |dijkstra, &source| dijkstra.shortest_path_tree(source),
        )
        .collect()
}

/// Shortest path trees from every vertex of the graph.
pub fn all_shortest_path_trees(graph: &dyn Graph) -> Result<Vec<ShortestPathTree>, GraphError> {
    let sources: Vec<VertexId> = graph.vertices().collect();
    shortest_path_trees(graph, &sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graphs::undirected_graph::UndirectedGraph, search::dijkstra::shortest_path_tree};

    #[test]
    fn parallel_queries_match_sequential_queries() {
        let graph = UndirectedGraph::from_edges(
            6,
            &[(0, 1, 5), (3, 2, 2), (0, 3, 7), (3, 1, 6), (4, 5, 1), (1, 2, 9)],
        )
        .unwrap();

        let trees = all_shortest_path_trees(&graph).unwrap();
        assert_eq!(trees.len(), 6);
        for (source, tree) in trees.iter().enumerate() {
            assert_eq!(tree.source(), source as VertexId);
            assert_eq!(tree, &shortest_path_tree(&graph, source as VertexId).unwrap());
        }
    }

    #[test]
    fn invalid_source_fails_the_batch() {
        let graph = UndirectedGraph::new(2);
        assert!(shortest_path_trees(&graph, &[0, 2]).is_err());
    }
}
