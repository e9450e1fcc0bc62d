use std::time::Instant;

use log::{debug, trace};

use super::{collections::vertex_data::VertexData, shortest_path_tree::ShortestPathTree};
use crate::{
    error::GraphError,
    graphs::{Distance, Graph, VertexId},
    queue::{indexed_binary_heap::IndexedBinaryHeap, VertexDistanceQueue},
};

fn check_source(graph: &dyn Graph, source: VertexId) -> Result<(), GraphError> {
    if source < graph.number_of_vertices() {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex: source,
            number_of_vertices: graph.number_of_vertices(),
        })
    }
}

/// Settles every vertex reachable from `source`.
///
/// `data` and `queue` are reset first and must be sized for the graph. The
/// source is known from the start, its neighbors are seeded with the lightest
/// incident edge, and the loop ends as soon as the queue runs empty, leaving
/// vertices that were never reached at `Distance::MAX`.
pub fn dijkstra_single_source(
    graph: &dyn Graph,
    data: &mut VertexData,
    queue: &mut dyn VertexDistanceQueue,
    source: VertexId,
) {
    data.reset();
    queue.clear();

    data.relax(source, 0, None);
    data.set_known(source);

    for edge in graph.incident_edges(source) {
        let head = edge.neighbor();
        let distance = edge.weight() as Distance;
        if !queue.contains(head) {
            data.relax(head, distance, Some(source));
            queue.insert(head, distance);
        } else if distance < data.get_distance(head) {
            data.relax(head, distance, Some(source));
            queue.decrease_key(head, distance);
        }
    }

    while let Some((tail, distance_tail)) = queue.pop_min() {
        data.set_known(tail);
        trace!("settled vertex {} at distance {}", tail, distance_tail);

        for edge in graph.incident_edges(tail) {
            let head = edge.neighbor();
            if head == source || data.is_known(head) {
                continue;
            }

            let alternative_distance_head = distance_tail + edge.weight() as Distance;
            if !queue.contains(head) {
                data.relax(head, alternative_distance_head, Some(tail));
                queue.insert(head, alternative_distance_head);
            } else if alternative_distance_head < data.get_distance(head) {
                data.relax(head, alternative_distance_head, Some(tail));
                queue.decrease_key(head, alternative_distance_head);
            }
        }
    }
}

/// Runs a single query with freshly allocated working state.
pub fn shortest_path_tree(
    graph: &dyn Graph,
    source: VertexId,
) -> Result<ShortestPathTree, GraphError> {
    Dijkstra::new(graph).shortest_path_tree(source)
}

/// Reusable engine for repeated queries against one graph.
///
/// Owns the working state of a query, the graph itself is only borrowed.
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
    data: VertexData,
    queue: IndexedBinaryHeap,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Self {
        let number_of_vertices = graph.number_of_vertices();
        Dijkstra {
            graph,
            data: VertexData::new(number_of_vertices),
            queue: IndexedBinaryHeap::new(number_of_vertices as usize),
        }
    }

    pub fn shortest_path_tree(&mut self, source: VertexId) -> Result<ShortestPathTree, GraphError> {
        check_source(self.graph, source)?;

        debug!(
            "dijkstra from {} on {} vertices and {} edges",
            source,
            self.graph.number_of_vertices(),
            self.graph.number_of_edges()
        );
        let start = Instant::now();
        dijkstra_single_source(self.graph, &mut self.data, &mut self.queue, source);
        debug!(
            "dijkstra from {} settled {} vertices in {:?}",
            source,
            self.data.number_of_known(),
            start.elapsed()
        );

        Ok(ShortestPathTree::from_vertex_data(source, &self.data))
    }

    /// Working state of the last query.
    pub fn data(&self) -> &VertexData {
        &self.data
    }
}
