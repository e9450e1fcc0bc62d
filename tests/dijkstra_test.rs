use heap_paths::{
    graphs::{undirected_graph::UndirectedGraph, Distance, Graph, VertexId, Weight},
    loader::{read_bincode_file, read_text, write_bincode_file, Instance},
    search::{
        batch::all_shortest_path_trees,
        dijkstra::{shortest_path_tree, Dijkstra},
        shortest_path_tree::ShortestPathTree,
    },
};
use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_edges(
    rng: &mut StdRng,
    number_of_vertices: u32,
    number_of_edges: usize,
    max_weight: Weight,
) -> Vec<(VertexId, VertexId, Weight)> {
    let mut edges = Vec::new();
    while edges.len() < number_of_edges {
        let a = rng.gen_range(0..number_of_vertices);
        let b = rng.gen_range(0..number_of_vertices);
        if a != b {
            edges.push((a, b, rng.gen_range(0..=max_weight)));
        }
    }
    edges
}

fn random_graphs() -> Vec<UndirectedGraph> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..40)
        .map(|_| {
            let number_of_vertices = rng.gen_range(1..30);
            let number_of_edges = if number_of_vertices > 1 {
                rng.gen_range(0..3 * number_of_vertices as usize)
            } else {
                0
            };
            let edges = random_edges(&mut rng, number_of_vertices, number_of_edges, 20);
            UndirectedGraph::from_edges(number_of_vertices, &edges).unwrap()
        })
        .collect()
}

/// Independent reference: relax every edge until nothing changes.
fn bellman_ford(graph: &UndirectedGraph, source: VertexId) -> Vec<Option<Distance>> {
    let mut distances = vec![None; graph.number_of_vertices() as usize];
    distances[source as usize] = Some(0);

    let mut changed = true;
    while changed {
        changed = false;
        for edge in graph.edges() {
            for (tail, head) in [(edge.low(), edge.high()), (edge.high(), edge.low())] {
                if let Some(distance_tail) = distances[tail as usize] {
                    let alternative = distance_tail + edge.weight() as Distance;
                    if distances[head as usize].map_or(true, |current| alternative < current) {
                        distances[head as usize] = Some(alternative);
                        changed = true;
                    }
                }
            }
        }
    }

    distances
}

fn petgraph_distances(graph: &UndirectedGraph, source: VertexId) -> Vec<Option<Distance>> {
    let mut petgraph = UnGraph::<(), Distance>::new_undirected();
    for _ in graph.vertices() {
        petgraph.add_node(());
    }
    for edge in graph.edges() {
        petgraph.add_edge(
            NodeIndex::new(edge.low() as usize),
            NodeIndex::new(edge.high() as usize),
            edge.weight() as Distance,
        );
    }

    let distances =
        petgraph::algo::dijkstra(&petgraph, NodeIndex::new(source as usize), None, |edge| {
            *edge.weight()
        });
    graph
        .vertices()
        .map(|vertex| distances.get(&NodeIndex::new(vertex as usize)).copied())
        .collect()
}

fn assert_valid_tree(graph: &UndirectedGraph, tree: &ShortestPathTree) {
    let source = tree.source();
    assert_eq!(tree.distance(source), Some(0));
    assert_eq!(tree.predecessor(source), None);

    for vertex in graph.vertices() {
        match tree.path(vertex) {
            Some(path) => {
                assert_eq!(path.vertices.first(), Some(&source));
                assert_eq!(path.vertices.last(), Some(&vertex));
                assert_eq!(graph.get_path_distance(&path.vertices), Some(path.distance));
            }
            None => assert_eq!(tree.predecessor(vertex), None),
        }
    }
}

#[test]
fn four_vertex_example() {
    let instance = read_text("4\n2\n0 1 5\n3 2 2\n0 3 7\n3 1 6\n".as_bytes()).unwrap();
    let tree = shortest_path_tree(&instance.graph, instance.source).unwrap();

    assert_eq!(tree.distances(), &[Some(9), Some(8), Some(0), Some(2)]);
    assert_eq!(tree.predecessors(), &[Some(3), Some(3), None, Some(2)]);
}

#[test]
fn matches_bellman_ford() {
    for graph in random_graphs() {
        for source in graph.vertices() {
            let tree = shortest_path_tree(&graph, source).unwrap();
            assert_eq!(tree.distances(), bellman_ford(&graph, source).as_slice());
            assert_valid_tree(&graph, &tree);
        }
    }
}

#[test]
fn matches_petgraph() {
    for graph in random_graphs() {
        let mut dijkstra = Dijkstra::new(&graph);
        for source in graph.vertices() {
            let tree = dijkstra.shortest_path_tree(source).unwrap();
            assert_eq!(tree.distances(), petgraph_distances(&graph, source).as_slice());
        }
    }
}

#[test]
fn repeated_queries_are_identical() {
    for graph in random_graphs() {
        let mut dijkstra = Dijkstra::new(&graph);
        let first = dijkstra.shortest_path_tree(0).unwrap();
        if graph.number_of_vertices() > 1 {
            dijkstra.shortest_path_tree(graph.number_of_vertices() - 1).unwrap();
        }
        let second = dijkstra.shortest_path_tree(0).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn disconnected_components_terminate() {
    // two triangles without a connection
    let graph = UndirectedGraph::from_edges(
        6,
        &[(0, 1, 1), (1, 2, 1), (2, 0, 5), (3, 4, 2), (4, 5, 2), (5, 3, 2)],
    )
    .unwrap();

    let tree = shortest_path_tree(&graph, 4).unwrap();
    assert_eq!(
        tree.distances(),
        &[None, None, None, Some(2), Some(0), Some(2)]
    );
    assert_eq!(tree.number_of_reachable(), 3);
    assert_valid_tree(&graph, &tree);
}

#[test]
fn parallel_batch_matches_single_queries() {
    for graph in random_graphs().into_iter().take(10) {
        let trees = all_shortest_path_trees(&graph).unwrap();
        for (source, tree) in trees.iter().enumerate() {
            assert_eq!(
                tree.distances(),
                bellman_ford(&graph, source as VertexId).as_slice()
            );
        }
    }
}

#[test]
fn bincode_instance_answers_like_text_instance() {
    let text = "5\n0\n0 1 4\n1 2 1\n0 2 7\n3 4 1\n";
    let instance = read_text(text.as_bytes()).unwrap();

    let path = std::env::temp_dir().join(format!("heap_paths_{}.bincode", std::process::id()));
    write_bincode_file(&path, &instance).unwrap();
    let Instance { graph, source } = read_bincode_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(source, 0);
    assert_eq!(
        shortest_path_tree(&graph, source).unwrap(),
        shortest_path_tree(&instance.graph, instance.source).unwrap()
    );
}
