pub mod batch;
pub mod collections;
pub mod dijkstra;
pub mod path;
pub mod shortest_path_tree;
