pub mod vertex_data;
