pub mod error;
pub mod graphs;
pub mod loader;
pub mod output;
pub mod queue;
pub mod search;
pub mod utility;
