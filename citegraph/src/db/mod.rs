pub mod filter;
pub mod graph;
