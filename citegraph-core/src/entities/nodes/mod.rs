pub mod node_store;
pub mod structure;
