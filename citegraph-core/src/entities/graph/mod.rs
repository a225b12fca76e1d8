pub mod graph_storage;
pub mod logical_to_physical;
