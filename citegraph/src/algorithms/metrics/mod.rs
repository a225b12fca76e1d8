pub mod degree;
pub mod graph_properties;
pub mod popularity;
pub mod validation;
