mod connected_components;
mod scc;

pub use connected_components::{number_weakly_connected_components, weakly_connected_components};
pub use scc::{number_strongly_connected_components, strongly_connected_components};
