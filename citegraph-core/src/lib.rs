//! # citegraph-core
//!
//! In-memory storage for directed citation graphs.
//!
//! Nodes are addressed externally by a [`GID`](citegraph_api::core::entities::GID)
//! and internally by a dense physical [`VID`](citegraph_api::core::entities::VID).
//! Each node keeps its metadata next to sorted in/out adjacency lists, so
//! existence checks are a binary search and degrees are a length.
//!
//! **Note** this crate is not meant to be used on its own. The `citegraph`
//! crate wraps it with id-based mutation, algorithms and I/O.

pub mod entities;
