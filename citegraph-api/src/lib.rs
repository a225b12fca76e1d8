//! Shared entity types for the citegraph workspace.
//!
//! This crate holds the pieces every other crate agrees on: node identifiers,
//! the closed set of citation metadata, comparable property values and the
//! logging helpers.

pub mod core;
