//! Snapshot output: node-link JSON documents and metrics CSV files.

pub mod metrics_csv;
pub mod node_link;
