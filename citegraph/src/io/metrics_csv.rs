//! Popularity metrics as CSV rows.
//!
//! The file is opened in append mode for every row, so successive runs and
//! successive timesteps accumulate in a single file. The header is written
//! only when the file is new or empty.

use crate::errors::GraphError;
use serde::{Deserialize, Serialize};
use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};
use tracing::debug;

/// Node counts per popularity level after a timestep.
///
/// Field names are the CSV column names.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub total_no_of_nodes: usize,
    pub nodes_in_new_state: usize,
    pub nodes_in_moderate_state: usize,
    pub nodes_in_famous_state: usize,
    pub nodes_in_influential_state: usize,
}

#[derive(Clone, Debug)]
pub struct MetricsCsvWriter {
    path: PathBuf,
}

impl MetricsCsvWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, creating the file with a header if needed.
    pub fn append(&self, row: &MetricsRow) -> Result<(), GraphError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let write_header = file.metadata()?.len() == 0;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(row)?;
        writer.flush()?;
        debug!(path = %self.path.display(), ?row, "appended metrics row");
        Ok(())
    }

    /// Read back every row in the file.
    pub fn read_all(&self) -> Result<Vec<MetricsRow>, GraphError> {
        let mut reader = csv::Reader::from_reader(File::open(&self.path)?);
        let rows = reader.deserialize().collect::<Result<Vec<MetricsRow>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod metrics_csv_test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn row(total: usize) -> MetricsRow {
        MetricsRow {
            total_no_of_nodes: total,
            nodes_in_new_state: total - 3,
            nodes_in_moderate_state: 1,
            nodes_in_famous_state: 1,
            nodes_in_influential_state: 1,
        }
    }

    #[test]
    fn test_header_written_once() {
        let dir = TempDir::new().unwrap();
        let writer = MetricsCsvWriter::new(dir.path().join("metrics.csv"));
        writer.append(&row(10)).unwrap();
        writer.append(&row(20)).unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(
            contents,
            "total_no_of_nodes,nodes_in_new_state,nodes_in_moderate_state,nodes_in_famous_state,nodes_in_influential_state\n\
             10,7,1,1,1\n\
             20,17,1,1,1\n"
        );
        assert_eq!(writer.read_all().unwrap(), vec![row(10), row(20)]);
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metrics.csv");
        MetricsCsvWriter::new(&path).append(&row(5)).unwrap();
        MetricsCsvWriter::new(&path).append(&row(6)).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_empty_file_gets_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metrics.csv");
        fs::write(&path, "").unwrap();
        let writer = MetricsCsvWriter::new(&path);
        writer.append(&row(4)).unwrap();
        assert_eq!(writer.read_all().unwrap(), vec![row(4)]);
    }
}
