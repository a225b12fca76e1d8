//! Loads whitespace separated edge lists, such as the SNAP citation datasets.
//!
//! Each line holds a citing paper and a cited paper. Blank lines and lines
//! starting with `#` are skipped. Files ending in `.gz` are decompressed on
//! the fly.
//!
//! All ids of one file share a type. They are numeric only if every token is
//! a canonical unsigned integer (no sign, no leading zeros) and the graph does
//! not already hold string ids. Otherwise every token is kept as a string.

use crate::{db::graph::graph::Graph, errors::GraphError, graphgen::node_factory::NodeFactory};
use citegraph_api::core::entities::{GidType, GID};
use flate2::read::GzDecoder;
use rand::Rng;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// What a load did to the graph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub lines_read: usize,
    pub nodes_added: usize,
    pub edges_added: usize,
    pub duplicates_skipped: usize,
}

#[derive(Debug)]
pub struct EdgeListLoader {
    path: PathBuf,
}

impl EdgeListLoader {
    pub fn new<P: Into<PathBuf>>(p: P) -> Self {
        Self { path: p.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_gzipped(&self) -> bool {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".gz"))
    }

    fn reader(&self) -> Result<Box<dyn BufRead>, io::Error> {
        let f = File::open(&self.path)?;
        if self.is_gzipped() {
            Ok(Box::new(BufReader::new(GzDecoder::new(f))))
        } else {
            Ok(Box::new(BufReader::new(f)))
        }
    }

    /// Add every edge in the file to `graph`.
    ///
    /// Papers seen for the first time get random metadata. Each new edge bumps
    /// the source's `references` and the target's `cited_by`; an edge that is
    /// already in the graph is counted as a duplicate and changes nothing.
    ///
    /// Fails with [`GraphError::MalformedEdgeLine`] on a line with fewer than
    /// two fields. Edges before the bad line stay in the graph.
    pub fn load_into_graph<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph,
        rng: &mut R,
    ) -> Result<LoadSummary, GraphError> {
        let mut summary = LoadSummary::default();
        let mut pairs = Vec::new();
        let mut malformed = None;
        for (index, line) in self.reader()?.lines().enumerate() {
            let line = line?;
            summary.lines_read += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut fields = trimmed.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some(src), Some(dst)) => pairs.push((src.to_owned(), dst.to_owned())),
                _ => {
                    malformed = Some(GraphError::MalformedEdgeLine {
                        line: index + 1,
                        content: trimmed.to_owned(),
                    });
                    break;
                }
            }
        }

        let numeric = graph.storage().id_type() != Some(GidType::Str)
            && pairs
                .iter()
                .all(|(src, dst)| canonical_u64(src).is_some() && canonical_u64(dst).is_some());
        debug!(numeric, edges = pairs.len(), "parsed edge list");
        let to_gid = |token: String| match canonical_u64(&token).filter(|_| numeric) {
            Some(id) => GID::U64(id),
            None => GID::Str(token),
        };

        for (src, dst) in pairs {
            let src = to_gid(src);
            let dst = to_gid(dst);
            for id in [&src, &dst] {
                if !graph.has_node(id) {
                    graph.add_node(id.clone(), NodeFactory::create(rng))?;
                    summary.nodes_added += 1;
                }
            }
            if graph.add_edge(&src, &dst)? {
                graph.meta_mut(&src)?.references += 1;
                graph.meta_mut(&dst)?.record_citation(&src);
                summary.edges_added += 1;
            } else {
                debug!(%src, %dst, "duplicate edge");
                summary.duplicates_skipped += 1;
            }
        }
        if let Some(err) = malformed {
            return Err(err);
        }
        info!(path = %self.path.display(), ?summary, "loaded edge list");
        Ok(summary)
    }
}

/// `token` as a u64 if it is spelled the way the number displays.
fn canonical_u64(token: &str) -> Option<u64> {
    let digits_only = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
    let no_leading_zero = token == "0" || !token.starts_with('0');
    if digits_only && no_leading_zero {
        token.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod edge_list_loader_test {
    use super::*;
    use crate::algorithms::metrics::validation::validate_citation_counts;
    use flate2::{write::GzEncoder, Compression};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use std::io::Write;
    use tempfile::TempDir;

    const EDGES: &str = "# Directed graph: cit-HepTh.txt\n\
                         # FromNodeId\tToNodeId\n\
                         1001\t9304045\n\
                         1001 9308122\n\
                         \n\
                         9304045 9308122\n\
                         1001 9304045\n";

    fn check(graph: &Graph, summary: LoadSummary) {
        assert_eq!(
            summary,
            LoadSummary {
                lines_read: 7,
                nodes_added: 3,
                edges_added: 3,
                duplicates_skipped: 1,
            }
        );
        assert_eq!(graph.count_nodes(), 3);
        assert_eq!(graph.count_edges(), 3);
        assert!(validate_citation_counts(graph).is_empty());
        let cited = graph.meta(&GID::U64(9308122)).unwrap();
        assert_eq!(cited.cited_by, 2);
        assert_eq!(cited.first_cited_time, Some(GID::U64(1001)));
    }

    #[test]
    fn test_plain_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.edgelist");
        std::fs::write(&path, EDGES).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = Graph::new();
        let summary = EdgeListLoader::new(&path)
            .load_into_graph(&mut graph, &mut rng)
            .unwrap();
        check(&graph, summary);
    }

    #[test]
    fn test_gzipped_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.edgelist.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(EDGES.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = Graph::new();
        let summary = EdgeListLoader::new(&path)
            .load_into_graph(&mut graph, &mut rng)
            .unwrap();
        check(&graph, summary);
    }

    #[test]
    fn test_malformed_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.edgelist");
        std::fs::write(&path, "1 2\n3\n4 5\n").unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = Graph::new();
        let err = EdgeListLoader::new(&path)
            .load_into_graph(&mut graph, &mut rng)
            .unwrap_err();
        match err {
            GraphError::MalformedEdgeLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "3");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(graph.count_edges(), 1);
    }

    #[test]
    fn test_missing_file() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = Graph::new();
        let err = EdgeListLoader::new("does/not/exist.edgelist")
            .load_into_graph(&mut graph, &mut rng)
            .unwrap_err();
        assert!(matches!(err, GraphError::IOError { .. }));
    }

    #[test]
    fn test_string_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("names.edgelist");
        std::fs::write(&path, "hep-th/9201001 hep-th/9201002\n").unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = Graph::new();
        EdgeListLoader::new(&path)
            .load_into_graph(&mut graph, &mut rng)
            .unwrap();
        assert!(graph.has_edge(&GID::from("hep-th/9201001"), &GID::from("hep-th/9201002")));
    }

    fn load_str(graph: &mut Graph, content: &str) -> Result<LoadSummary, GraphError> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ids.edgelist");
        std::fs::write(&path, content).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        EdgeListLoader::new(&path).load_into_graph(graph, &mut rng)
    }

    #[test]
    fn test_mixed_ids_are_all_strings() {
        let mut graph = Graph::new();
        let summary = load_str(&mut graph, "1 2\nhep-th/9201001 1\n").unwrap();
        assert_eq!(summary.edges_added, 2);
        assert!(graph.has_edge(&GID::from("1"), &GID::from("2")));
        assert!(graph.has_edge(&GID::from("hep-th/9201001"), &GID::from("1")));
        assert!(!graph.has_node(&GID::U64(1)));
    }

    #[test]
    fn test_leading_zero_keeps_spelling() {
        let mut graph = Graph::new();
        load_str(&mut graph, "007 1\n").unwrap();
        assert!(graph.has_edge(&GID::from("007"), &GID::from("1")));
    }

    #[test]
    fn test_large_numeric_ids() {
        let mut graph = Graph::new();
        load_str(&mut graph, "5 6\n10000000000000000009 5\n18446744073709551615 6\n").unwrap();
        assert_eq!(graph.count_edges(), 3);
        assert!(graph.has_edge(&GID::U64(10000000000000000009), &GID::U64(5)));
        assert!(graph.has_edge(&GID::U64(u64::MAX), &GID::U64(6)));

        let mut graph = Graph::new();
        load_str(&mut graph, "18446744073709551616 1\n").unwrap();
        assert!(graph.has_node(&GID::from("18446744073709551616")));
        assert!(graph.has_node(&GID::from("1")));
    }

    #[test]
    fn test_numeric_file_into_string_graph() {
        let mut graph = Graph::new();
        load_str(&mut graph, "a b\n").unwrap();
        load_str(&mut graph, "1 2\n").unwrap();
        assert!(graph.has_edge(&GID::from("1"), &GID::from("2")));
        assert_eq!(graph.count_nodes(), 4);
    }

    #[test]
    fn test_canonical_u64() {
        assert_eq!(canonical_u64("0"), Some(0));
        assert_eq!(canonical_u64("42"), Some(42));
        assert_eq!(canonical_u64("00"), None);
        assert_eq!(canonical_u64("+5"), None);
        assert_eq!(canonical_u64("-3"), None);
        assert_eq!(canonical_u64(""), None);
    }
}
