use citegraph_api::core::entities::GID;
use citegraph_core::entities::graph::{
    graph_storage::StorageError, logical_to_physical::InvalidNodeId,
};

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("Node already exists with ID {0}")]
    NodeExistsError(GID),

    #[error("No Node with ID {0}")]
    NodeIdError(u64),

    #[error("No Node with name {0}")]
    NodeNameError(String),

    #[error("No Edge between {src} and {dst}")]
    EdgeNotFound { src: GID, dst: GID },

    #[error("Malformed edge list line {line}: {content:?} (expected a source and a target id)")]
    MalformedEdgeLine { line: usize, content: String },

    #[error(transparent)]
    InvalidNodeId(#[from] InvalidNodeId),

    #[error("IO operation failed")]
    IOError {
        #[from]
        source: std::io::Error,
    },

    #[error("Node-link JSON operation failed")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Metrics CSV operation failed")]
    CsvError {
        #[from]
        source: csv::Error,
    },
}

impl GraphError {
    pub fn node_missing(gid: &GID) -> Self {
        match gid {
            GID::U64(id) => GraphError::NodeIdError(*id),
            GID::Str(name) => GraphError::NodeNameError(name.clone()),
        }
    }
}

impl From<StorageError> for GraphError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::NodeExists(gid) => GraphError::NodeExistsError(gid),
            StorageError::MissingNode(vid) => GraphError::NodeIdError(vid.as_u64()),
            StorageError::InvalidNodeId(err) => GraphError::InvalidNodeId(err),
        }
    }
}
