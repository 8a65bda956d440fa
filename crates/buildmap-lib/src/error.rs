use thiserror::Error;

use crate::venue::NodeId;

/// Convenient result alias for the buildmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The routing errors are request-level business failures: they are reported
/// whole to the caller and never retried.
#[derive(Debug, Error)]
pub enum Error {
    /// An endpoint id does not exist in the supplied snapshot.
    #[error("node {id} not found in venue snapshot")]
    NodeNotFound { id: NodeId },

    /// Start and end of a route request are the same node.
    #[error("start and end nodes are the same")]
    SameEndpoints,

    /// No route connects the two nodes given the stored connections.
    #[error("no path exists from {start} to {end}")]
    NoPathExists { start: NodeId, end: NodeId },

    /// Raised when building a report from a route with no nodes.
    #[error("route contained no nodes")]
    EmptyRoute,

    /// Wrapper for IO errors while reading a snapshot file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for snapshot deserialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
