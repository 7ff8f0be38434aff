//! Graph mutation and search errors.

use thiserror::Error;

use crate::core::Point2D;

/// Rejected graph mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph.
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(Point2D),

    /// Both edge endpoints are the same vertex.
    #[error("self-loop at {0} rejected")]
    SelfLoop(Point2D),
}

/// Reason a shortest-path query produced no path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathFailure {
    /// Source or target was never set (or was removed).
    #[error("source and target must both be set before searching")]
    EndpointsNotSet,

    /// Frontier exhausted before the target was extracted.
    #[error("no path exists: target unreachable after expanding {expanded} vertices")]
    Unreachable {
        /// Vertices finalized before the frontier ran dry.
        expanded: usize,
    },

    /// Search stopped at the configured expansion budget.
    #[error("search aborted after expanding {expanded} vertices")]
    ExpansionLimit {
        /// Vertices finalized when the limit was hit.
        expanded: usize,
    },
}
