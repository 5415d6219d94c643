//! Error types for tree operations.

use crate::tree::NodeId;

/// Error returned by tree operations.
///
/// Operations validate their target before mutating anything, so a returned
/// error implies no partial state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The node does not exist (never inserted, removed, or a stale id
    /// whose slot has been recycled).
    NotFound(NodeId),
}

impl core::fmt::Display for TreeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "node {id:?} not found in tree"),
        }
    }
}

impl std::error::Error for TreeError {}
