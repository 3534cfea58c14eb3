//! Error types for the coloring engine.

use thiserror::Error;

/// Errors reported by graph construction and by every colorer.
///
/// All variants are detected eagerly, before any search work begins.
/// "No coloring exists within the budget" is never an error: backtracking
/// reports it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    /// A vertex referenced by a neighbor query, a pre-assignment, or a
    /// vertex order is not part of the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// Two adjacent pre-assigned vertices share a color.
    #[error("invalid pre-assignment: {first} and {second} are adjacent but both have color {color}")]
    InvalidPreAssignment {
        first: String,
        second: String,
        color: usize,
    },

    /// A numeric parameter or vertex order is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An edge joins a vertex to itself.
    #[error("self-loop on vertex {0}")]
    SelfLoop(String),
}

impl ColoringError {
    /// Creates an [`ColoringError::UnknownVertex`] from any debuggable vertex.
    pub fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        ColoringError::UnknownVertex(format!("{vertex:?}"))
    }

    /// Creates an [`ColoringError::InvalidParameter`].
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        ColoringError::InvalidParameter(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColoringError>;
