//! Error types for table generation
//!
//! Every failure in this crate is structural: a table that cannot be built
//! correctly from constants will never be built correctly on a retry. Errors
//! therefore carry a stable code and a category, but no recoverability hint.
//!
//! # Example
//!
//! ```rust
//! use dodeca_core::error::{TableError, ErrorCategory};
//!
//! let err = TableError::HueIndexOutOfRange { hue: 31 };
//! assert_eq!(err.category(), ErrorCategory::Input);
//! assert_eq!(err.error_code(), "HUE_INDEX_OUT_OF_RANGE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for table generation
pub type Result<T> = std::result::Result<T, TableError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Caller passed an argument outside the documented domain
    Input,
    /// A geometric or colorimetric construction broke its invariant
    Construction,
    /// The edge graph is not a dodecahedron
    Topology,
    /// Writing or serializing a table failed
    Output,
}

/// Errors that can occur while generating tables
#[derive(Error, Debug)]
pub enum TableError {
    // ═══════════════════════════════════════════════════════════════════════
    // Input errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Spline evaluated without any control points
    #[error("Spline requires at least one control point")]
    EmptySpline,

    /// Hue index outside the 25-sample wheel
    #[error("Hue index {hue} out of range (expected 0..=24)")]
    HueIndexOutOfRange { hue: u32 },

    /// Ring index outside the 4 vertex rings
    #[error("Ring index {ring} out of range (expected 0..4)")]
    RingIndexOutOfRange { ring: usize },

    // ═══════════════════════════════════════════════════════════════════════
    // Construction errors
    // ═══════════════════════════════════════════════════════════════════════

    /// A hue sample violated the one-zero-channel wheel invariant
    #[error("Hue sample {hue} violates the wheel invariant: {reason}")]
    HueInvariant { hue: u32, reason: String },

    /// Two dodecahedron constructions disagree
    #[error("Dodecahedron constructions disagree at vertex {index} (delta {delta:.6})")]
    ConstructionMismatch { index: usize, delta: f64 },

    /// Quantization of a vertex set whose coordinates are all zero
    #[error("Cannot quantize a degenerate vertex set (all coordinates zero)")]
    DegenerateVertices,

    // ═══════════════════════════════════════════════════════════════════════
    // Topology errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Wrong number of edges
    #[error("Expected {expected} edges, got {actual}")]
    EdgeCount { expected: usize, actual: usize },

    /// The same unordered pair appears twice
    #[error("Duplicate edge {{{a}, {b}}}")]
    DuplicateEdge { a: usize, b: usize },

    /// Self-loop or out-of-range endpoint
    #[error("Invalid edge {{{a}, {b}}}")]
    InvalidEdge { a: usize, b: usize },

    /// A vertex does not have exactly three incident edges
    #[error("Vertex {vertex} has degree {degree}, expected 3")]
    VertexDegree { vertex: usize, degree: usize },

    /// Not every vertex is reachable from vertex 0
    #[error("Edge graph is disconnected")]
    Disconnected,

    /// Generated edges are not the shortest vertex pairs of the geometry
    #[error("Edge {{{a}, {b}}} does not join nearest-neighbour vertices")]
    EdgeGeometry { a: usize, b: usize },

    /// The successors at one end of an edge do not fall one on each side
    #[error("Successors of edge {edge} are not split into left and right")]
    SuccessorSides { edge: usize },

    // ═══════════════════════════════════════════════════════════════════════
    // Output errors
    // ═══════════════════════════════════════════════════════════════════════

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a table failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// Returns the error category for grouping
    pub fn category(&self) -> ErrorCategory {
        match self {
            TableError::EmptySpline
            | TableError::HueIndexOutOfRange { .. }
            | TableError::RingIndexOutOfRange { .. } => ErrorCategory::Input,

            TableError::HueInvariant { .. }
            | TableError::ConstructionMismatch { .. }
            | TableError::DegenerateVertices => ErrorCategory::Construction,

            TableError::EdgeCount { .. }
            | TableError::DuplicateEdge { .. }
            | TableError::InvalidEdge { .. }
            | TableError::VertexDegree { .. }
            | TableError::Disconnected
            | TableError::EdgeGeometry { .. }
            | TableError::SuccessorSides { .. } => ErrorCategory::Topology,

            TableError::Json(_) | TableError::Io(_) => ErrorCategory::Output,
        }
    }

    /// Returns the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            TableError::EmptySpline => "EMPTY_SPLINE",
            TableError::HueIndexOutOfRange { .. } => "HUE_INDEX_OUT_OF_RANGE",
            TableError::RingIndexOutOfRange { .. } => "RING_INDEX_OUT_OF_RANGE",
            TableError::HueInvariant { .. } => "HUE_INVARIANT",
            TableError::ConstructionMismatch { .. } => "CONSTRUCTION_MISMATCH",
            TableError::DegenerateVertices => "DEGENERATE_VERTICES",
            TableError::EdgeCount { .. } => "EDGE_COUNT",
            TableError::DuplicateEdge { .. } => "DUPLICATE_EDGE",
            TableError::InvalidEdge { .. } => "INVALID_EDGE",
            TableError::VertexDegree { .. } => "VERTEX_DEGREE",
            TableError::Disconnected => "DISCONNECTED",
            TableError::EdgeGeometry { .. } => "EDGE_GEOMETRY",
            TableError::SuccessorSides { .. } => "SUCCESSOR_SIDES",
            TableError::Json(_) => "JSON_ERROR",
            TableError::Io(_) => "IO_ERROR",
        }
    }

    /// Returns true if this error means generated data is inconsistent
    ///
    /// Such errors must abort emission: writing a partial or inconsistent
    /// table is worse than writing nothing.
    pub fn is_fatal_construction(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Construction | ErrorCategory::Topology
        )
    }
}
