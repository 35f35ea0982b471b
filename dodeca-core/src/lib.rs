//! # Dodeca Core - lookup tables for the LED dodecahedron
//!
//! Offline generator for the static tables the dodecahedron renderer is
//! compiled against:
//!
//! - **Hue wheel**: 25 fixed-point RGB samples around the color wheel, in a
//!   constant-brightness and a full-brightness profile
//! - **Vertices**: the 20 vertices of a regular dodecahedron, built from the
//!   golden ratio, cross-checked between independent constructions and
//!   quantized into `-16384..=16384`
//! - **Edges**: the 30 edges in LED wiring order, validated as a
//!   dodecahedron graph, plus left/right successor turns for every edge
//!
//! Everything is pure and deterministic. A failed check aborts generation
//! rather than producing a partial table.
//!
//! ## Example
//!
//! ```rust
//! use dodeca_core::{CLiteralEmitter, EmitConfig, TableKind, TableSet};
//! use dodeca_core::emit::emit_to_string;
//!
//! let tables = TableSet::generate().unwrap();
//! assert_eq!(tables.vertices[0].y, -10125);
//!
//! let emitter = CLiteralEmitter::new(EmitConfig::default());
//! let header = emit_to_string(&emitter, &tables, &[TableKind::Edges]).unwrap();
//! assert!(header.starts_with("DodecahedronEdge dodecahedron_edge[] = {"));
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod fixed;
pub mod geometry;
pub mod hue;
pub mod tables;
pub mod topology;

// Re-export main types
pub use config::EmitConfig;
pub use emit::{CLiteralEmitter, JsonEmitter, TableEmitter};
pub use error::{ErrorCategory, Result, TableError};
pub use fixed::{Fixed, FIXHALF, FIXMAX};
pub use geometry::{Dodecahedron, GoldenConstants, Vertex3, Vertex3i, XRotation};
pub use hue::{bright_hue, constant_hue, HueIndex, HueProfile, Rgb};
pub use tables::{TableKind, TableSet};
pub use topology::{DirectedEdge, Edge, SuccessorEdges, Topology};

/// Generate and validate every table
pub fn generate_tables() -> Result<TableSet> {
    TableSet::generate()
}
