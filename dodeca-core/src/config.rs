//! Emitter configuration.
//!
//! Type and table names default to the identifiers the renderer's headers
//! declare. Every field may be omitted from a config file.
//!
//! ```rust
//! use dodeca_core::config::EmitConfig;
//!
//! let config = EmitConfig::from_json(r#"{ "rgb_type": "Color" }"#).unwrap();
//! assert_eq!(config.rgb_type, "Color");
//! assert_eq!(config.vertex_table, "dodecahedron_vertex");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Names and layout used when rendering tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// C type of a hue table entry
    pub rgb_type: String,
    /// C type of a vertex table entry
    pub vector_type: String,
    /// C type of an edge table entry
    pub edge_type: String,
    /// C type of a successor table entry
    pub successor_type: String,

    /// Name of the constant-brightness hue table
    pub hue_constant_table: String,
    /// Name of the full-brightness hue table
    pub hue_bright_table: String,
    /// Name of the vertex table
    pub vertex_table: String,
    /// Name of the edge table
    pub edge_table: String,
    /// Name of the successor table
    pub successor_table: String,

    /// Leading spaces before each hue row
    pub row_indent: usize,
    /// Leading spaces before ring and strand groups
    pub group_indent: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            rgb_type: "RGB".to_string(),
            vector_type: "Vector".to_string(),
            edge_type: "DodecahedronEdge".to_string(),
            successor_type: "SuccessorEdges".to_string(),
            hue_constant_table: "hue_constant_table".to_string(),
            hue_bright_table: "hue_bright_table".to_string(),
            vertex_table: "dodecahedron_vertex".to_string(),
            edge_table: "dodecahedron_edge".to_string(),
            successor_table: "successor_edges".to_string(),
            row_indent: 2,
            group_indent: 4,
        }
    }
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), "loaded emit config");
        Ok(config)
    }

    pub fn row_indent(mut self, indent: usize) -> Self {
        self.row_indent = indent;
        self
    }

    pub fn group_indent(mut self, indent: usize) -> Self {
        self.group_indent = indent;
        self
    }
}
