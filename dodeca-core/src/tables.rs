//! The full set of generated tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::geometry::{Dodecahedron, Vertex3i};
use crate::hue::{hue_bright_table, hue_constant_table, Rgb};
use crate::topology::{successor_table, Edge, SuccessorEdges, Topology};

/// One emittable table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    HueConstant,
    HueBright,
    Vertices,
    Edges,
    Successors,
}

impl TableKind {
    /// The tables the renderer headers always carry, in header order
    pub const STANDARD: [TableKind; 4] = [
        TableKind::HueConstant,
        TableKind::HueBright,
        TableKind::Vertices,
        TableKind::Edges,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::HueConstant => "hue-constant",
            TableKind::HueBright => "hue-bright",
            TableKind::Vertices => "vertices",
            TableKind::Edges => "edges",
            TableKind::Successors => "successors",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hue-constant" => Ok(TableKind::HueConstant),
            "hue-bright" => Ok(TableKind::HueBright),
            "vertices" => Ok(TableKind::Vertices),
            "edges" => Ok(TableKind::Edges),
            "successors" => Ok(TableKind::Successors),
            other => Err(format!("unknown table '{}'", other)),
        }
    }
}

/// Every generated table, validated and ready to emit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSet {
    pub hue_constant: Vec<Rgb>,
    pub hue_bright: Vec<Rgb>,
    pub vertices: Vec<Vertex3i>,
    pub edges: Vec<Edge>,
    pub successors: Vec<SuccessorEdges>,
}

impl TableSet {
    /// Generate and validate all tables
    ///
    /// Any failed check aborts generation; no partial set is returned.
    pub fn generate() -> Result<Self> {
        let hue_constant = hue_constant_table()?;
        let hue_bright = hue_bright_table()?;

        let solid = Dodecahedron::build()?;
        let vertices = solid.quantized()?;

        let topology = Topology::build()?;
        topology.check_geometry(solid.vertices())?;
        debug!("edges coincide with nearest-neighbour vertex pairs");
        let successors = successor_table(&topology, &vertices)?;

        info!(
            hues = hue_constant.len(),
            vertices = vertices.len(),
            edges = topology.edges().len(),
            "generated tables"
        );

        Ok(Self {
            hue_constant,
            hue_bright,
            vertices,
            edges: topology.edges().to_vec(),
            successors,
        })
    }

    /// Number of rows in one table
    pub fn len_of(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::HueConstant => self.hue_constant.len(),
            TableKind::HueBright => self.hue_bright.len(),
            TableKind::Vertices => self.vertices.len(),
            TableKind::Edges => self.edges.len(),
            TableKind::Successors => self.successors.len(),
        }
    }
}
