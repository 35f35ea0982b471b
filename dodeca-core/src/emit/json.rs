//! JSON rendering of generated tables.

use std::io::Write;

use serde_json::{Map, Value};
use tracing::debug;

use super::TableEmitter;
use crate::config::EmitConfig;
use crate::error::Result;
use crate::tables::{TableKind, TableSet};

/// Emits one pretty-printed JSON object keyed by the configured table names
#[derive(Debug, Clone, Default)]
pub struct JsonEmitter {
    config: EmitConfig,
}

impl JsonEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    /// Build the document without writing it
    pub fn document(&self, tables: &TableSet, kinds: &[TableKind]) -> Result<Value> {
        let mut doc = Map::new();
        for kind in kinds {
            let (key, value) = match kind {
                TableKind::HueConstant => (
                    &self.config.hue_constant_table,
                    serde_json::to_value(&tables.hue_constant)?,
                ),
                TableKind::HueBright => (
                    &self.config.hue_bright_table,
                    serde_json::to_value(&tables.hue_bright)?,
                ),
                TableKind::Vertices => (
                    &self.config.vertex_table,
                    serde_json::to_value(&tables.vertices)?,
                ),
                TableKind::Edges => (&self.config.edge_table, serde_json::to_value(&tables.edges)?),
                TableKind::Successors => (
                    &self.config.successor_table,
                    serde_json::to_value(&tables.successors)?,
                ),
            };
            doc.insert(key.clone(), value);
        }
        Ok(Value::Object(doc))
    }
}

impl TableEmitter for JsonEmitter {
    fn emit(&self, tables: &TableSet, kinds: &[TableKind], out: &mut dyn Write) -> Result<()> {
        let doc = self.document(tables, kinds)?;
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
        debug!(tables = kinds.len(), "emitted JSON document");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
