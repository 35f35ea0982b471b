//! C/C++ array literals in the layout of the renderer's headers.

use std::io::Write;

use tracing::debug;

use super::TableEmitter;
use crate::config::EmitConfig;
use crate::error::Result;
use crate::geometry::constants::RING_SIZE;
use crate::geometry::Vertex3i;
use crate::hue::Rgb;
use crate::tables::{TableKind, TableSet};
use crate::topology::{DirectedEdge, Edge, SuccessorEdges, EDGES_PER_STRIP};

/// Emits tables as C initializer lists
///
/// Hue tables get one `{r, g, b},` row per sample. Vertices are grouped
/// five to a line under `// Ring N` comments and edges six to a line under
/// `// Strand N` comments. Consecutive tables are separated by a blank line.
#[derive(Debug, Clone, Default)]
pub struct CLiteralEmitter {
    config: EmitConfig,
}

impl CLiteralEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    fn write_hue_table(&self, name: &str, rows: &[Rgb], out: &mut dyn Write) -> Result<()> {
        let indent = " ".repeat(self.config.row_indent);
        writeln!(out, "{} {}[] = {{", self.config.rgb_type, name)?;
        for rgb in rows {
            writeln!(out, "{}{{{}, {}, {}}},", indent, rgb.r, rgb.g, rgb.b)?;
        }
        writeln!(out, "}};")?;
        Ok(())
    }

    fn write_vertex_table(&self, vertices: &[Vertex3i], out: &mut dyn Write) -> Result<()> {
        let indent = " ".repeat(self.config.group_indent);
        writeln!(
            out,
            "{} {}[{}] = {{",
            self.config.vector_type,
            self.config.vertex_table,
            vertices.len()
        )?;
        for (ring, group) in vertices.chunks(RING_SIZE).enumerate() {
            writeln!(out, "{}// Ring {}", indent, ring)?;
            write!(out, "{}", indent)?;
            for v in group {
                write!(out, "{{{:6},{:6},{:6}}}, ", v.x, v.y, v.z)?;
            }
            writeln!(out)?;
        }
        writeln!(out, "}};")?;
        Ok(())
    }

    fn write_edge_table(&self, edges: &[Edge], out: &mut dyn Write) -> Result<()> {
        let indent = " ".repeat(self.config.group_indent);
        writeln!(out, "{} {}[] = {{", self.config.edge_type, self.config.edge_table)?;
        for (strand, group) in edges.chunks(EDGES_PER_STRIP).enumerate() {
            writeln!(out, "{}// Strand {}", indent, strand)?;
            write!(out, "{}", indent)?;
            for e in group {
                write!(out, "{{{:2}, {:2}}}, ", e.v1, e.v2)?;
            }
            writeln!(out)?;
        }
        writeln!(out, "}};")?;
        Ok(())
    }

    fn write_successor_table(&self, rows: &[SuccessorEdges], out: &mut dyn Write) -> Result<()> {
        let indent = " ".repeat(self.config.group_indent);
        let entry = |d: &DirectedEdge| format!("{{{:2}, {}}}", d.edge, d.backward);
        writeln!(
            out,
            "{} {}[] = {{",
            self.config.successor_type, self.config.successor_table
        )?;
        for (edge, s) in rows.iter().enumerate() {
            writeln!(
                out,
                "{}{{{}, {}, {}, {}}}, // {}",
                indent,
                entry(&s.left_forward),
                entry(&s.right_forward),
                entry(&s.left_backward),
                entry(&s.right_backward),
                edge
            )?;
        }
        writeln!(out, "}};")?;
        Ok(())
    }
}

impl TableEmitter for CLiteralEmitter {
    fn emit(&self, tables: &TableSet, kinds: &[TableKind], out: &mut dyn Write) -> Result<()> {
        for (i, kind) in kinds.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            match kind {
                TableKind::HueConstant => {
                    self.write_hue_table(&self.config.hue_constant_table, &tables.hue_constant, out)?
                }
                TableKind::HueBright => {
                    self.write_hue_table(&self.config.hue_bright_table, &tables.hue_bright, out)?
                }
                TableKind::Vertices => self.write_vertex_table(&tables.vertices, out)?,
                TableKind::Edges => self.write_edge_table(&tables.edges, out)?,
                TableKind::Successors => self.write_successor_table(&tables.successors, out)?,
            }
            debug!(table = %kind, rows = tables.len_of(*kind), "emitted C table");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::emit_to_string;

    fn render(kinds: &[TableKind]) -> String {
        let tables = TableSet::generate().unwrap();
        emit_to_string(&CLiteralEmitter::default(), &tables, kinds).unwrap()
    }

    #[test]
    fn test_hue_constant_layout() {
        let text = render(&[TableKind::HueConstant]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "RGB hue_constant_table[] = {");
        assert_eq!(lines[1], "  {32768, 0, 0},");
        assert_eq!(lines.len(), 27);
        assert_eq!(lines[26], "};");
    }

    #[test]
    fn test_vertex_layout() {
        let text = render(&[TableKind::Vertices]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Vector dodecahedron_vertex[20] = {");
        assert_eq!(lines[1], "    // Ring 0");
        assert_eq!(
            lines[2],
            "    {     0,-10125,-13254}, { -9630, -3129,-13254}, { -5951,  8192,-13254}, \
             {  5951,  8192,-13254}, {  9630, -3129,-13254}, "
        );
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_edge_layout() {
        let text = render(&[TableKind::Edges]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "DodecahedronEdge dodecahedron_edge[] = {");
        assert_eq!(lines[1], "    // Strand 0");
        assert_eq!(lines[2], "    { 0,  1}, { 1,  6}, { 6, 11}, {11, 16}, {16, 17}, {11,  7}, ");
        assert_eq!(lines[9], "    // Strand 4");
        assert_eq!(lines[10], "    { 4,  0}, { 0,  5}, { 5, 10}, {10, 15}, {15, 16}, {10,  6}, ");
    }

    #[test]
    fn test_successor_layout() {
        let text = render(&[TableKind::Successors]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "SuccessorEdges successor_edges[] = {");
        assert_eq!(
            lines[1],
            "    {{ 1, false}, { 6, false}, {24, true}, {25, false}}, // 0"
        );
        assert_eq!(lines.len(), 32);
    }

    #[test]
    fn test_tables_separated_by_blank_line() {
        let text = render(&[TableKind::HueConstant, TableKind::HueBright]);
        assert!(text.contains("};\n\nRGB hue_bright_table[] = {\n"));
    }

    #[test]
    fn test_configured_names() {
        let config = EmitConfig {
            rgb_type: "Color".to_string(),
            hue_bright_table: "bright".to_string(),
            ..EmitConfig::default()
        };
        let tables = TableSet::generate().unwrap();
        let emitter = CLiteralEmitter::new(config.row_indent(4));
        let text = emit_to_string(&emitter, &tables, &[TableKind::HueBright]).unwrap();
        assert!(text.starts_with("Color bright[] = {\n    {32768, 0, 0},\n"));
    }
}
