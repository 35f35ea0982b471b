//! Rendering of generated tables.
//!
//! Emitters write to any [`std::io::Write`] sink and never generate or
//! validate data themselves; they only see a finished [`TableSet`].

mod c_literal;
mod json;

pub use c_literal::CLiteralEmitter;
pub use json::JsonEmitter;

use std::io::Write;

use crate::error::Result;
use crate::tables::{TableKind, TableSet};

/// Output format backend
pub trait TableEmitter: Send + Sync {
    /// Write the selected tables, in the order given
    fn emit(&self, tables: &TableSet, kinds: &[TableKind], out: &mut dyn Write) -> Result<()>;

    /// Get emitter name (for logging/debugging)
    fn name(&self) -> &'static str;
}

/// Render into a string
pub fn emit_to_string(
    emitter: &dyn TableEmitter,
    tables: &TableSet,
    kinds: &[TableKind],
) -> Result<String> {
    let mut buf = Vec::new();
    emitter.emit(tables, kinds, &mut buf)?;
    // Emitters only write formatted ASCII
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmitConfig;

    #[test]
    fn test_emitters_are_object_safe() {
        let tables = TableSet::generate().unwrap();
        let emitters: Vec<Box<dyn TableEmitter>> = vec![
            Box::new(CLiteralEmitter::new(EmitConfig::default())),
            Box::new(JsonEmitter::new(EmitConfig::default())),
        ];
        for emitter in &emitters {
            let text = emit_to_string(emitter.as_ref(), &tables, &[TableKind::Edges]).unwrap();
            assert!(text.contains("dodecahedron_edge"), "{}", emitter.name());
        }
    }

    #[test]
    fn test_empty_selection() {
        let tables = TableSet::generate().unwrap();
        let c = CLiteralEmitter::new(EmitConfig::default());
        assert_eq!(emit_to_string(&c, &tables, &[]).unwrap(), "");
    }
}
