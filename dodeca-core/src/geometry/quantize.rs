//! Normalization of real vertices into the signed fixed-point range.

use tracing::debug;

use super::constants::QUANT_RANGE;
use super::{Vertex3, Vertex3i};
use crate::error::{Result, TableError};

/// Largest absolute coordinate over all vertices (0.0 when empty)
pub fn scale(vertices: &[Vertex3]) -> f64 {
    vertices.iter().map(Vertex3::max_abs).fold(0.0, f64::max)
}

/// Map vertices onto `-16384..=16384`
///
/// Each coordinate is divided by [`scale`], multiplied by 16384 and
/// truncated toward zero. The coordinate that defines the scale maps to
/// exactly ±16384.
pub fn quantize(vertices: &[Vertex3]) -> Result<Vec<Vertex3i>> {
    let high = scale(vertices);
    if !(high > 0.0 && high.is_finite()) {
        return Err(TableError::DegenerateVertices);
    }

    let range = f64::from(QUANT_RANGE);
    let convert = |c: f64| (c / high * range) as i32;

    let quantized: Vec<Vertex3i> = vertices
        .iter()
        .map(|v| Vertex3i::new(convert(v.x), convert(v.y), convert(v.z)))
        .collect();

    debug!(count = quantized.len(), scale = high, "quantized vertices");
    Ok(quantized)
}
