//! Cross-checks between vertex constructions.

use super::Vertex3;
use crate::error::{Result, TableError};

/// Compare two vertex lists in order, up to a uniform scale
///
/// `b` is scaled by `a[0].y / b[0].y`; every component must then be within
/// `tolerance` of the matching component of `a`. The first offending index
/// is reported. A scale that is not finite fails at index 0.
pub fn compare_ordered(a: &[Vertex3], b: &[Vertex3], tolerance: f64) -> Result<()> {
    if a.len() != b.len() {
        return Err(TableError::ConstructionMismatch {
            index: a.len().min(b.len()),
            delta: f64::INFINITY,
        });
    }
    let (Some(first_a), Some(first_b)) = (a.first(), b.first()) else {
        return Ok(());
    };

    let scaling = first_a.y / first_b.y;
    if !scaling.is_finite() {
        return Err(TableError::ConstructionMismatch {
            index: 0,
            delta: f64::INFINITY,
        });
    }

    for (index, (va, vb)) in a.iter().zip(b.iter()).enumerate() {
        let delta = va.max_component_delta(&(*vb * scaling));
        if delta.is_nan() || delta > tolerance {
            return Err(TableError::ConstructionMismatch { index, delta });
        }
    }
    Ok(())
}

/// Compare two vertex sets regardless of order, up to a uniform scale
///
/// `b` is scaled by the ratio of circumradii; each vertex of `a` must then
/// match a distinct vertex of `b` within `tolerance` per component. The
/// reported index is into `a`, with the distance to its closest unused
/// candidate.
pub fn compare_unordered(a: &[Vertex3], b: &[Vertex3], tolerance: f64) -> Result<()> {
    if a.len() != b.len() {
        return Err(TableError::ConstructionMismatch {
            index: a.len().min(b.len()),
            delta: f64::INFINITY,
        });
    }
    if a.is_empty() {
        return Ok(());
    }

    let radius = |vs: &[Vertex3]| vs.iter().map(Vertex3::norm).fold(0.0, f64::max);
    let scaling = radius(a) / radius(b);
    if !scaling.is_finite() {
        return Err(TableError::ConstructionMismatch {
            index: 0,
            delta: f64::INFINITY,
        });
    }

    let scaled: Vec<Vertex3> = b.iter().map(|v| *v * scaling).collect();
    let mut used = vec![false; scaled.len()];

    for (index, va) in a.iter().enumerate() {
        let best = scaled
            .iter()
            .enumerate()
            .filter(|(j, _)| !used[*j])
            .map(|(j, vb)| (j, va.max_component_delta(vb)))
            .min_by(|(_, d1), (_, d2)| d1.total_cmp(d2));

        match best {
            Some((j, delta)) if delta <= tolerance => used[j] = true,
            Some((_, delta)) => return Err(TableError::ConstructionMismatch { index, delta }),
            None => {
                return Err(TableError::ConstructionMismatch {
                    index,
                    delta: f64::INFINITY,
                })
            }
        }
    }
    Ok(())
}
