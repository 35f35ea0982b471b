//! Fixed-point arithmetic on the Q15 scale
//!
//! Colors, hues, fractions and interpolation parameters are all expressed
//! as integers in `0..=FIXMAX`, where `FIXMAX` (32768) means 1.0. Values are
//! held in an `i32` so that `FIXMAX` itself fits; every product widens to
//! `i64` before shifting back down.

use crate::error::{Result, TableError};

/// A Q15 fixed-point scalar (32768 = 1.0)
pub type Fixed = i32;

/// 1.0 in fixed-point
pub const FIXMAX: Fixed = 32768;

/// 0.5 in fixed-point
pub const FIXHALF: Fixed = 16384;

/// Number of fractional bits
pub const FRAC_BITS: u32 = 15;

/// Mask selecting the fractional bits of a scaled spline input
const FRAC_MASK: i64 = (1 << FRAC_BITS) - 1;

/// Linear interpolation from `a` to `b` by fraction `t`
///
/// Computes `(b*t + a*(FIXMAX - t)) >> 15`, i.e. `a + floor((b-a)*t / FIXMAX)`.
/// `t` is saturated into `0..=FIXMAX`; `t == FIXMAX` yields `b`.
#[inline]
pub fn lerp(a: Fixed, b: Fixed, t: Fixed) -> Fixed {
    let t = i64::from(t.clamp(0, FIXMAX));
    let (a, b) = (i64::from(a), i64::from(b));
    ((b * t + a * (i64::from(FIXMAX) - t)) >> FRAC_BITS) as Fixed
}

/// Fixed-point multiply, `(a*b) >> 15`
///
/// The shift is arithmetic, so negative products round toward negative
/// infinity rather than toward zero.
#[inline]
pub fn mul(a: Fixed, b: Fixed) -> Fixed {
    ((i64::from(a) * i64::from(b)) >> FRAC_BITS) as Fixed
}

/// Fixed-point square
#[inline]
pub fn sqr(x: Fixed) -> Fixed {
    mul(x, x)
}

/// Saturate an integer into `0..=FIXMAX`
#[inline]
pub fn clamp(x: i32) -> Fixed {
    x.clamp(0, FIXMAX)
}

/// Inverse of [`lerp`]: where `t` falls between `a` and `b`
///
/// Returns 0 at or before `a` and `FIXMAX` at or past `b`. Descending ranges
/// (`b < a`) are handled by mirroring. A degenerate range yields 0 for
/// `t <= a` and `FIXMAX` otherwise.
pub fn unlerp(a: i32, b: i32, t: i32) -> Fixed {
    let mut n = i64::from(t) - i64::from(a);
    let mut d = i64::from(b) - i64::from(a);
    if d < 0 {
        d = -d;
        n = -n;
    }
    if n <= 0 {
        return 0;
    }
    if n >= d {
        return FIXMAX;
    }
    (n * i64::from(FIXMAX) / d) as Fixed
}

/// Piecewise-linear spline through `points`
///
/// The input range `0..FIXMAX` is split into `N = points.len() - 1` equal
/// segments. `i` is scaled by `N`; the integer part selects the segment and
/// the 15-bit remainder interpolates inside it. Inputs that land at or past
/// the last segment (including `i >= FIXMAX`) return the final control
/// point. Negative inputs are treated as 0.
///
/// ```rust
/// use dodeca_core::fixed::{spline, FIXMAX};
///
/// let ramp = [0, FIXMAX, 0];
/// assert_eq!(spline(0, &ramp).unwrap(), 0);
/// assert_eq!(spline(FIXMAX / 2, &ramp).unwrap(), FIXMAX);
/// ```
pub fn spline(i: Fixed, points: &[Fixed]) -> Result<Fixed> {
    let segments = match points.len() {
        0 => return Err(TableError::EmptySpline),
        n => n - 1,
    };

    let ix = i64::from(i.max(0)) * segments as i64;
    let sector = (ix >> FRAC_BITS) as usize;
    if sector >= segments {
        return Ok(points[segments]);
    }

    let offset = (ix & FRAC_MASK) as Fixed;
    Ok(lerp(points[sector], points[sector + 1], offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(100, 900, 0), 100);
        assert_eq!(lerp(100, 900, FIXMAX), 900);
        assert_eq!(lerp(0, FIXMAX, FIXHALF), FIXHALF);
    }

    #[test]
    fn test_lerp_floor_semantics() {
        // (3 * 16384 + 0) >> 15 = 1.5 -> 1
        assert_eq!(lerp(0, 3, FIXHALF), 1);
        // (-3 * 16384) >> 15 = -1.5 -> -2
        assert_eq!(lerp(0, -3, FIXHALF), -2);
    }

    #[test]
    fn test_lerp_full_range_operands() {
        // Operands far outside the fixed range still interpolate without overflow
        let a = -2_000_000_000;
        let b = 2_000_000_000;
        assert_eq!(lerp(a, b, FIXHALF), 0);
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul(FIXMAX, FIXMAX), FIXMAX);
        assert_eq!(mul(FIXHALF, FIXHALF), 8192);
        assert_eq!(mul(FIXMAX, 1234), 1234);
        // -1 * 1 >> 15 floors to -1, not 0
        assert_eq!(mul(-1, 1), -1);
        assert_eq!(sqr(FIXHALF), 8192);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-5), 0);
        assert_eq!(clamp(40000), FIXMAX);
        assert_eq!(clamp(1234), 1234);
    }

    #[test]
    fn test_unlerp() {
        assert_eq!(unlerp(0, 100, 50), FIXHALF);
        assert_eq!(unlerp(0, 100, -10), 0);
        assert_eq!(unlerp(0, 100, 150), FIXMAX);
        // Descending range
        assert_eq!(unlerp(100, 0, 25), 3 * FIXMAX / 4);
        // Degenerate range
        assert_eq!(unlerp(7, 7, 7), 0);
        assert_eq!(unlerp(7, 7, 8), FIXMAX);
    }

    #[test]
    fn test_unlerp_inverts_lerp() {
        for t in [0, 1024, FIXHALF, 30000] {
            let v = lerp(0, 1 << 20, t);
            assert_eq!(unlerp(0, 1 << 20, v), t);
        }
    }

    #[test]
    fn test_spline_empty() {
        assert!(matches!(spline(0, &[]), Err(TableError::EmptySpline)));
    }

    #[test]
    fn test_spline_single_point() {
        assert_eq!(spline(0, &[42]).unwrap(), 42);
        assert_eq!(spline(FIXMAX - 1, &[42]).unwrap(), 42);
    }

    #[test]
    fn test_spline_endpoints() {
        let two = [1000, 20000, 5000];
        assert_eq!(spline(0, &two).unwrap(), 1000);
        // Last input stays within one step of the final control point
        let last = spline(FIXMAX - 1, &two).unwrap();
        assert!((last - 5000).abs() <= 1, "got {}", last);

        let six = [0, 100, 200, 300, 400, 500, 600];
        assert_eq!(spline(0, &six).unwrap(), 0);
        let last = spline(FIXMAX - 1, &six).unwrap();
        assert!((last - 600).abs() <= 1, "got {}", last);
    }

    #[test]
    fn test_spline_clamps_past_end() {
        let points = [0, FIXMAX, 7];
        assert_eq!(spline(FIXMAX, &points).unwrap(), 7);
        assert_eq!(spline(i32::MAX, &points).unwrap(), 7);
        assert_eq!(spline(-500, &points).unwrap(), 0);
    }

    #[test]
    fn test_spline_segment_boundaries() {
        // 4 segments: each boundary lands exactly on a control point
        let points = [0, FIXMAX / 3, 2 * FIXMAX / 3, FIXMAX, 0];
        assert_eq!(spline(FIXMAX / 4, &points).unwrap(), FIXMAX / 3);
        assert_eq!(spline(FIXMAX / 2, &points).unwrap(), 2 * FIXMAX / 3);
        assert_eq!(spline(3 * FIXMAX / 4, &points).unwrap(), FIXMAX);
    }

    proptest! {
        #[test]
        fn lerp_stays_between_operands(
            a in 0..=FIXMAX,
            b in 0..=FIXMAX,
            t in 0..=FIXMAX,
        ) {
            let v = lerp(a, b, t);
            prop_assert!(v >= a.min(b) && v <= a.max(b));
        }

        #[test]
        fn spline_stays_within_control_hull(
            points in proptest::collection::vec(0..=FIXMAX, 1..10),
            i in 0..FIXMAX,
        ) {
            let v = spline(i, &points).unwrap();
            let lo = *points.iter().min().unwrap();
            let hi = *points.iter().max().unwrap();
            prop_assert!(v >= lo && v <= hi);
        }
    }
}
