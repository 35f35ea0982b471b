//! Dodecahedron geometry.
//!
//! The regular dodecahedron is built analytically from the golden ratio.
//! Its 20 vertices are ordered as four "latitude" rings of five, starting
//! at the south pole: ring 0 is the bottom pentagon, rings 1 and 2 sit just
//! below and just above the equator, ring 3 is the top pentagon. Flat index
//! `ring * 5 + pos` is the canonical vertex numbering used by the renderer.

mod quantize;
mod validate;
mod vertices;

pub use quantize::{quantize, scale};
pub use validate::{compare_ordered, compare_unordered};
pub use vertices::{closed_form, cube_form, ring_form, Dodecahedron};

use serde::{Deserialize, Serialize};
use std::ops::{Mul, Sub};

/// Constants for dodecahedron geometry
pub mod constants {
    /// Golden ratio φ = (1 + √5) / 2
    pub const PHI: f64 = 1.618_033_988_749_895;

    /// Number of vertex rings
    pub const RINGS: usize = 4;

    /// Vertices per ring
    pub const RING_SIZE: usize = 5;

    /// Total vertex count
    pub const VERTEX_COUNT: usize = RINGS * RING_SIZE;

    /// Absolute per-coordinate tolerance when cross-checking constructions
    pub const MATCH_TOLERANCE: f64 = 1e-4;

    /// Quantized coordinates span `-QUANT_RANGE..=QUANT_RANGE`
    pub const QUANT_RANGE: i32 = 16384;
}

/// Values derived from the golden ratio
///
/// Kept as one immutable bundle so every construction reads the same
/// floating-point constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenConstants {
    /// φ
    pub phi: f64,
    /// √(φ² − 2φ + 2)
    pub vb: f64,
    /// (φ − 1)·vb
    pub vc: f64,
    /// φ − 1 (also 1/φ)
    pub vd: f64,
    /// 2 − φ
    pub ve: f64,
    /// φ·vb
    pub vf: f64,
    /// 2φ − 2
    pub vg: f64,
}

impl GoldenConstants {
    /// Derive every constant from φ computed at double precision
    pub fn new() -> Self {
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let vb = (phi * phi - phi - phi + 2.0).sqrt();
        Self {
            phi,
            vb,
            vc: (phi - 1.0) * vb,
            vd: phi - 1.0,
            ve: 2.0 - phi,
            vf: phi * vb,
            vg: phi + phi - 2.0,
        }
    }

    /// Ring elevations, south to north
    pub fn elevations(&self) -> [f64; constants::RINGS] {
        [-self.phi, -self.ve, self.ve, self.phi]
    }

    /// Ring radii, south to north
    pub fn radii(&self) -> [f64; constants::RINGS] {
        [self.vg, 2.0, 2.0, self.vg]
    }
}

impl Default for GoldenConstants {
    fn default() -> Self {
        Self::new()
    }
}

/// A real-valued point in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex3 {
    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as an array
    pub const fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Vertex3) -> f64 {
        (*self - *other).norm()
    }

    /// Largest absolute component
    pub fn max_abs(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Largest absolute per-component difference
    pub fn max_component_delta(&self, other: &Vertex3) -> f64 {
        (*self - *other).max_abs()
    }
}

impl Sub for Vertex3 {
    type Output = Vertex3;

    fn sub(self, rhs: Vertex3) -> Vertex3 {
        Vertex3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vertex3 {
    type Output = Vertex3;

    fn mul(self, s: f64) -> Vertex3 {
        Vertex3::new(self.x * s, self.y * s, self.z * s)
    }
}

/// A quantized point, each component in `-16384..=16384`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vertex3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vertex3i {
    /// Create a new quantized point
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Components as an array
    pub const fn components(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

/// Rotation about the x-axis, stored as its cosine and sine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XRotation {
    pub cos: f64,
    pub sin: f64,
}

impl XRotation {
    /// No rotation
    pub const fn identity() -> Self {
        Self { cos: 1.0, sin: 0.0 }
    }

    /// Rotation by `angle` radians
    pub fn from_angle(angle: f64) -> Self {
        Self {
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    /// Rotation taking the face centred on `(0, −φ, 1)` of the canonical
    /// Cartesian dodecahedron to the +z pole
    ///
    /// `cos = 1/√(1+φ²)`, `sin = −φ/√(1+φ²)`. After it, the top face has a
    /// vertex on the +y axis, which is where the ring ordering puts its
    /// north-ring vertex 2.
    pub fn face_alignment(c: &GoldenConstants) -> Self {
        let n = (1.0 + c.phi * c.phi).sqrt();
        Self {
            cos: 1.0 / n,
            sin: -c.phi / n,
        }
    }

    /// Rotate one point
    #[inline]
    pub fn apply(&self, v: Vertex3) -> Vertex3 {
        Vertex3::new(
            v.x,
            self.cos * v.y - self.sin * v.z,
            self.sin * v.y + self.cos * v.z,
        )
    }
}

impl Default for XRotation {
    fn default() -> Self {
        Self::identity()
    }
}
