//! Dodecahedron vertex generation.
//!
//! Three independent constructions of the same solid:
//!
//! - [`ring_form`]: polar coordinates per latitude ring (trigonometric)
//! - [`closed_form`]: explicit coordinates from golden-ratio constants
//! - [`cube_form`]: the textbook `(±1, ±1, ±1)` construction, rotated
//!
//! The first two share vertex order and orientation. The third has its own
//! order and is only compared as a point set.

use std::f64::consts::PI;

use tracing::debug;

use super::constants::{MATCH_TOLERANCE, RINGS, RING_SIZE, VERTEX_COUNT};
use super::quantize::quantize;
use super::validate::{compare_ordered, compare_unordered};
use super::{GoldenConstants, Vertex3, Vertex3i, XRotation};
use crate::error::{Result, TableError};

/// Azimuth in degrees of the first vertex of rings 0 and 1
const BASE_AZIMUTH: f64 = 270.0;

/// Azimuth step between neighbouring vertices of a ring
const AZIMUTH_STEP: f64 = 72.0;

/// Twist applied to rings 2 and 3
const RING_TWIST: f64 = 36.0;

/// Trigonometric construction, ring by ring
///
/// Ring `r`, position `p` sits at azimuth `270° − 72°·p` (36° less for the
/// two northern rings) on a circle of radius `radii[r]` at height
/// `elevations[r]`.
pub fn ring_form(c: &GoldenConstants) -> Vec<Vertex3> {
    let elevation = c.elevations();
    let radius = c.radii();

    let mut vertices = Vec::with_capacity(VERTEX_COUNT);
    for ring in 0..RINGS {
        for point in 0..RING_SIZE {
            let mut degrees = BASE_AZIMUTH - AZIMUTH_STEP * point as f64;
            if ring > 1 {
                degrees -= RING_TWIST;
            }
            let radians = degrees * PI / 180.0;
            vertices.push(Vertex3::new(
                radians.cos() * radius[ring],
                radians.sin() * radius[ring],
                elevation[ring],
            ));
        }
    }
    vertices
}

/// Closed-form construction from the golden-ratio constants
pub fn closed_form(c: &GoldenConstants) -> Vec<Vertex3> {
    let GoldenConstants { phi, vb, vc, vd, ve, vf, vg } = *c;

    vec![
        // Ring 0 (south cap)
        Vertex3::new(0.0, -vg, -phi),
        Vertex3::new(-vb, -ve, -phi),
        Vertex3::new(-vc, 1.0, -phi),
        Vertex3::new(vc, 1.0, -phi),
        Vertex3::new(vb, -ve, -phi),
        // Ring 1
        Vertex3::new(0.0, -2.0, -ve),
        Vertex3::new(-vf, -vd, -ve),
        Vertex3::new(-vb, phi, -ve),
        Vertex3::new(vb, phi, -ve),
        Vertex3::new(vf, -vd, -ve),
        // Ring 2
        Vertex3::new(-vb, -phi, ve),
        Vertex3::new(-vf, vd, ve),
        Vertex3::new(0.0, 2.0, ve),
        Vertex3::new(vf, vd, ve),
        Vertex3::new(vb, -phi, ve),
        // Ring 3 (north cap)
        Vertex3::new(-vc, -1.0, phi),
        Vertex3::new(-vb, ve, phi),
        Vertex3::new(0.0, vg, phi),
        Vertex3::new(vb, ve, phi),
        Vertex3::new(vc, -1.0, phi),
    ]
}

/// Textbook Cartesian construction, aligned with the ring forms
///
/// Vertices `(±1, ±1, ±1)`, `(0, ±1/φ, ±φ)`, `(±φ, 0, ±1/φ)` and
/// `(±1/φ, ±φ, 0)`, rotated by [`XRotation::face_alignment`]. The result
/// has circumradius √3 and its own vertex order.
pub fn cube_form(c: &GoldenConstants) -> Vec<Vertex3> {
    let rotation = XRotation::face_alignment(c);
    let (a, b) = (c.vd, c.phi);

    let mut vertices = Vec::with_capacity(VERTEX_COUNT);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            vertices.push(Vertex3::new(x, y, 1.0));
            vertices.push(Vertex3::new(x, y, -1.0));
            vertices.push(Vertex3::new(0.0, x * a, y * b));
            vertices.push(Vertex3::new(y * b, 0.0, x * a));
            vertices.push(Vertex3::new(x * a, y * b, 0.0));
        }
    }

    vertices.into_iter().map(|v| rotation.apply(v)).collect()
}

/// A validated regular dodecahedron in canonical ring order
#[derive(Debug, Clone)]
pub struct Dodecahedron {
    vertices: Vec<Vertex3>,
}

impl Dodecahedron {
    /// Build the closed form and cross-check it
    ///
    /// The ring form must match the closed form vertex for vertex, and the
    /// rotated cube form must match it as a point set. Either mismatch is a
    /// construction error and nothing is returned.
    pub fn build() -> Result<Self> {
        Self::build_with(&GoldenConstants::new())
    }

    /// Build from an explicit constant bundle
    pub fn build_with(c: &GoldenConstants) -> Result<Self> {
        let closed = closed_form(c);
        let ring = ring_form(c);
        compare_ordered(&ring, &closed, MATCH_TOLERANCE)?;
        debug!("ring form matches closed form");

        let cube = cube_form(c);
        compare_unordered(&ring, &cube, MATCH_TOLERANCE)?;
        debug!("cube form matches ring form as a point set");

        Ok(Self { vertices: closed })
    }

    /// All 20 vertices, ring-major
    pub fn vertices(&self) -> &[Vertex3] {
        &self.vertices
    }

    /// One ring of five vertices
    pub fn ring(&self, ring: usize) -> Result<&[Vertex3]> {
        if ring >= RINGS {
            return Err(TableError::RingIndexOutOfRange { ring });
        }
        Ok(&self.vertices[ring * RING_SIZE..(ring + 1) * RING_SIZE])
    }

    /// Vertex at ring `ring`, position `pos` (taken modulo 5)
    pub fn vertex(&self, ring: usize, pos: usize) -> Result<Vertex3> {
        Ok(self.ring(ring)?[pos % RING_SIZE])
    }

    /// Circumradius
    pub fn circumradius(&self) -> f64 {
        self.vertices.iter().map(Vertex3::norm).fold(0.0, f64::max)
    }

    /// Shortest distance between two distinct vertices (the edge length)
    pub fn edge_length(&self) -> f64 {
        let mut best = f64::INFINITY;
        for (i, a) in self.vertices.iter().enumerate() {
            for b in &self.vertices[i + 1..] {
                best = best.min(a.distance(b));
            }
        }
        best
    }

    /// Quantized vertex table
    pub fn quantized(&self) -> Result<Vec<Vertex3i>> {
        quantize(&self.vertices)
    }
}
