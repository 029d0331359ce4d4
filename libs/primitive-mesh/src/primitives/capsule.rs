//! # Capsule Primitive
//!
//! Open cylinder band closed by two ellipsoidal caps.

use std::f32::consts::FRAC_PI_2;

use config::constants::{DEFAULT_CAPSULE_HEIGHT, DEFAULT_CAPSULE_RADIUS, DEFAULT_SEGMENTS};
use glam::Vec3;

use super::{clamp_segments, segment_angle};
use crate::math::{face_normal, normalize_or, ring_point};
use crate::mesh::{orient, Mesh, MeshBuilder, Vertex};

/// Capsule along the Y axis, centred on the origin.
///
/// The cylindrical band spans `height`; each cap adds `cap_radius` above or
/// below it. Caps are half ellipsoids with horizontal radius
/// `cylinder_radius` and vertical radius `cap_radius`, so they always meet
/// the band without a seam.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::Capsule;
///
/// let mesh = Capsule { segments: 8, ..Capsule::default() }.generate();
/// // 8 x 8 band quads plus two caps of 4 x 8 quads
/// assert_eq!(mesh.triangle_count(), 2 * 64 + 2 * 2 * 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    pub cylinder_radius: f32,
    /// Vertical cap radius; `None` uses `cylinder_radius` (hemispheres).
    pub cap_radius: Option<f32>,
    /// Height of the cylindrical band, excluding the caps.
    pub height: f32,
    /// Segments around the axis, also used as the band's row count.
    pub segments: u32,
    /// Latitude rows per cap; `None` uses `segments / 2`. At least 1.
    pub cap_subdivisions: Option<u32>,
    pub flat_normals: bool,
}

impl Default for Capsule {
    fn default() -> Self {
        Self {
            cylinder_radius: DEFAULT_CAPSULE_RADIUS,
            cap_radius: None,
            height: DEFAULT_CAPSULE_HEIGHT,
            segments: DEFAULT_SEGMENTS,
            cap_subdivisions: None,
            flat_normals: false,
        }
    }
}

impl Capsule {
    /// Generates the mesh.
    pub fn generate(&self) -> Mesh {
        let segments = clamp_segments(self.segments);
        let cap_subdivisions = self.cap_subdivisions.unwrap_or(segments / 2).max(1);
        let quads = (segments as usize) * (segments as usize + 2 * cap_subdivisions as usize);
        let mut builder = MeshBuilder::with_capacity(6 * quads, 2 * quads);

        self.band(&mut builder, segments);
        for cap in [Cap::Bottom, Cap::Top] {
            self.cap(&mut builder, cap, segments, cap_subdivisions);
        }

        builder.build()
    }

    fn cap_radius(&self) -> f32 {
        self.cap_radius.unwrap_or(self.cylinder_radius)
    }

    fn band(&self, builder: &mut MeshBuilder, segments: u32) {
        let row_y = |row: u32| self.height * (row as f32 / segments as f32 - 0.5);

        for row in 0..segments {
            let (y0, y1) = (row_y(row), row_y(row + 1));
            for col in 0..segments {
                let (angle, next_angle) = (segment_angle(col, segments), segment_angle(col + 1, segments));
                let normal = self.band_normal(angle);
                let next_normal = self.band_normal(next_angle);

                self.add_quad(
                    builder,
                    [
                        ring_point(angle, self.cylinder_radius, y0),
                        ring_point(next_angle, self.cylinder_radius, y0),
                        ring_point(angle, self.cylinder_radius, y1),
                        ring_point(next_angle, self.cylinder_radius, y1),
                    ],
                    [normal, next_normal, normal, next_normal],
                    false,
                );
            }
        }
    }

    fn band_normal(&self, angle: f32) -> Vec3 {
        let rim = ring_point(angle, self.cylinder_radius, 0.0);
        normalize_or(rim, ring_point(angle, 1.0, 0.0))
    }

    /// Latitude rows from the pole (row 0) down to the band rim.
    fn cap(&self, builder: &mut MeshBuilder, cap: Cap, segments: u32, subdivisions: u32) {
        let sign = cap.sign();
        let centre_y = sign * self.height * 0.5;
        let cap_radius = self.cap_radius();
        let ring = |row: u32| {
            let phi = row as f32 / subdivisions as f32 * FRAC_PI_2;
            let (sin, cos) = phi.sin_cos();
            (sin * self.cylinder_radius, sign * cos * cap_radius + centre_y)
        };

        for row in 0..subdivisions {
            let (radius, y) = ring(row);
            let (next_radius, next_y) = ring(row + 1);
            for col in 0..segments {
                let (angle, next_angle) = (segment_angle(col, segments), segment_angle(col + 1, segments));
                let corners = [
                    ring_point(angle, radius, y),
                    ring_point(next_angle, radius, y),
                    ring_point(angle, next_radius, next_y),
                    ring_point(next_angle, next_radius, next_y),
                ];
                let normals = corners.map(|p| self.cap_normal(p, centre_y, sign));

                self.add_quad(builder, corners, normals, cap == Cap::Top);
            }
        }
    }

    /// Gradient of the cap ellipsoid at `p`, falling back to the pole axis.
    fn cap_normal(&self, p: Vec3, centre_y: f32, sign: f32) -> Vec3 {
        let horizontal = self.cylinder_radius * self.cylinder_radius;
        let vertical = self.cap_radius() * self.cap_radius();
        let gradient = Vec3::new(p.x / horizontal, (p.y - centre_y) / vertical, p.z / horizontal);
        normalize_or(gradient, Vec3::Y * sign)
    }

    /// Emits quad `[p00, p10, p01, p11]` as two triangles.
    fn add_quad(&self, builder: &mut MeshBuilder, corners: [Vec3; 4], normals: [Vec3; 4], flip: bool) {
        for triangle in [[0, 1, 2], [1, 3, 2]] {
            let [a, b, c] = orient(triangle, flip).map(|i| i as usize);
            let (pa, pb, pc) = (corners[a], corners[b], corners[c]);

            if self.flat_normals {
                let smooth = normalize_or(normals[a] + normals[b] + normals[c], normals[a]);
                let normal = face_normal(pa, pb, pc, smooth);
                builder.add_flat_triangle(
                    Vertex::new(pa, normal),
                    Vertex::new(pb, normal),
                    Vertex::new(pc, normal),
                );
            } else {
                builder.add_flat_triangle(
                    Vertex::new(pa, normals[a]),
                    Vertex::new(pb, normals[b]),
                    Vertex::new(pc, normals[c]),
                );
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cap {
    Bottom,
    Top,
}

impl Cap {
    fn sign(self) -> f32 {
        match self {
            Cap::Bottom => -1.0,
            Cap::Top => 1.0,
        }
    }
}
