//! Cube-sphere tests.

use std::collections::{HashMap, HashSet};

use approx::assert_abs_diff_eq;
use config::constants::ConfigError;

use super::*;
use crate::error::MeshError;
use crate::weld::EdgeKey;

fn centroid(mesh: &Mesh, triangle: [u32; 3]) -> Vec3 {
    triangle
        .iter()
        .map(|&i| mesh.vertex(i).position)
        .sum::<Vec3>()
        / 3.0
}

fn winding_normal(mesh: &Mesh, [a, b, c]: [u32; 3]) -> Vec3 {
    let (a, b, c) = (
        mesh.vertex(a).position,
        mesh.vertex(b).position,
        mesh.vertex(c).position,
    );
    (b - a).cross(c - a)
}

fn smooth(level: u32) -> CubeSphere {
    CubeSphere::new().subdivisions(level).smooth_normals(true)
}

#[test]
fn test_smooth_level_zero_is_cube() {
    let mesh = smooth(0).generate().unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);

    let expected = 1.0 / 3f32.sqrt();
    for v in mesh.vertices() {
        assert_abs_diff_eq!(v.position.x.abs(), expected, epsilon = 1e-6);
        assert_abs_diff_eq!(v.position.y.abs(), expected, epsilon = 1e-6);
        assert_abs_diff_eq!(v.position.z.abs(), expected, epsilon = 1e-6);
    }
}

#[test]
fn test_flat_level_one() {
    let mesh = CubeSphere::new().subdivisions(1).generate().unwrap();
    assert_eq!(mesh.vertex_count(), 96);
    assert_eq!(mesh.triangle_count(), 48);
    assert!(mesh.validate());
}

#[test]
fn test_smooth_counts_per_level() {
    for level in 0..=4u32 {
        let mesh = smooth(level).generate().unwrap();
        let segments = 1usize << level;
        assert_eq!(mesh.vertex_count(), 6 * segments * segments + 2, "level {level}");
        assert_eq!(mesh.triangle_count(), 12 * segments * segments, "level {level}");
    }
}

#[test]
fn test_expected_counts_match_output() {
    for smooth_normals in [false, true] {
        let sphere = CubeSphere::new().subdivisions(3).smooth_normals(smooth_normals);
        let mesh = sphere.generate().unwrap();
        assert_eq!(sphere.expected_vertex_count(), Some(mesh.vertex_count() as u64));
        assert_eq!(sphere.expected_triangle_count(), Some(mesh.triangle_count() as u64));
    }
    assert_eq!(CubeSphere::new().subdivisions(3).segments(), Some(8));
}

#[test]
fn test_smooth_closed_manifold_and_euler() {
    let mesh = smooth(3).generate().unwrap();
    let mut edges: HashMap<EdgeKey, usize> = HashMap::new();
    for [a, b, c] in mesh.triangles() {
        for (p, q) in [(a, b), (b, c), (c, a)] {
            *edges.entry(EdgeKey::new(p, q)).or_insert(0) += 1;
        }
    }
    assert!(edges.values().all(|&uses| uses == 2));

    let euler = mesh.vertex_count() as i64 - edges.len() as i64 + mesh.triangle_count() as i64;
    assert_eq!(euler, 2);
}

#[test]
fn test_smooth_has_no_duplicate_positions() {
    let mesh = smooth(3).radius(2.5).generate().unwrap();
    let unique: HashSet<_> = mesh.positions().map(QuantizedPosition::new).collect();
    assert_eq!(unique.len(), mesh.vertex_count());
}

#[test]
fn test_positions_lie_on_sphere() {
    for smooth_normals in [false, true] {
        let mesh = CubeSphere::new()
            .subdivisions(2)
            .radius(4.0)
            .smooth_normals(smooth_normals)
            .generate()
            .unwrap();
        for p in mesh.positions() {
            assert_abs_diff_eq!(p.length(), 4.0, epsilon = 4e-5);
        }
    }
}

#[test]
fn test_smooth_normals_are_radial_units() {
    let mesh = smooth(2).radius(3.0).generate().unwrap();
    for v in mesh.vertices() {
        assert_abs_diff_eq!(v.normal.length(), 1.0, epsilon = 1e-5);
        assert!(v.normal.dot(v.position / 3.0) > 0.9999);
    }
}

#[test]
fn test_outward_winding() {
    for smooth_normals in [false, true] {
        let mesh = CubeSphere::new()
            .subdivisions(2)
            .smooth_normals(smooth_normals)
            .generate()
            .unwrap();
        for triangle in mesh.triangles() {
            assert!(winding_normal(&mesh, triangle).dot(centroid(&mesh, triangle)) > 0.0);
        }
    }
}

#[test]
fn test_flat_cells_share_one_outward_normal() {
    let mesh = CubeSphere::new().subdivisions(2).generate().unwrap();
    for cell in mesh.vertices().chunks(4) {
        let normal = cell[0].normal;
        assert!(cell.iter().all(|v| v.normal == normal));
        assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-5);

        let centre = cell.iter().map(|v| v.position).sum::<Vec3>() / 4.0;
        assert!(normal.dot(centre) > 0.0);
    }
}

#[test]
fn test_flat_tex_coords() {
    let mesh = CubeSphere::new().subdivisions(0).generate().unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    for cell in mesh.vertices().chunks(4) {
        let uvs: Vec<Vec2> = cell.iter().map(|v| v.tex_coord).collect();
        assert_eq!(
            uvs,
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::ONE]
        );
    }
}

#[test]
fn test_inward_faces() {
    for smooth_normals in [false, true] {
        let mesh = CubeSphere::new()
            .subdivisions(2)
            .smooth_normals(smooth_normals)
            .inward_faces(true)
            .generate()
            .unwrap();
        for v in mesh.vertices() {
            assert!(v.normal.dot(v.position) < 0.0);
        }
        for triangle in mesh.triangles() {
            assert!(winding_normal(&mesh, triangle).dot(centroid(&mesh, triangle)) < 0.0);
        }
    }
}

#[test]
fn test_inward_keeps_positions() {
    let outward = smooth(2).generate().unwrap();
    let inward = smooth(2).inward_faces(true).generate().unwrap();
    assert_eq!(
        outward.positions().collect::<Vec<_>>(),
        inward.positions().collect::<Vec<_>>()
    );
}

#[test]
fn test_zero_radius() {
    let mesh = smooth(1).radius(0.0).generate().unwrap();
    assert_eq!(mesh.vertex_count(), 26);

    let flat = CubeSphere::new().subdivisions(1).radius(0.0).generate().unwrap();
    for v in flat.vertices() {
        assert_eq!(v.position, Vec3::ZERO);
        assert_abs_diff_eq!(v.normal.length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_coarse_precision_merges_more() {
    let config = GeometryConfig::new(2.0, 1e-6).unwrap();
    let mesh = smooth(3).with_config(config).generate().unwrap();
    assert!(mesh.vertex_count() < 6 * 64 + 2);
    assert!(mesh.validate());
}

#[test]
fn test_invalid_config_rejected() {
    let config = GeometryConfig {
        weld_precision: 0.0,
        normal_epsilon: 1e-6,
    };
    let err = smooth(1).with_config(config).generate().unwrap_err();
    assert_eq!(err, MeshError::Config(ConfigError::InvalidPrecision(0.0)));

    let config = GeometryConfig {
        weld_precision: 1e6,
        normal_epsilon: f32::NAN,
    };
    let err = smooth(1).with_config(config).generate().unwrap_err();
    assert!(matches!(err, MeshError::Config(ConfigError::InvalidEpsilon(_))));
}

#[test]
fn test_non_finite_radius_rejected() {
    let err = CubeSphere::new().radius(f32::NAN).generate().unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { name: "radius", .. }));
}

#[test]
fn test_excessive_level_rejected_up_front() {
    for level in [15, 40, 64, u32::MAX] {
        let err = smooth(level).generate().unwrap_err();
        assert!(matches!(err, MeshError::TooManyVertices { .. }), "level {level}");
    }
    assert_eq!(CubeSphere::new().subdivisions(64).segments(), None);
}

#[test]
fn test_deterministic() {
    let a = smooth(3).generate().unwrap();
    let b = smooth(3).generate().unwrap();
    assert_eq!(a, b);
}
