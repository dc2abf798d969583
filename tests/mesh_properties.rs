//! Randomized count and range checks for every generator.

use primscape::prelude::*;
use rand::Rng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_well_formed(mesh: &Mesh) {
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.indices().len() % 3, 0);
    let vertex_count = mesh.vertex_count() as u32;
    assert!(mesh.indices().iter().all(|&i| i < vertex_count));
}

/// Unnormalised normal of the counter-clockwise triangle `[a, b, c]`.
fn face_normal(mesh: &Mesh, [a, b, c]: [u32; 3]) -> Vector3<f32> {
    let p = |i: u32| Vector3::from(mesh.positions()[i as usize]);
    (p(b) - p(a)).cross(p(c) - p(a))
}

/// Every triangle's front face must agree with the normal stored on its first
/// corner, so one cull mode serves every solid.
fn assert_faces_agree_with_normals(name: &str, mesh: &Mesh) {
    let opposed: Vec<_> = mesh
        .triangles()
        .filter(|&triangle| {
            let stored = Vector3::from(mesh.normals()[triangle[0] as usize]);
            face_normal(mesh, triangle).dot(stored) <= 0.0
        })
        .collect();
    assert!(
        opposed.is_empty(),
        "{}: {} of {} triangles face against their normals, first {:?}",
        name,
        opposed.len(),
        mesh.triangle_count(),
        opposed.first()
    );
}

#[test]
fn plane_counts_hold_for_random_sizes() {
    init_logger();
    let mut rng = rand::rng();

    for _ in 0..50 {
        let w = rng.random_range(1..40u32);
        let h = rng.random_range(1..40u32);
        let plane = generate_plane(w, h).unwrap();

        assert_well_formed(&plane);
        assert_eq!(plane.vertex_count() as u32, (w + 1) * (h + 1));
        assert_eq!(plane.indices().len() as u32, 6 * w * h);

        let corner = plane.positions()[plane.vertex_count() - 1];
        assert_eq!(corner, [w as f32, 0.0, h as f32]);
        assert_eq!(plane.tex_coords()[plane.vertex_count() - 1], [1.0, 1.0]);
    }
}

#[test]
fn cylinder_counts_hold_for_random_sizes() {
    init_logger();
    let mut rng = rand::rng();

    for _ in 0..50 {
        let radial = rng.random_range(3..64u32);
        let rings = rng.random_range(1..16u32);
        let radius = rng.random_range(0.1..10.0f32);
        let height = rng.random_range(0.1..10.0f32);
        let cylinder = generate_cylinder(radial, rings, radius, height).unwrap();

        assert_well_formed(&cylinder);
        assert_eq!(
            cylinder.vertex_count() as u32,
            (radial + 1) * (rings + 1) + 2
        );
        assert_eq!(
            cylinder.triangle_count() as u32,
            2 * radial * rings + 2 * radial
        );

        // Every body vertex lies on the mantle
        let body = (radial + 1) * (rings + 1);
        for p in &cylinder.positions()[..body as usize] {
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((r - radius).abs() < 1e-4 * radius.max(1.0));
            assert!(p[1] >= -1e-6 && p[1] <= height + 1e-4);
        }
    }
}

#[test]
fn cone_counts_hold_for_random_sizes() {
    init_logger();
    let mut rng = rand::rng();

    for _ in 0..50 {
        let radial = rng.random_range(3..128u32);
        let cone = generate_cone(radial, 1.0, 2.0).unwrap();

        assert_well_formed(&cone);
        assert_eq!(cone.vertex_count() as u32, radial + 2);
        assert_eq!(cone.indices().len() as u32, 6 * radial);

        let apex = radial + 1;
        assert_eq!(cone.positions()[apex as usize], [0.0, 2.0, 0.0]);
        // Every lateral triangle uses the apex as its middle corner
        assert!(cone
            .triangles()
            .skip(radial as usize)
            .all(|[_, middle, _]| middle == apex));
    }
}

#[test]
fn undersized_solids_are_rejected() {
    for radial in 0..3 {
        assert!(matches!(
            generate_cone(radial, 1.0, 1.0),
            Err(GeometryError::InvalidSegments { min: 3, .. })
        ));
        assert!(generate_cylinder(radial, 1, 1.0, 1.0).is_err());
    }
    assert!(generate_cone(8, 1.0, 0.0).is_err());
    assert!(generate_cone(8, f32::INFINITY, 1.0).is_err());
}

#[test]
fn interleaved_vertices_match_attributes() {
    let cone = generate_cone(6, 1.0, 1.0).unwrap();
    let vertices = cone.to_vertices();

    assert_eq!(vertices.len(), cone.vertex_count());
    for (i, vertex) in vertices.iter().enumerate() {
        assert_eq!(vertex.position, cone.positions()[i]);
        assert_eq!(vertex.normal, cone.normals()[i]);
        assert_eq!(vertex.tex_coords, cone.tex_coords()[i]);
        assert_eq!(vertex.color, cone.colors()[i]);
    }
}

#[test]
fn solid_faces_agree_with_stored_normals() {
    init_logger();
    let mut rng = rand::rng();

    for _ in 0..25 {
        let radial = rng.random_range(3..48u32);
        let rings = rng.random_range(1..8u32);
        let radius = rng.random_range(0.5..5.0f32);
        let height = rng.random_range(0.5..5.0f32);

        let plane = generate_plane(radial, rings).unwrap();
        assert_faces_agree_with_normals("plane", &plane);

        let cylinder = generate_cylinder(radial, rings, radius, height).unwrap();
        assert_faces_agree_with_normals("cylinder", &cylinder);

        let cone = generate_cone(radial, radius, height).unwrap();
        assert_faces_agree_with_normals("cone", &cone);
    }

    let samples = (0..36).map(|i| (i % 7) as f32 / 6.0).collect();
    let field = HeightField::from_samples(6, 6, samples).unwrap();
    let terrain = generate_terrain(&field, 10.0, 10.0, 2.0).unwrap();
    assert_faces_agree_with_normals("terrain", &terrain);
}

#[test]
fn cylinder_caps_face_away_from_each_other() {
    let cylinder = generate_cylinder(6, 2, 1.0, 2.0).unwrap();
    let bottom_center = 7 * 3;

    for triangle in cylinder.triangles().skip(2 * 6 * 2) {
        let face = face_normal(&cylinder, triangle);
        if triangle[0] == bottom_center {
            assert!(face.y < 0.0, "bottom cap {:?} faces up", triangle);
        } else {
            assert!(face.y > 0.0, "top cap {:?} faces down", triangle);
        }
    }
}
