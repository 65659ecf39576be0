// Rotation and projection properties: length preservation, identity,
// composition, and totality of the clamped perspective divide.

use glam::{Vec2, Vec3};
use gyro_core::{project, rotate_about_axis, rotate_x, rotate_y, rotate_z, Camera};

const VECTORS: [[f32; 3]; 4] = [
    [1.0, 2.0, -3.0],
    [0.5, 0.0, 0.0],
    [-1.0, 4.0, 2.0],
    [0.0, 0.0, 1.0],
];

const AXES: [[f32; 3]; 4] = [
    [0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
    [0.3, -0.2, 0.9],
];

#[test]
fn rotation_preserves_length() {
    for v in VECTORS.map(Vec3::from) {
        for axis in AXES.map(Vec3::from) {
            for i in 0..24 {
                let angle = i as f32 * 0.3 - 3.6;
                let rotated = rotate_about_axis(v, axis, angle);
                assert!(
                    (rotated.length() - v.length()).abs() < 1e-6,
                    "length changed for v={v:?} axis={axis:?} angle={angle}"
                );
            }
        }
        for angle in [-2.5f32, 0.7, 3.9] {
            assert!((rotate_x(v, angle).length() - v.length()).abs() < 1e-6);
            assert!((rotate_y(v, angle).length() - v.length()).abs() < 1e-6);
            assert!((rotate_z(v, angle).length() - v.length()).abs() < 1e-6);
        }
    }
}

#[test]
fn zero_angle_is_identity() {
    for v in VECTORS.map(Vec3::from) {
        for axis in AXES.map(Vec3::from) {
            let r = rotate_about_axis(v, axis, 0.0);
            assert!((r - v).length() < 1e-7, "identity failed for {v:?}");
        }
        assert!((rotate_x(v, 0.0) - v).length() < 1e-7);
        assert!((rotate_y(v, 0.0) - v).length() < 1e-7);
        assert!((rotate_z(v, 0.0) - v).length() < 1e-7);
    }
}

#[test]
fn rotations_about_fixed_axis_compose_additively() {
    let axis = Vec3::new(0.3, -0.2, 0.9);
    for v in VECTORS.map(Vec3::from) {
        for (a, b) in [(0.4f32, 1.1), (-0.7, 0.7), (2.0, 2.0)] {
            let two_step = rotate_about_axis(rotate_about_axis(v, axis, a), axis, b);
            let one_step = rotate_about_axis(v, axis, a + b);
            assert!(
                (two_step - one_step).length() < 1e-5,
                "composition mismatch at a={a} b={b} v={v:?}"
            );
        }
    }
}

#[test]
fn rodrigues_matches_axis_aligned_forms() {
    for v in VECTORS.map(Vec3::from) {
        for angle in [-1.2f32, 0.5, 2.7] {
            assert!((rotate_about_axis(v, Vec3::X, angle) - rotate_x(v, angle)).length() < 1e-5);
            assert!((rotate_about_axis(v, Vec3::Y, angle) - rotate_y(v, angle)).length() < 1e-5);
            assert!((rotate_about_axis(v, Vec3::Z, angle) - rotate_z(v, angle)).length() < 1e-5);
        }
    }
}

#[test]
fn degenerate_axis_does_not_produce_nan() {
    let r = rotate_about_axis(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 1.0);
    assert!(r.is_finite());
}

#[test]
fn projection_is_total_over_all_depths() {
    let camera = Camera::default();
    for i in 0..400 {
        let z = -10.0 + i as f32 * 0.05;
        let p = project(Vec3::new(1.3, -0.8, z), &camera);
        assert!(p.is_finite(), "non-finite projection at z={z}");
    }
    // The degenerate plane itself.
    let p = project(Vec3::new(0.5, 0.5, -camera.distance), &camera);
    assert!(p.is_finite());
}

#[test]
fn projection_clamp_preserves_sign_behind_camera() {
    let camera = Camera::default();
    let p = project(Vec3::new(1.0, 1.0, -10.0), &camera);
    assert!(p.x > 0.0 && p.y > 0.0, "sign flipped behind camera: {p:?}");
}

#[test]
fn projection_of_known_points() {
    let camera = Camera {
        distance: 3.5,
        focal_length: 1.0,
        min_depth: 0.1,
    };
    let center = project(Vec3::ZERO, &camera);
    assert!((center - Vec2::ZERO).length() < 1e-7);

    let p = project(Vec3::new(1.0, 0.0, 0.0), &camera);
    assert!((p.x - 1.0 / 3.5).abs() < 1e-6);
    assert!(p.y.abs() < 1e-7);

    // Nearer points project larger.
    let near = project(Vec3::new(1.0, 0.0, 1.0), &camera);
    assert!(near.x > p.x);
}
