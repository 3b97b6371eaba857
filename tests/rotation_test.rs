//! Rotation utilities: angle/axis construction, vector rotation, matrix
//! extraction and the matrix constructor.

use approx::assert_relative_eq;
use quaternion_math::prelude::*;

#[test]
fn angle_axis_constructor_normalises() {
    let r = Quaternion::from_angle_axis(1.0, (2.0, 3.0, 4.0)).unwrap();
    assert!((r.abs() - 1.0).abs() < 1.0e-12);
}

#[test]
fn degenerate_axes_are_rejected() {
    assert!(Quaternion::from_angle_axis(1.0, (0.0, 0.0, 0.0)).is_err());
    assert!(Quaternion::from_angle_axis(1.0, (f64::NAN, 1.0, 0.0)).is_err());
    assert!(Quaternion::from_angle_axis(1.0, (f64::INFINITY, 1.0, 0.0)).is_err());
}

#[test]
fn eight_eighth_turns_return_home() {
    let r = Quaternion::from_angle_axis(consts::TAU / 8.0, (0.0, 0.0, 1.0)).unwrap();

    let start = Vec3::new(1.0, 0.0, 0.0);
    let mut t = start;
    for _ in 0..8 {
        t = r.rotate(t);
    }
    assert!((t - start).length() < 1.0e-9);
}

#[test]
fn six_sixth_turns_about_the_diagonal_return_home() {
    let r = Quaternion::from_angle_axis(consts::TAU / 6.0, (1.0, 1.0, 1.0)).unwrap();

    let start = Vec3::new(1.0, 0.0, 0.0);
    let mut t = start;
    for _ in 0..6 {
        t = r.rotate(t);
    }
    assert!((t - start).length() < 1.0e-9);
}

#[test]
fn rotate_agrees_with_the_extracted_matrix() {
    let r = Quaternion::from_angle_axis(0.54321, (0.12, -0.34, 0.56)).unwrap();
    let c = Vec3::new(2.7, -7.2, 3.4);

    let by_quaternion = r.rotate(c);
    let by_matrix = r.matrix().mul_vec(c);
    assert_relative_eq!(by_quaternion, by_matrix, epsilon = 1.0e-9);
}

#[test]
fn unnormalised_quaternions_scale_by_their_quadrance() {
    let r = Quaternion::from_angle_axis(0.75, (0.0, 1.0, 0.0)).unwrap() * 2.0;
    let v = Vec3::new(1.0, 2.0, 3.0);
    let rotated = r.rotate(v);
    // |r|^2 = 4, so the rotated vector is four times as long.
    assert!((rotated.length() - 4.0 * v.length()).abs() < 1.0e-9);
}

#[test]
fn angle_and_axis_recover_the_construction() {
    let angle = 0.54321;
    let axis_dir = Vec3::new(0.12, -0.34, -0.56).normalized().unwrap();

    let r = Quaternion::from_angle_axis(angle, axis_dir).unwrap();
    assert!((r.angle() - angle).abs() < 1.0e-9);
    assert!((r.axis() - axis_dir).length() < 1.0e-9);
    assert!((axis(&r) - axis_dir).length() < 1.0e-9);
}

#[test]
fn matrix_constructor_agrees_with_the_matrix() {
    let m = Mat3::new([
        [-0.6644335128480408, -0.7456022251949338, 0.0510434010306547],
        [0.4065266142924398, -0.4178917055696902, -0.8124670050457317],
        [0.6271078207743372, -0.5190798052327008, 0.5807684021391342],
    ]);

    let r = Quaternion::from_rotation_matrix(&m);
    assert!((r.abs() - 1.0).abs() < 1.0e-9);

    let c = Vec3::new(2.71, 6.23, -3.49);
    let by_quaternion = r.rotate(c);
    let by_matrix = m.mul_vec(c);
    assert_relative_eq!(by_quaternion, by_matrix, epsilon = 1.0e-9);
}

#[test]
fn matrix_extraction_round_trips_through_every_branch() {
    // Rotations near a half turn about each axis exercise the three
    // non-trace branches of the extraction; the small rotation takes the
    // trace branch.
    let cases = [
        (0.1, Vec3::UNIT_X),
        (3.1, Vec3::UNIT_X),
        (3.1, Vec3::UNIT_Y),
        (3.1, Vec3::UNIT_Z),
        (2.9, Vec3::new(1.0, 1.0, 0.0)),
        (3.14159, Vec3::new(-1.0, 2.0, 2.0)),
    ];
    for (angle, axis_dir) in cases {
        let q = Quaternion::from_angle_axis(angle, axis_dir).unwrap();
        let r = Quaternion::from_rotation_matrix(&q.matrix());
        // The extraction may return the antipodal representative.
        let matches = isclose_with(&q, &r, 1.0e-9, 1.0e-9)
            || isclose_with(&q, &-r, 1.0e-9, 1.0e-9);
        assert!(matches, "round trip failed for angle {angle}: {q} vs {r}");
    }
}

#[test]
fn matrices_compose_like_quaternions() {
    let qa = Quaternion::from_angle_axis(0.8, (1.0, 2.0, -1.0)).unwrap();
    let qb = Quaternion::from_angle_axis(-1.7, (0.5, -0.25, 3.0)).unwrap();

    let composed = (qa * qb).matrix();
    let multiplied = qa.matrix() * qb.matrix();
    assert_relative_eq!(composed, multiplied, epsilon = 1.0e-14);
}

#[test]
fn identity_quaternion_yields_the_identity_matrix() {
    assert_relative_eq!(consts::ONE.matrix(), Mat3::identity(), epsilon = 1.0e-15);
    let q = Quaternion::from_rotation_matrix(&Mat3::identity());
    assert!(isclose(&q, &consts::ONE));
}
