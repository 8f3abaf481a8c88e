//! Algebraic properties of `Vector3`, checked over seeded random vectors and
//! cross-checked against `nalgebra` as an independent implementation.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vector3_core::{ops, Vector3};

const SAMPLES: usize = 500;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper to draw a vector with components in [-100, 100)
fn random_vector(rng: &mut StdRng) -> Vector3 {
    Vector3::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    )
}

fn random_pairs(seed: u64) -> Vec<(Vector3, Vector3)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES)
        .map(|_| (random_vector(&mut rng), random_vector(&mut rng)))
        .collect()
}

#[test]
fn test_additive_identity_and_inverse() {
    for (a, _) in random_pairs(1) {
        assert_eq!(ops::add(a, Vector3::ZERO), a);
        assert_eq!(ops::subtract(a, a), Vector3::ZERO);
    }
}

#[test]
fn test_dot_product_is_commutative() {
    for (a, b) in random_pairs(2) {
        assert_eq!(ops::dot_product(a, b), ops::dot_product(b, a));
    }
}

#[test]
fn test_cross_product_is_anticommutative() {
    for (a, b) in random_pairs(3) {
        assert_eq!(
            ops::cross_product(a, b),
            ops::scalar_multiply(ops::cross_product(b, a), -1.0)
        );
    }
}

#[test]
fn test_length_is_root_of_self_dot() {
    for (a, _) in random_pairs(4) {
        assert_eq!(ops::squared_length(a), ops::dot_product(a, a));
        assert_eq!(ops::length(a), ops::squared_length(a).sqrt());
        assert!(ops::length(a) >= 0.0);
    }
}

#[test]
fn test_cross_product_is_perpendicular_to_both_inputs() {
    for (a, b) in random_pairs(5) {
        let c = ops::cross_product(a, b);
        assert_abs_diff_eq!(ops::dot_product(a, c), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ops::dot_product(b, c), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_normalize_yields_unit_length_in_same_direction() {
    for (a, _) in random_pairs(6) {
        let n = ops::normalize(a);
        assert_relative_eq!(ops::length(n), 1.0, max_relative = 1e-12);

        // Same direction: parallel and positively oriented
        let c = ops::cross_product(a, n);
        assert_abs_diff_eq!(ops::length(c), 0.0, epsilon = 1e-9);
        assert!(ops::dot_product(a, n) > 0.0);
    }
}

#[test]
fn test_scalar_ops_match_vector_ops_with_splat() {
    for (a, b) in random_pairs(7) {
        let s = b.x;
        assert_eq!(ops::scalar_add(a, s), ops::add(a, Vector3::splat(s)));
        assert_eq!(ops::scalar_subtract(a, s), ops::subtract(a, Vector3::splat(s)));
        assert_eq!(ops::scalar_multiply(a, s), ops::multiply(a, Vector3::splat(s)));
        assert_eq!(ops::scalar_divide(a, s), ops::divide(a, Vector3::splat(s)));
    }
}

#[test]
fn test_matches_nalgebra() {
    for (a, b) in random_pairs(8) {
        let na: nalgebra::Vector3<f64> = a.into();
        let nb: nalgebra::Vector3<f64> = b.into();

        assert_relative_eq!(ops::dot_product(a, b), na.dot(&nb), epsilon = 1e-9);
        assert_relative_eq!(ops::length(a), na.norm(), max_relative = 1e-12);

        let ours = ops::cross_product(a, b);
        let theirs = Vector3::from(na.cross(&nb));
        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-9);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-9);
        assert_abs_diff_eq!(ours.z, theirs.z, epsilon = 1e-9);

        let ours = ops::normalize(a);
        let theirs = Vector3::from(na.normalize());
        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-12);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-12);
        assert_abs_diff_eq!(ours.z, theirs.z, epsilon = 1e-12);
    }
}

#[test]
fn test_nan_propagates_without_error() {
    let a = Vector3::new(f64::NAN, 1.0, 2.0);
    let b = Vector3::new(3.0, 4.0, 5.0);

    assert!(ops::add(a, b).x.is_nan());
    assert!(ops::dot_product(a, b).is_nan());
    assert!(ops::length(a).is_nan());

    let c = ops::cross_product(a, b);
    assert!(c.x.is_finite());
    assert!(c.y.is_nan());
    assert!(c.z.is_nan());
}
