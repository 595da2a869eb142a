use super::jacobian::{jacobian_add, jacobian_double, jacobian_multiply, JacobianPoint};
use super::point::shamirs_trick;
use super::{is_on_curve, multiply_base, EccPoint};
use crate::bigint::BigInt;
use crate::params::{Curve, Scheme};

fn curves() -> [&'static Curve; 2] {
    [Curve::get(Scheme::P256), Curve::get(Scheme::P384)]
}

/// n · G computed the slow way, by repeated Jacobian addition of G
fn repeated_addition(n: u32, curve: &Curve) -> Option<EccPoint> {
    let g = JacobianPoint::from_affine(&curve.g);
    let mut acc = JacobianPoint::infinity();
    for _ in 0..n {
        acc = jacobian_add(&acc, &g, curve).unwrap();
    }
    acc.to_affine(curve).unwrap()
}

#[test]
fn generator_is_on_curve() {
    for curve in curves() {
        assert!(is_on_curve(&curve.g, curve), "{}", curve.scheme);
    }
}

#[test]
fn multiply_matches_repeated_addition() {
    for curve in curves() {
        for n in 1u32..=20 {
            let expected = repeated_addition(n, curve).unwrap();
            let got = multiply_base(&BigInt::from_u32(n), curve).unwrap();
            assert_eq!(got, expected, "{} n={}", curve.scheme, n);
            assert!(is_on_curve(&got, curve));
        }
    }
}

#[test]
fn multiply_by_one_is_identity() {
    for curve in curves() {
        let got = multiply_base(&BigInt::one(), curve).unwrap();
        assert_eq!(got, curve.g);
    }
}

#[test]
fn multiply_reduces_scalar_mod_order() {
    for curve in curves() {
        // n + 5 ≡ 5 (mod n)
        let scalar = curve.n.add(&BigInt::from_u32(5));
        let got = multiply_base(&scalar, curve).unwrap();
        let expected = multiply_base(&BigInt::from_u32(5), curve).unwrap();
        assert_eq!(got, expected);
    }
}

#[test]
fn multiply_by_order_is_infinity() {
    for curve in curves() {
        let g = JacobianPoint::from_affine(&curve.g);
        let product = jacobian_multiply(&g, &curve.n, curve).unwrap();
        assert!(product.is_infinity());
    }
}

#[test]
fn add_equal_points_matches_double() {
    // P + P must take the doubling branch, not collapse to infinity
    for curve in curves() {
        let two_g = multiply_base(&BigInt::from_u32(2), curve).unwrap();
        let p = JacobianPoint::from_affine(&two_g);
        let via_add = jacobian_add(&p, &p, curve).unwrap();
        let via_double = jacobian_double(&p, curve).unwrap();
        assert_eq!(
            via_add.to_affine(curve).unwrap(),
            via_double.to_affine(curve).unwrap()
        );
    }
}

#[test]
fn add_equal_points_with_distinct_z() {
    // Same affine point reached through different Jacobian representatives
    for curve in curves() {
        let g = JacobianPoint::from_affine(&curve.g);
        let three_g = jacobian_multiply(&g, &BigInt::from_u32(3), curve).unwrap();
        let two_g = jacobian_multiply(&g, &BigInt::from_u32(2), curve).unwrap();
        let also_three_g = jacobian_add(&two_g, &g, curve).unwrap();
        let sum = jacobian_add(&three_g, &also_three_g, curve).unwrap();
        let expected = multiply_base(&BigInt::from_u32(6), curve).unwrap();
        assert_eq!(sum.to_affine(curve).unwrap().unwrap(), expected);
    }
}

#[test]
fn add_opposite_points_is_infinity() {
    for curve in curves() {
        let g = JacobianPoint::from_affine(&curve.g);
        let neg_y = curve.p.sub(curve.g.y()).rem_euclid(&curve.p).unwrap();
        let neg_g = JacobianPoint::from_affine(&EccPoint::new(curve.g.x().clone(), neg_y));
        let sum = jacobian_add(&g, &neg_g, curve).unwrap();
        assert!(sum.is_infinity());
    }
}

#[test]
fn add_identity_passthrough() {
    for curve in curves() {
        let g = JacobianPoint::from_affine(&curve.g);
        let inf = JacobianPoint::infinity();
        let left = jacobian_add(&inf, &g, curve).unwrap();
        let right = jacobian_add(&g, &inf, curve).unwrap();
        assert_eq!(left.to_affine(curve).unwrap().unwrap(), curve.g);
        assert_eq!(right.to_affine(curve).unwrap().unwrap(), curve.g);
    }
}

#[test]
fn shamirs_trick_matches_separate_multiplications() {
    for curve in curves() {
        let q = multiply_base(&BigInt::from_u32(7), curve).unwrap();
        for (u1, u2) in [(1u32, 1u32), (3, 5), (12, 1), (1, 19), (255, 254)] {
            let combined = shamirs_trick(
                &BigInt::from_u32(u1),
                &BigInt::from_u32(u2),
                &q,
                curve,
            )
            .unwrap()
            .unwrap();
            // u1·G + u2·(7·G) = (u1 + 7·u2)·G
            let expected = multiply_base(&BigInt::from_u32(u1 + 7 * u2), curve).unwrap();
            assert_eq!(combined, expected, "{} u1={} u2={}", curve.scheme, u1, u2);
        }
    }
}

#[test]
fn shamirs_trick_cancellation_is_infinity() {
    for curve in curves() {
        // 2·G + 1·(n-2)·G = n·G = infinity
        let q_scalar = curve.n.sub(&BigInt::from_u32(2));
        let q = multiply_base(&q_scalar, curve).unwrap();
        let sum = shamirs_trick(&BigInt::from_u32(2), &BigInt::one(), &q, curve).unwrap();
        assert!(sum.is_none());
    }
}

#[test]
fn off_curve_point_detected() {
    for curve in curves() {
        let bogus = EccPoint::new(curve.g.x().clone(), curve.g.y().add(&BigInt::one()));
        assert!(!is_on_curve(&bogus, curve));
    }
}
