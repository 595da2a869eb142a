//! Affine point helpers and simultaneous scalar multiplication
//!
//! ECDSA verification needs `u1·G + u2·Q`. Computing the two products
//! separately costs two full double-and-add passes; Shamir's trick merges
//! them into one pass over `max(bits(u1), bits(u2))` doublings with a
//! precomputed `G + Q`. The pass works on affine points (`None` standing in
//! for the point at infinity) so the combined table stays trivial.

use crate::bigint::BigInt;
use crate::ec::EccPoint;
use crate::error::Result;
use crate::params::Curve;

/// Affine doubling: `2 · P`, or `None` when the tangent is vertical
fn affine_double(point: &EccPoint, curve: &Curve) -> Result<Option<EccPoint>> {
    if point.y().is_zero() {
        return Ok(None);
    }
    let p = &curve.p;

    // lambda = (3·x² + a) / (2·y)
    let x_sq = point.x().mod_mul(point.x(), p)?;
    let numerator = BigInt::from_u32(3).mul(&x_sq).add(&curve.a).rem_euclid(p)?;
    let denominator = BigInt::from_u32(2).mul(point.y()).rem_euclid(p)?;
    let lambda = numerator.mod_mul(&denominator.mod_inv(p)?, p)?;

    let two_x = point.x().add(point.x());
    let x3 = lambda.mod_mul(&lambda, p)?.sub(&two_x).rem_euclid(p)?;
    let y3 = lambda
        .mul(&point.x().sub(&x3))
        .sub(point.y())
        .rem_euclid(p)?;
    Ok(Some(EccPoint::new(x3, y3)))
}

/// Affine addition over the group including infinity
fn affine_add(
    lhs: Option<&EccPoint>,
    rhs: Option<&EccPoint>,
    curve: &Curve,
) -> Result<Option<EccPoint>> {
    let (a, b) = match (lhs, rhs) {
        (None, None) => return Ok(None),
        (Some(a), None) => return Ok(Some(a.clone())),
        (None, Some(b)) => return Ok(Some(b.clone())),
        (Some(a), Some(b)) => (a, b),
    };
    let p = &curve.p;

    if a.x() == b.x() {
        if a.y() == b.y() {
            return affine_double(a, curve);
        }
        // opposite points
        return Ok(None);
    }

    // lambda = (y2 - y1) / (x2 - x1)
    let numerator = b.y().sub(a.y()).rem_euclid(p)?;
    let denominator = b.x().sub(a.x()).rem_euclid(p)?;
    let lambda = numerator.mod_mul(&denominator.mod_inv(p)?, p)?;

    let x3 = lambda
        .mod_mul(&lambda, p)?
        .sub(a.x())
        .sub(b.x())
        .rem_euclid(p)?;
    let y3 = lambda.mul(&a.x().sub(&x3)).sub(a.y()).rem_euclid(p)?;
    Ok(Some(EccPoint::new(x3, y3)))
}

/// Simultaneous multiplication `u1 · G + u2 · q` by Shamir's trick
///
/// Both scalars must already be reduced to `[0, N)`. Returns `None` when
/// the sum lands on the point at infinity, which verification treats as
/// an invalid signature.
pub(crate) fn shamirs_trick(
    u1: &BigInt,
    u2: &BigInt,
    q: &EccPoint,
    curve: &Curve,
) -> Result<Option<EccPoint>> {
    let g = &curve.g;
    let g_plus_q = affine_add(Some(g), Some(q), curve)?;

    let bits = u1.bits().max(u2.bits());
    let mut acc: Option<EccPoint> = None;
    for i in (0..bits).rev() {
        acc = match acc {
            Some(point) => affine_double(&point, curve)?,
            None => None,
        };
        let addend = match (u1.bit(i), u2.bit(i)) {
            (true, true) => g_plus_q.as_ref(),
            (true, false) => Some(g),
            (false, true) => Some(q),
            (false, false) => None,
        };
        if addend.is_some() {
            acc = affine_add(acc.as_ref(), addend, curve)?;
        }
    }
    Ok(acc)
}
