//! Jacobian-coordinate point arithmetic
//!
//! A Jacobian triple `(X, Y, Z)` represents the affine point
//! `(X/Z², Y/Z³)`; `Z == 0` encodes the point at infinity. Working
//! projectively defers the expensive modular inversion to a single
//! [`JacobianPoint::to_affine`] call at the end of a scalar multiplication.

use crate::bigint::BigInt;
use crate::ec::EccPoint;
use crate::error::Result;
use crate::params::Curve;

/// A point in Jacobian projective coordinates
#[derive(Clone, Debug)]
pub(crate) struct JacobianPoint {
    pub x: BigInt,
    pub y: BigInt,
    pub z: BigInt,
}

impl JacobianPoint {
    /// The point at infinity
    pub fn infinity() -> Self {
        JacobianPoint {
            x: BigInt::one(),
            y: BigInt::one(),
            z: BigInt::zero(),
        }
    }

    /// Lift an affine point (Z = 1)
    pub fn from_affine(point: &EccPoint) -> Self {
        JacobianPoint {
            x: point.x().clone(),
            y: point.y().clone(),
            z: BigInt::one(),
        }
    }

    /// Is this the point at infinity?
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Normalize back to affine coordinates; `None` for the point at infinity
    pub fn to_affine(&self, curve: &Curve) -> Result<Option<EccPoint>> {
        if self.is_infinity() {
            return Ok(None);
        }
        let z_inv = self.z.mod_inv(&curve.p)?;
        let z_inv_sq = z_inv.mod_mul(&z_inv, &curve.p)?;
        let z_inv_cu = z_inv_sq.mod_mul(&z_inv, &curve.p)?;
        let x = self.x.mod_mul(&z_inv_sq, &curve.p)?;
        let y = self.y.mod_mul(&z_inv_cu, &curve.p)?;
        Ok(Some(EccPoint::new(x, y)))
    }
}

/// Jacobian point doubling: `2 · P`
///
/// Standard formulas with the general curve coefficient A:
/// `S = 4·X·Y²`, `M = 3·X² + A·Z⁴`, `X₃ = M² − 2S`,
/// `Y₃ = M·(S − X₃) − 8·Y⁴`, `Z₃ = 2·Y·Z`.
pub(crate) fn jacobian_double(point: &JacobianPoint, curve: &Curve) -> Result<JacobianPoint> {
    if point.is_infinity() || point.y.is_zero() {
        return Ok(JacobianPoint::infinity());
    }
    let p = &curve.p;

    let y_sq = point.y.mod_mul(&point.y, p)?;
    let s = BigInt::from_u32(4)
        .mul(&point.x)
        .mod_mul(&y_sq, p)?;
    let z_sq = point.z.mod_mul(&point.z, p)?;
    let z_quart = z_sq.mod_mul(&z_sq, p)?;
    let x_sq = point.x.mod_mul(&point.x, p)?;
    let m = BigInt::from_u32(3)
        .mul(&x_sq)
        .add(&curve.a.mul(&z_quart))
        .rem_euclid(p)?;

    let two_s = s.add(&s);
    let x3 = m.mod_mul(&m, p)?.sub(&two_s).rem_euclid(p)?;
    let y_quart = y_sq.mod_mul(&y_sq, p)?;
    let y3 = m
        .mul(&s.sub(&x3))
        .sub(&BigInt::from_u32(8).mul(&y_quart))
        .rem_euclid(p)?;
    let z3 = BigInt::from_u32(2)
        .mul(&point.y)
        .mod_mul(&point.z, p)?;

    Ok(JacobianPoint {
        x: x3,
        y: y3,
        z: z3,
    })
}

/// Jacobian point addition: `P + Q`
///
/// The degenerate `U1 == U2` case distinguishes opposite points (result is
/// the point at infinity) from equal points, which are handed to
/// [`jacobian_double`]. Earlier implementations of this algorithm have been
/// known to mishandle the equal-point branch; it is covered by an explicit
/// test.
pub(crate) fn jacobian_add(
    lhs: &JacobianPoint,
    rhs: &JacobianPoint,
    curve: &Curve,
) -> Result<JacobianPoint> {
    if lhs.is_infinity() {
        return Ok(rhs.clone());
    }
    if rhs.is_infinity() {
        return Ok(lhs.clone());
    }
    let p = &curve.p;

    let z1_sq = lhs.z.mod_mul(&lhs.z, p)?;
    let z2_sq = rhs.z.mod_mul(&rhs.z, p)?;
    let u1 = lhs.x.mod_mul(&z2_sq, p)?;
    let u2 = rhs.x.mod_mul(&z1_sq, p)?;
    let s1 = lhs.y.mod_mul(&z2_sq, p)?.mod_mul(&rhs.z, p)?;
    let s2 = rhs.y.mod_mul(&z1_sq, p)?.mod_mul(&lhs.z, p)?;

    if u1 == u2 {
        if s1 != s2 {
            return Ok(JacobianPoint::infinity());
        }
        return jacobian_double(lhs, curve);
    }

    let h = u2.sub(&u1).rem_euclid(p)?;
    let r = s2.sub(&s1).rem_euclid(p)?;
    let h_sq = h.mod_mul(&h, p)?;
    let h_cu = h.mod_mul(&h_sq, p)?;
    let v = u1.mod_mul(&h_sq, p)?;

    let two_v = v.add(&v);
    let x3 = r
        .mod_mul(&r, p)?
        .sub(&h_cu)
        .sub(&two_v)
        .rem_euclid(p)?;
    let y3 = r
        .mul(&v.sub(&x3))
        .sub(&s1.mul(&h_cu))
        .rem_euclid(p)?;
    let z3 = h.mod_mul(&lhs.z, p)?.mod_mul(&rhs.z, p)?;

    Ok(JacobianPoint {
        x: x3,
        y: y3,
        z: z3,
    })
}

/// Scalar multiplication `n · P` by iterative double-and-add
///
/// The scalar is reduced mod the curve order N when it falls outside
/// `[0, N)`. A zero scalar or a point with zero Y yields the point at
/// infinity. The loop scans the scalar's bits MSB-first, so the depth is
/// bounded by the bit length of N (256 or 384) with no recursion.
pub(crate) fn jacobian_multiply(
    point: &JacobianPoint,
    n: &BigInt,
    curve: &Curve,
) -> Result<JacobianPoint> {
    let scalar = if n.is_negative() || *n >= curve.n {
        n.rem_euclid(&curve.n)?
    } else {
        n.clone()
    };
    if scalar.is_zero() || point.y.is_zero() || point.is_infinity() {
        return Ok(JacobianPoint::infinity());
    }
    if scalar.is_one() {
        return Ok(point.clone());
    }

    let mut acc = JacobianPoint::infinity();
    for i in (0..scalar.bits()).rev() {
        acc = jacobian_double(&acc, curve)?;
        if scalar.bit(i) {
            acc = jacobian_add(&acc, point, curve)?;
        }
    }
    Ok(acc)
}
