//! Elliptic-curve point arithmetic
//!
//! Scalar multiplication runs in Jacobian projective coordinates so that the
//! hot loop needs no modular inversion; the single inversion happens when the
//! result is normalized back to affine form. Verification additionally uses
//! Shamir's simultaneous double-and-add over affine helpers, since that path
//! performs only one combined pass per call.

use crate::bigint::BigInt;
use crate::error::Result;
use crate::params::Curve;

pub(crate) mod jacobian;
pub(crate) mod point;

#[cfg(test)]
mod tests;

pub(crate) use jacobian::JacobianPoint;
pub(crate) use point::shamirs_trick;

/// An affine point on a short-Weierstrass curve
///
/// Pure data: construction does not verify curve membership. Callers that
/// accept external points run [`is_on_curve`] first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EccPoint {
    x: BigInt,
    y: BigInt,
}

impl EccPoint {
    /// Construct from affine coordinates
    pub fn new(x: BigInt, y: BigInt) -> Self {
        EccPoint { x, y }
    }

    /// X coordinate
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Y coordinate
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

/// Scalar multiplication `n · point`, normalized back to affine
///
/// The scalar is reduced mod the curve order first. Reaching the point at
/// infinity is a fatal error here; the callers of this wrapper (signing,
/// key derivation) only pass scalars in `[1, N-1]` and validated points,
/// for which the result is always a proper point.
pub fn multiply(point: &EccPoint, n: &BigInt, curve: &Curve) -> Result<EccPoint> {
    let product = jacobian::jacobian_multiply(&JacobianPoint::from_affine(point), n, curve)?;
    product.to_affine(curve)?.ok_or_else(|| {
        crate::error::Error::param("scalar multiplication", "result is the point at infinity")
    })
}

/// Scalar multiplication with the curve's base point: `n · G`
pub fn multiply_base(n: &BigInt, curve: &Curve) -> Result<EccPoint> {
    multiply(&curve.g, n, curve)
}

/// Check that the point satisfies `y² ≡ x³ + A·x + B (mod P)`
pub fn is_on_curve(point: &EccPoint, curve: &Curve) -> bool {
    curve_equation_holds(point, curve).unwrap_or(false)
}

fn curve_equation_holds(point: &EccPoint, curve: &Curve) -> Result<bool> {
    let y2 = point.y.mod_mul(&point.y, &curve.p)?;
    let x2 = point.x.mod_mul(&point.x, &curve.p)?;
    let x3 = x2.mod_mul(&point.x, &curve.p)?;
    let ax = curve.a.mod_mul(&point.x, &curve.p)?;
    let rhs = x3.add(&ax).add(&curve.b).rem_euclid(&curve.p)?;
    Ok(y2 == rhs)
}
