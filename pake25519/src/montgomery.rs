//! Group operations on the Montgomery curve used by X25519.
//!
//! A point `(u, v)` lies on the curve when `v² = u³ + A·u² + u` over the
//! curve25519 base field, with `A = 486662`. Coordinates are written
//! `(u, v)` rather than `(x, y)` to avoid confusion with Edwards
//! coordinates. Scalar multiplication is delegated to the `x25519-dalek`
//! ladder, which operates on `u` alone; the affine chord addition and the
//! membership test are implemented here on both coordinates.

use crate::error::{Error, Result};
use crate::field::FieldElement;
use x25519_dalek::{X25519_BASEPOINT_BYTES, x25519};

/// Montgomery curve coefficient A.
const CURVE_A: FieldElement = FieldElement::from_u64(486662);

/// Point on the curve in affine `(u, v)` coordinates.
///
/// Points are plain values and nothing is validated on construction;
/// [`Curve25519::is_on_curve`] is the authoritative membership test. The
/// group's neutral element (the point at infinity) has no affine
/// representation and cannot be expressed by this type — see
/// [`Curve25519::add`] for how that limitation surfaces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    /// The `u` coordinate, the one carried by the 32-byte wire form.
    pub u: FieldElement,
    /// The `v` coordinate.
    pub v: FieldElement,
}

/// Handle for the curve25519 group; all group operations hang off it.
///
/// The handle is free to construct and carries no state — the curve
/// parameters are compile-time constants — so it can be built eagerly and
/// copied or shared across threads at will. Every operation is a pure
/// function of the handle and its arguments.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Curve25519;

/// Right-hand side of the curve equation, `u³ + A·u² + u`.
fn curve_equation_rhs(u: &FieldElement) -> FieldElement {
    let u2 = u.square();
    &(&(&u2 * u) + &(&CURVE_A * &u2)) + u
}

impl Curve25519 {
    /// The curve's base point from RFC 7748 §4.1: `u = 9` together with the
    /// standard `v` coordinate.
    ///
    /// Its `u` encodes to [`X25519_BASEPOINT_BYTES`], the input the ladder
    /// uses for fixed-base multiplication.
    pub const GENERATOR: AffinePoint = AffinePoint {
        u: FieldElement::from_hex(
            "0000000000000000000000000000000000000000000000000000000000000009",
        ),
        v: FieldElement::from_hex(
            "20ae19a1b8a086b4e01edd2c7748d14c923d4d7e6d7c61b229e9c5a27eced3d9",
        ),
    };

    /// Exact membership test: `v² ≡ u³ + A·u² + u (mod p)`.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        point.v.square() == curve_equation_rhs(&point.u)
    }

    /// Affine chord addition:
    ///
    /// ```text
    /// λ  = (v₂ − v₁) / (u₂ − u₁)
    /// u₃ = λ² − A − u₁ − u₂
    /// v₃ = λ·(u₁ − u₃) − v₁
    /// ```
    ///
    /// Fails with [`Error::DivisionByZero`] when the inputs share a `u`
    /// coordinate. That rejects doubling (`p1 == p2`, which needs the
    /// tangent law) and inverse pairs (`p2 == −p1`, whose sum is the point
    /// at infinity, unrepresentable as an [`AffinePoint`]); the chord law
    /// can express neither. Inputs are assumed well-formed and are not
    /// checked for curve membership.
    pub fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> Result<AffinePoint> {
        let lambda = match (&p2.u - &p1.u).invert() {
            Some(inv) => &(&p2.v - &p1.v) * &inv,
            None => return Err(Error::DivisionByZero),
        };
        let u3 = &(&lambda.square() - &CURVE_A) - &(&p1.u + &p2.u);
        let v3 = &(&lambda * &(&p1.u - &u3)) - &p1.v;
        Ok(AffinePoint { u: u3, v: v3 })
    }

    /// Multiplies the curve's base point by `scalar` through the X25519
    /// ladder.
    ///
    /// The scalar is opaque bytes; RFC 7748 clamping happens inside the
    /// ladder, never here. See [`Curve25519::mul`] for the result's
    /// `v`-coordinate policy and the failure case.
    pub fn mul_by_generator(&self, scalar: &[u8; 32]) -> Result<AffinePoint> {
        self.ladder(scalar, X25519_BASEPOINT_BYTES)
    }

    /// Multiplies `base` by `scalar` through the X25519 ladder.
    ///
    /// Only `base.u` participates — the ladder is sign-agnostic, so
    /// `base.v` is accepted for interface symmetry and ignored. The scalar
    /// is opaque bytes; RFC 7748 clamping happens inside the ladder.
    ///
    /// The ladder yields only the result's `u`. The returned `v` is the
    /// curve equation's right-hand side evaluated at that `u` — a
    /// deterministic companion value, not a square root. It is total (the
    /// ladder also emits u-coordinates of twist points, where no square
    /// root exists) and both parties of an exchange compute the same pair,
    /// which is the property a PAKE transcript relies on. Points built this
    /// way generally do not satisfy [`Curve25519::is_on_curve`].
    ///
    /// Fails with [`Error::LowOrderPoint`] when the ladder reports the
    /// all-zero output, i.e. `base` was low-order and the product is the
    /// group's neutral element. The error is surfaced as-is; it signals
    /// malicious or malformed input, not a transient condition.
    pub fn mul(&self, base: &AffinePoint, scalar: &[u8; 32]) -> Result<AffinePoint> {
        self.ladder(scalar, base.u.to_bytes())
    }

    fn ladder(&self, scalar: &[u8; 32], point: [u8; 32]) -> Result<AffinePoint> {
        let shared = x25519(*scalar, point);
        if shared == [0u8; 32] {
            return Err(Error::LowOrderPoint);
        }
        let u = FieldElement::from_bytes(&shared);
        Ok(AffinePoint {
            u,
            v: curve_equation_rhs(&u),
        })
    }
}
