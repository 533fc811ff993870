//! The elliptic curve group capability
//!
//! The mincrypt core does not implement curve field arithmetic. Everything
//! it needs from an elliptic curve is captured by the [`CurveGroup`] trait;
//! the caller supplies an implementation (a hardware-backed group, a tested
//! constant-time library, or a reference implementation in a test harness).

use crate::types::AffinePoint;
use num_bigint::BigUint;

/// A prime-order elliptic curve group over which ECDSA operates
///
/// Implementations must behave as stateless, reentrant services: none of
/// these methods may mutate the group, and concurrent calls from
/// independent operations must be safe.
///
/// # Contract
///
/// - `order` returns the prime order N of the cyclic subgroup generated by
///   `generator`; all scalar arithmetic in ECDSA is performed modulo N.
/// - `scalar_base_mult(k)` returns k·G. A scalar of zero (or any multiple
///   of N) yields the identity, encoded as (0, 0).
/// - `scalar_mult(p, k)` returns k·P for an arbitrary point P.
/// - `add(a, b)` is the group law, with the identity as neutral element and
///   P + (-P) = identity.
/// - `is_on_curve(p)` reports whether P satisfies the curve equation; the
///   identity encoding (0, 0) is rejected.
pub trait CurveGroup {
    /// Human-readable name of the curve (e.g. "P-256")
    fn name(&self) -> &'static str;

    /// The order N of the generator's cyclic subgroup
    fn order(&self) -> &BigUint;

    /// The base point G
    fn generator(&self) -> AffinePoint;

    /// Multiply the base point by a scalar: k·G
    fn scalar_base_mult(&self, k: &BigUint) -> AffinePoint;

    /// Multiply an arbitrary point by a scalar: k·P
    fn scalar_mult(&self, point: &AffinePoint, k: &BigUint) -> AffinePoint;

    /// Add two points under the group law
    fn add(&self, a: &AffinePoint, b: &AffinePoint) -> AffinePoint;

    /// Whether a point satisfies the curve equation
    fn is_on_curve(&self, point: &AffinePoint) -> bool;
}
