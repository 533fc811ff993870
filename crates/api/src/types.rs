//! Shared types used across the mincrypt crates

use num_bigint::BigUint;
use num_traits::Zero;

/// A point on an elliptic curve in affine coordinates
///
/// The identity element (point at infinity) is encoded as (0, 0), matching
/// the affine convention of the group arithmetic this type models. On the
/// curves this library is used with, (0, 0) never satisfies the curve
/// equation, so the encoding is unambiguous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    /// X coordinate
    pub x: BigUint,
    /// Y coordinate
    pub y: BigUint,
}

impl AffinePoint {
    /// Create a point from its coordinates
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint { x, y }
    }

    /// The identity element of the group
    pub fn identity() -> Self {
        AffinePoint {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Whether this point is the identity element
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}
