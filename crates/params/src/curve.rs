//! Elliptic curve domain parameters
//!
//! Hex-encoded big-endian constants for the short-Weierstrass curves
//! y² = x³ + ax + b over GF(p) that the test harnesses instantiate
//! reference groups from. The core crates never consume these directly;
//! they operate on whatever curve group capability the caller supplies.

/// NIST P-256 (secp256r1), FIPS 186-4 / SEC 2
pub mod p256 {
    /// Field prime p
    pub const P: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

    /// Curve coefficient a = p - 3
    pub const A: &str = "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";

    /// Curve coefficient b
    pub const B: &str = "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";

    /// Order n of the base point
    pub const N: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

    /// Base point x coordinate
    pub const GX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

    /// Base point y coordinate
    pub const GY: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";
}

/// secp256k1, SEC 2
pub mod secp256k1 {
    /// Field prime p
    pub const P: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

    /// Curve coefficient a = 0
    pub const A: &str = "0";

    /// Curve coefficient b = 7
    pub const B: &str = "7";

    /// Order n of the base point
    pub const N: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    /// Base point x coordinate
    pub const GX: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    /// Base point y coordinate
    pub const GY: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
}
