//! ECDSA over a caller-supplied elliptic curve group
//!
//! Implements ECDSA as specified in FIPS 186-4, Section 6, generic over any
//! [`CurveGroup`] capability. Messages are hashed with the SHA-256
//! implementation from `mincrypt-algorithms`; all scalar arithmetic is
//! performed modulo the group order N.

use core::fmt;

use mincrypt_algorithms::hash::Sha256;
use mincrypt_api::{AffinePoint, CurveGroup, Error, Result, SignatureScheme};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

/// Retry budget for the zero-R / zero-S loop in signing
///
/// On a sound curve group a single zero outcome already has probability
/// around 2^-256, so the budget never fires in practice; exhausting it
/// signals a broken group or randomness source.
const MAX_SIGN_ATTEMPTS: usize = 64;

/// ECDSA signature scheme over the curve group `C`
pub struct Ecdsa<C: CurveGroup> {
    group: C,
}

/// ECDSA public key: a non-identity point on the curve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaPublicKey(pub AffinePoint);

/// ECDSA secret key: the scalar D with 0 < D < N
#[derive(Clone)]
pub struct EcdsaSecretKey {
    d: BigUint,
}

impl EcdsaSecretKey {
    /// Build a secret key from a raw scalar
    ///
    /// The scalar must lie in (0, N) for the curve group the key is used
    /// with; keys produced by [`SignatureScheme::keypair`] uphold this
    /// automatically.
    pub fn from_scalar(d: BigUint) -> Self {
        EcdsaSecretKey { d }
    }

    /// The raw secret scalar
    pub fn scalar(&self) -> &BigUint {
        &self.d
    }
}

// Manual Zeroize implementation for EcdsaSecretKey.
// Note: BigUint does not expose its limbs for scrubbing; overwriting with
// zero drops the allocation and clears the observable value.
impl Zeroize for EcdsaSecretKey {
    fn zeroize(&mut self) {
        self.d.set_zero();
    }
}

// Secure cleanup on drop
impl Drop for EcdsaSecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for EcdsaSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EcdsaSecretKey(..)")
    }
}

/// ECDSA signature: the pair (R, S), each in the open interval (0, N)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaSignature {
    /// The R component: x-coordinate of k·G reduced modulo N
    pub r: BigUint,
    /// The S component: k⁻¹(h + D·R) modulo N
    pub s: BigUint,
}

/// The SHA-256 digest of `message` as an unsigned integer
fn digest_as_int(message: &[u8]) -> BigUint {
    BigUint::from_bytes_be(Sha256::digest(message).as_ref())
}

/// Draw a uniform random integer in [0, limit) from the caller's CSPRNG
///
/// Rejection sampling over the minimal big-endian width, with the excess
/// high bits of the top byte masked off so at least half of all draws are
/// accepted. A failure of the randomness source is fatal and propagates
/// immediately; it is never papered over with a weaker source.
fn random_below<R: CryptoRng + RngCore>(limit: &BigUint, rng: &mut R) -> Result<BigUint> {
    debug_assert!(!limit.is_zero());

    let bits = limit.bits();
    let width = ((bits + 7) / 8) as usize;
    let excess = (width as u64 * 8 - bits) as u32;

    let mut buf = Zeroizing::new(vec![0u8; width]);
    loop {
        rng.try_fill_bytes(&mut buf).map_err(|e| Error::RandomSource {
            context: "ecdsa random scalar",
            message: e.to_string(),
        })?;
        buf[0] &= 0xffu8 >> excess;

        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < limit {
            return Ok(candidate);
        }
    }
}

/// Draw a uniform random integer in [1, limit - 1]
fn random_nonzero_below<R: CryptoRng + RngCore>(limit: &BigUint, rng: &mut R) -> Result<BigUint> {
    loop {
        let candidate = random_below(limit, rng)?;
        if !candidate.is_zero() {
            return Ok(candidate);
        }
    }
}

/// Left-pad a big-endian serialization to a fixed width
fn pad_left(bytes: Vec<u8>, width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    out[width - bytes.len()..].copy_from_slice(&bytes);
    out
}

impl<C: CurveGroup> Ecdsa<C> {
    /// Create a scheme instance over the given curve group
    pub fn new(group: C) -> Self {
        Ecdsa { group }
    }

    /// The curve group this scheme operates over
    pub fn group(&self) -> &C {
        &self.group
    }

    /// Sign a message with a caller-supplied nonce
    ///
    /// This entry point exists for known-answer tests, where a published
    /// vector fixes (message, D, k) and the resulting (R, S) must be
    /// reproduced exactly.
    ///
    /// # Security
    ///
    /// Reusing a fixed or predictable k across distinct messages is a
    /// critical violation that leaks the secret key: from two signatures
    /// (R, S1), (R, S2) over digests h1, h2 sharing one k, an attacker
    /// computes k = (h1 - h2)·(S1 - S2)⁻¹ mod N and then D from either
    /// signature. Never supply a nonce outside of test vectors.
    pub fn sign_with_nonce(
        &self,
        message: &[u8],
        secret_key: &EcdsaSecretKey,
        nonce: &BigUint,
    ) -> Result<EcdsaSignature> {
        let n = self.group.order();
        let h = digest_as_int(message) % n;

        // A fixed nonce that lands on a zero R or S cannot succeed by
        // retrying, so it fails straight to the exhaustion error.
        match self.sign_attempt(&h, secret_key.scalar(), nonce)? {
            Some(signature) => Ok(signature),
            None => Err(Error::internal(
                "ecdsa sign",
                "supplied nonce produced a zero signature component",
            )),
        }
    }

    /// One iteration of the signing loop
    ///
    /// Returns `Ok(None)` when R or S came out zero and the caller should
    /// retry with a fresh nonce.
    fn sign_attempt(
        &self,
        h: &BigUint,
        d: &BigUint,
        k: &BigUint,
    ) -> Result<Option<EcdsaSignature>> {
        let n = self.group.order();

        // (x1, y1) = k·G, R = x1 mod N
        let kg = self.group.scalar_base_mult(k);
        let r = &kg.x % n;
        if r.is_zero() {
            return Ok(None);
        }

        // S = k⁻¹(h + D·R) mod N
        let k_inv = k.modinv(n).ok_or_else(|| {
            Error::internal("ecdsa sign", "nonce is not invertible modulo the group order")
        })?;
        let s = (k_inv * ((h + d * &r) % n)) % n;
        if s.is_zero() {
            return Ok(None);
        }

        Ok(Some(EcdsaSignature { r, s }))
    }
}

impl<C: CurveGroup> SignatureScheme for Ecdsa<C> {
    type PublicKey = EcdsaPublicKey;
    type SecretKey = EcdsaSecretKey;
    type SignatureData = EcdsaSignature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name(&self) -> &'static str {
        "ECDSA"
    }

    /// Generate an ECDSA key pair
    ///
    /// Draws a uniform scalar D in [0, N) from the caller's CSPRNG and
    /// computes the public point Q = D·G. The result is checked against a
    /// misbehaving curve group: an identity public point is rejected as
    /// `ZeroPublicKey` (this also covers the D = 0 draw) and a point the
    /// group disowns as `NotOnCurve`. On a correct group with a working
    /// randomness source neither failure occurs in practice.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair> {
        let d = random_below(self.group.order(), rng)?;
        let q = self.group.scalar_base_mult(&d);

        if q.is_identity() {
            return Err(Error::ZeroPublicKey {
                context: "ecdsa keypair",
            });
        }
        if !self.group.is_on_curve(&q) {
            return Err(Error::NotOnCurve {
                context: "ecdsa keypair",
            });
        }

        Ok((EcdsaPublicKey(q), EcdsaSecretKey { d }))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign a message
    ///
    /// Algorithm (FIPS 186-4, Section 6.3):
    /// 1. h = SHA-256(message) as an integer, reduced modulo N
    /// 2. Draw a fresh uniform k in [1, N-1]
    /// 3. (x1, y1) = k·G; R = x1 mod N; retry from 2 if R = 0
    /// 4. S = k⁻¹(h + D·R) mod N; retry from 2 if S = 0
    /// 5. Return (R, S)
    ///
    /// The retry loop is explicitly bounded; exhausting it surfaces an
    /// internal fault rather than looping forever, since true exhaustion
    /// has negligible probability and signals a broken curve group or
    /// randomness source.
    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        secret_key: &EcdsaSecretKey,
        rng: &mut R,
    ) -> Result<EcdsaSignature> {
        let n = self.group.order();
        let h = digest_as_int(message) % n;

        for _ in 0..MAX_SIGN_ATTEMPTS {
            let mut k = random_nonzero_below(n, rng)?;
            let attempt = self.sign_attempt(&h, secret_key.scalar(), &k);
            k.set_zero();

            if let Some(signature) = attempt? {
                return Ok(signature);
            }
        }

        Err(Error::internal(
            "ecdsa sign",
            "retry budget exhausted; the curve group or randomness source is misbehaving",
        ))
    }

    /// Verify a signature
    ///
    /// Algorithm (FIPS 186-4, Section 6.4):
    /// 1. Fail `NotOnCurve` if Q does not satisfy the curve equation
    /// 2. Fail `OutOfRange` unless 0 < R < N and 0 < S < N
    /// 3. h = SHA-256(message) as an integer
    /// 4. u = h·S⁻¹ mod N, v = R·S⁻¹ mod N
    /// 5. (x0, y0) = u·G + v·Q
    /// 6. Accept iff x0 = R
    ///
    /// Two historical quirks are preserved deliberately. The digest enters
    /// verification unreduced (the reduction folds into u, so the outcome
    /// is unchanged), and x0 is compared against R without first being
    /// reduced modulo N: on curves whose order sits below the field size,
    /// an x1 in [N, p) is rejected here even though signing reduced it.
    fn verify(
        &self,
        message: &[u8],
        signature: &EcdsaSignature,
        public_key: &EcdsaPublicKey,
    ) -> Result<bool> {
        let n = self.group.order();

        if !self.group.is_on_curve(&public_key.0) {
            return Err(Error::NotOnCurve {
                context: "ecdsa verify",
            });
        }

        for (component, label) in [(&signature.r, "R"), (&signature.s, "S")] {
            if component.is_zero() || component >= n {
                return Err(Error::out_of_range(
                    "ecdsa verify",
                    format!("signature component {} must lie in (0, N)", label),
                ));
            }
        }

        let h = digest_as_int(message);

        let s_inv = signature.s.modinv(n).ok_or_else(|| {
            Error::internal("ecdsa verify", "S is not invertible modulo the group order")
        })?;
        let u = (&h * &s_inv) % n;
        let v = (&signature.r * &s_inv) % n;

        // (x0, y0) = u·G + v·Q
        let vq = self.group.scalar_mult(&public_key.0, &v);
        let ug = self.group.scalar_base_mult(&u);
        let point = self.group.add(&vq, &ug);

        // Constant-time comparison of the fixed-width serializations.
        let x_bytes = point.x.to_bytes_be();
        let r_bytes = signature.r.to_bytes_be();
        let width = x_bytes.len().max(r_bytes.len());
        let matches = pad_left(x_bytes, width).ct_eq(&pad_left(r_bytes, width));

        Ok(bool::from(matches))
    }
}
