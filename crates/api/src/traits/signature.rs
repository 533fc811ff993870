//! Digital signature traits for mincrypt
//!
//! This module defines the trait that signature schemes implement. The
//! design does not require mutable access to secret keys, and it threads
//! the caller's randomness source through every operation that needs
//! entropy so that a failing source surfaces as an error instead of being
//! silently replaced.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature schemes
///
/// Schemes are instantiated values (carrying, for example, the curve group
/// they operate over), so the methods take `&self`.
///
/// # Type Safety
///
/// Secret keys are opaque types that cannot be directly manipulated as
/// bytes. This prevents common vulnerabilities where key material is
/// accidentally modified or exposed.
pub trait SignatureScheme {
    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature scheme
    fn name(&self) -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// # Security Requirements
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation, and must propagate a failure of
    /// that source rather than fall back to a weaker one.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `Ok(true)` when the signature matches, `Ok(false)` when it
    /// was checked and does not match, and `Err` when the inputs violate a
    /// precondition (malformed signature components, public key off the
    /// curve) and no check was performed.
    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}
