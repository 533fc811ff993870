//! Digital Signature Schemes
//!
//! This crate implements ECDSA generically over the curve group capability
//! defined in `mincrypt-api`. The curve's field arithmetic belongs to the
//! capability; this crate contributes the scalar arithmetic, message
//! hashing, and retry logic of the scheme itself.

#![forbid(unsafe_code)]

pub mod ecdsa;

// Re-exports
pub use ecdsa::{Ecdsa, EcdsaPublicKey, EcdsaSecretKey, EcdsaSignature};
