//! # mincrypt
//!
//! A small, modular cryptographic library that builds SHA-256 and ECDSA from
//! first principles, for demonstrating and verifying the low-level
//! construction of both primitives.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mincrypt = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`mincrypt_api`]: Traits, shared types, and the error taxonomy
//! - [`mincrypt_params`]: Constants (hash sizes, curve domain parameters)
//! - [`mincrypt_algorithms`]: The SHA-256 pipeline
//! - [`mincrypt_sign`]: ECDSA over caller-supplied curve groups
//!
//! The elliptic curve group itself is a capability the caller supplies: any
//! type implementing [`mincrypt_api::CurveGroup`] can back key generation,
//! signing, and verification. This library never implements curve field
//! arithmetic.

#![forbid(unsafe_code)]

pub use mincrypt_algorithms as algorithms;
pub use mincrypt_api as api;
pub use mincrypt_params as params;
pub use mincrypt_sign as sign;

/// Common imports for mincrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{CurveGroup, SignatureScheme};

    // Re-export primary types
    pub use crate::algorithms::hash::Sha256;
    pub use crate::api::AffinePoint;
    pub use crate::sign::{Ecdsa, EcdsaPublicKey, EcdsaSecretKey, EcdsaSignature};
}
