//! Cryptographic primitives for the mincrypt library
//!
//! This crate implements the hash side of the mincrypt workspace: a
//! from-first-principles SHA-256 built as an explicit pipeline (padding,
//! block splitting, message scheduling, compression, finalization). All
//! working state is call-scoped and zeroized on drop, so independent
//! computations can run concurrently without observing each other.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Hash function implementations
pub mod hash;
pub use hash::Sha256;

// Type system
pub mod types;
pub use types::Digest;
