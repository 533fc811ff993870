//! Constant values for the mincrypt library
//!
//! A constants-only crate: hash geometry and elliptic curve domain
//! parameters. Keeping these here lets the algorithm crates stay free of
//! magic numbers and lets test harnesses build reference curve groups from
//! the same source of truth.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod curve;
pub mod hash;
