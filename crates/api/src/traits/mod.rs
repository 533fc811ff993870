//! Trait definitions for the mincrypt ecosystem

pub mod curve;
pub mod signature;

pub use curve::CurveGroup;
pub use signature::SignatureScheme;
