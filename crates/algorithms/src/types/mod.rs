//! Types used by the algorithm implementations

mod digest;

pub use digest::Digest;
