//! Constants for hash functions

/// Size of a SHA-256 digest in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Size of a SHA-256 message block in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the SHA-256 digest state
pub const SHA256_STATE_WORDS: usize = 8;

/// Number of 32-bit words in a SHA-256 message schedule
pub const SHA256_SCHEDULE_WORDS: usize = 64;

/// Offset within the final padded block where the 64-bit message bit length
/// is written
pub const SHA256_LENGTH_OFFSET: usize = 56;
