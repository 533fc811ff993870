//! Error handling for the mincrypt ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

use std::error::Error as StdError;

impl StdError for Error {}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomSource {
            context: "rng",
            message: e.to_string(),
        }
    }
}
