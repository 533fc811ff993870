//! Error type definitions for cryptographic operations

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key generation produced the identity point as public key
    ZeroPublicKey {
        context: &'static str,
    },

    /// A point failed the curve group's on-curve predicate
    NotOnCurve {
        context: &'static str,
    },

    /// A signature component lies outside the open interval (0, N)
    OutOfRange {
        context: &'static str,
        message: String,
    },

    /// The secure randomness source failed
    RandomSource {
        context: &'static str,
        message: String,
    },

    /// Internal fault: an invariant that holds for any correctly behaving
    /// curve group or randomness source was violated
    Internal {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an out-of-range failure
    pub fn out_of_range(context: &'static str, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an internal fault
    pub fn internal(context: &'static str, message: impl Into<String>) -> Self {
        Self::Internal {
            context,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroPublicKey { context } => {
                write!(f, "{}: public key is the identity point", context)
            }
            Self::NotOnCurve { context } => {
                write!(f, "{}: point is not on the curve", context)
            }
            Self::OutOfRange { context, message } => {
                write!(f, "{}: number out of range: {}", context, message)
            }
            Self::RandomSource { context, message } => {
                write!(f, "{}: randomness source failed: {}", context, message)
            }
            Self::Internal { context, message } => {
                write!(f, "{}: internal fault: {}", context, message)
            }
        }
    }
}
