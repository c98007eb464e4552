//! Error type definitions for cryptographic operations

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Supplied key does not match the algorithm's required byte length
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    RandomGeneration {
        context: &'static str,
        message: String,
    },

    /// Encryption error from the underlying cipher primitive
    Encryption {
        context: &'static str,
        message: String,
    },

    /// Authentication failed error
    ///
    /// Carries no detail beyond the algorithm context so that different
    /// verification failures stay indistinguishable to the caller.
    AuthenticationFailed {
        context: &'static str,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKeyLength { context, expected, actual } => {
                write!(f, "{}: invalid key length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            Self::RandomGeneration { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            },
            Self::Encryption { context, message } => {
                write!(f, "Encryption error: {}: {}", context, message)
            },
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            },
        }
    }
}
