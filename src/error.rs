use core::fmt;

/// Error taxonomy of the crate.
///
/// Verification failure, key exhaustion and malformed encodings are distinct,
/// definite outcomes; none of them is used for control flow inside the crate
/// and no operation retries on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LmsError {
    /// Malformed or internally inconsistent encoding. No value is constructed.
    InvalidFormat(&'static str),
    /// A recomputed hash value does not match the claimed one.
    InvalidSignature,
    /// All leaves of the key (and of every regenerable subordinate tree)
    /// have been issued. Terminal for signing.
    KeyExhausted,
    /// The entropy source could not produce the requested bytes.
    EntropyFailure,
}

impl fmt::Display for LmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LmsError::InvalidFormat(reason) => write!(f, "invalid encoding: {}", reason),
            LmsError::InvalidSignature => write!(f, "signature verification failed"),
            LmsError::KeyExhausted => write!(f, "private key is exhausted"),
            LmsError::EntropyFailure => write!(f, "entropy source failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LmsError {}

impl From<LmsError> for signature::Error {
    fn from(_: LmsError) -> Self {
        signature::Error::new()
    }
}
