use crate::error::LmsError;

/// Capability to produce uniformly random bytes.
///
/// Key generation and signing take an implementation explicitly instead of
/// reaching for ambient randomness, so deterministic sources can be
/// substituted in tests and reproduction scenarios. Failures of the source
/// are propagated unmodified as [`LmsError::EntropyFailure`].
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), LmsError>;
}

/// Adapter turning any cryptographically secure `rand` generator into an
/// [`EntropySource`].
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RngEntropy<R>(pub R);

#[cfg(feature = "rand")]
impl<R> EntropySource for RngEntropy<R>
where
    R: rand::RngCore + rand::CryptoRng,
{
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), LmsError> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|_| LmsError::EntropyFailure)
    }
}

/// Entropy source replaying a fixed byte stream.
///
/// Fails once the stream is consumed. Intended for reproducing key pairs from
/// recorded entropy and for the deterministic test vectors.
#[derive(Debug, Clone)]
pub struct FixedEntropy<'a> {
    data: &'a [u8],
}

impl<'a> FixedEntropy<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        FixedEntropy { data }
    }
}

impl EntropySource for FixedEntropy<'_> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), LmsError> {
        if self.data.len() < dest.len() {
            return Err(LmsError::EntropyFailure);
        }

        let (head, tail) = self.data.split_at(dest.len());
        dest.copy_from_slice(head);
        self.data = tail;
        Ok(())
    }
}
