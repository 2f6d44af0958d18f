use tinyvec::ArrayVec;

use digest::Digest;
use sha2::Sha256 as Hasher;

use crate::constants::MAX_HASH_SIZE;

use super::HashChain;

/// [`HashChain`] backend over [`sha2::Sha256`].
#[derive(Debug, Default, Clone)]
pub struct Sha256 {
    hasher: Hasher,
}

impl HashChain for Sha256 {
    const OUTPUT_SIZE: u16 = 32;

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn finalize(self) -> ArrayVec<[u8; MAX_HASH_SIZE]> {
        let digest = self.hasher.finalize();
        let mut result = ArrayVec::new();
        result.extend_from_slice(&digest);
        result
    }

    fn finalize_reset(&mut self) -> ArrayVec<[u8; MAX_HASH_SIZE]> {
        let digest = self.hasher.finalize_reset();
        let mut result = ArrayVec::new();
        result.extend_from_slice(&digest);
        result
    }
}

// Hasher state is never compared; two backends of the same type count as
// equal so parameter structs can derive PartialEq.
impl PartialEq for Sha256 {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}
