use tinyvec::ArrayVec;

use sha3::{
    digest::{ExtendableOutput, ExtendableOutputReset, Update, XofReader},
    Shake256 as Hasher,
};

use crate::constants::MAX_HASH_SIZE;

use super::HashChain;

/// [`HashChain`] backend over [`sha3::Shake256`], read at a fixed 32 bytes
/// of XOF output.
#[derive(Debug, Default, Clone)]
pub struct Shake256 {
    hasher: Hasher,
}

impl HashChain for Shake256 {
    const OUTPUT_SIZE: u16 = 32;

    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(self) -> ArrayVec<[u8; MAX_HASH_SIZE]> {
        let mut digest = [0u8; Self::OUTPUT_SIZE as usize];
        self.hasher.finalize_xof().read(&mut digest);
        ArrayVec::from(digest)
    }

    fn finalize_reset(&mut self) -> ArrayVec<[u8; MAX_HASH_SIZE]> {
        let mut digest = [0u8; Self::OUTPUT_SIZE as usize];
        self.hasher.finalize_xof_reset().read(&mut digest);
        ArrayVec::from(digest)
    }
}

// Hasher state is never compared; two backends of the same type count as
// equal so parameter structs can derive PartialEq.
impl PartialEq for Shake256 {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}
