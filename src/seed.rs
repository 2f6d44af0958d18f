use core::marker::PhantomData;

use tinyvec::ArrayVec;
use zeroize::Zeroize;

use crate::{constants::MAX_SEED_LEN, hasher::HashChain};

/// Secret seed of one LMS tree; all of the tree's one-time keys are derived
/// from it. Its length always equals the hash output length of `H`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed<H: HashChain> {
    data: ArrayVec<[u8; MAX_SEED_LEN]>,
    phantom: PhantomData<H>,
}

impl<H: HashChain> Seed<H> {
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }

    pub fn from_slice(data: &[u8]) -> Option<Self> {
        if data.len() != H::OUTPUT_SIZE as usize {
            return None;
        }

        let mut seed = Seed::default();
        seed.as_mut_slice().copy_from_slice(data);
        Some(seed)
    }
}

impl<H: HashChain> Default for Seed<H> {
    fn default() -> Self {
        Seed {
            data: ArrayVec::from_array_len([0u8; MAX_SEED_LEN], H::OUTPUT_SIZE as usize),
            phantom: PhantomData,
        }
    }
}

impl<H: HashChain> Zeroize for Seed<H> {
    fn zeroize(&mut self) {
        self.data.as_mut_slice().zeroize();
    }
}
