use tinyvec::ArrayVec;

use crate::constants::MAX_HASH_SIZE;

pub mod sha256;
pub mod shake256;

/// Hash function used for every hash invocation of the scheme.
///
/// The scheme only relies on a fixed output length and collision resistance;
/// software implementations exist for [`sha256::Sha256`] and
/// [`shake256::Shake256`], and the trait can be implemented to outsource the
/// computation to hardware accelerators.
///
/// The `PartialEq` bound carries no meaning for a hasher itself; it lets the
/// parameter structs holding a hasher type derive `PartialEq`.
pub trait HashChain: Default + Clone + PartialEq + Send {
    const OUTPUT_SIZE: u16;

    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> ArrayVec<[u8; MAX_HASH_SIZE]>;
    fn finalize_reset(&mut self) -> ArrayVec<[u8; MAX_HASH_SIZE]>;
}
