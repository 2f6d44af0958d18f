//! Winternitz one-time signatures (LM-OTS, RFC 8554 section 4).
//!
//! One-time keys are never stored: the chain start values are derived from
//! the tree seed on demand (Appendix A) and every chain computation reuses a
//! single in-place buffer `I ‖ q ‖ chain ‖ step ‖ value`.

use tinyvec::ArrayVec;

use crate::{
    constants::{
        chain_buffer, LmsLeafIdentifier, LmsTreeIdentifier, Node, D_MESG, D_PBLC,
        SEED_DERIVE_TAG,
    },
    hasher::HashChain,
    seed::Seed,
    util::ustr::u16str,
};

use self::definitions::{LmotsPrivateKey, LmotsPublicKey};
use self::parameters::LmotsParameter;

pub mod definitions;
pub mod parameters;
pub mod signing;
pub mod verify;

pub(crate) fn new_chain_buffer<H: HashChain>(
    tree_identifier: &LmsTreeIdentifier,
    leaf_identifier: &LmsLeafIdentifier,
) -> ArrayVec<[u8; chain_buffer::MAX_LEN]> {
    let len = chain_buffer::len(H::OUTPUT_SIZE as usize);
    let mut buffer = ArrayVec::from_array_len([0u8; chain_buffer::MAX_LEN], len);

    buffer[chain_buffer::OFF_I..chain_buffer::OFF_Q].copy_from_slice(tree_identifier);
    buffer[chain_buffer::OFF_Q..chain_buffer::OFF_CHAIN].copy_from_slice(leaf_identifier);

    buffer
}

/// Writes the pseudorandom chain start value `x[chain]` into the value region
/// of `buffer` (RFC 8554 Appendix A).
pub(crate) fn derive_chain_start<H: HashChain>(
    buffer: &mut [u8],
    chain: u16,
    seed: &Seed<H>,
    hasher: &mut H,
) {
    buffer[chain_buffer::OFF_CHAIN..chain_buffer::OFF_STEP].copy_from_slice(&u16str(chain));
    buffer[chain_buffer::OFF_STEP] = SEED_DERIVE_TAG;
    buffer[chain_buffer::OFF_VALUE..].copy_from_slice(seed.as_slice());

    hasher.update(buffer);
    let start = hasher.finalize_reset();
    buffer[chain_buffer::OFF_VALUE..].copy_from_slice(start.as_slice());
}

/// Iterates the hash chain in place, stepping the value region of `buffer`
/// from position `from` to position `to`.
pub(crate) fn advance_chain<H: HashChain>(
    buffer: &mut [u8],
    chain: u16,
    from: u8,
    to: u8,
    hasher: &mut H,
) {
    buffer[chain_buffer::OFF_CHAIN..chain_buffer::OFF_STEP].copy_from_slice(&u16str(chain));

    for step in from..to {
        buffer[chain_buffer::OFF_STEP] = step;
        hasher.update(buffer);
        let value = hasher.finalize_reset();
        buffer[chain_buffer::OFF_VALUE..].copy_from_slice(value.as_slice());
    }
}

pub(crate) fn generate_private_key<H: HashChain>(
    lmots_parameter: LmotsParameter<H>,
    lms_tree_identifier: LmsTreeIdentifier,
    lms_leaf_identifier: LmsLeafIdentifier,
    seed: Seed<H>,
) -> LmotsPrivateKey<H> {
    LmotsPrivateKey {
        lmots_parameter,
        lms_tree_identifier,
        lms_leaf_identifier,
        seed,
    }
}

/// Computes `K = H(I ‖ q ‖ D_PBLC ‖ y[0] ‖ .. ‖ y[p-1])` by walking every
/// chain to its end.
pub(crate) fn generate_public_key<H: HashChain>(
    private_key: &LmotsPrivateKey<H>,
) -> LmotsPublicKey<H> {
    let parameter = private_key.lmots_parameter;
    let max_step = parameter.get_max_chain_step();

    let mut chain_hasher = parameter.get_hasher();
    let mut key_hasher = parameter.get_hasher();
    key_hasher.update(&private_key.lms_tree_identifier);
    key_hasher.update(&private_key.lms_leaf_identifier);
    key_hasher.update(&D_PBLC);

    let mut buffer = new_chain_buffer::<H>(
        &private_key.lms_tree_identifier,
        &private_key.lms_leaf_identifier,
    );

    for chain in 0..parameter.get_num_chains() {
        derive_chain_start(&mut buffer, chain, &private_key.seed, &mut chain_hasher);
        advance_chain(&mut buffer, chain, 0, max_step, &mut chain_hasher);
        key_hasher.update(&buffer[chain_buffer::OFF_VALUE..]);
    }

    LmotsPublicKey {
        lmots_parameter: parameter,
        lms_tree_identifier: private_key.lms_tree_identifier,
        lms_leaf_identifier: private_key.lms_leaf_identifier,
        key: key_hasher.finalize(),
    }
}

/// Hashes message and randomizer into the digest `Q` whose digits select the
/// chain positions of a signature.
pub(crate) fn message_digest<H: HashChain>(
    tree_identifier: &LmsTreeIdentifier,
    leaf_identifier: &LmsLeafIdentifier,
    signature_randomizer: &[u8],
    message: &[u8],
) -> Node {
    let mut hasher = H::default();

    hasher.update(tree_identifier);
    hasher.update(leaf_identifier);
    hasher.update(&D_MESG);
    hasher.update(signature_randomizer);
    hasher.update(message);

    hasher.finalize()
}
