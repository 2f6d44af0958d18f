use subtle::ConstantTimeEq;

use crate::{
    constants::{chain_buffer, LmsLeafIdentifier, LmsTreeIdentifier, Node, D_PBLC},
    error::LmsError,
    hasher::HashChain,
    util::coef::coef,
};

use super::{
    advance_chain, definitions::LmotsPublicKey, message_digest, new_chain_buffer,
    signing::LmotsSignature,
};

/// Recomputes the public key candidate `Kc` from a signature by walking each
/// chain from the signed position to its end (RFC 8554 section 4.6,
/// algorithm 4b).
pub(crate) fn generate_public_key_candidate<H: HashChain>(
    signature: &LmotsSignature<H>,
    tree_identifier: &LmsTreeIdentifier,
    leaf_identifier: &LmsLeafIdentifier,
    message: &[u8],
) -> Node {
    let parameter = signature.lmots_parameter;
    let max_step = parameter.get_max_chain_step();

    let message_hash = message_digest::<H>(
        tree_identifier,
        leaf_identifier,
        signature.signature_randomizer.as_slice(),
        message,
    );
    let digits = parameter.append_checksum_to(message_hash.as_slice());

    let mut chain_hasher = parameter.get_hasher();
    let mut key_hasher = parameter.get_hasher();
    key_hasher.update(tree_identifier);
    key_hasher.update(leaf_identifier);
    key_hasher.update(&D_PBLC);

    let mut buffer = new_chain_buffer::<H>(tree_identifier, leaf_identifier);

    for chain in 0..parameter.get_num_chains() {
        let start = coef(digits.as_slice(), chain, parameter.get_winternitz()) as u8;

        buffer[chain_buffer::OFF_VALUE..]
            .copy_from_slice(signature.signature_data[chain as usize].as_slice());
        advance_chain(&mut buffer, chain, start, max_step, &mut chain_hasher);

        key_hasher.update(&buffer[chain_buffer::OFF_VALUE..]);
    }

    key_hasher.finalize()
}

pub(crate) fn verify_signature<H: HashChain>(
    signature: &LmotsSignature<H>,
    public_key: &LmotsPublicKey<H>,
    message: &[u8],
) -> Result<(), LmsError> {
    if signature.lmots_parameter != public_key.lmots_parameter {
        return Err(LmsError::InvalidSignature);
    }

    let candidate = generate_public_key_candidate(
        signature,
        &public_key.lms_tree_identifier,
        &public_key.lms_leaf_identifier,
        message,
    );

    if candidate
        .as_slice()
        .ct_eq(public_key.key.as_slice())
        .into()
    {
        Ok(())
    } else {
        Err(LmsError::InvalidSignature)
    }
}
