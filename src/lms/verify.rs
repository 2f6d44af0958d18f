use subtle::ConstantTimeEq;

use crate::{
    constants::{D_INTR, D_LEAF},
    error::LmsError,
    hasher::HashChain,
    lm_ots,
    util::{is_odd, ustr::u32str},
};

use super::{definitions::LmsPublicKey, signing::LmsSignature};

/// Verifies one tree signature against the tree's public key (RFC 8554
/// section 5.4.2): recompute the one-time public key candidate, fold it up
/// the authentication path and compare against the root.
pub(crate) fn verify_signature<H: HashChain>(
    signature: &LmsSignature<H>,
    public_key: &LmsPublicKey<H>,
    message: &[u8],
) -> Result<(), LmsError> {
    if signature.lms_parameter != public_key.lms_parameter
        || signature.lmots_signature.lmots_parameter != public_key.lmots_parameter
    {
        return Err(LmsError::InvalidSignature);
    }

    let num_leafs = signature.lms_parameter.number_of_lm_ots_keys();
    if signature.lms_leaf_identifier >= num_leafs {
        return Err(LmsError::InvalidSignature);
    }

    let leaf_identifier = u32str(signature.lms_leaf_identifier);
    let key_candidate = lm_ots::verify::generate_public_key_candidate(
        &signature.lmots_signature,
        &public_key.lms_tree_identifier,
        &leaf_identifier,
        message,
    );

    let mut node_index = num_leafs + signature.lms_leaf_identifier;

    let mut hasher = H::default();
    hasher.update(&public_key.lms_tree_identifier);
    hasher.update(&u32str(node_index));
    hasher.update(&D_LEAF);
    hasher.update(key_candidate.as_slice());
    let mut node_value = hasher.finalize_reset();

    for sibling in signature.authentication_path.iter() {
        hasher.update(&public_key.lms_tree_identifier);
        hasher.update(&u32str(node_index >> 1));
        hasher.update(&D_INTR);

        if is_odd(node_index as usize) {
            hasher.update(sibling.as_slice());
            hasher.update(node_value.as_slice());
        } else {
            hasher.update(node_value.as_slice());
            hasher.update(sibling.as_slice());
        }

        node_value = hasher.finalize_reset();
        node_index >>= 1;
    }

    if node_value
        .as_slice()
        .ct_eq(public_key.key.as_slice())
        .into()
    {
        Ok(())
    } else {
        Err(LmsError::InvalidSignature)
    }
}
