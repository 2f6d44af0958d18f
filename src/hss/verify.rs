use crate::{error::LmsError, hasher::HashChain, lms};

use super::{definitions::HssPublicKey, signing::HssSignature};

/// Verifies a hierarchy signature top-down (RFC 8554 section 6.3): each
/// level's signature is checked against the currently trusted public key and
/// only then is the next level's public key adopted as trusted. The final
/// trusted key verifies the message itself.
pub(crate) fn verify_signature<H: HashChain>(
    signature: &HssSignature<H>,
    public_key: &HssPublicKey<H>,
    message: &[u8],
) -> Result<(), LmsError> {
    if signature.signed_public_keys.len() + 1 != public_key.levels as usize {
        return Err(LmsError::InvalidSignature);
    }

    let mut trusted_public_key = &public_key.public_key;

    for signed_public_key in signature.signed_public_keys.iter() {
        let encoded_child = signed_public_key.public_key.to_binary_representation();
        lms::verify::verify_signature(
            &signed_public_key.signature,
            trusted_public_key,
            encoded_child.as_slice(),
        )?;

        trusted_public_key = &signed_public_key.public_key;
    }

    lms::verify::verify_signature(&signature.signature, trusted_public_key, message)
}
