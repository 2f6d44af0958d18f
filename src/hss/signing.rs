use tinyvec::ArrayVec;

use crate::{
    constants::{
        MAX_HSS_LEVELS, MAX_HSS_SIGNATURE_LENGTH, MAX_LMS_PUBLIC_KEY_LENGTH,
        MAX_LMS_SIGNATURE_LENGTH,
    },
    error::LmsError,
    hasher::HashChain,
    lms::{
        definitions::{LmsPrivateKey, LmsPublicKey},
        signing::LmsSignature,
    },
    random::EntropySource,
    util::composer::{Composer, Parser},
};

use super::definitions::HssPrivateKey;

/// One intermediate level of a hierarchy signature: the child tree's public
/// key and the parent's signature over its encoding.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HssSignedPublicKey<H: HashChain> {
    pub signature: LmsSignature<H>,
    pub public_key: LmsPublicKey<H>,
}

impl<H: HashChain> HssSignedPublicKey<H> {
    pub fn to_binary_representation(
        &self,
    ) -> ArrayVec<[u8; MAX_LMS_SIGNATURE_LENGTH + MAX_LMS_PUBLIC_KEY_LENGTH]> {
        Composer::<{ MAX_LMS_SIGNATURE_LENGTH + MAX_LMS_PUBLIC_KEY_LENGTH }>::new()
            .bytes(self.signature.to_binary_representation().as_slice())
            .bytes(self.public_key.to_binary_representation().as_slice())
            .build()
    }

    pub(crate) fn from_parser(parser: &mut Parser<'_>) -> Result<Self, LmsError> {
        let signature = LmsSignature::from_parser(parser)?;
        let public_key = LmsPublicKey::from_parser(parser)?;

        Ok(HssSignedPublicKey {
            signature,
            public_key,
        })
    }
}

/// Signature of the hierarchy: the chain of signed public keys from the root
/// down, followed by the bottom tree's signature over the message
/// (RFC 8554 section 6.4).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HssSignature<H: HashChain> {
    pub signed_public_keys: ArrayVec<[HssSignedPublicKey<H>; MAX_HSS_LEVELS]>,
    pub signature: LmsSignature<H>,
}

impl<H: HashChain> HssSignature<H> {
    /// Signs `message` with the bottom tree, regenerating exhausted trees
    /// from fresh entropy first.
    ///
    /// The walk looks for the deepest level that still has an unused leaf;
    /// every level below it is rebuilt and re-certified by its parent. When
    /// even the root is exhausted the key is spent for good and
    /// [`LmsError::KeyExhausted`] is returned without consuming anything.
    pub fn sign<E: EntropySource>(
        private_key: &mut HssPrivateKey<H>,
        message: &[u8],
        entropy: &mut E,
    ) -> Result<Self, LmsError> {
        let levels = private_key.get_levels();

        let mut active_level = None;
        for (index, lms_private_key) in private_key.private_keys.iter_mut().enumerate().rev() {
            let num_leafs = lms_private_key.lms_parameter.number_of_lm_ots_keys();
            if lms_private_key.state.current_leaf(num_leafs).is_ok() {
                active_level = Some(index);
                break;
            }
        }
        let active_level = active_level.ok_or(LmsError::KeyExhausted)?;

        for index in active_level + 1..levels {
            let lms_parameter = private_key.private_keys[index].lms_parameter;
            let lmots_parameter = private_key.private_keys[index].lmots_parameter;

            let fresh_key = LmsPrivateKey::generate(lms_parameter, lmots_parameter, entropy)?;
            private_key.public_keys[index] = LmsPublicKey::from_private_key(&fresh_key);
            private_key.private_keys[index] = fresh_key;

            let child_public_key = private_key.public_keys[index].to_binary_representation();
            private_key.signatures[index - 1] = LmsSignature::sign(
                &mut private_key.private_keys[index - 1],
                child_public_key.as_slice(),
                entropy,
            )?;
        }

        let message_signature = LmsSignature::sign(
            &mut private_key.private_keys[levels - 1],
            message,
            entropy,
        )?;

        let mut signed_public_keys = ArrayVec::new();
        for index in 0..levels - 1 {
            signed_public_keys.push(HssSignedPublicKey {
                signature: private_key.signatures[index].clone(),
                public_key: private_key.public_keys[index + 1].clone(),
            });
        }

        Ok(HssSignature {
            signed_public_keys,
            signature: message_signature,
        })
    }

    pub fn to_binary_representation(&self) -> ArrayVec<[u8; MAX_HSS_SIGNATURE_LENGTH]> {
        let mut composer = Composer::<MAX_HSS_SIGNATURE_LENGTH>::new()
            .u32str(self.signed_public_keys.len() as u32);

        for signed_public_key in self.signed_public_keys.iter() {
            composer = composer.bytes(signed_public_key.to_binary_representation().as_slice());
        }

        composer.bytes(self.signature.to_binary_representation().as_slice()).build()
    }

    /// Decodes a signature of a hierarchy of known depth. The expected depth
    /// comes from the public key; an encoding whose embedded level count
    /// disagrees is rejected before any nested field is examined.
    pub fn from_binary_representation(data: &[u8], levels: u32) -> Result<Self, LmsError> {
        let mut parser = Parser::new(data);

        let num_signed_public_keys = parser.u32str()?;
        if num_signed_public_keys as usize >= MAX_HSS_LEVELS {
            return Err(LmsError::InvalidFormat(
                "number of signed public keys exceeds maximum",
            ));
        }
        if num_signed_public_keys
            .checked_add(1)
            .map_or(true, |embedded_levels| embedded_levels != levels)
        {
            return Err(LmsError::InvalidFormat("level count mismatch"));
        }

        let mut signed_public_keys = ArrayVec::new();
        for _ in 0..num_signed_public_keys {
            signed_public_keys.push(HssSignedPublicKey::from_parser(&mut parser)?);
        }

        let signature = LmsSignature::from_parser(&mut parser)?;
        parser.finish()?;

        Ok(HssSignature {
            signed_public_keys,
            signature,
        })
    }
}
