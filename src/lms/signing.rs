use tinyvec::ArrayVec;

use crate::{
    constants::{Node, MAX_LMS_SIGNATURE_LENGTH, MAX_TREE_HEIGHT},
    error::LmsError,
    hasher::HashChain,
    lm_ots::signing::LmotsSignature,
    random::EntropySource,
    util::composer::{Composer, Parser},
};

use super::{
    definitions::LmsPrivateKey,
    parameters::{LmsAlgorithm, LmsParameter},
    tree,
};

/// Signature of one tree: leaf index `q`, the one-time signature of that
/// leaf and the authentication path up to the root (RFC 8554 section 5.4).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LmsSignature<H: HashChain> {
    pub lms_leaf_identifier: u32,
    pub lmots_signature: LmotsSignature<H>,
    pub lms_parameter: LmsParameter<H>,
    pub authentication_path: ArrayVec<[Node; MAX_TREE_HEIGHT]>,
}

impl<H: HashChain> LmsSignature<H> {
    /// Signs `message` with the next unused leaf. The leaf is committed as
    /// consumed only after the complete signature has been produced, so a
    /// failing entropy source does not burn a leaf.
    pub fn sign<E: EntropySource>(
        private_key: &mut LmsPrivateKey<H>,
        message: &[u8],
        entropy: &mut E,
    ) -> Result<Self, LmsError> {
        let num_leafs = private_key.lms_parameter.number_of_lm_ots_keys();
        let leaf_number = private_key.state.current_leaf(num_leafs)?;

        let ots_private_key = private_key.ots_private_key(leaf_number);
        let lmots_signature = LmotsSignature::sign(&ots_private_key, message, entropy)?;

        let authentication_path = tree::authentication_path(private_key, leaf_number);

        private_key.state.advance();

        Ok(LmsSignature {
            lms_leaf_identifier: leaf_number,
            lmots_signature,
            lms_parameter: private_key.lms_parameter,
            authentication_path,
        })
    }

    pub fn to_binary_representation(&self) -> ArrayVec<[u8; MAX_LMS_SIGNATURE_LENGTH]> {
        let mut composer = Composer::<MAX_LMS_SIGNATURE_LENGTH>::new()
            .u32str(self.lms_leaf_identifier)
            .bytes(self.lmots_signature.to_binary_representation().as_slice())
            .u32str(self.lms_parameter.get_type_id());

        for node in self.authentication_path.iter() {
            composer = composer.bytes(node.as_slice());
        }

        composer.build()
    }

    pub fn from_binary_representation(data: &[u8]) -> Result<Self, LmsError> {
        let mut parser = Parser::new(data);
        let signature = Self::from_parser(&mut parser)?;
        parser.finish()?;
        Ok(signature)
    }

    pub(crate) fn from_parser(parser: &mut Parser<'_>) -> Result<Self, LmsError> {
        let lms_leaf_identifier = parser.u32str()?;

        let lmots_signature = LmotsSignature::from_parser(parser)?;

        let lms_type = parser.u32str()?;
        let lms_parameter = LmsAlgorithm::get_from_type::<H>(lms_type)
            .ok_or(LmsError::InvalidFormat("unknown tree typecode"))?;

        if lms_leaf_identifier >= lms_parameter.number_of_lm_ots_keys() {
            return Err(LmsError::InvalidFormat("leaf index exceeds tree capacity"));
        }

        let mut authentication_path = ArrayVec::new();
        for _ in 0..lms_parameter.get_tree_height() {
            let mut node = Node::new();
            node.extend_from_slice(parser.bytes(lms_parameter.get_hash_size())?);
            authentication_path.push(node);
        }

        Ok(LmsSignature {
            lms_leaf_identifier,
            lmots_signature,
            lms_parameter,
            authentication_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LmsSignature;
    use crate::constants::lms_signature_length;
    use crate::error::LmsError;
    use crate::hasher::sha256::Sha256;
    use crate::lm_ots::parameters::LmotsAlgorithm;
    use crate::lms::definitions::LmsPrivateKey;
    use crate::lms::parameters::LmsAlgorithm;
    use crate::random::FixedEntropy;

    #[test]
    fn consecutive_signatures_use_consecutive_leafs() {
        let mut entropy = FixedEntropy::new(&[21u8; 48]);
        let mut private_key = LmsPrivateKey::<Sha256>::generate(
            LmsAlgorithm::get_from_type(5).unwrap(),
            LmotsAlgorithm::get_from_type(3).unwrap(),
            &mut entropy,
        )
        .unwrap();

        let randomizer = [6u8; 64];
        let mut signing_entropy = FixedEntropy::new(&randomizer);

        let first = LmsSignature::sign(&mut private_key, b"first", &mut signing_entropy).unwrap();
        let second =
            LmsSignature::sign(&mut private_key, b"second", &mut signing_entropy).unwrap();

        assert_eq!(first.lms_leaf_identifier, 0);
        assert_eq!(second.lms_leaf_identifier, 1);
        assert_eq!(private_key.remaining_signatures(), 30);
    }

    #[test]
    fn binary_representation_round_trip() {
        let mut entropy = FixedEntropy::new(&[8u8; 48]);
        let mut private_key = LmsPrivateKey::<Sha256>::generate(
            LmsAlgorithm::get_from_type(5).unwrap(),
            LmotsAlgorithm::get_from_type(3).unwrap(),
            &mut entropy,
        )
        .unwrap();

        let mut signing_entropy = FixedEntropy::new(&[3u8; 32]);
        let signature =
            LmsSignature::sign(&mut private_key, b"data", &mut signing_entropy).unwrap();

        let encoded = signature.to_binary_representation();
        assert_eq!(encoded.len(), lms_signature_length(32, 67, 5));

        let decoded =
            LmsSignature::<Sha256>::from_binary_representation(encoded.as_slice()).unwrap();
        assert_eq!(decoded, signature);
    }

    #[test]
    fn truncated_signature_is_rejected() {
        let mut entropy = FixedEntropy::new(&[8u8; 48]);
        let mut private_key = LmsPrivateKey::<Sha256>::generate(
            LmsAlgorithm::get_from_type(5).unwrap(),
            LmotsAlgorithm::get_from_type(3).unwrap(),
            &mut entropy,
        )
        .unwrap();

        let mut signing_entropy = FixedEntropy::new(&[3u8; 32]);
        let signature =
            LmsSignature::sign(&mut private_key, b"data", &mut signing_entropy).unwrap();

        let encoded = signature.to_binary_representation();
        let truncated = &encoded.as_slice()[..encoded.len() - 1];
        assert!(matches!(
            LmsSignature::<Sha256>::from_binary_representation(truncated),
            Err(LmsError::InvalidFormat(_))
        ));
    }
}
