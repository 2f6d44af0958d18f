use tinyvec::ArrayVec;

use crate::{
    constants::{
        chain_buffer, Node, MAX_HASH_SIZE, MAX_LMOTS_SIGNATURE_LENGTH,
        MAX_NUM_WINTERNITZ_CHAINS,
    },
    error::LmsError,
    hasher::HashChain,
    random::EntropySource,
    util::{
        coef::coef,
        composer::{Composer, Parser},
    },
};

use super::{
    advance_chain, definitions::LmotsPrivateKey, derive_chain_start, message_digest,
    new_chain_buffer,
    parameters::{LmotsAlgorithm, LmotsParameter},
};

/// One-time signature: the randomizer `C` and the chain values
/// `y[0] ‖ .. ‖ y[p-1]` (RFC 8554 section 4.5).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LmotsSignature<H: HashChain> {
    pub lmots_parameter: LmotsParameter<H>,
    pub signature_randomizer: Node,
    pub signature_data: ArrayVec<[Node; MAX_NUM_WINTERNITZ_CHAINS]>,
}

impl<H: HashChain> LmotsSignature<H> {
    /// Signs `message` with the one-time key. The randomizer `C` is drawn
    /// fresh from the entropy source for every signature.
    pub fn sign<E: EntropySource>(
        private_key: &LmotsPrivateKey<H>,
        message: &[u8],
        entropy: &mut E,
    ) -> Result<Self, LmsError> {
        let parameter = private_key.lmots_parameter;
        let hash_size = parameter.get_hash_size();

        let mut signature_randomizer = Node::from_array_len([0u8; MAX_HASH_SIZE], hash_size);
        entropy.fill(signature_randomizer.as_mut_slice())?;

        let message_hash = message_digest::<H>(
            &private_key.lms_tree_identifier,
            &private_key.lms_leaf_identifier,
            signature_randomizer.as_slice(),
            message,
        );
        let digits = parameter.append_checksum_to(message_hash.as_slice());

        let mut chain_hasher = parameter.get_hasher();
        let mut buffer = new_chain_buffer::<H>(
            &private_key.lms_tree_identifier,
            &private_key.lms_leaf_identifier,
        );

        let mut signature_data = ArrayVec::new();
        for chain in 0..parameter.get_num_chains() {
            let steps = coef(digits.as_slice(), chain, parameter.get_winternitz()) as u8;

            derive_chain_start(&mut buffer, chain, &private_key.seed, &mut chain_hasher);
            advance_chain(&mut buffer, chain, 0, steps, &mut chain_hasher);

            let mut value = Node::new();
            value.extend_from_slice(&buffer[chain_buffer::OFF_VALUE..]);
            signature_data.push(value);
        }

        Ok(LmotsSignature {
            lmots_parameter: parameter,
            signature_randomizer,
            signature_data,
        })
    }

    pub fn to_binary_representation(&self) -> ArrayVec<[u8; MAX_LMOTS_SIGNATURE_LENGTH]> {
        let mut composer = Composer::<MAX_LMOTS_SIGNATURE_LENGTH>::new()
            .u32str(self.lmots_parameter.get_type_id())
            .bytes(self.signature_randomizer.as_slice());

        for value in self.signature_data.iter() {
            composer = composer.bytes(value.as_slice());
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
        let type_id = parser.u32str()?;
        let lmots_parameter = LmotsAlgorithm::get_from_type::<H>(type_id)
            .ok_or(LmsError::InvalidFormat("unknown one-time signature typecode"))?;

        let hash_size = lmots_parameter.get_hash_size();

        let mut signature_randomizer = Node::new();
        signature_randomizer.extend_from_slice(parser.bytes(hash_size)?);

        let mut signature_data = ArrayVec::new();
        for _ in 0..lmots_parameter.get_num_chains() {
            let mut value = Node::new();
            value.extend_from_slice(parser.bytes(hash_size)?);
            signature_data.push(value);
        }

        Ok(LmotsSignature {
            lmots_parameter,
            signature_randomizer,
            signature_data,
        })
    }
}
