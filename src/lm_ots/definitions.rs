use crate::{
    constants::{LmsLeafIdentifier, LmsTreeIdentifier, Node, ILEN, MAX_LMOTS_PUBLIC_KEY_LENGTH},
    error::LmsError,
    hasher::HashChain,
    seed::Seed,
    util::{
        composer::{Composer, Parser},
        ustr::str32u,
    },
};

use super::parameters::{LmotsAlgorithm, LmotsParameter};

/// One-time private key. Holds only the derivation inputs; the chain start
/// values `x[i]` are recomputed from the seed whenever they are needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LmotsPrivateKey<H: HashChain> {
    pub lmots_parameter: LmotsParameter<H>,
    pub lms_tree_identifier: LmsTreeIdentifier,
    pub lms_leaf_identifier: LmsLeafIdentifier,
    pub seed: Seed<H>,
}

/// One-time public key `K` together with its position inside the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LmotsPublicKey<H: HashChain> {
    pub lmots_parameter: LmotsParameter<H>,
    pub lms_tree_identifier: LmsTreeIdentifier,
    pub lms_leaf_identifier: LmsLeafIdentifier,
    pub key: Node,
}

impl<H: HashChain> LmotsPublicKey<H> {
    pub fn to_binary_representation(&self) -> tinyvec::ArrayVec<[u8; MAX_LMOTS_PUBLIC_KEY_LENGTH]> {
        Composer::<MAX_LMOTS_PUBLIC_KEY_LENGTH>::new()
            .u32str(self.lmots_parameter.get_type_id())
            .bytes(&self.lms_tree_identifier)
            .bytes(&self.lms_leaf_identifier)
            .bytes(self.key.as_slice())
            .build()
    }

    pub fn from_binary_representation(data: &[u8]) -> Result<Self, LmsError> {
        let mut parser = Parser::new(data);
        let public_key = Self::from_parser(&mut parser)?;
        parser.finish()?;
        Ok(public_key)
    }

    pub(crate) fn from_parser(parser: &mut Parser<'_>) -> Result<Self, LmsError> {
        let type_id = parser.u32str()?;
        let lmots_parameter = LmotsAlgorithm::get_from_type::<H>(type_id)
            .ok_or(LmsError::InvalidFormat("unknown one-time signature typecode"))?;

        if lmots_parameter.get_hash_size() != H::OUTPUT_SIZE as usize {
            return Err(LmsError::InvalidFormat("typecode does not match hash size"));
        }

        let mut lms_tree_identifier = LmsTreeIdentifier::default();
        lms_tree_identifier.copy_from_slice(parser.bytes(ILEN)?);

        let mut lms_leaf_identifier = LmsLeafIdentifier::default();
        lms_leaf_identifier.copy_from_slice(parser.bytes(4)?);

        let mut key = Node::new();
        key.extend_from_slice(parser.bytes(lmots_parameter.get_hash_size())?);

        Ok(LmotsPublicKey {
            lmots_parameter,
            lms_tree_identifier,
            lms_leaf_identifier,
            key,
        })
    }

    pub fn leaf_number(&self) -> u32 {
        str32u(&self.lms_leaf_identifier)
    }
}
