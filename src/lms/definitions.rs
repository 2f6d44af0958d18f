use tinyvec::ArrayVec;
use zeroize::Zeroize;

use crate::{
    constants::{
        LmsTreeIdentifier, Node, ILEN, MAX_LMS_PRIVATE_KEY_LENGTH, MAX_LMS_PUBLIC_KEY_LENGTH,
    },
    error::LmsError,
    hasher::HashChain,
    lm_ots::{
        self,
        definitions::LmotsPrivateKey,
        parameters::{LmotsAlgorithm, LmotsParameter},
    },
    random::EntropySource,
    seed::Seed,
    util::{
        composer::{Composer, Parser},
        ustr::u32str,
    },
};

use super::{
    parameters::{LmsAlgorithm, LmsParameter},
    tree,
};

/// Progress of leaf consumption within one tree.
///
/// `Active { next }` means leaf `next` is the one the next signature will
/// use. The transition to `Exhausted` is one-way; an exhausted key never
/// signs again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafState {
    Active { next: u32 },
    Exhausted,
}

impl Default for LeafState {
    fn default() -> Self {
        LeafState::Active { next: 0 }
    }
}

impl LeafState {
    /// Returns the leaf the next signature will consume, or transitions to
    /// `Exhausted` if none is left.
    pub fn current_leaf(&mut self, num_leafs: u32) -> Result<u32, LmsError> {
        match *self {
            LeafState::Exhausted => Err(LmsError::KeyExhausted),
            LeafState::Active { next } if next >= num_leafs => {
                *self = LeafState::Exhausted;
                Err(LmsError::KeyExhausted)
            }
            LeafState::Active { next } => Ok(next),
        }
    }

    /// Marks the current leaf as consumed. Called only after the signature
    /// using it has been produced.
    pub fn advance(&mut self) {
        if let LeafState::Active { next } = self {
            *next += 1;
        }
    }

    pub fn remaining(&self, num_leafs: u32) -> u32 {
        match *self {
            LeafState::Exhausted => 0,
            LeafState::Active { next } => num_leafs.saturating_sub(next),
        }
    }
}

/// Private key of one tree: the seed all one-time keys derive from, the tree
/// identifier `I` and the consumption state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LmsPrivateKey<H: HashChain> {
    pub lms_parameter: LmsParameter<H>,
    pub lmots_parameter: LmotsParameter<H>,
    pub lms_tree_identifier: LmsTreeIdentifier,
    pub seed: Seed<H>,
    pub state: LeafState,
}

impl<H: HashChain> LmsPrivateKey<H> {
    /// Generates a fresh key, drawing first the tree identifier and then the
    /// seed from the entropy source.
    pub fn generate<E: EntropySource>(
        lms_parameter: LmsParameter<H>,
        lmots_parameter: LmotsParameter<H>,
        entropy: &mut E,
    ) -> Result<Self, LmsError> {
        let mut lms_tree_identifier = LmsTreeIdentifier::default();
        entropy.fill(&mut lms_tree_identifier)?;

        let mut seed = Seed::<H>::default();
        entropy.fill(seed.as_mut_slice())?;

        Ok(LmsPrivateKey {
            lms_parameter,
            lmots_parameter,
            lms_tree_identifier,
            seed,
            state: LeafState::default(),
        })
    }

    /// One-time private key of leaf `leaf_number`, rebuilt from the seed.
    pub(crate) fn ots_private_key(&self, leaf_number: u32) -> LmotsPrivateKey<H> {
        lm_ots::generate_private_key(
            self.lmots_parameter,
            self.lms_tree_identifier,
            u32str(leaf_number),
            self.seed.clone(),
        )
    }

    pub fn remaining_signatures(&self) -> u32 {
        self.state
            .remaining(self.lms_parameter.number_of_lm_ots_keys())
    }

    pub fn to_binary_representation(&self) -> ArrayVec<[u8; MAX_LMS_PRIVATE_KEY_LENGTH]> {
        let next_leaf = match self.state {
            LeafState::Active { next } => next,
            LeafState::Exhausted => self.lms_parameter.number_of_lm_ots_keys(),
        };

        Composer::<MAX_LMS_PRIVATE_KEY_LENGTH>::new()
            .u32str(self.lms_parameter.get_type_id())
            .u32str(self.lmots_parameter.get_type_id())
            .bytes(&self.lms_tree_identifier)
            .u32str(next_leaf)
            .bytes(self.seed.as_slice())
            .build()
    }

    pub fn from_binary_representation(data: &[u8]) -> Result<Self, LmsError> {
        let mut parser = Parser::new(data);
        let private_key = Self::from_parser(&mut parser)?;
        parser.finish()?;
        Ok(private_key)
    }

    pub(crate) fn from_parser(parser: &mut Parser<'_>) -> Result<Self, LmsError> {
        let lms_type = parser.u32str()?;
        let lms_parameter = LmsAlgorithm::get_from_type::<H>(lms_type)
            .ok_or(LmsError::InvalidFormat("unknown tree typecode"))?;

        let lmots_type = parser.u32str()?;
        let lmots_parameter = LmotsAlgorithm::get_from_type::<H>(lmots_type)
            .ok_or(LmsError::InvalidFormat("unknown one-time signature typecode"))?;

        let mut lms_tree_identifier = LmsTreeIdentifier::default();
        lms_tree_identifier.copy_from_slice(parser.bytes(ILEN)?);

        let num_leafs = lms_parameter.number_of_lm_ots_keys();
        let next_leaf = parser.u32str()?;
        if next_leaf > num_leafs {
            return Err(LmsError::InvalidFormat("leaf index exceeds tree capacity"));
        }

        let seed = Seed::from_slice(parser.bytes(lms_parameter.get_hash_size())?)
            .ok_or(LmsError::InvalidFormat("invalid seed length"))?;

        // A counter at full capacity is the persisted form of a spent key.
        let state = if next_leaf == num_leafs {
            LeafState::Exhausted
        } else {
            LeafState::Active { next: next_leaf }
        };

        Ok(LmsPrivateKey {
            lms_parameter,
            lmots_parameter,
            lms_tree_identifier,
            seed,
            state,
        })
    }
}

impl<H: HashChain> Drop for LmsPrivateKey<H> {
    fn drop(&mut self) {
        self.seed.zeroize();
    }
}

/// Public key of one tree: the root node `T[1]` and the tree identifier `I`
/// (RFC 8554 section 5.3).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LmsPublicKey<H: HashChain> {
    pub lms_parameter: LmsParameter<H>,
    pub lmots_parameter: LmotsParameter<H>,
    pub lms_tree_identifier: LmsTreeIdentifier,
    pub key: Node,
}

impl<H: HashChain> LmsPublicKey<H> {
    /// Computes the public key by rebuilding the whole tree from the seed.
    pub fn from_private_key(private_key: &LmsPrivateKey<H>) -> Self {
        LmsPublicKey {
            lms_parameter: private_key.lms_parameter,
            lmots_parameter: private_key.lmots_parameter,
            lms_tree_identifier: private_key.lms_tree_identifier,
            key: tree::subtree_root(1, private_key),
        }
    }

    pub fn to_binary_representation(&self) -> ArrayVec<[u8; MAX_LMS_PUBLIC_KEY_LENGTH]> {
        Composer::<MAX_LMS_PUBLIC_KEY_LENGTH>::new()
            .u32str(self.lms_parameter.get_type_id())
            .u32str(self.lmots_parameter.get_type_id())
            .bytes(&self.lms_tree_identifier)
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
        let lms_type = parser.u32str()?;
        let lms_parameter = LmsAlgorithm::get_from_type::<H>(lms_type)
            .ok_or(LmsError::InvalidFormat("unknown tree typecode"))?;

        let lmots_type = parser.u32str()?;
        let lmots_parameter = LmotsAlgorithm::get_from_type::<H>(lmots_type)
            .ok_or(LmsError::InvalidFormat("unknown one-time signature typecode"))?;

        let mut lms_tree_identifier = LmsTreeIdentifier::default();
        lms_tree_identifier.copy_from_slice(parser.bytes(ILEN)?);

        let mut key = Node::new();
        key.extend_from_slice(parser.bytes(lms_parameter.get_hash_size())?);

        Ok(LmsPublicKey {
            lms_parameter,
            lmots_parameter,
            lms_tree_identifier,
            key,
        })
    }
}
