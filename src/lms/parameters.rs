use core::marker::PhantomData;

use crate::{
    constants::MAX_TREE_HEIGHT,
    hasher::{sha256::Sha256, HashChain},
};

/// Typecodes of the registered LMS parameter sets (RFC 8554 section 5.1).
/// The typecode selects the tree height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LmsAlgorithm {
    LmsReserved = 0,
    LmsH5 = 5,
    LmsH10 = 6,
    LmsH15 = 7,
    LmsH20 = 8,
    LmsH25 = 9,
}

impl Default for LmsAlgorithm {
    fn default() -> Self {
        LmsAlgorithm::LmsReserved
    }
}

impl From<u32> for LmsAlgorithm {
    fn from(typecode: u32) -> Self {
        match typecode {
            5 => LmsAlgorithm::LmsH5,
            6 => LmsAlgorithm::LmsH10,
            7 => LmsAlgorithm::LmsH15,
            8 => LmsAlgorithm::LmsH20,
            9 => LmsAlgorithm::LmsH25,
            _ => LmsAlgorithm::LmsReserved,
        }
    }
}

impl LmsAlgorithm {
    pub fn construct_parameter<H: HashChain>(&self) -> Option<LmsParameter<H>> {
        let parameter = match *self {
            LmsAlgorithm::LmsReserved => return None,
            LmsAlgorithm::LmsH5 => LmsParameter::new(5, 5),
            LmsAlgorithm::LmsH10 => LmsParameter::new(6, 10),
            LmsAlgorithm::LmsH15 => LmsParameter::new(7, 15),
            LmsAlgorithm::LmsH20 => LmsParameter::new(8, 20),
            LmsAlgorithm::LmsH25 => LmsParameter::new(9, 25),
        };

        if parameter.get_tree_height() as usize > MAX_TREE_HEIGHT {
            return None;
        }

        Some(parameter)
    }

    pub fn get_from_type<H: HashChain>(typecode: u32) -> Option<LmsParameter<H>> {
        LmsAlgorithm::from(typecode).construct_parameter()
    }
}

/// Resolved LMS parameter set: the tree height, bound to the hash
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LmsParameter<H: HashChain = Sha256> {
    type_id: u32,
    tree_height: u8,
    phantom_data: PhantomData<H>,
}

// No HashChain instance is held, so copying is sound although the trait
// itself is not Copy.
impl<H: HashChain> Copy for LmsParameter<H> {}

impl<H: HashChain> LmsParameter<H> {
    pub fn new(type_id: u32, tree_height: u8) -> Self {
        Self {
            type_id,
            tree_height,
            phantom_data: PhantomData,
        }
    }

    pub fn get_type_id(&self) -> u32 {
        self.type_id
    }

    pub fn get_tree_height(&self) -> u8 {
        self.tree_height
    }

    pub fn get_hash_size(&self) -> usize {
        H::OUTPUT_SIZE as usize
    }

    /// Number of one-time keys of the tree, `2^h`.
    pub fn number_of_lm_ots_keys(&self) -> u32 {
        1 << self.tree_height
    }

    pub fn get_hasher(&self) -> H {
        H::default()
    }
}

impl<H: HashChain> Default for LmsParameter<H> {
    fn default() -> Self {
        LmsAlgorithm::LmsH5.construct_parameter().unwrap()
    }
}
