use core::marker::PhantomData;

use tinyvec::ArrayVec;

use crate::{
    constants::{num_winternitz_chains, MAX_HASH_SIZE},
    hasher::{sha256::Sha256, HashChain},
    util::coef::coef,
};

/// Typecodes of the registered one-time signature parameter sets
/// (RFC 8554 section 4.1). The typecode selects the Winternitz parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LmotsAlgorithm {
    LmotsReserved = 0,
    LmotsW1 = 1,
    LmotsW2 = 2,
    LmotsW4 = 3,
    LmotsW8 = 4,
}

impl Default for LmotsAlgorithm {
    fn default() -> Self {
        LmotsAlgorithm::LmotsReserved
    }
}

impl From<u32> for LmotsAlgorithm {
    fn from(typecode: u32) -> Self {
        match typecode {
            1 => LmotsAlgorithm::LmotsW1,
            2 => LmotsAlgorithm::LmotsW2,
            3 => LmotsAlgorithm::LmotsW4,
            4 => LmotsAlgorithm::LmotsW8,
            _ => LmotsAlgorithm::LmotsReserved,
        }
    }
}

impl LmotsAlgorithm {
    pub fn construct_parameter<H: HashChain>(&self) -> Option<LmotsParameter<H>> {
        match *self {
            LmotsAlgorithm::LmotsReserved => None,
            LmotsAlgorithm::LmotsW1 => Some(LmotsParameter::new(1, 1, 7)),
            LmotsAlgorithm::LmotsW2 => Some(LmotsParameter::new(2, 2, 6)),
            LmotsAlgorithm::LmotsW4 => Some(LmotsParameter::new(3, 4, 4)),
            LmotsAlgorithm::LmotsW8 => Some(LmotsParameter::new(4, 8, 0)),
        }
    }

    pub fn get_from_type<H: HashChain>(typecode: u32) -> Option<LmotsParameter<H>> {
        LmotsAlgorithm::from(typecode).construct_parameter()
    }
}

/// Resolved one-time signature parameter set: the Winternitz parameter `w`,
/// the derived chain count `p` and the checksum shift `ls` of RFC 8554
/// Appendix B, bound to the hash implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LmotsParameter<H: HashChain = Sha256> {
    type_id: u32,
    winternitz: u8,
    num_chains: u16,
    checksum_left_shift: u8,
    phantom_data: PhantomData<H>,
}

// No HashChain instance is held, so copying is sound although the trait
// itself is not Copy.
impl<H: HashChain> Copy for LmotsParameter<H> {}

impl<H: HashChain> LmotsParameter<H> {
    pub fn new(type_id: u32, winternitz: u8, checksum_left_shift: u8) -> Self {
        let num_chains =
            num_winternitz_chains(winternitz as usize, H::OUTPUT_SIZE as usize) as u16;
        Self {
            type_id,
            winternitz,
            num_chains,
            checksum_left_shift,
            phantom_data: PhantomData,
        }
    }

    pub fn get_type_id(&self) -> u32 {
        self.type_id
    }

    pub fn get_winternitz(&self) -> u8 {
        self.winternitz
    }

    pub fn get_num_chains(&self) -> u16 {
        self.num_chains
    }

    pub fn get_checksum_left_shift(&self) -> u8 {
        self.checksum_left_shift
    }

    pub fn get_hash_size(&self) -> usize {
        H::OUTPUT_SIZE as usize
    }

    /// Largest value a single Winternitz digit can take, which is also the
    /// total number of steps of one hash chain.
    pub fn get_max_chain_step(&self) -> u8 {
        (((1u16) << self.winternitz) - 1) as u8
    }

    pub fn get_hasher(&self) -> H {
        H::default()
    }

    fn checksum(&self, byte_string: &[u8]) -> u16 {
        let mut sum = 0_u16;

        let num_message_digits = (H::OUTPUT_SIZE * 8) / self.winternitz as u16;
        let max_digit_value: u64 = (1 << self.winternitz) - 1;

        for i in 0..num_message_digits {
            sum += (max_digit_value - coef(byte_string, i, self.winternitz)) as u16;
        }

        sum << self.checksum_left_shift
    }

    /// Appends the 16-bit checksum, yielding the byte string whose digits
    /// select the chain lengths of a signature.
    pub fn append_checksum_to(&self, byte_string: &[u8]) -> ArrayVec<[u8; MAX_HASH_SIZE + 2]> {
        let mut result = ArrayVec::new();

        let checksum = self.checksum(byte_string);

        result.extend_from_slice(byte_string);
        result.extend_from_slice(&checksum.to_be_bytes());

        result
    }
}

impl<H: HashChain> Default for LmotsParameter<H> {
    fn default() -> Self {
        LmotsAlgorithm::LmotsW1.construct_parameter().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::{LmotsAlgorithm, LmotsParameter};
    use crate::hasher::sha256::Sha256;

    #[test]
    fn registry_matches_rfc8554_appendix_b() {
        let cases: [(u32, u8, u16, u8); 4] =
            [(1, 1, 265, 7), (2, 2, 133, 6), (3, 4, 67, 4), (4, 8, 34, 0)];

        for (type_id, winternitz, num_chains, shift) in cases.iter() {
            let parameter: LmotsParameter<Sha256> =
                LmotsAlgorithm::get_from_type(*type_id).unwrap();
            assert_eq!(parameter.get_winternitz(), *winternitz);
            assert_eq!(parameter.get_num_chains(), *num_chains);
            assert_eq!(parameter.get_checksum_left_shift(), *shift);
        }
    }

    #[test]
    fn unknown_typecode_is_rejected() {
        assert!(LmotsAlgorithm::get_from_type::<Sha256>(0).is_none());
        assert!(LmotsAlgorithm::get_from_type::<Sha256>(5).is_none());
    }

    #[test]
    fn checksum_of_all_zero_digits_is_maximal() {
        let parameter: LmotsParameter<Sha256> = LmotsAlgorithm::get_from_type(3).unwrap();
        // 64 nibbles of zero leave 64 * 15 = 960, shifted by ls = 4.
        let appended = parameter.append_checksum_to(&[0u8; 32]);
        assert_eq!(&appended[32..], &(960u16 << 4).to_be_bytes());
    }
}
