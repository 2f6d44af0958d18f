use core::mem::size_of;
use tinyvec::ArrayVec;

include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub const ILEN: usize = 16;
pub const MAX_HASH_SIZE: usize = 32;
pub const MAX_SEED_LEN: usize = 32;

pub type Node = ArrayVec<[u8; MAX_HASH_SIZE]>;
pub type LmsTreeIdentifier = [u8; ILEN];
pub type LmsLeafIdentifier = [u8; 4];

pub const D_PBLC: [u8; 2] = [0x80, 0x80];
pub const D_MESG: [u8; 2] = [0x81, 0x81];
pub const D_LEAF: [u8; 2] = [0x82, 0x82];
pub const D_INTR: [u8; 2] = [0x83, 0x83];

/// Step tag marking the pseudorandom chain-start derivation (RFC 8554 Appendix A).
pub const SEED_DERIVE_TAG: u8 = 0xff;

/// Offsets of the reusable Winternitz chain buffer:
/// `I(16) ‖ q(4) ‖ chain(2) ‖ step(1) ‖ value(n)`.
pub mod chain_buffer {
    use super::MAX_HASH_SIZE;

    pub const OFF_I: usize = 0;
    pub const OFF_Q: usize = 16;
    pub const OFF_CHAIN: usize = 20;
    pub const OFF_STEP: usize = 22;
    pub const OFF_VALUE: usize = 23;

    pub const fn len(hash_size: usize) -> usize {
        OFF_VALUE + hash_size
    }

    pub const MAX_LEN: usize = len(MAX_HASH_SIZE);
}

/// Number of Winternitz chains "p" per (w, n), from RFC 8554 Appendix B.
const WINTERNITZ_CHAIN_COUNTS: [usize; 12] = [136, 200, 265, 68, 101, 133, 35, 51, 67, 18, 26, 34];

pub const fn num_winternitz_chains(winternitz: usize, hash_size: usize) -> usize {
    let w_index = match winternitz {
        1 => 0usize,
        2 => 1usize,
        4 => 2usize,
        8 => 3usize,
        _ => panic!("Invalid Winternitz parameter. Allowed is: 1, 2, 4 or 8"),
    };

    let n_index = match hash_size {
        16 => 0usize,
        24 => 1usize,
        32 => 2usize,
        _ => panic!("Invalid hash size. Allowed is: 16, 24 or 32"),
    };

    WINTERNITZ_CHAIN_COUNTS[w_index * 3 + n_index]
}

pub const MAX_NUM_WINTERNITZ_CHAINS: usize =
    num_winternitz_chains(MIN_WINTERNITZ, MAX_HASH_SIZE);

pub const fn lmots_signature_length(hash_size: usize, num_chains: usize) -> usize {
    size_of::<u32>()                    // LM-OTS parameter type id
        + hash_size                     // signature randomizer C
        + hash_size * num_chains // chain values y[0..p]
}

pub const fn lmots_public_key_length(hash_size: usize) -> usize {
    size_of::<u32>()                    // LM-OTS parameter type id
        + ILEN                          // tree identifier I
        + size_of::<u32>()              // leaf index q
        + hash_size // key K
}

pub const fn lms_public_key_length(hash_size: usize) -> usize {
    size_of::<u32>()                    // LMS parameter type id
        + size_of::<u32>()              // LM-OTS parameter type id
        + ILEN                          // tree identifier I
        + hash_size // root T[1]
}

pub const fn lms_signature_length(
    hash_size: usize,
    num_chains: usize,
    tree_height: usize,
) -> usize {
    size_of::<u32>()                    // leaf index q
        + lmots_signature_length(hash_size, num_chains)
        + size_of::<u32>()              // LMS parameter type id
        + hash_size * tree_height // authentication path
}

pub const fn lms_private_key_length(hash_size: usize) -> usize {
    size_of::<u32>()                    // LMS parameter type id
        + size_of::<u32>()              // LM-OTS parameter type id
        + ILEN                          // tree identifier I
        + size_of::<u32>()              // next leaf index q
        + hash_size // seed
}

pub const MAX_LMOTS_SIGNATURE_LENGTH: usize =
    lmots_signature_length(MAX_HASH_SIZE, MAX_NUM_WINTERNITZ_CHAINS);

pub const MAX_LMOTS_PUBLIC_KEY_LENGTH: usize = lmots_public_key_length(MAX_HASH_SIZE);
pub const MAX_LMS_PUBLIC_KEY_LENGTH: usize = lms_public_key_length(MAX_HASH_SIZE);
pub const MAX_LMS_SIGNATURE_LENGTH: usize =
    lms_signature_length(MAX_HASH_SIZE, MAX_NUM_WINTERNITZ_CHAINS, MAX_TREE_HEIGHT);

pub const MAX_LMS_PRIVATE_KEY_LENGTH: usize = lms_private_key_length(MAX_HASH_SIZE);

pub const MAX_HSS_PUBLIC_KEY_LENGTH: usize = size_of::<u32>() + MAX_LMS_PUBLIC_KEY_LENGTH;
pub const MAX_HSS_SIGNATURE_LENGTH: usize = size_of::<u32>()
    + (MAX_HSS_LEVELS - 1) * (MAX_LMS_SIGNATURE_LENGTH + MAX_LMS_PUBLIC_KEY_LENGTH)
    + MAX_LMS_SIGNATURE_LENGTH;
pub const MAX_HSS_PRIVATE_KEY_LENGTH: usize = size_of::<u32>()
    + MAX_HSS_LEVELS * lms_private_key_length(MAX_HASH_SIZE)
    + (MAX_HSS_LEVELS - 1) * MAX_LMS_SIGNATURE_LENGTH;
