//! Leighton-Micali signatures over one Merkle tree (RFC 8554 section 5).

pub mod definitions;
pub mod parameters;
pub mod signing;
pub mod tree;
pub mod verify;
