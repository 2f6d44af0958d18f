//! Big-endian integer/byte-string conversions, named after the RFC 8554
//! `u32str`/`u16str` notation.

pub fn u32str(x: u32) -> [u8; 4] {
    x.to_be_bytes()
}

pub fn u16str(x: u16) -> [u8; 2] {
    x.to_be_bytes()
}

pub fn str32u(x: &[u8]) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(x);
    u32::from_be_bytes(bytes)
}
