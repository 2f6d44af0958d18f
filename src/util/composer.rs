//! Big-endian wire-format writer and reader shared by every codec.

use tinyvec::ArrayVec;

use crate::error::LmsError;

/// Chained writer producing a fixed-capacity byte string.
#[derive(Default)]
pub struct Composer<const N: usize> {
    buffer: ArrayVec<[u8; N]>,
}

impl<const N: usize> Composer<N> {
    pub fn new() -> Self {
        Composer {
            buffer: ArrayVec::new(),
        }
    }

    pub fn u32str(mut self, value: u32) -> Self {
        self.buffer.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn bytes(mut self, data: &[u8]) -> Self {
        self.buffer.extend_from_slice(data);
        self
    }

    pub fn build(self) -> ArrayVec<[u8; N]> {
        self.buffer
    }
}

/// Checked reader over an encoded byte string.
///
/// Parsing is two-phase throughout the crate: type identifiers are read
/// first, then exactly the field lengths they imply. Every decoder finishes
/// with [`Parser::finish`] so trailing bytes are rejected and only the
/// canonical encoding is accepted.
pub struct Parser<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, offset: 0 }
    }

    pub fn u32str(&mut self) -> Result<u32, LmsError> {
        let bytes = self.bytes(4)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        Ok(u32::from_be_bytes(raw))
    }

    pub fn bytes(&mut self, len: usize) -> Result<&'a [u8], LmsError> {
        if self.data.len() - self.offset < len {
            return Err(LmsError::InvalidFormat("unexpected end of data"));
        }

        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn finish(self) -> Result<(), LmsError> {
        if self.remaining() != 0 {
            return Err(LmsError::InvalidFormat("trailing data"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Composer, Parser};
    use crate::error::LmsError;

    #[test]
    fn write_then_read_back() {
        let encoded = Composer::<16>::new()
            .u32str(0xdeadbeef)
            .bytes(&[7, 8, 9])
            .build();

        let mut parser = Parser::new(encoded.as_slice());
        assert_eq!(parser.u32str().unwrap(), 0xdeadbeef);
        assert_eq!(parser.bytes(3).unwrap(), &[7, 8, 9]);
        parser.finish().unwrap();
    }

    #[test]
    fn rejects_truncated_and_trailing_data() {
        let mut parser = Parser::new(&[0, 1]);
        assert_eq!(
            parser.u32str(),
            Err(LmsError::InvalidFormat("unexpected end of data"))
        );

        let mut parser = Parser::new(&[0, 0, 0, 1, 42]);
        parser.u32str().unwrap();
        assert_eq!(
            parser.finish(),
            Err(LmsError::InvalidFormat("trailing data"))
        );
    }
}
