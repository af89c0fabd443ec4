//! Bounds-checked sequential reads over an in-memory buffer.

use byteorder::{ByteOrder, LittleEndian};

use super::error::{ItemsDatError, Result};

/// Sequential reader over an immutable byte buffer.
///
/// The items.dat format is not self-describing for bounds: nothing in a
/// record says how long it is, so every read is checked against the buffer
/// length and fails with [`ItemsDatError::OutOfBounds`] rather than
/// reading past the end.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the current offset and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take the next `n` bytes, advancing the cursor.
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(ItemsDatError::OutOfBounds {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    /// Read a length-prefixed byte string: u16 length, then that many raw
    /// bytes. Not null-terminated on the wire.
    pub fn read_length_prefixed(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u16()? as usize;
        self.take(len)
    }

    /// Advance past `n` bytes without reading them. Used for reserved
    /// ranges with no known meaning.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n)?;
        Ok(())
    }
}
