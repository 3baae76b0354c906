//! Sequential byte cursor over a borrowed buffer
//!
//! Every decoder in this crate reads through a `ByteCursor` so that nested
//! structures (block → transactions → inputs) consume exactly the bytes they
//! need from one shared position. A short read never advances the cursor and
//! never pads with zeros.

use super::varint::decode_varint;
use crate::error::{Result, WireError};

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, position: 0 }
    }

    /// Bytes consumed so far
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Unconsumed tail of the buffer
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(WireError::TruncatedInput { needed, remaining });
        }
        Ok(())
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.ensure(count)?;
        let start = self.position;
        self.position += count;
        Ok(&self.data[start..self.position])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64_le(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Read a CompactSize VarInt, advancing past all of its bytes
    pub fn read_varint(&mut self) -> Result<u64> {
        let (value, consumed) = decode_varint(self.rest())?;
        self.position += consumed;
        Ok(value)
    }

    /// Fail with truncation when `count` items of at least `min_item_size`
    /// bytes each cannot fit in what is left
    ///
    /// Lets a decoder reject an oversized declared count as short input before
    /// any decode limit is consulted.
    pub fn ensure_items(&self, count: u64, min_item_size: usize) -> Result<()> {
        let needed = usize::try_from(count)
            .unwrap_or(usize::MAX)
            .saturating_mul(min_item_size);
        self.ensure(needed)
    }

    /// Look at the next `count` bytes without consuming them
    pub fn peek(&self, count: usize) -> Option<&'a [u8]> {
        self.data.get(self.position..self.position + count)
    }
}
