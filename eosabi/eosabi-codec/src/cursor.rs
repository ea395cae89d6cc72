//! Forward-only byte cursor shared by one decode invocation.

use bytes::{Buf, Bytes};

use crate::error::CodecError;

/// Read position over an ABI payload. Never rewinds.
///
/// Every read checks the remaining length first, so a short payload yields
/// [`CodecError::UnexpectedEnd`] and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct Cursor {
    buf: Bytes,
    initial_len: usize,
}

impl Cursor {
    pub fn new(buf: Bytes) -> Self {
        let initial_len = buf.len();
        Self { buf, initial_len }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.initial_len - self.buf.remaining()
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn is_empty(&self) -> bool {
        !self.buf.has_remaining()
    }

    fn ensure(&self, needed: usize) -> Result<(), CodecError> {
        if self.buf.remaining() < needed {
            return Err(CodecError::UnexpectedEnd {
                offset: self.offset(),
                needed,
                remaining: self.buf.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn read_i8(&mut self) -> Result<i8, CodecError> {
        self.ensure(1)?;
        Ok(self.buf.get_i8())
    }

    pub fn read_u16_le(&mut self) -> Result<u16, CodecError> {
        self.ensure(2)?;
        Ok(self.buf.get_u16_le())
    }

    pub fn read_i16_le(&mut self) -> Result<i16, CodecError> {
        self.ensure(2)?;
        Ok(self.buf.get_i16_le())
    }

    pub fn read_u32_le(&mut self) -> Result<u32, CodecError> {
        self.ensure(4)?;
        Ok(self.buf.get_u32_le())
    }

    pub fn read_i32_le(&mut self) -> Result<i32, CodecError> {
        self.ensure(4)?;
        Ok(self.buf.get_i32_le())
    }

    pub fn read_u64_le(&mut self) -> Result<u64, CodecError> {
        self.ensure(8)?;
        Ok(self.buf.get_u64_le())
    }

    pub fn read_i64_le(&mut self) -> Result<i64, CodecError> {
        self.ensure(8)?;
        Ok(self.buf.get_i64_le())
    }

    pub fn read_u128_le(&mut self) -> Result<u128, CodecError> {
        self.ensure(16)?;
        Ok(self.buf.get_u128_le())
    }

    pub fn read_i128_le(&mut self) -> Result<i128, CodecError> {
        self.ensure(16)?;
        Ok(self.buf.get_i128_le())
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        self.buf.copy_to_slice(&mut out);
        Ok(out)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes, CodecError> {
        self.ensure(n)?;
        Ok(self.buf.copy_to_bytes(n))
    }

    /// LEB128-style unsigned varint with a 32-bit budget.
    ///
    /// At most five bytes are read. A fifth byte that still carries the
    /// continuation bit, or an accumulated value above `u32::MAX`, is an
    /// encoding error.
    pub fn read_varuint32(&mut self) -> Result<u32, CodecError> {
        let start = self.offset();
        let mut value: u64 = 0;
        let mut shift = 0u32;
        loop {
            let b = self.read_u8()?;
            value |= u64::from(b & 0x7f) << shift;
            shift += 7;
            if b & 0x80 == 0 {
                break;
            }
            if shift >= 32 {
                return Err(CodecError::invalid(
                    start,
                    "varuint32 continues past its 32-bit budget",
                ));
            }
        }
        u32::try_from(value)
            .map_err(|_| CodecError::invalid(start, format!("varuint32 overflow: {value}")))
    }
}
