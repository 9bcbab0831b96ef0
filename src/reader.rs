use byteorder::ReadBytesExt;
use std::io::{Cursor, Read};

use crate::error::DecodeError;
use crate::varint::MAX_VARINT_LEN;

/// Read cursor over a decoded byte stream.
///
/// The position only ever moves forward, and every short read reports the
/// absolute offset at which it happened.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    inner: Cursor<&'a [u8]>,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { inner: Cursor::new(data) }
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.inner.position() as usize
    }

    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position())
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let offset = self.position();
        self.inner
            .read_u8()
            .map_err(|_| DecodeError::UnexpectedEndOfBytes { offset })
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.inner.get_ref().get(self.position()).copied()
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let offset = self.position();
        if n > self.remaining() {
            return Err(DecodeError::UnexpectedEndOfBytes { offset: self.len() });
        }
        let data: &'a [u8] = *self.inner.get_ref();
        self.inner.set_position((offset + n) as u64);
        Ok(&data[offset..offset + n])
    }

    /// Read bytes up to the first 0x00, consuming the terminator as well.
    pub fn read_until_nul(&mut self) -> Result<&'a [u8], DecodeError> {
        let offset = self.position();
        let data: &'a [u8] = *self.inner.get_ref();
        let rest = &data[offset..];
        match rest.iter().position(|&b| b == 0) {
            Some(end) => {
                self.inner.set_position((offset + end + 1) as u64);
                Ok(&rest[..end])
            }
            None => Err(DecodeError::UnexpectedEndOfBytes { offset: data.len() }),
        }
    }

    /// Read one zigzag VarInt. Never consumes more than
    /// [`MAX_VARINT_LEN`] bytes.
    pub fn read_varint(&mut self) -> Result<i64, DecodeError> {
        let offset = self.position();
        let mut window = [0u8; MAX_VARINT_LEN];
        let n = self.remaining().min(MAX_VARINT_LEN);
        self.inner
            .read_exact(&mut window[..n])
            .map_err(|_| DecodeError::UnexpectedEndOfBytes { offset })?;
        let (value, used) = crate::varint::decode_varint(&window[..n]).map_err(|e| match e {
            DecodeError::UnexpectedEndOfBytes { .. } => {
                DecodeError::UnexpectedEndOfBytes { offset: offset + n }
            }
            DecodeError::VarIntTooLong { .. } => DecodeError::VarIntTooLong { offset },
            DecodeError::VarIntOverflow { .. } => DecodeError::VarIntOverflow { offset },
            other => other,
        })?;
        self.inner.set_position((offset + used) as u64);
        Ok(value)
    }
}
