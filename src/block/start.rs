use serde::{Deserialize, Serialize};

use crate::block::{BlockData, BlockId};
use crate::error::{DecodeError, EncodeError};
use crate::reader::ByteReader;
use crate::types::FormatVersion;

/// First block of every stream; fixes the format version for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartData {
    pub version: FormatVersion,
}

impl StartData {
    pub fn new(version: FormatVersion) -> Self {
        Self { version }
    }
}

impl BlockData for StartData {
    const ID: BlockId = BlockId::Start;

    fn encode_data(&self, _ver: FormatVersion, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.push(self.version.as_byte());
        Ok(())
    }

    /// Start blocks are only legal at the head of a stream, which
    /// [`read_start`] handles.
    fn decode_data(_reader: &mut ByteReader<'_>, _ver: FormatVersion) -> Result<Self, DecodeError> {
        Err(DecodeError::StartReparse)
    }
}

/// Read the mandatory Start block at the head of a stream.
pub fn read_start(reader: &mut ByteReader<'_>) -> Result<StartData, DecodeError> {
    if reader.remaining() < 2 {
        return Err(DecodeError::UnexpectedEndOfBytes { offset: reader.len() });
    }
    let tag = reader.read_u8()?;
    if tag != BlockId::Start.as_byte() {
        return Err(DecodeError::NoStartBlockFound(tag));
    }
    let version = FormatVersion::try_from(reader.read_u8()?)?;
    Ok(StartData { version })
}

/// Decode the Start block from the front of `bytes`, returning it with the
/// number of bytes used.
pub fn decode_start_bytes(bytes: &[u8]) -> Result<(StartData, usize), DecodeError> {
    let mut reader = ByteReader::new(bytes);
    let start = read_start(&mut reader)?;
    Ok((start, reader.position()))
}
