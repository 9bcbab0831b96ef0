use serde::{Deserialize, Serialize};

use crate::block::{BlockData, BlockId};
use crate::error::{DecodeError, EncodeError};
use crate::reader::ByteReader;
use crate::types::FormatVersion;

/// How many times an item has been rerolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RerollData {
    pub rerolls: u8,
}

impl RerollData {
    pub fn new(rerolls: u8) -> Self {
        Self { rerolls }
    }
}

impl BlockData for RerollData {
    const ID: BlockId = BlockId::Reroll;

    fn encode_data(&self, _ver: FormatVersion, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.push(self.rerolls);
        Ok(())
    }

    fn decode_data(reader: &mut ByteReader<'_>, _ver: FormatVersion) -> Result<Self, DecodeError> {
        Ok(Self { rerolls: reader.read_u8()? })
    }
}
