use serde::{Deserialize, Serialize};

use crate::block::{BlockData, BlockId};
use crate::error::{DecodeError, EncodeError};
use crate::reader::ByteReader;
use crate::types::FormatVersion;
use crate::varint::write_varint;

/// One shiny stat: an id byte and a VarInt value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShinyData {
    pub id:    u8,
    pub value: i64,
}

impl ShinyData {
    pub fn new(id: u8, value: i64) -> Self {
        Self { id, value }
    }
}

impl BlockData for ShinyData {
    const ID: BlockId = BlockId::Shiny;

    fn encode_data(&self, _ver: FormatVersion, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.push(self.id);
        write_varint(out, self.value);
        Ok(())
    }

    fn decode_data(reader: &mut ByteReader<'_>, _ver: FormatVersion) -> Result<Self, DecodeError> {
        let id = reader.read_u8()?;
        let value = reader.read_varint()?;
        Ok(Self { id, value })
    }
}
