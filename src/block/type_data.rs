use serde::{Deserialize, Serialize};

use crate::block::{BlockData, BlockId};
use crate::error::{DecodeError, EncodeError};
use crate::reader::ByteReader;
use crate::types::{FormatVersion, ItemType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeData {
    pub item_type: ItemType,
}

impl TypeData {
    pub fn new(item_type: ItemType) -> Self {
        Self { item_type }
    }
}

impl BlockData for TypeData {
    const ID: BlockId = BlockId::Type;

    fn encode_data(&self, _ver: FormatVersion, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.push(u8::from(self.item_type));
        Ok(())
    }

    fn decode_data(reader: &mut ByteReader<'_>, _ver: FormatVersion) -> Result<Self, DecodeError> {
        let item_type = ItemType::try_from(reader.read_u8()?)?;
        Ok(Self { item_type })
    }
}
