use serde::{Deserialize, Serialize};

use crate::block::{BlockData, BlockId};
use crate::error::{DecodeError, EncodeError};
use crate::reader::ByteReader;
use crate::types::FormatVersion;

/// Item name, stored as NUL-terminated ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameData {
    pub name: String,
}

impl NameData {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl BlockData for NameData {
    const ID: BlockId = BlockId::Name;

    fn encode_data(&self, _ver: FormatVersion, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        if !self.name.is_ascii() {
            return Err(EncodeError::NonAsciiString);
        }
        if self.name.contains('\0') {
            return Err(EncodeError::InteriorNul);
        }
        out.extend_from_slice(self.name.as_bytes());
        out.push(0);
        Ok(())
    }

    fn decode_data(reader: &mut ByteReader<'_>, _ver: FormatVersion) -> Result<Self, DecodeError> {
        let offset = reader.position();
        let bytes = reader.read_until_nul()?;
        if !bytes.is_ascii() {
            return Err(DecodeError::BadString { offset });
        }
        Ok(Self { name: bytes.iter().map(|&b| char::from(b)).collect() })
    }
}
