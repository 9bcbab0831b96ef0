use serde::{Deserialize, Serialize};

use crate::bitpack;
use crate::block::{BlockData, BlockId};
use crate::error::{DecodeError, EncodeError};
use crate::reader::ByteReader;
use crate::types::{FormatVersion, Powder};

const MAX_POWDERS: usize = u8::MAX as usize;

/// Powder slots and the powders applied to them.
///
/// Layout: `slots: u8`, `count: u8`, then `count` 5-bit fields packed
/// MSB-first (see [`bitpack`]).  A zero field is an empty slot and never
/// decodes to a [`Powder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowderData {
    pub powder_slots: u8,
    pub powders:      Vec<Powder>,
}

impl PowderData {
    pub fn new(powder_slots: u8, powders: Vec<Powder>) -> Self {
        Self { powder_slots, powders }
    }
}

impl BlockData for PowderData {
    const ID: BlockId = BlockId::Powder;

    fn encode_data(&self, _ver: FormatVersion, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        if self.powders.len() > MAX_POWDERS {
            return Err(EncodeError::TooManyPowders);
        }
        let fields: Vec<u8> = self.powders.iter().map(Powder::field).collect();
        out.push(self.powder_slots);
        out.push(self.powders.len() as u8);
        out.extend_from_slice(&bitpack::pack(&fields));
        Ok(())
    }

    fn decode_data(reader: &mut ByteReader<'_>, _ver: FormatVersion) -> Result<Self, DecodeError> {
        let powder_slots = reader.read_u8()?;
        let count = reader.read_u8()? as usize;
        let offset = reader.position();
        let packed = reader.read_bytes(bitpack::packed_len(count))?;
        let fields = bitpack::unpack(packed, count)
            .ok_or(DecodeError::UnexpectedEndOfBytes { offset })?;

        let mut powders = Vec::with_capacity(count);
        for field in fields {
            if let Some(powder) = Powder::from_field(field)? {
                powders.push(powder);
            }
        }
        Ok(Self { powder_slots, powders })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Element;

    const V1: FormatVersion = FormatVersion::V1;

    fn p(element: Element, tier: u8) -> Powder {
        Powder::new(element, tier).unwrap()
    }

    fn roundtrip(data: &PowderData) -> PowderData {
        let mut out = Vec::new();
        data.encode_data(V1, &mut out).unwrap();
        let mut reader = ByteReader::new(&out);
        let decoded = PowderData::decode_data(&mut reader, V1).unwrap();
        assert!(reader.is_empty());
        decoded
    }

    #[test]
    fn roundtrip_up_to_six() {
        let all = [
            p(Element::Earth, 1),
            p(Element::Thunder, 6),
            p(Element::Water, 3),
            p(Element::Fire, 6),
            p(Element::Air, 2),
            p(Element::Air, 6),
        ];
        for n in 0..=all.len() {
            let data = PowderData::new(6, all[..n].to_vec());
            assert_eq!(roundtrip(&data), data);
        }
    }

    #[test]
    fn layout() {
        let mut out = Vec::new();
        PowderData::new(3, vec![p(Element::Earth, 1), p(Element::Thunder, 1)])
            .encode_data(V1, &mut out)
            .unwrap();
        // fields 1 and 7: 00001 00111 -> 00001001 11000000
        assert_eq!(out, vec![3, 2, 0b0000_1001, 0b1100_0000]);
    }

    #[test]
    fn empty_fields_are_skipped() {
        // three declared fields: 1, 0, 30
        let packed = bitpack::pack(&[1, 0, 30]);
        let mut payload = vec![4, 3];
        payload.extend_from_slice(&packed);
        let decoded = PowderData::decode_data(&mut ByteReader::new(&payload), V1).unwrap();
        assert_eq!(decoded.powders, vec![p(Element::Earth, 1), p(Element::Air, 6)]);
    }

    #[test]
    fn invalid_element_field() {
        let mut payload = vec![1, 1];
        payload.extend_from_slice(&bitpack::pack(&[31]));
        assert_eq!(
            PowderData::decode_data(&mut ByteReader::new(&payload), V1),
            Err(DecodeError::BadElement(5))
        );
    }

    #[test]
    fn truncated_fields() {
        // 4 fields need 3 bytes
        let mut reader = ByteReader::new(&[4, 4, 0xFF, 0xFF]);
        assert_eq!(
            PowderData::decode_data(&mut reader, V1),
            Err(DecodeError::UnexpectedEndOfBytes { offset: 4 })
        );
    }

    #[test]
    fn too_many_powders() {
        let data = PowderData::new(0, vec![p(Element::Fire, 1); 256]);
        let mut out = Vec::new();
        assert_eq!(data.encode_data(V1, &mut out), Err(EncodeError::TooManyPowders));
    }
}
