//! Identification block.
//!
//! Version 1 layout:
//!
//! ```text
//! rolled_count: u8
//! extended:     u8 (0 | 1)
//! if extended:
//!     pre_identified_count: u8
//!     pre_identified_count × (kind: u8, base: VarInt)
//! rolled_count × (kind: u8, [base: VarInt if extended], roll: u8)
//! ```
//!
//! Without extended encoding pre-identified stats are not written at all;
//! they have neither a roll nor a base on the wire, so that mode drops them.

use serde::{Deserialize, Serialize};

use crate::block::{BlockData, BlockId};
use crate::error::{DecodeError, EncodeError};
use crate::reader::ByteReader;
use crate::types::{FormatVersion, RollType, Stat};
use crate::varint::write_varint;

const MAX_STATS: usize = u8::MAX as usize;

/// Stats of one item.
///
/// The wire groups pre-identified stats ahead of rolled ones, so decoding
/// yields pre-identified stats first, each group in its encoded order.  A
/// list that interleaves the two kinds comes back regrouped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationData {
    pub identifications:   Vec<Stat>,
    /// Also encode base values and pre-identified stats.
    pub extended_encoding: bool,
}

impl IdentificationData {
    pub fn new(identifications: Vec<Stat>, extended_encoding: bool) -> Self {
        Self { identifications, extended_encoding }
    }

    fn encode_v1(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        let pre_identified: Vec<&Stat> = self
            .identifications
            .iter()
            .filter(|s| s.is_pre_identified())
            .collect();
        let rolled: Vec<(&Stat, u8)> = self
            .identifications
            .iter()
            .filter_map(|s| match s.roll {
                RollType::Rolled(roll)  => Some((s, roll)),
                RollType::PreIdentified => None,
            })
            .collect();

        if rolled.len() > MAX_STATS || pre_identified.len() > MAX_STATS {
            return Err(EncodeError::TooManyIdentifications);
        }

        out.push(rolled.len() as u8);
        out.push(u8::from(self.extended_encoding));

        if self.extended_encoding {
            out.push(pre_identified.len() as u8);
            for stat in pre_identified {
                out.push(stat.kind);
                write_varint(out, i64::from(base_of(stat)?));
            }
        }

        for (stat, roll) in rolled {
            out.push(stat.kind);
            if self.extended_encoding {
                write_varint(out, i64::from(base_of(stat)?));
            }
            out.push(roll);
        }
        Ok(())
    }

    fn decode_v1(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        let rolled_count = reader.read_u8()? as usize;
        let extended_encoding = reader.read_u8()? == 1;

        let mut identifications = Vec::with_capacity(rolled_count);

        if extended_encoding {
            let pre_identified_count = reader.read_u8()? as usize;
            for _ in 0..pre_identified_count {
                let kind = reader.read_u8()?;
                let base = read_base(reader)?;
                identifications.push(Stat::pre_identified(kind, base));
            }
        }

        for _ in 0..rolled_count {
            let kind = reader.read_u8()?;
            let base = if extended_encoding {
                Some(read_base(reader)?)
            } else {
                None
            };
            let roll = reader.read_u8()?;
            identifications.push(Stat::rolled(kind, base, roll));
        }

        Ok(Self { identifications, extended_encoding })
    }
}

fn base_of(stat: &Stat) -> Result<i32, EncodeError> {
    stat.base.ok_or(EncodeError::NoBaseValueGiven(stat.kind))
}

fn read_base(reader: &mut ByteReader<'_>) -> Result<i32, DecodeError> {
    let value = reader.read_varint()?;
    i32::try_from(value).map_err(|_| DecodeError::BaseValueOutOfRange(value))
}

impl BlockData for IdentificationData {
    const ID: BlockId = BlockId::Identification;

    fn encode_data(&self, ver: FormatVersion, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        match ver {
            FormatVersion::V1 => self.encode_v1(out),
        }
    }

    fn decode_data(reader: &mut ByteReader<'_>, ver: FormatVersion) -> Result<Self, DecodeError> {
        match ver {
            FormatVersion::V1 => Self::decode_v1(reader),
        }
    }
}
