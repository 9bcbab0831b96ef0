//! Block framing and dispatch.
//!
//! # Wire layout
//! Each block is a one-byte tag followed by its payload.  Payloads are
//! self-delimiting (fixed width, NUL terminated or count prefixed); there is
//! no outer length prefix, so a decoder must understand every block it meets.
//!
//! | Block          | Tag | Payload                                 |
//! |----------------|-----|-----------------------------------------|
//! | Start          | 0   | version byte                            |
//! | Type           | 1   | item type byte                          |
//! | Name           | 2   | ASCII bytes, 0x00                       |
//! | Identification | 3   | see [`identification`]                  |
//! | Powder         | 4   | slots, count, packed 5-bit fields       |
//! | Reroll         | 5   | reroll count                            |
//! | Shiny          | 6   | id byte, VarInt value                   |
//! | End            | 255 | (empty)                                 |
//!
//! Tags 7–15 are reserved for crafted-item blocks and are rejected as
//! unknown.
//!
//! # Stream rules
//! Start may only appear as the very first block and is read through
//! [`start::read_start`], which also yields the [`FormatVersion`] every later
//! block is decoded with.  Decoding stops after End or when the input runs
//! out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::trace;

use crate::error::{DecodeError, EncodeError, Error, Result};
use crate::reader::ByteReader;
use crate::types::FormatVersion;

pub mod identification;
pub mod name;
pub mod powder;
pub mod reroll;
pub mod shiny;
pub mod start;
pub mod type_data;

pub use identification::IdentificationData;
pub use name::NameData;
pub use powder::PowderData;
pub use reroll::RerollData;
pub use shiny::ShinyData;
pub use start::StartData;
pub use type_data::TypeData;

// ── Block ids ────────────────────────────────────────────────────────────────

/// Tag byte of every block kind this crate can encode and decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockId {
    Start          = 0,
    Type           = 1,
    Name           = 2,
    Identification = 3,
    Powder         = 4,
    Reroll         = 5,
    Shiny          = 6,
    End            = 255,
}

/// Tags allocated to crafted-item blocks that this crate does not implement.
pub const RESERVED_TAGS: RangeInclusive<u8> = 7..=15;

impl BlockId {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0   => Some(BlockId::Start),
            1   => Some(BlockId::Type),
            2   => Some(BlockId::Name),
            3   => Some(BlockId::Identification),
            4   => Some(BlockId::Powder),
            5   => Some(BlockId::Reroll),
            6   => Some(BlockId::Shiny),
            255 => Some(BlockId::End),
            _   => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockId::Start          => "StartData",
            BlockId::Type           => "TypeData",
            BlockId::Name           => "NameData",
            BlockId::Identification => "IdentificationData",
            BlockId::Powder         => "PowderData",
            BlockId::Reroll         => "RerollData",
            BlockId::Shiny          => "ShinyData",
            BlockId::End            => "EndData",
        }
    }
}

/// Diagnostic name of a reserved tag.
pub fn reserved_block_name(tag: u8) -> Option<&'static str> {
    Some(match tag {
        7  => "CraftedGearType",
        8  => "DurabilityData",
        9  => "RequirementsData",
        10 => "DamageData",
        11 => "DefenseData",
        12 => "CraftedIdentificationData",
        13 => "CraftedConsumableTypeData",
        14 => "UsesData",
        15 => "EffectsData",
        _  => return None,
    })
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_byte())
    }
}

// ── Payload codec trait ──────────────────────────────────────────────────────

/// Payload codec of one block kind.  The tag byte is handled by [`Block`].
pub trait BlockData: Sized {
    const ID: BlockId;

    fn encode_data(&self, ver: FormatVersion, out: &mut Vec<u8>) -> std::result::Result<(), EncodeError>;

    /// Consume exactly this block's payload from `reader`.
    fn decode_data(reader: &mut ByteReader<'_>, ver: FormatVersion) -> std::result::Result<Self, DecodeError>;
}

// ── Block ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Start(StartData),
    Type(TypeData),
    Name(NameData),
    Identification(IdentificationData),
    Powder(PowderData),
    Reroll(RerollData),
    Shiny(ShinyData),
    End,
}

impl Block {
    pub fn id(&self) -> BlockId {
        match self {
            Block::Start(_)          => BlockId::Start,
            Block::Type(_)           => BlockId::Type,
            Block::Name(_)           => BlockId::Name,
            Block::Identification(_) => BlockId::Identification,
            Block::Powder(_)         => BlockId::Powder,
            Block::Reroll(_)         => BlockId::Reroll,
            Block::Shiny(_)          => BlockId::Shiny,
            Block::End               => BlockId::End,
        }
    }

    /// Append tag and payload to `out`.
    pub fn encode(&self, ver: FormatVersion, out: &mut Vec<u8>) -> Result<()> {
        out.push(self.id().as_byte());
        let payload = match self {
            Block::Start(b)          => b.encode_data(ver, out),
            Block::Type(b)           => b.encode_data(ver, out),
            Block::Name(b)           => b.encode_data(ver, out),
            Block::Identification(b) => b.encode_data(ver, out),
            Block::Powder(b)         => b.encode_data(ver, out),
            Block::Reroll(b)         => b.encode_data(ver, out),
            Block::Shiny(b)          => b.encode_data(ver, out),
            Block::End               => Ok(()),
        };
        payload.map_err(|source| Error::Encode { during: self.id(), source })
    }
}

// ── Framing ──────────────────────────────────────────────────────────────────

/// Encode `blocks` in order into one buffer, exactly as given.
pub fn encode_blocks(blocks: &[Block], ver: FormatVersion) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for block in blocks {
        block.encode(ver, &mut out)?;
    }
    Ok(out)
}

fn decode_payload<T: BlockData>(reader: &mut ByteReader<'_>, ver: FormatVersion) -> Result<T> {
    T::decode_data(reader, ver).map_err(|source| Error::DecodeBlock { during: T::ID, source })
}

/// Read one tagged block at the reader's position.
pub(crate) fn read_block(reader: &mut ByteReader<'_>, ver: FormatVersion) -> Result<Block> {
    let offset = reader.position();
    let tag = reader.read_u8()?;
    let id = match BlockId::from_byte(tag) {
        Some(id) => id,
        None => {
            if let Some(name) = reserved_block_name(tag) {
                trace!(tag, name, offset, "reserved block tag");
            }
            return Err(DecodeError::UnknownBlock(tag).into());
        }
    };

    let block = match id {
        BlockId::Start => {
            return Err(Error::DecodeBlock { during: BlockId::Start, source: DecodeError::StartReparse })
        }
        BlockId::Type           => Block::Type(decode_payload(reader, ver)?),
        BlockId::Name           => Block::Name(decode_payload(reader, ver)?),
        BlockId::Identification => Block::Identification(decode_payload(reader, ver)?),
        BlockId::Powder         => Block::Powder(decode_payload(reader, ver)?),
        BlockId::Reroll         => Block::Reroll(decode_payload(reader, ver)?),
        BlockId::Shiny          => Block::Shiny(decode_payload(reader, ver)?),
        BlockId::End            => Block::End,
    };
    trace!(block = %id, offset, len = reader.position() - offset, "decoded block");
    Ok(block)
}

/// Read blocks until End or until the reader is exhausted.
pub(crate) fn read_blocks(reader: &mut ByteReader<'_>, ver: FormatVersion) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    // Every block consumes at least its tag byte.
    let max_blocks = reader.remaining();
    for _ in 0..max_blocks {
        if reader.is_empty() {
            break;
        }
        let block = read_block(reader, ver)?;
        let end = block.id() == BlockId::End;
        blocks.push(block);
        if end {
            break;
        }
    }
    Ok(blocks)
}

/// Decode one block from the front of `bytes`.
///
/// Returns the block and the number of bytes it occupied, tag included.
pub fn decode_block(ver: FormatVersion, bytes: &[u8]) -> Result<(Block, usize)> {
    let mut reader = ByteReader::new(bytes);
    let block = read_block(&mut reader, ver)?;
    Ok((block, reader.position()))
}

/// Decode every block in `bytes`, which must not begin with a Start block.
pub fn decode_all_blocks(ver: FormatVersion, bytes: &[u8]) -> Result<Vec<Block>> {
    read_blocks(&mut ByteReader::new(bytes), ver)
}
