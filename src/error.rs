//! Error taxonomy.
//!
//! Encoding and decoding failures are kept in two disjoint enums.  The
//! top-level [`Error`] wraps them with the block being processed when that is
//! known, and leaves decode failures unwrapped when it is not (bad codepoint,
//! malformed Start block, unknown block tag).

use thiserror::Error;

use crate::block::BlockId;

// ── Encode errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Cannot encode non ASCII string")]
    NonAsciiString,
    /// A NUL inside a name would terminate it early on the wire.
    #[error("Cannot encode string containing a NUL character")]
    InteriorNul,
    #[error("Cannot encode more than 255 identifications per item")]
    TooManyIdentifications,
    #[error("Identification id {0} was not given a base value while using extended encoding")]
    NoBaseValueGiven(u8),
    #[error("Cannot encode more than 255 powders per item")]
    TooManyPowders,
    #[error("Powder tier {0} is outside 1-6")]
    PowderTierOutOfRange(u8),
    #[error("Unknown encoding version: {0}")]
    UnknownVersion(u8),
}

// ── Decode errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unexpectedly hit end of bytestream at offset {offset}")]
    UnexpectedEndOfBytes { offset: usize },
    #[error("Unknown block id: {0}")]
    UnknownBlock(u8),
    #[error("Second start block found in data")]
    StartReparse,
    #[error("No start block found (first byte {0})")]
    NoStartBlockFound(u8),
    #[error("Unknown version: {0}")]
    UnknownVersion(u8),
    #[error("Decoded a non ASCII string at offset {offset}")]
    BadString { offset: usize },
    #[error("Invalid item type id: {0}")]
    BadItemType(u8),
    #[error("Invalid gear type id: {0}")]
    BadGearType(u8),
    #[error("Invalid class type id: {0}")]
    BadClassType(u8),
    #[error("Invalid attack speed id: {0}")]
    BadAttackSpeed(u8),
    #[error("Invalid element id: {0}")]
    BadElement(u8),
    #[error("Invalid consumable type id: {0}")]
    BadConsumableType(u8),
    #[error("Invalid effect type: {0}")]
    BadEffectType(u8),
    #[error("Bad codepoint: {0:06X}")]
    BadCodepoint(u32),
    #[error("VarInt at offset {offset} exceeds 10 bytes")]
    VarIntTooLong { offset: usize },
    #[error("VarInt at offset {offset} does not fit in 64 bits")]
    VarIntOverflow { offset: usize },
    #[error("Base value {0} does not fit in 32 bits")]
    BaseValueOutOfRange(i64),
}

// ── Top-level error ──────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{source} while encoding block {during}")]
    Encode { during: BlockId, source: EncodeError },
    #[error("error while decoding block {during}: {source}")]
    DecodeBlock { during: BlockId, source: DecodeError },
    #[error("error while decoding: {0}")]
    Decode(#[from] DecodeError),
    #[error("Block {0} appears more than once")]
    DuplicateBlock(BlockId),
}

impl Error {
    /// The underlying decode failure, whether or not it was wrapped with a
    /// block id.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Error::DecodeBlock { source, .. } | Error::Decode(source) => Some(source),
            _ => None,
        }
    }

    pub fn encode_error(&self) -> Option<&EncodeError> {
        match self {
            Error::Encode { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
