//! Whole-item encoding and decoding.
//!
//! [`ItemEncoder`] makes sure the block list starts with Start and ends with
//! End, encodes every block with the stream's version and transcodes the
//! bytes into an ID string.  [`ItemDecoder`] reverses that: transcode, read
//! the Start block, then decode everything after it with the version it
//! declared.

use tracing::debug;

use crate::block::{self, start, Block, StartData};
use crate::error::{EncodeError, Result};
use crate::reader::ByteReader;
use crate::string::{decode_string, encode_string};
use crate::types::FormatVersion;

// ── Encoder ──────────────────────────────────────────────────────────────────

/// Encodes block lists into ID strings.
///
/// The configured version is only used when the list does not already start
/// with a Start block; otherwise the Start block's version wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemEncoder {
    version: FormatVersion,
}

impl ItemEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: FormatVersion) -> Self {
        self.version = version;
        self
    }

    /// Configure from a raw version byte, as given on a command line.
    pub fn from_version_byte(b: u8) -> std::result::Result<Self, EncodeError> {
        FormatVersion::from_byte(b)
            .map(|version| Self { version })
            .ok_or(EncodeError::UnknownVersion(b))
    }

    pub fn version(&self) -> FormatVersion {
        self.version
    }

    /// Encode `blocks` to raw bytes, adding Start and End if missing.
    pub fn encode_bytes(&self, blocks: &[Block]) -> Result<Vec<u8>> {
        let (start, version) = match blocks.first() {
            Some(Block::Start(s)) => (None, s.version),
            _ => (Some(Block::Start(StartData::new(self.version))), self.version),
        };
        let end = match blocks.last() {
            Some(Block::End) => None,
            _ => Some(Block::End),
        };

        let mut out = Vec::new();
        for block in start.iter().chain(blocks).chain(end.iter()) {
            block.encode(version, &mut out)?;
        }
        debug!(%version, blocks = blocks.len(), bytes = out.len(), "encoded item");
        Ok(out)
    }

    /// Encode `blocks` to an ID string.
    pub fn encode(&self, blocks: &[Block]) -> Result<String> {
        Ok(encode_string(&self.encode_bytes(blocks)?))
    }
}

// ── Decoder ──────────────────────────────────────────────────────────────────

/// Decodes ID strings into block lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemDecoder;

impl ItemDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode raw bytes.  The result always begins with the Start block.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Vec<Block>> {
        let mut reader = ByteReader::new(bytes);
        let start = start::read_start(&mut reader)?;
        let rest = block::read_blocks(&mut reader, start.version)?;
        if !reader.is_empty() {
            debug!(trailing = reader.remaining(), "ignoring bytes after end block");
        }
        debug!(version = %start.version, blocks = rest.len() + 1, "decoded item");

        let mut blocks = Vec::with_capacity(rest.len() + 1);
        blocks.push(Block::Start(start));
        blocks.extend(rest);
        Ok(blocks)
    }

    /// Decode an ID string.
    pub fn decode(&self, id: &str) -> Result<Vec<Block>> {
        let bytes = decode_string(id)?;
        self.decode_bytes(&bytes)
    }
}
