pub mod bitpack;
pub mod block;
pub mod encoder;
pub mod error;
pub mod item;
pub mod reader;
pub mod string;
pub mod types;
pub mod varint;

pub use block::{Block, BlockId};
pub use encoder::{ItemDecoder, ItemEncoder};
pub use error::{DecodeError, EncodeError, Error, Result};
pub use item::Item;
pub use types::FormatVersion;

/// Encode a block list into an ID string.
///
/// A Start block carrying `version` is prepended unless `blocks` already
/// starts with one, and an End block is appended unless present.
pub fn encode(blocks: &[Block], version: FormatVersion) -> Result<String> {
    ItemEncoder::new().with_version(version).encode(blocks)
}

/// Decode an ID string into its block list, Start first.
pub fn decode(id: &str) -> Result<Vec<Block>> {
    ItemDecoder::new().decode(id)
}

pub fn encode_item(item: &Item) -> Result<String> {
    item.encode()
}

pub fn decode_item(id: &str) -> Result<Item> {
    Item::decode(id)
}
