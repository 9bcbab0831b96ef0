//! Item model on top of the block list.
//!
//! This layer has no wire knowledge of its own: it maps fields to blocks and
//! back, and leaves every byte-level decision to the block codecs.

use serde::{Deserialize, Serialize};

use crate::block::{
    Block, BlockId, IdentificationData, NameData, PowderData, RerollData, ShinyData, StartData,
    TypeData,
};
use crate::encoder::{ItemDecoder, ItemEncoder};
use crate::error::{Error, Result};
use crate::types::{FormatVersion, ItemType, Powder, Stat};

/// One shiny stat on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShinyProperty {
    pub id:    u8,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub name:              String,
    pub item_type:         ItemType,
    pub powder_slots:      u8,
    pub powders:           Vec<Powder>,
    pub identifications:   Vec<Stat>,
    pub extended_encoding: bool,
    pub rerolls:           Option<u8>,
    pub shiny:             Vec<ShinyProperty>,
}

impl Item {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self { name: name.into(), item_type, ..Self::default() }
    }

    pub fn add_powder(&mut self, powder: Powder) {
        self.powders.push(powder);
    }

    pub fn set_powder_slots(&mut self, slots: u8) {
        self.powder_slots = slots;
    }

    pub fn add_identification(&mut self, stat: Stat) {
        self.identifications.push(stat);
    }

    pub fn add_shiny_property(&mut self, id: u8, value: i64) {
        self.shiny.push(ShinyProperty { id, value });
    }

    /// Blocks for this item, Start through End.
    pub fn to_blocks(&self) -> Vec<Block> {
        let mut blocks = vec![
            Block::Start(StartData::new(FormatVersion::LATEST)),
            Block::Type(TypeData::new(self.item_type)),
            Block::Name(NameData::new(self.name.clone())),
        ];
        // An empty extended block still carries the flag.
        if !self.identifications.is_empty() || self.extended_encoding {
            blocks.push(Block::Identification(IdentificationData::new(
                self.identifications.clone(),
                self.extended_encoding,
            )));
        }
        if self.powder_slots > 0 || !self.powders.is_empty() {
            blocks.push(Block::Powder(PowderData::new(self.powder_slots, self.powders.clone())));
        }
        if let Some(rerolls) = self.rerolls {
            blocks.push(Block::Reroll(RerollData::new(rerolls)));
        }
        blocks.extend(
            self.shiny
                .iter()
                .map(|s| Block::Shiny(ShinyData::new(s.id, s.value))),
        );
        blocks.push(Block::End);
        blocks
    }

    /// Rebuild an item from decoded blocks.
    ///
    /// Shiny blocks may repeat, one per property.  Any other repeated block
    /// is rejected.
    pub fn from_blocks(blocks: &[Block]) -> Result<Self> {
        let mut item = Item::default();
        let mut seen: Vec<BlockId> = Vec::new();

        for block in blocks {
            let id = block.id();
            if id != BlockId::Shiny {
                if seen.contains(&id) {
                    return Err(Error::DuplicateBlock(id));
                }
                seen.push(id);
            }
            match block {
                Block::Type(t) => item.item_type = t.item_type,
                Block::Name(n) => item.name = n.name.clone(),
                Block::Identification(d) => {
                    item.identifications = d.identifications.clone();
                    item.extended_encoding = d.extended_encoding;
                }
                Block::Powder(p) => {
                    item.powder_slots = p.powder_slots;
                    item.powders = p.powders.clone();
                }
                Block::Reroll(r) => item.rerolls = Some(r.rerolls),
                Block::Shiny(s) => item.add_shiny_property(s.id, s.value),
                Block::Start(_) | Block::End => {}
            }
        }
        Ok(item)
    }

    pub fn encode(&self) -> Result<String> {
        ItemEncoder::new().encode(&self.to_blocks())
    }

    pub fn decode(id: &str) -> Result<Self> {
        Self::from_blocks(&ItemDecoder::new().decode(id)?)
    }
}

/// The minimal block list for an item: Start, Type, Name, End.
pub fn basic_item_blocks(name: impl Into<String>, item_type: ItemType) -> Vec<Block> {
    vec![
        Block::Start(StartData::new(FormatVersion::LATEST)),
        Block::Type(TypeData::new(item_type)),
        Block::Name(NameData::new(name)),
        Block::End,
    ]
}
