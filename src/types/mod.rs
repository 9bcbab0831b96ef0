//! Closed enumerations and value types carried by blocks.
//!
//! Every enumeration is a plain `u8` on the wire.  Decoding a byte outside
//! the enumeration fails with the matching `DecodeError::Bad*` variant.

mod catalog;
mod powder;
mod stat;
mod version;

pub use catalog::{
    AttackSpeed, ClassType, ConsumableType, CraftedGearType, Effect, EffectType, Element, ItemType,
};
pub use powder::{Powder, MAX_POWDER_TIER, MIN_POWDER_TIER};
pub use stat::{CraftedStat, RollType, Stat};
pub use version::FormatVersion;
