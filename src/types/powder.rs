use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DecodeError, EncodeError};
use crate::types::Element;

pub const MIN_POWDER_TIER: u8 = 1;
pub const MAX_POWDER_TIER: u8 = 6;

/// An elemental powder of tier 1–6.
///
/// The tier range is enforced on construction, including deserialization,
/// so every `Powder` packs into a non-zero 5-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPowder")]
pub struct Powder {
    element: Element,
    tier:    u8,
}

#[derive(Deserialize)]
struct RawPowder {
    element: Element,
    tier:    u8,
}

impl TryFrom<RawPowder> for Powder {
    type Error = EncodeError;

    fn try_from(raw: RawPowder) -> Result<Self, EncodeError> {
        Powder::new(raw.element, raw.tier)
    }
}

impl Powder {
    pub fn new(element: Element, tier: u8) -> Result<Self, EncodeError> {
        if !(MIN_POWDER_TIER..=MAX_POWDER_TIER).contains(&tier) {
            return Err(EncodeError::PowderTierOutOfRange(tier));
        }
        Ok(Self { element, tier })
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }

    /// 5-bit wire value, `element * 6 + tier`, in 1..=30.
    pub fn field(&self) -> u8 {
        (u8::from(self.element) * MAX_POWDER_TIER + self.tier) & 0b1_1111
    }

    /// Inverse of [`Powder::field`].  A zero field is an empty slot and
    /// yields `Ok(None)`.
    pub fn from_field(field: u8) -> Result<Option<Self>, DecodeError> {
        if field == 0 {
            return Ok(None);
        }
        // tier always lands in 1..=6 here, only the element can be bad
        let (element, tier) = if field % MAX_POWDER_TIER == 0 {
            (field / MAX_POWDER_TIER - 1, MAX_POWDER_TIER)
        } else {
            (field / MAX_POWDER_TIER, field % MAX_POWDER_TIER)
        };
        let element = Element::try_from(element)?;
        Ok(Some(Self { element, tier }))
    }
}

impl fmt::Display for Powder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} T{}", self.element, self.tier)
    }
}
