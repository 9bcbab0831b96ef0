use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DecodeError;

/// Declares a `#[repr(u8)]` enumeration whose `TryFrom<u8>` rejects every
/// byte that is not listed.
macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident / $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = DecodeError;

            fn try_from(b: u8) -> Result<Self, DecodeError> {
                match b {
                    $( $value => Ok($name::$variant), )+
                    other => Err(DecodeError::$err(other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

byte_enum! {
    /// Top-level item category, carried by the Type block.
    #[derive(Default)]
    pub enum ItemType / BadItemType {
        #[default]
        Gear         = 0 => "Gear",
        Tome         = 1 => "Tome",
        Charm        = 2 => "Charm",
        CraftedGear  = 3 => "CraftedGear",
        CraftedConsu = 4 => "CraftedConsu",
    }
}

impl ItemType {
    /// Case-insensitive lookup by name.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
    }
}

byte_enum! {
    pub enum Element / BadElement {
        Earth   = 0 => "Earth",
        Thunder = 1 => "Thunder",
        Water   = 2 => "Water",
        Fire    = 3 => "Fire",
        Air     = 4 => "Air",
    }
}

byte_enum! {
    /// Gear kinds for crafted items.
    pub enum CraftedGearType / BadGearType {
        Spear      = 0  => "Spear",
        Wand       = 1  => "Wand",
        Dagger     = 2  => "Dagger",
        Bow        = 3  => "Bow",
        Relik      = 4  => "Relik",
        Ring       = 5  => "Ring",
        Bracelet   = 6  => "Bracelet",
        Necklace   = 7  => "Necklace",
        Helmet     = 8  => "Helmet",
        Chestplate = 9  => "Chestplate",
        Leggings   = 10 => "Leggings",
        Boots      = 11 => "Boots",
        /// Signed crafted gear with a skin.
        Weapon     = 12 => "Weapon",
        /// Fallback when the specific gear type is unknown.
        Accessory  = 13 => "Accessory",
    }
}

byte_enum! {
    pub enum ClassType / BadClassType {
        Unspecified = 0 => "Unspecified",
        Mage        = 1 => "Mage",
        Archer      = 2 => "Archer",
        Warrior     = 3 => "Warrior",
        Assassin    = 4 => "Assassin",
        Shaman      = 5 => "Shaman",
    }
}

byte_enum! {
    /// Weapon attack speed. Declaration order runs from fastest to slowest,
    /// so the derived `Ord` compares by speed.
    pub enum AttackSpeed / BadAttackSpeed {
        SuperFast = 0 => "SuperFast",
        VeryFast  = 1 => "VeryFast",
        Fast      = 2 => "Fast",
        Normal    = 3 => "Normal",
        Slow      = 4 => "Slow",
        VerySlow  = 5 => "VerySlow",
        SuperSlow = 6 => "SuperSlow",
    }
}

byte_enum! {
    pub enum ConsumableType / BadConsumableType {
        Potion = 0 => "Potion",
        Food   = 1 => "Food",
        Scroll = 2 => "Scroll",
    }
}

byte_enum! {
    pub enum EffectType / BadEffectType {
        Heal     = 0 => "Heal",
        Mana     = 1 => "Mana",
        Duration = 2 => "Duration",
    }
}

/// One consumable effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind:  EffectType,
    pub value: i32,
}
