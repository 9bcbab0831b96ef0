use serde::{Deserialize, Serialize};

/// Roll of an identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollType {
    /// Percentage-style roll, 0–255.
    Rolled(u8),
    /// Fixed value with no roll.
    PreIdentified,
}

impl RollType {
    pub fn is_pre_identified(&self) -> bool {
        matches!(self, RollType::PreIdentified)
    }

    pub fn value(&self) -> Option<u8> {
        match self {
            RollType::Rolled(v)     => Some(*v),
            RollType::PreIdentified => None,
        }
    }
}

/// One identification on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub kind: u8,
    /// Only carried under extended encoding.
    #[serde(default)]
    pub base: Option<i32>,
    pub roll: RollType,
}

impl Stat {
    pub fn rolled(kind: u8, base: Option<i32>, roll: u8) -> Self {
        Self { kind, base, roll: RollType::Rolled(roll) }
    }

    pub fn pre_identified(kind: u8, base: i32) -> Self {
        Self { kind, base: Some(base), roll: RollType::PreIdentified }
    }

    pub fn is_pre_identified(&self) -> bool {
        self.roll.is_pre_identified()
    }
}

/// Identification on a crafted item, stored at its full-durability value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftedStat {
    pub kind: u8,
    pub max:  i32,
}
