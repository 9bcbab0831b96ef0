use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DecodeError;

/// Wire format version, carried by the Start block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum FormatVersion {
    #[default]
    V1 = 1,
}

impl FormatVersion {
    pub const LATEST: FormatVersion = FormatVersion::V1;

    /// Resolve a version byte.  `0` is accepted as an alias of `V1`, as the
    /// reference consumer does.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 | 1 => Some(FormatVersion::V1),
            _     => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for FormatVersion {
    type Error = DecodeError;

    fn try_from(b: u8) -> Result<Self, DecodeError> {
        Self::from_byte(b).ok_or(DecodeError::UnknownVersion(b))
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version{}", self.as_byte())
    }
}
