use serde::{Deserialize, Serialize};
use std::fmt;

/// Position on the ring, always in `[0, slot_modulus)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u64);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<SlotId> for u64 {
    fn from(slot: SlotId) -> Self {
        slot.0
    }
}

/// How `remove` decides whether the occupant of a slot is the node being removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovePolicy {
    /// Evict whatever occupies the node's slot, even if a colliding node
    /// overwrote it since.
    BySlot,
    /// Evict only when the occupant's name matches exactly.
    #[default]
    ByName,
}

impl RemovePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BySlot => "by_slot",
            Self::ByName => "by_name",
        }
    }

    pub fn from_str_policy(s: &str) -> Option<Self> {
        match s {
            "by_slot" => Some(Self::BySlot),
            "by_name" => Some(Self::ByName),
            _ => None,
        }
    }
}

impl fmt::Display for RemovePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Slot count used by the reference scenario and the default config.
pub const DEFAULT_SLOT_MODULUS: u64 = 32;
