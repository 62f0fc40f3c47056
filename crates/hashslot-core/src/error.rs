use thiserror::Error;

use crate::types::SlotId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Invalid slot modulus: {0} (must be greater than zero)")]
    InvalidModulus(u64),

    #[error("Ring has no nodes")]
    EmptyRing,

    #[error("Node not found: {node} (slot {slot} is empty)")]
    NodeNotFound { node: String, slot: SlotId },

    #[error("Node not found: {node} (slot {slot} is held by {occupant})")]
    SlotOwnedByOther {
        node: String,
        slot: SlotId,
        occupant: String,
    },
}

impl RingError {
    /// Not-found conditions leave the ring untouched and are safe to ignore.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RingError::NodeNotFound { .. } | RingError::SlotOwnedByOther { .. }
        )
    }
}
