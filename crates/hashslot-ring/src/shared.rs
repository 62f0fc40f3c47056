use std::sync::Arc;

use hashslot_core::{RingError, SlotId};
use tokio::sync::RwLock;

use crate::ring::Ring;

/// Cloneable handle to a ring shared across tasks.
///
/// Every operation holds the lock for its full duration, so readers never
/// observe a half-applied add or remove.
#[derive(Debug, Clone)]
pub struct SharedRing {
    ring: Arc<RwLock<Ring>>,
}

impl SharedRing {
    pub fn new(ring: Ring) -> Self {
        Self {
            ring: Arc::new(RwLock::new(ring)),
        }
    }

    pub async fn add(&self, node: &str) -> Option<String> {
        self.ring.write().await.add(node)
    }

    pub async fn remove(&self, node: &str) -> Result<(SlotId, String), RingError> {
        self.ring.write().await.remove(node)
    }

    pub async fn get(&self, key: &str) -> Result<(SlotId, String), RingError> {
        let ring = self.ring.read().await;
        ring.get(key).map(|(slot, node)| (slot, node.to_string()))
    }

    /// Owned copy of the current ring, detached from later updates.
    pub async fn snapshot(&self) -> Ring {
        self.ring.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.ring.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ring.read().await.is_empty()
    }
}

impl From<Ring> for SharedRing {
    fn from(ring: Ring) -> Self {
        Self::new(ring)
    }
}
