use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use hashslot_core::{RemovePolicy, RingConfig, RingError, SlotId, metrics};
use tracing::{debug, warn};

use crate::hash::slot_for;

/// Consistent hash ring with one slot per node.
///
/// Nodes and keys are placed at `hash(name) % slot_modulus`. A key is owned by
/// the first occupied slot at or after its own, wrapping past the highest slot
/// back to the lowest. The ordered map keeps slots sorted, so the occupied
/// slot set and the slot-to-node mapping can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    slot_modulus: u64,
    remove_policy: RemovePolicy,
    slots: BTreeMap<SlotId, String>,
}

impl Ring {
    /// Create an empty ring over `slot_modulus` slots.
    pub fn new(slot_modulus: u64) -> Result<Self, RingError> {
        if slot_modulus == 0 {
            return Err(RingError::InvalidModulus(slot_modulus));
        }

        Ok(Self {
            slot_modulus,
            remove_policy: RemovePolicy::default(),
            slots: BTreeMap::new(),
        })
    }

    pub fn with_policy(mut self, remove_policy: RemovePolicy) -> Self {
        self.remove_policy = remove_policy;
        self
    }

    /// Build a ring from config, placing every configured node in order.
    pub fn from_config(config: &RingConfig) -> Result<Self, RingError> {
        config.validate()?;

        let mut ring = Self::new(config.slot_modulus)?.with_policy(config.remove_policy);
        for node in &config.nodes {
            ring.add(node);
        }
        Ok(ring)
    }

    pub fn slot_modulus(&self) -> u64 {
        self.slot_modulus
    }

    pub fn remove_policy(&self) -> RemovePolicy {
        self.remove_policy
    }

    /// Slot that `name` hashes to on this ring, occupied or not.
    pub fn slot_of(&self, name: &str) -> SlotId {
        slot_for(name, self.slot_modulus)
    }

    /// Place `node` on the ring.
    ///
    /// A different node already holding the slot is overwritten and returned.
    /// Re-adding a node that is already placed changes nothing.
    pub fn add(&mut self, node: &str) -> Option<String> {
        let slot = self.slot_of(node);

        let evicted = match self.slots.insert(slot, node.to_string()) {
            None => {
                debug!(node, %slot, "added node to ring");
                metrics::record_node_added();
                None
            }
            Some(previous) if previous == node => {
                debug!(node, %slot, "node already on ring");
                None
            }
            Some(previous) => {
                warn!(node, %slot, evicted = %previous, "slot collision, previous node evicted");
                metrics::record_collision();
                Some(previous)
            }
        };

        metrics::set_occupied_slots(self.slots.len() as f64);
        evicted
    }

    /// Take `node` off the ring, returning the freed slot and its former occupant.
    ///
    /// Under `RemovePolicy::BySlot` the occupant may be a different node that
    /// collided into the slot after `node` was added. Misses leave the ring
    /// unchanged.
    pub fn remove(&mut self, node: &str) -> Result<(SlotId, String), RingError> {
        let slot = self.slot_of(node);
        let by_name = self.remove_policy == RemovePolicy::ByName;

        let occupant = match self.slots.entry(slot) {
            Entry::Vacant(_) => Err(RingError::NodeNotFound {
                node: node.to_string(),
                slot,
            }),
            Entry::Occupied(entry) if by_name && entry.get() != node => {
                Err(RingError::SlotOwnedByOther {
                    node: node.to_string(),
                    slot,
                    occupant: entry.get().clone(),
                })
            }
            Entry::Occupied(entry) => Ok(entry.remove()),
        };

        let occupant = match occupant {
            Ok(occupant) => occupant,
            Err(err) => {
                warn!(node, %slot, error = %err, "remove skipped");
                metrics::record_remove_miss();
                return Err(err);
            }
        };

        if occupant != node {
            warn!(node, %slot, evicted = %occupant, "removed colliding occupant of slot");
        } else {
            debug!(node, %slot, "removed node from ring");
        }

        metrics::record_node_removed();
        metrics::set_occupied_slots(self.slots.len() as f64);
        Ok((slot, occupant))
    }

    /// Resolve the node that owns `key`.
    ///
    /// Finds the first occupied slot at or after the key's slot; past the
    /// highest occupied slot it wraps to the lowest.
    pub fn get(&self, key: &str) -> Result<(SlotId, &str), RingError> {
        let target = self.slot_of(key);

        let owner = self
            .slots
            .range(target..)
            .next()
            .or_else(|| self.slots.iter().next());

        match owner {
            Some((slot, node)) => {
                metrics::record_lookup();
                Ok((*slot, node.as_str()))
            }
            None => {
                metrics::record_lookup_miss();
                Err(RingError::EmptyRing)
            }
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True if `node` itself (not a colliding name) holds its slot.
    pub fn contains(&self, node: &str) -> bool {
        self.node_at(self.slot_of(node)) == Some(node)
    }

    pub fn node_at(&self, slot: SlotId) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// Occupied slots in ascending order.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.slots.keys().copied()
    }

    /// `(slot, node)` pairs in ascending slot order.
    pub fn nodes(&self) -> impl Iterator<Item = (SlotId, &str)> + '_ {
        self.slots.iter().map(|(slot, node)| (*slot, node.as_str()))
    }
}
