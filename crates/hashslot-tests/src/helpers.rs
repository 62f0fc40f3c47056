use hashslot_core::SlotId;
use hashslot_ring::Ring;

/// Linear-scan reference for `Ring::get`: smallest occupied slot at or after
/// the key's slot, else the smallest occupied slot overall.
pub fn naive_owner(ring: &Ring, key: &str) -> Option<(SlotId, String)> {
    let target = ring.slot_of(key);
    let nodes: Vec<(SlotId, &str)> = ring.nodes().collect();

    nodes
        .iter()
        .filter(|(slot, _)| *slot >= target)
        .min_by_key(|(slot, _)| *slot)
        .or_else(|| nodes.iter().min_by_key(|(slot, _)| *slot))
        .map(|(slot, node)| (*slot, node.to_string()))
}

/// Two distinct `node-N` names that hash to the same slot.
pub fn colliding_pair(slot_modulus: u64) -> (String, String) {
    let ring = Ring::new(slot_modulus).unwrap();
    let mut seen = std::collections::HashMap::new();

    for i in 0.. {
        let name = format!("node-{i}");
        if let Some(first) = seen.insert(ring.slot_of(&name), name.clone()) {
            return (first, name);
        }
    }
    unreachable!("pigeonhole guarantees a collision")
}

pub fn assert_well_formed(ring: &Ring) {
    let slots: Vec<SlotId> = ring.slots().collect();
    assert!(
        slots.windows(2).all(|w| w[0] < w[1]),
        "Slots must be strictly ascending, got {slots:?}"
    );
    assert_eq!(slots.len(), ring.len());
    for slot in &slots {
        assert!(slot.0 < ring.slot_modulus(), "Slot {slot} out of range");
        assert!(ring.node_at(*slot).is_some(), "Slot {slot} has no node");
    }
    let mapped: Vec<SlotId> = ring.nodes().map(|(slot, _)| slot).collect();
    assert_eq!(slots, mapped, "Slot sequence and node map diverged");
}
