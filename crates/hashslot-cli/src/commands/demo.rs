use anyhow::Result;
use hashslot_core::{RingConfig, RingError};
use hashslot_ring::Ring;
use tracing::warn;

use super::lookup::print_placement;

const NODES: [&str; 5] = ["A", "B", "C", "D", "E"];
const REMOVED: [&str; 3] = ["C", "D", "E"];
const KEYS: [&str; 6] = [
    "user233", "user333", "user343", "user353", "user363", "user373",
];

/// Place five nodes, resolve a fixed key set, drop three nodes, resolve again.
pub fn run(config: &RingConfig) -> Result<()> {
    let mut ring = Ring::new(config.slot_modulus)?.with_policy(config.remove_policy);

    for node in NODES {
        if let Some(evicted) = ring.add(node) {
            println!("{node} evicted {evicted}");
        }
    }

    print_placement(&ring);
    resolve_all(&ring)?;

    println!("--- removing {} ---", REMOVED.join(", "));
    for node in REMOVED {
        match ring.remove(node) {
            Ok(_) => {}
            Err(err) if err.is_not_found() => warn!(error = %err, "skipping"),
            Err(err) => return Err(err.into()),
        }
    }

    print_placement(&ring);
    resolve_all(&ring)?;

    Ok(())
}

fn resolve_all(ring: &Ring) -> Result<(), RingError> {
    for key in KEYS {
        let (slot, node) = ring.get(key)?;
        println!("hash {:>4} maps to slot {slot:>4} name {node}", ring.slot_of(key));
    }
    Ok(())
}
