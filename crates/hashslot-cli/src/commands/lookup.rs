use anyhow::Result;
use hashslot_core::RingConfig;
use hashslot_ring::Ring;
use tracing::info;

pub fn lookup(config: &RingConfig, keys: &[String]) -> Result<()> {
    let ring = Ring::from_config(config)?;
    info!(nodes = ring.len(), slot_modulus = ring.slot_modulus(), "ring built");

    for key in keys {
        let (slot, node) = ring.get(key)?;
        println!("{key:<16} hash slot {:>4} -> slot {slot:>4} {node}", ring.slot_of(key));
    }

    Ok(())
}

pub fn placement(config: &RingConfig) -> Result<()> {
    let ring = Ring::from_config(config)?;
    print_placement(&ring);
    Ok(())
}

pub fn print_placement(ring: &Ring) {
    println!("{} node(s) over {} slots:", ring.len(), ring.slot_modulus());
    for (slot, node) in ring.nodes() {
        println!("  slot {slot:>4}  {node}");
    }
}
