use metrics::{counter, gauge};

pub fn record_node_added() {
    counter!("hashslot_nodes_added_total").increment(1);
}

pub fn record_node_removed() {
    counter!("hashslot_nodes_removed_total").increment(1);
}

pub fn record_remove_miss() {
    counter!("hashslot_remove_misses_total").increment(1);
}

pub fn record_collision() {
    counter!("hashslot_slot_collisions_total").increment(1);
}

pub fn record_lookup() {
    counter!("hashslot_lookups_total").increment(1);
}

pub fn record_lookup_miss() {
    counter!("hashslot_lookup_misses_total").increment(1);
}

pub fn set_occupied_slots(count: f64) {
    gauge!("hashslot_occupied_slots").set(count);
}
