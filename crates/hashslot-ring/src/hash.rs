use std::hash::Hasher;

use fnv::FnvHasher;
use hashslot_core::SlotId;

/// 64-bit FNV-1a over the raw UTF-8 bytes of `input`.
///
/// Bytes are written directly rather than through `Hash for str`, which
/// would append a terminator byte and change the digest.
pub fn hash(input: &str) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(input.as_bytes());
    hasher.finish()
}

/// Slot that `input` lands on in a ring of `slot_modulus` slots.
///
/// `slot_modulus` must be non-zero; `Ring::new` enforces this for ring-owned calls.
pub fn slot_for(input: &str, slot_modulus: u64) -> SlotId {
    SlotId(hash(input) % slot_modulus)
}
