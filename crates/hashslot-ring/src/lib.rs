pub mod hash;
pub mod ring;
pub mod shared;

pub use hash::{hash, slot_for};
pub use ring::Ring;
pub use shared::SharedRing;
