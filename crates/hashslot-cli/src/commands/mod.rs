pub mod demo;
pub mod lookup;
