pub mod drop;
pub mod keyboard;
pub mod pointer;

pub use drop::{wire_default_track, wire_drop_zone};
pub use keyboard::wire_global_keydown;
pub use pointer::wire_orbit_input;
