//! Interpolation primitives: shortest-arc slerp for orientation and a
//! uniform Catmull-Rom blend (with analytic derivative) for position.

pub mod catmull_rom;
pub mod slerp;

pub use catmull_rom::{catmull_rom_derivative, catmull_rom_point};
pub use slerp::{slerp, NEARLY_PARALLEL_DOT};
