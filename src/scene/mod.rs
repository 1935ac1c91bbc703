//! The wireframe tables and the bus model built from them.

pub use self::bus::assemble_bus;
pub use self::wireframe::{Edge, Wireframe, WireframeBuilder};

pub mod bus;
mod wireframe;
