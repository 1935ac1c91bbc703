//! Procedural generation of wireframe pieces.

pub use self::ring::{push_ring_edges, ring};

pub mod ring;
