//! The bus model: a box-shaped body with glass panels, standing on three axles of
//! twin wheels.
//!
//! Axes: `x` points left to right, `y` points up and `z` runs from the back to the
//! front of the bus.

use super::{Edge, Wireframe, WireframeBuilder};
use crate::procedural;
use glamx::Vec3;

/// Radius of a wheel ring.
pub const WHEEL_RADIUS: f32 = 0.1;
/// Number of points sampled on each wheel ring.
pub const WHEEL_NSUBDIV: u32 = 20;
/// Vertical offset of the wheel centers.
pub const WHEEL_HEIGHT: f32 = -0.25;
/// Position of the three axles along `z`, from back to front.
pub const AXLE_POSITIONS: [f32; 3] = [-0.7, 0.0, 0.7];
/// Position of the four rings of an axle along `x`: the outer and inner ring of the
/// right wheel, then the outer and inner ring of the left wheel.
pub const RING_POSITIONS: [f32; 4] = [0.3, 0.2, -0.3, -0.2];

/// Number of vertices of the body and glass panels.
pub const NUM_BASE_VERTICES: usize = 26;
/// Number of edges of the body and glass panels.
pub const NUM_BASE_EDGES: usize = 30;

#[rustfmt::skip]
const BASE_VERTICES: [[f32; 3]; NUM_BASE_VERTICES] = [
    // body
    [0.25, -0.25, -1.0],
    [0.25, 0.25, -1.0],
    [-0.25, 0.25, -1.0],
    [-0.25, -0.25, -1.0],
    [0.25, -0.25, 1.0],
    [0.25, 0.25, 1.0],
    [-0.25, -0.25, 1.0],
    [-0.25, 0.25, 1.0],
    // front glass
    [0.2, 0.2, 1.0],
    [0.2, -0.15, 1.0],
    [-0.2, -0.15, 1.0],
    [-0.2, 0.2, 1.0],
    // back glass
    [0.2, 0.2, -1.0],
    [0.2, 0.0, -1.0],
    [-0.2, 0.0, -1.0],
    [-0.2, 0.2, -1.0],
    // left side glass
    [-0.25, 0.2, 0.95],
    [-0.25, 0.2, -0.95],
    [-0.25, 0.0, -0.95],
    [-0.25, 0.0, 0.4],
    [-0.25, -0.15, 0.95],
    // right side glass
    [0.25, 0.2, 0.95],
    [0.25, 0.2, -0.95],
    [0.25, 0.0, -0.95],
    [0.25, 0.0, 0.4],
    [0.25, -0.15, 0.95],
];

#[rustfmt::skip]
const BASE_EDGES: [Edge; NUM_BASE_EDGES] = [
    // body
    [0, 1], [0, 3], [0, 4], [2, 1], [2, 3], [2, 7],
    [6, 3], [6, 4], [6, 7], [5, 1], [5, 4], [5, 7],
    // front glass
    [8, 9], [9, 10], [10, 11], [11, 8],
    // back glass
    [12, 13], [13, 14], [14, 15], [15, 12],
    // left side glass
    [16, 17], [17, 18], [18, 19], [19, 20], [20, 16],
    // right side glass
    [21, 22], [22, 23], [23, 24], [24, 25], [25, 21],
];

/// Assembles the bus wireframe.
///
/// The body and glass panels come first, followed by the twelve wheel rings: axle by
/// axle, then in the order of [`RING_POSITIONS`]. The outer ring of each wheel is linked
/// to its inner ring by rungs; the inner rings get no rungs of their own.
///
/// The result only depends on the constants of this module, so two calls yield
/// identical wireframes.
///
/// # Example
/// ```
/// # use transmilenio::scene::assemble_bus;
/// let bus = assemble_bus();
/// assert_eq!(bus.vertices().len(), 266);
/// assert_eq!(bus.edges().len(), 390);
/// ```
pub fn assemble_bus() -> Wireframe {
    let wheel = procedural::ring(WHEEL_RADIUS, WHEEL_NSUBDIV);
    let mut builder = WireframeBuilder::new();

    builder.append_vertices(BASE_VERTICES.iter().map(|&v| Vec3::from(v)));
    builder.append_edges(&BASE_EDGES);

    for &z in AXLE_POSITIONS.iter() {
        for (i, &x) in RING_POSITIONS.iter().enumerate() {
            let with_rungs = i % 2 == 0;
            builder.append_ring(&wheel, Vec3::new(x, WHEEL_HEIGHT, z), with_rungs);
        }
    }

    let wireframe = builder.build();
    log::debug!(
        "Assembled the bus wireframe: {} vertices, {} edges.",
        wireframe.vertices().len(),
        wireframe.edges().len()
    );
    wireframe
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUM_RINGS: usize = AXLE_POSITIONS.len() * RING_POSITIONS.len();

    #[test]
    fn table_sizes() {
        let bus = assemble_bus();
        let nsubdiv = WHEEL_NSUBDIV as usize;

        assert_eq!(NUM_RINGS, 12);
        assert_eq!(bus.vertices().len(), NUM_BASE_VERTICES + NUM_RINGS * nsubdiv);
        assert_eq!(
            bus.edges().len(),
            NUM_BASE_EDGES + NUM_RINGS * nsubdiv + NUM_RINGS / 2 * nsubdiv
        );
        assert_eq!(bus.vertices().len(), 266);
        assert_eq!(bus.edges().len(), 390);
    }

    #[test]
    fn every_edge_references_an_existing_vertex() {
        let bus = assemble_bus();
        let max = bus.edges().iter().flatten().copied().max().unwrap();
        assert_eq!(max, 265);
    }

    #[test]
    fn base_tables_come_first() {
        let bus = assemble_bus();
        assert_eq!(&bus.edges()[..NUM_BASE_EDGES], &BASE_EDGES[..]);
        assert_eq!(bus.vertices()[7], Vec3::new(-0.25, 0.25, 1.0));
        assert_eq!(bus.vertices()[25], Vec3::new(0.25, -0.15, 0.95));
    }

    #[test]
    fn wheel_rings_are_placed_axle_by_axle() {
        let bus = assemble_bus();
        let wheel = procedural::ring(WHEEL_RADIUS, WHEEL_NSUBDIV);

        for (ring_id, chunk) in bus.vertices()[NUM_BASE_VERTICES..]
            .chunks(WHEEL_NSUBDIV as usize)
            .enumerate()
        {
            let x = RING_POSITIONS[ring_id % 4];
            let z = AXLE_POSITIONS[ring_id / 4];

            for (v, p) in chunk.iter().zip(wheel.iter()) {
                assert_eq!(*v, Vec3::new(x, WHEEL_HEIGHT + p.x, z + p.y));
            }
        }

        let first = bus.vertices()[NUM_BASE_VERTICES];
        assert!((first - Vec3::new(0.3, -0.15, -0.7)).length() < 1.0e-6);
    }

    #[test]
    fn only_outer_rings_have_rungs() {
        let bus = assemble_bus();
        let nsubdiv = WHEEL_NSUBDIV;
        let rungs: Vec<Edge> = bus.edges()[NUM_BASE_EDGES..]
            .iter()
            .copied()
            .filter(|&[a, b]| b == a + nsubdiv)
            .collect();

        assert_eq!(rungs.len(), NUM_RINGS / 2 * nsubdiv as usize);

        for [a, _] in rungs {
            let ring_id = (a - NUM_BASE_VERTICES as u32) / nsubdiv;
            assert_eq!(ring_id % 2, 0, "ring {} should not have rungs", ring_id);
        }
    }

    #[test]
    fn assembly_is_deterministic() {
        let (a, b) = (assemble_bus(), assemble_bus());

        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.vertices().len(), b.vertices().len());
        for (a, b) in a.vertices().iter().zip(b.vertices()) {
            assert_eq!(a.to_array().map(f32::to_bits), b.to_array().map(f32::to_bits));
        }
    }
}
