use std::collections::HashSet;

use transmilenio::procedural::push_ring_edges;
use transmilenio::scene::bus::{
    AXLE_POSITIONS, NUM_BASE_EDGES, NUM_BASE_VERTICES, RING_POSITIONS, WHEEL_HEIGHT,
    WHEEL_NSUBDIV, WHEEL_RADIUS,
};
use transmilenio::scene::{assemble_bus, Wireframe};

#[test]
fn bus_tables_have_the_expected_size() {
    let bus = assemble_bus();
    assert_eq!(bus.vertices().len(), 26 + 12 * 20);
    assert_eq!(bus.edges().len(), 30 + 12 * 20 + 6 * 20);
    assert!(bus.edges().iter().flatten().all(|&i| (i as usize) < bus.vertices().len()));
}

#[test]
fn building_twice_gives_identical_tables() {
    let a: Wireframe = assemble_bus();
    let b: Wireframe = assemble_bus();
    assert_eq!(a, b);

    let bits = |w: &Wireframe| -> Vec<[u32; 3]> {
        w.vertices()
            .iter()
            .map(|v| [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()])
            .collect()
    };
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn every_wheel_ring_is_a_closed_loop() {
    let bus = assemble_bus();
    let edges: HashSet<[u32; 2]> = bus.edges().iter().copied().collect();

    for ring_id in 0..12u32 {
        let start = NUM_BASE_VERTICES as u32 + ring_id * WHEEL_NSUBDIV;
        let last = start + WHEEL_NSUBDIV - 1;

        for i in start..last {
            assert!(edges.contains(&[i, i + 1]));
        }
        assert!(edges.contains(&[start, last]));
    }
}

#[test]
fn ring_edges_match_the_builder_output() {
    let bus = assemble_bus();
    let mut expected = Vec::new();

    for ring_id in 0..12u32 {
        let start = NUM_BASE_VERTICES as u32 + ring_id * WHEEL_NSUBDIV;
        push_ring_edges(start, WHEEL_NSUBDIV, ring_id % 2 == 0, &mut expected);
    }

    assert_eq!(&bus.edges()[NUM_BASE_EDGES..], &expected[..]);
}

#[test]
fn wheel_points_are_at_the_wheel_radius() {
    let bus = assemble_bus();

    for (ring_id, chunk) in bus.vertices()[NUM_BASE_VERTICES..]
        .chunks(WHEEL_NSUBDIV as usize)
        .enumerate()
    {
        let axle_z = AXLE_POSITIONS[ring_id / RING_POSITIONS.len()];
        let ring_x = RING_POSITIONS[ring_id % RING_POSITIONS.len()];

        for v in chunk {
            assert_eq!(v.x, ring_x, "ring {}", ring_id);

            let dy = v.y - WHEEL_HEIGHT;
            let dz = v.z - axle_z;
            let radius = (dy * dy + dz * dz).sqrt();
            assert!((radius - WHEEL_RADIUS).abs() < 1.0e-5, "ring {}", ring_id);
        }
    }
}
