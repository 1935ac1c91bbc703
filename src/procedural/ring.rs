//! Discretized circles and the line indices stitching them together.

use glamx::Vec2;

/// Samples a discretized counterclockwise circle centered at the origin.
///
/// The first point lies at angle 0 and consecutive points are `2π / nsubdiv`
/// radians apart. No validation is performed: `nsubdiv == 1` yields the single
/// point `(radius, 0)` and `nsubdiv == 0` yields nothing.
///
/// # Example
/// ```
/// # use transmilenio::procedural::ring;
/// let points = ring(0.1, 20);
/// assert_eq!(points.len(), 20);
/// assert!((points[0].x - 0.1).abs() < 1.0e-6);
/// ```
pub fn ring(radius: f32, nsubdiv: u32) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(nsubdiv as usize);

    if nsubdiv == 0 {
        return out;
    }

    let dtheta = std::f32::consts::TAU / nsubdiv as f32;

    for i in 0..nsubdiv {
        // Computed from the index rather than accumulated to keep the last sample exact.
        let theta = dtheta * i as f32;
        out.push(Vec2::new(theta.cos() * radius, theta.sin() * radius));
    }

    out
}

/// Pushes the loop of a ring and, if `with_rungs` is set, the rungs linking it to the
/// ring stored right after it.
///
/// The ring occupies the indices `start..start + nsubdiv`. Consecutive points are
/// linked in order, each followed by its rung, then the wrap-around line
/// `(start, start + nsubdiv - 1)` is followed by the last rung. Exactly `nsubdiv` loop
/// lines are pushed, plus `nsubdiv` rungs when requested.
#[inline]
pub fn push_ring_edges(start: u32, nsubdiv: u32, with_rungs: bool, out: &mut Vec<[u32; 2]>) {
    assert!(nsubdiv > 0);

    let last = start + nsubdiv - 1;

    for i in start..last {
        out.push([i, i + 1]);

        if with_rungs {
            out.push([i, i + nsubdiv]);
        }
    }

    out.push([start, last]);

    if with_rungs {
        out.push([last, last + nsubdiv]);
    }
}
