//! Fixed offset tables for the three lattices.
//!
//! Hex centers and corners share one integer space: centers sum to 0,
//! corners to ±1. Edges live in the doubled space (the sum of their two hexes),
//! so an edge sums to 0 and has exactly one even component.

use crate::tuple::Tuple;

/// Offsets from a hex center to its six neighbors, counter-clockwise.
pub const HEX_DIRECTIONS: [[i32; 3]; 6] = [
    [1, -1, 0],
    [1, 0, -1],
    [0, 1, -1],
    [-1, 1, 0],
    [-1, 0, 1],
    [0, -1, 1],
];

/// The two hex <-> corner offset sets, indexed by facet parity.
pub const CORNER_DIRECTIONS: [[[i32; 3]; 3]; 2] = [
    [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    [[0, 0, -1], [-1, 0, 0], [0, -1, 0]],
];

/// Edge -> edge offsets, indexed by alignment axis (x, y, z).
///
/// Entries 0 and 2 are opposite, as are 1 and 3; `v0 + v3` is the hex
/// direction across the edge.
pub const EDGE_DIRECTIONS: [[[i32; 3]; 4]; 3] = [
    [[1, 0, -1], [1, -1, 0], [-1, 0, 1], [-1, 1, 0]],
    [[0, 1, -1], [-1, 1, 0], [0, -1, 1], [1, -1, 0]],
    [[-1, 0, 1], [0, -1, 1], [1, 0, -1], [0, 1, -1]],
];

/// Facet parity of a corner: 0 when its components sum to +1, 1 for -1.
pub fn facet_parity(t: &Tuple) -> usize {
    (1i32.wrapping_sub(t.sum()) / 2) as usize & 1
}

/// The corner set used to step from `t` toward corners.
///
/// Applied to a corner this is the parity of its own facet.
pub fn valid_directions_to_corner(t: &Tuple) -> &'static [[i32; 3]; 3] {
    &CORNER_DIRECTIONS[facet_parity(t)]
}

/// The corner set that leads from a corner to the three hexes it touches.
pub fn valid_directions_to_hex(t: &Tuple) -> &'static [[i32; 3]; 3] {
    &CORNER_DIRECTIONS[(t.sum().wrapping_add(1) / 2) as usize & 1]
}

/// Alignment axis of an edge: the index of its single even component.
///
/// ```
/// # use hex_index::{Tuple, directions::edge_axis};
/// assert_eq!(edge_axis(&Tuple::cube(0, 1, -1)), 0);
/// assert_eq!(edge_axis(&Tuple::cube(1, 0, -1)), 1);
/// assert_eq!(edge_axis(&Tuple::cube(1, -1, 0)), 2);
/// ```
pub fn edge_axis(t: &Tuple) -> usize {
    let [b0, b1, b2] = t.cube_entries().map(|c| (c & 1 == 0) as i32);
    // Clamped for malformed tuples so lookups stay total.
    (b0 + 2 * b1 + 3 * b2 - 1).clamp(0, 2) as usize
}

/// The four edge -> edge offsets for `t`'s alignment axis.
pub fn valid_directions_to_edge(t: &Tuple) -> &'static [[i32; 3]; 4] {
    &EDGE_DIRECTIONS[edge_axis(t)]
}
