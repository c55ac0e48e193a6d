//! Neighbor relations between hexes, corners and edges.
//!
//! Every function here is pure and total: it takes a tuple of the named lattice
//! and returns the tuples it touches in the target lattice. Feeding a tuple of
//! the wrong lattice yields meaningless but well-defined output.
//!
//! The relations are mutually consistent: an edge is the sum of its two hexes
//! and of its two corners, and `a` is adjacent to `b` exactly when `b` is
//! adjacent to `a`.
//!
//! Arithmetic wraps on overflow, so no input panics. Results are exact for
//! components of magnitude up to 2^29, where doubled tuples still fit in `i32`.

use crate::directions::{
    CORNER_DIRECTIONS, HEX_DIRECTIONS, valid_directions_to_corner, valid_directions_to_edge,
    valid_directions_to_hex,
};
use crate::tuple::Tuple;

fn plus(a: [i32; 3], b: [i32; 3]) -> [i32; 3] {
    std::array::from_fn(|i| a[i].wrapping_add(b[i]))
}

fn shifted(base: [i32; 3], d: [i32; 3]) -> Tuple {
    Tuple::from(plus(base, d))
}

fn doubled(t: &Tuple) -> [i32; 3] {
    t.cube_entries().map(|c| c.wrapping_mul(2))
}

/// Exact half of an even-component vector.
fn halved(v: [i32; 3]) -> Tuple {
    Tuple::cube(v[0] / 2, v[1] / 2, v[2] / 2)
}

// ── From a hex ─────────────────────────────────────────────────────

/// The six hexes sharing an edge with `hex`.
///
/// ```
/// # use hex_index::{Tuple, adjacency::adjacent_hexes};
/// let n = adjacent_hexes(&Tuple::cube(0, 0, 0));
/// assert!(n.contains(&Tuple::cube(1, -1, 0)));
/// ```
pub fn adjacent_hexes(hex: &Tuple) -> [Tuple; 6] {
    let base = hex.cube_entries();
    HEX_DIRECTIONS.map(|d| shifted(base, d))
}

/// The six corners of `hex`, counter-clockwise.
///
/// Corner `i` lies between the neighbors in hex directions `i` and `i + 1`.
pub fn hex_corners(hex: &Tuple) -> [Tuple; 6] {
    let base = hex.cube_entries();
    let [up, down] = CORNER_DIRECTIONS;
    std::array::from_fn(|i| {
        let set = if i % 2 == 0 { up } else { down };
        shifted(base, set[i / 2])
    })
}

/// The six edges of `hex`; edge `i` faces hex direction `i`.
pub fn hex_edges(hex: &Tuple) -> [Tuple; 6] {
    let base = doubled(hex);
    HEX_DIRECTIONS.map(|d| shifted(base, d))
}

// ── From a corner ──────────────────────────────────────────────────

/// Offsets along the three edges leaving `corner`.
fn corner_steps(corner: &Tuple) -> [[i32; 3]; 3] {
    let s = corner.sum();
    valid_directions_to_corner(corner).map(|d| d.map(|c| c.wrapping_sub(s)))
}

/// The three hexes meeting at `corner`.
pub fn corner_hexes(corner: &Tuple) -> [Tuple; 3] {
    let base = corner.cube_entries();
    valid_directions_to_hex(corner).map(|d| shifted(base, d))
}

/// The three corners joined to `corner` by an edge.
///
/// ```
/// # use hex_index::{Tuple, adjacency::adjacent_corners};
/// let n = adjacent_corners(&Tuple::cube(1, 0, 0));
/// assert!(n.iter().all(|c| c.sum() == -1));
/// ```
pub fn adjacent_corners(corner: &Tuple) -> [Tuple; 3] {
    let base = corner.cube_entries();
    corner_steps(corner).map(|d| shifted(base, d))
}

/// The three edges leaving `corner`.
pub fn corner_edges(corner: &Tuple) -> [Tuple; 3] {
    let base = doubled(corner);
    corner_steps(corner).map(|d| shifted(base, d))
}

// ── From an edge ───────────────────────────────────────────────────

/// The four edges sharing a corner with `edge`.
pub fn adjacent_edges(edge: &Tuple) -> [Tuple; 4] {
    let base = edge.cube_entries();
    valid_directions_to_edge(edge).map(|d| shifted(base, d))
}

/// The two hexes separated by `edge`.
pub fn edge_hexes(edge: &Tuple) -> [Tuple; 2] {
    let e = edge.cube_entries();
    let [v0, v1, v2, v3] = *valid_directions_to_edge(edge);
    [
        halved(plus(e, plus(v0, v3))),
        halved(plus(e, plus(v1, v2))),
    ]
}

/// The two corners at the ends of `edge`.
pub fn edge_corners(edge: &Tuple) -> [Tuple; 2] {
    let e = edge.cube_entries();
    let odd = e.map(|c| c & 1);
    [
        halved(plus(e, odd)),
        halved(plus(e, odd.map(|c| -c))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::platform::collections::HashSet;

    fn hexagon(radius: i32) -> Vec<Tuple> {
        let mut out = Vec::new();
        for x in -radius..=radius {
            for y in (-radius).max(-x - radius)..=radius.min(-x + radius) {
                out.push(Tuple::cube(x, y, -x - y));
            }
        }
        out
    }

    fn all_corners(radius: i32) -> HashSet<Tuple> {
        hexagon(radius).iter().flat_map(hex_corners).collect()
    }

    fn all_edges(radius: i32) -> HashSet<Tuple> {
        hexagon(radius).iter().flat_map(hex_edges).collect()
    }

    fn distinct<const N: usize>(ts: [Tuple; N]) -> bool {
        ts.iter().collect::<HashSet<_>>().len() == N
    }

    // ── hexes ───────────────────────────────────────────────────────

    #[test]
    fn origin_neighbors_are_the_direction_table() {
        let got: HashSet<Tuple> = adjacent_hexes(&Tuple::cube(0, 0, 0)).into_iter().collect();
        let want: HashSet<Tuple> = HEX_DIRECTIONS.into_iter().map(Tuple::from).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn hex_adjacency_is_symmetric() {
        for h in hexagon(3) {
            for n in adjacent_hexes(&h) {
                assert_eq!(n.sum(), 0);
                assert!(adjacent_hexes(&n).contains(&h), "{n} does not see {h}");
            }
        }
    }

    #[test]
    fn hex_adjacency_matches_hexx() {
        let h = hexx::Hex::new(2, -5);
        let ours: HashSet<Tuple> = adjacent_hexes(&Tuple::cube(h.x, h.y, h.z()))
            .into_iter()
            .collect();
        let theirs: HashSet<Tuple> = h
            .all_neighbors()
            .into_iter()
            .map(|n| Tuple::cube(n.x, n.y, n.z()))
            .collect();
        assert_eq!(ours, theirs);
    }

    #[test]
    fn hex_has_six_distinct_corners_on_both_facets() {
        let corners = hex_corners(&Tuple::cube(2, -1, -1));
        assert!(distinct(corners));
        assert_eq!(corners.iter().filter(|c| c.sum() == 1).count(), 3);
        assert_eq!(corners.iter().filter(|c| c.sum() == -1).count(), 3);
    }

    #[test]
    fn consecutive_hex_corners_are_joined_by_the_hex_edges() {
        let h = Tuple::cube(-1, 3, -2);
        let corners = hex_corners(&h);
        let edges = hex_edges(&h);
        for i in 0..6 {
            let next = corners[(i + 1) % 6];
            assert!(adjacent_corners(&corners[i]).contains(&next));
            // Edge between corner i-1 and corner i faces direction i.
            let prev = corners[(i + 5) % 6];
            let sum = corners[i].add(&prev).unwrap();
            assert_eq!(sum, edges[i]);
        }
    }

    #[test]
    fn hex_edges_are_sums_of_neighbor_pairs() {
        let h = Tuple::cube(3, -2, -1);
        for (e, n) in hex_edges(&h).into_iter().zip(adjacent_hexes(&h)) {
            assert_eq!(e, h.add(&n).unwrap());
        }
    }

    // ── corners ─────────────────────────────────────────────────────

    #[test]
    fn corner_neighbors_are_distinct_for_both_parities() {
        for c in all_corners(2) {
            assert!(distinct(adjacent_corners(&c)), "{c}");
            assert!(distinct(corner_hexes(&c)), "{c}");
            assert!(distinct(corner_edges(&c)), "{c}");
        }
    }

    #[test]
    fn corner_hexes_and_hex_corners_agree() {
        for c in all_corners(2) {
            for h in corner_hexes(&c) {
                assert_eq!(h.sum(), 0);
                assert!(hex_corners(&h).contains(&c), "{h} lacks corner {c}");
            }
        }
    }

    #[test]
    fn corner_adjacency_flips_facet_and_is_symmetric() {
        for c in all_corners(2) {
            for n in adjacent_corners(&c) {
                assert_eq!(n.sum(), -c.sum());
                assert!(adjacent_corners(&n).contains(&c));
            }
        }
    }

    #[test]
    fn corner_edges_and_edge_corners_agree() {
        for c in all_corners(2) {
            for e in corner_edges(&c) {
                assert!(edge_corners(&e).contains(&c), "{e} lacks corner {c}");
            }
        }
    }

    #[test]
    fn corner_at_unit_x_worked_example() {
        let c = Tuple::cube(1, 0, 0);
        let hexes: HashSet<Tuple> = corner_hexes(&c).into_iter().collect();
        let want: HashSet<Tuple> = [[0, 0, 0], [1, -1, 0], [1, 0, -1]]
            .into_iter()
            .map(Tuple::from)
            .collect();
        assert_eq!(hexes, want);
        assert!(adjacent_corners(&c).contains(&Tuple::cube(0, -1, 0)));
        assert!(corner_edges(&c).contains(&Tuple::cube(1, -1, 0)));
    }

    // ── edges ───────────────────────────────────────────────────────

    #[test]
    fn edges_are_well_formed() {
        for e in all_edges(2) {
            assert_eq!(e.sum(), 0);
            let evens = e.entries().iter().filter(|c| *c & 1 == 0).count();
            assert_eq!(evens, 1, "{e}");
        }
    }

    #[test]
    fn edge_adjacency_is_symmetric_and_shares_a_corner() {
        for e in all_edges(2) {
            let ends: HashSet<Tuple> = edge_corners(&e).into_iter().collect();
            for n in adjacent_edges(&e) {
                assert!(adjacent_edges(&n).contains(&e), "{n} does not see {e}");
                assert!(edge_corners(&n).iter().any(|c| ends.contains(c)));
            }
        }
    }

    #[test]
    fn edge_is_the_sum_of_its_hexes_and_of_its_corners() {
        for e in all_edges(2) {
            let [h0, h1] = edge_hexes(&e);
            let [c0, c1] = edge_corners(&e);
            assert_eq!(h0.add(&h1).unwrap(), e);
            assert_eq!(c0.add(&c1).unwrap(), e);
            assert!(adjacent_hexes(&h0).contains(&h1));
            assert!(adjacent_corners(&c0).contains(&c1));
            assert!(hex_edges(&h0).contains(&e));
        }
    }

    // ── large coordinates ───────────────────────────────────────────

    #[test]
    fn relations_stay_exact_for_large_coordinates() {
        let big = 1 << 29;
        let h = Tuple::cube(big, -big, 0);
        for e in hex_edges(&h) {
            assert!(edge_hexes(&e).contains(&h), "{e} lost {h}");
        }
        for c in hex_corners(&h) {
            assert!(corner_hexes(&c).contains(&h), "{c} lost {h}");
            for e in corner_edges(&c) {
                assert!(edge_corners(&e).contains(&c), "{e} lost {c}");
            }
        }
    }

    #[test]
    fn extreme_coordinates_wrap_instead_of_panicking() {
        let extremes = [
            Tuple::cube(1 << 30, -(1 << 30), 0),
            Tuple::cube(i32::MAX, i32::MIN, 1),
            Tuple::cube(i32::MIN, 0, i32::MIN),
        ];
        for t in extremes {
            hex_corners(&t);
            hex_edges(&t);
            corner_hexes(&t);
            adjacent_corners(&t);
            corner_edges(&t);
            adjacent_edges(&t);
            edge_hexes(&t);
            edge_corners(&t);
            for n in adjacent_hexes(&t) {
                assert!(adjacent_hexes(&n).contains(&t));
            }
        }
    }

    #[test]
    fn edge_worked_example() {
        let e = Tuple::cube(0, 1, -1);
        let hexes: HashSet<Tuple> = edge_hexes(&e).into_iter().collect();
        assert!(hexes.contains(&Tuple::cube(0, 0, 0)));
        assert!(hexes.contains(&Tuple::cube(0, 1, -1)));
        let corners: HashSet<Tuple> = edge_corners(&e).into_iter().collect();
        assert!(corners.contains(&Tuple::cube(0, 1, 0)));
        assert!(corners.contains(&Tuple::cube(0, 0, -1)));
        let neighbors: HashSet<Tuple> = adjacent_edges(&e).into_iter().collect();
        let want: HashSet<Tuple> = [[1, 1, -2], [1, 0, -1], [-1, 1, 0], [-1, 2, -1]]
            .into_iter()
            .map(Tuple::from)
            .collect();
        assert_eq!(neighbors, want);
    }
}
