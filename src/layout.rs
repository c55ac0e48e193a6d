//! World-space placement of lattice elements.
//!
//! Cube tuples are mapped onto `hexx` axial coordinates so that offset rows
//! (pointy-top) or columns (flat-top) line up with the world axes. Corner and
//! edge positions are centroids of the hexes they touch, which is exact
//! because the layout is affine.

use bevy::prelude::*;
use hexx::{Hex, HexLayout};

use crate::adjacency;
use crate::cell::LatticeKind;
use crate::math;
use crate::orientation::Orientation;
use crate::tuple::Tuple;

/// Screen-position mapping for one orientation and hex spacing.
#[derive(Clone, Debug)]
pub struct ScreenLayout {
    orientation: Orientation,
    layout: HexLayout,
}

impl ScreenLayout {
    /// `spacing` is the hex size in world units (center to vertex).
    pub fn new(orientation: Orientation, spacing: f32) -> Self {
        let layout = HexLayout {
            orientation: orientation.to_hexx(),
            scale: Vec2::splat(spacing),
            ..default()
        };
        Self {
            orientation,
            layout,
        }
    }

    /// Orientation the layout was built for.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Axial `hexx` coordinate of a hex-center tuple.
    pub fn axial(&self, t: &Tuple) -> Hex {
        let [x, y, z] = t.cube_entries();
        match self.orientation {
            // Offset rows keep z constant; hexx pointy rows keep axial y constant.
            Orientation::PointyTop => Hex::new(x, z),
            // Offset columns keep z constant; hexx flat columns keep axial x constant.
            Orientation::FlatTop => Hex::new(z, y),
        }
    }

    /// Inverse of [`Self::axial`].
    pub fn cube_of(&self, hex: Hex) -> Tuple {
        match self.orientation {
            Orientation::PointyTop => Tuple::cube(hex.x, hex.z(), hex.y),
            Orientation::FlatTop => Tuple::cube(hex.z(), hex.y, hex.x),
        }
    }

    /// World-space 2D position of a hex center.
    pub fn hex_position(&self, t: &Tuple) -> Vec2 {
        self.layout.hex_to_world_pos(self.axial(t))
    }

    /// World-space 2D position of a corner.
    pub fn corner_position(&self, t: &Tuple) -> Vec2 {
        let hexes = adjacency::corner_hexes(t).map(|h| self.hex_position(&h));
        math::centroid(&hexes)
    }

    /// World-space 2D position of an edge midpoint.
    pub fn edge_position(&self, t: &Tuple) -> Vec2 {
        let hexes = adjacency::edge_hexes(t).map(|h| self.hex_position(&h));
        math::centroid(&hexes)
    }

    /// World-space position of `t`, read as a member of `kind`.
    pub fn position(&self, kind: LatticeKind, t: &Tuple) -> Vec2 {
        match kind {
            LatticeKind::Hex => self.hex_position(t),
            LatticeKind::Corner => self.corner_position(t),
            LatticeKind::Edge => self.edge_position(t),
        }
    }

    /// Hex-center tuple containing a world-space position.
    pub fn world_pos_to_hex(&self, pos: Vec2) -> Tuple {
        self.cube_of(self.layout.world_pos_to_hex(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::OffsetLayout;

    const ORIENTATIONS: [Orientation; 2] = [Orientation::PointyTop, Orientation::FlatTop];

    #[test]
    fn hex_to_world_and_back_roundtrip() {
        for o in ORIENTATIONS {
            let layout = ScreenLayout::new(o, 4.0);
            for hex in hexx::shapes::hexagon(Hex::ZERO, 3) {
                let t = layout.cube_of(hex);
                assert_eq!(t.sum(), 0);
                assert_eq!(layout.axial(&t), hex);
                let back = layout.world_pos_to_hex(layout.hex_position(&t));
                assert_eq!(t, back, "roundtrip failed for {t}");
            }
        }
    }

    #[test]
    fn pointy_offset_rows_are_horizontal() {
        let layout = ScreenLayout::new(Orientation::PointyTop, 1.0);
        let offsets = OffsetLayout::new(Orientation::PointyTop, 0);
        for y in 0..4 {
            let row_y = layout.hex_position(&offsets.cube_at(0, y)).y;
            for x in 1..5 {
                let p = layout.hex_position(&offsets.cube_at(x, y));
                assert!((p.y - row_y).abs() < 1e-4, "row {y} not straight at x={x}");
            }
        }
    }

    #[test]
    fn flat_offset_columns_are_vertical() {
        let layout = ScreenLayout::new(Orientation::FlatTop, 1.0);
        let offsets = OffsetLayout::new(Orientation::FlatTop, 1);
        for x in 0..4 {
            let col_x = layout.hex_position(&offsets.cube_at(x, 0)).x;
            for y in 1..5 {
                let p = layout.hex_position(&offsets.cube_at(x, y));
                assert!((p.x - col_x).abs() < 1e-4, "column {x} not straight at y={y}");
            }
        }
    }

    #[test]
    fn neighbors_are_equidistant() {
        for o in ORIENTATIONS {
            let layout = ScreenLayout::new(o, 2.0);
            let center = Tuple::cube(1, -2, 1);
            let c = layout.hex_position(&center);
            let dists: Vec<f32> = adjacency::adjacent_hexes(&center)
                .iter()
                .map(|n| layout.hex_position(n).distance(c))
                .collect();
            for d in &dists {
                assert!((d - dists[0]).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn edge_midpoint_lies_between_its_corners() {
        let layout = ScreenLayout::new(Orientation::FlatTop, 3.0);
        let e = Tuple::cube(1, 0, -1);
        let [c0, c1] = adjacency::edge_corners(&e);
        let mid = (layout.corner_position(&c0) + layout.corner_position(&c1)) / 2.0;
        assert!((layout.edge_position(&e) - mid).length() < 1e-4);
    }

    #[test]
    fn corners_are_equidistant_from_center() {
        let layout = ScreenLayout::new(Orientation::PointyTop, 1.0);
        let h = Tuple::cube(0, 0, 0);
        let first = layout.corner_position(&adjacency::hex_corners(&h)[0]);
        for c in adjacency::hex_corners(&h) {
            let r = layout.corner_position(&c).length();
            assert!((r - first.length()).abs() < 1e-4);
        }
    }
}
