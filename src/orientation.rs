//! Offset <-> cube coordinate conversion.
//!
//! An offset grid is the rectangular `(x, y)` array a hex map is stored or
//! displayed in. Every other row (pointy-top) or column (flat-top) is shifted by
//! half a hex; `even` selects whether the even or the odd lines are shifted.

use bevy::prelude::*;

use crate::tuple::Tuple;

/// Which way the hexes point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum Orientation {
    /// A vertex points up; rows are straight, columns zig-zag.
    #[default]
    PointyTop,
    /// An edge faces up; columns are straight, rows zig-zag.
    FlatTop,
}

/// Halves toward negative infinity so the cube sum stays zero for negative
/// offsets as well.
fn half(v: i32) -> i32 {
    v.div_euclid(2)
}

impl Orientation {
    /// Converts an offset coordinate into a cube coordinate.
    ///
    /// `even` is a parity flag; only its lowest bit is used.
    ///
    /// ```
    /// # use hex_index::{Orientation, Tuple};
    /// let cube = Orientation::PointyTop.base_to_cube(1, 2, 3);
    /// assert_eq!(cube, Tuple::cube(4, -1, -3));
    /// ```
    pub fn base_to_cube(self, even: i32, x: i32, y: i32) -> Tuple {
        let e = even & 1;
        match self {
            Orientation::FlatTop => Tuple::cube(y + half(x + e), -y + half(x + (e ^ 1)), -x),
            Orientation::PointyTop => Tuple::cube(x + half(y + e), -x + half(y + (e ^ 1)), -y),
        }
    }

    /// Inverse of [`Self::base_to_cube`]: cube coordinate back to `(x, y)`.
    pub fn cube_to_base(self, even: i32, cube: &Tuple) -> Tuple {
        let e = even & 1;
        let [hx, _, hz] = cube.cube_entries();
        match self {
            Orientation::FlatTop => Tuple::offset(-hz, hx - half(e - hz)),
            Orientation::PointyTop => Tuple::offset(hx - half(e - hz), -hz),
        }
    }

    /// The matching `hexx` orientation, for world-space layout.
    pub fn to_hexx(self) -> hexx::HexOrientation {
        match self {
            Orientation::PointyTop => hexx::HexOrientation::Pointy,
            Orientation::FlatTop => hexx::HexOrientation::Flat,
        }
    }
}

/// An orientation paired with its grid parity: everything needed to move
/// between the offset grid and the cube grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub struct OffsetLayout {
    /// Hex orientation.
    pub orientation: Orientation,
    /// Grid parity, 0 or 1.
    pub even: i32,
}

impl OffsetLayout {
    /// Pairs `orientation` with the lowest bit of `even`.
    pub fn new(orientation: Orientation, even: i32) -> Self {
        Self {
            orientation,
            even: even & 1,
        }
    }

    /// Offset `(x, y)` to cube.
    pub fn cube_at(&self, x: i32, y: i32) -> Tuple {
        self.orientation.base_to_cube(self.even, x, y)
    }

    /// Cube to offset `(x, y)`.
    pub fn offset_of(&self, cube: &Tuple) -> Tuple {
        self.orientation.cube_to_base(self.even, cube)
    }
}
