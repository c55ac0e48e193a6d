//! Lookup resources: the built lattice, hover input and the described selection.

use bevy::prelude::*;

use super::{GridShape, HexIndexConfig};
use crate::cell::{Adjacency, Lattice, LatticeKind};
use crate::generators::{Hexagon, NoiseHeight, OffsetRectangle};
use crate::hex_array::HexArray;
use crate::layout::ScreenLayout;
use crate::orientation::OffsetLayout;
use crate::sub_lattice::{HexCornerArray, HexEdgeArray, SubLattice};
use crate::tuple::Tuple;

/// Hex heights plus the corners and edges derived from them.
///
/// Corner and edge heights are the mean of the hexes they touch.
#[derive(Resource, Debug)]
pub struct HexLattice {
    /// Hex centers with noise heights.
    pub hexes: HexArray<f32>,
    /// Corners of every hex.
    pub corners: HexCornerArray<f32>,
    /// Edges of every hex.
    pub edges: HexEdgeArray<f32>,
    /// World placement of all three lattices.
    pub layout: ScreenLayout,
}

impl HexLattice {
    /// Populates hexes per `config`, then derives corners and edges.
    pub fn build(config: &HexIndexConfig) -> Self {
        let offsets = OffsetLayout::new(config.orientation, config.even);
        let layout = ScreenLayout::new(config.orientation, config.spacing);
        let heights = NoiseHeight::new(&config.noise, layout.clone());

        let hexes = match config.shape {
            GridShape::Rectangle { width, height } => HexArray::from_generators(
                offsets,
                OffsetRectangle {
                    layout: offsets,
                    width,
                    height,
                },
                heights,
            ),
            GridShape::Hexagon { radius } => HexArray::from_generators(
                offsets,
                Hexagon {
                    center: Tuple::cube(0, 0, 0),
                    radius,
                },
                heights,
            ),
        };

        let mut corners = HexCornerArray::from_hex_array(&hexes);
        let mut edges = HexEdgeArray::from_hex_array(&hexes);
        average_hex_heights(&hexes, &mut corners);
        average_hex_heights(&hexes, &mut edges);

        Self {
            hexes,
            corners,
            edges,
            layout,
        }
    }

    /// Payload stored at `index` in the lattice named by `kind`.
    pub fn data(&self, kind: LatticeKind, index: &Tuple) -> Option<f32> {
        let data = match kind {
            LatticeKind::Hex => self.hexes.data(index),
            LatticeKind::Corner => self.corners.data(index),
            LatticeKind::Edge => self.edges.data(index),
        };
        data.copied()
    }

    /// Data, position and neighbors of `index` read as a member of `kind`.
    pub fn describe(&self, kind: LatticeKind, index: &Tuple) -> SelectionInfo {
        SelectionInfo {
            kind,
            index: *index,
            data: self.data(kind, index),
            position: self.layout.position(kind, index),
            adjacency: kind.adjacency(index),
        }
    }
}

fn average_hex_heights<L: Lattice>(hexes: &HexArray<f32>, lattice: &mut SubLattice<L, f32>) {
    for cell in lattice.iter_mut() {
        let heights: Vec<f32> = cell
            .adjacent_hexes()
            .iter()
            .filter_map(|h| hexes.data(h).copied())
            .collect();
        if !heights.is_empty() {
            cell.set_data(heights.iter().sum::<f32>() / heights.len() as f32);
        }
    }
}

/// Element under the cursor, written by the GUI.
#[derive(Resource, Default, Debug)]
pub struct Hovered(pub Option<(LatticeKind, Tuple)>);

/// Everything known about one lattice element.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionInfo {
    /// Which lattice `index` belongs to.
    pub kind: LatticeKind,
    /// The element's tuple.
    pub index: Tuple,
    /// `None` when the element is outside the built lattice.
    pub data: Option<f32>,
    /// World-space position (hex center, corner or edge midpoint).
    pub position: Vec2,
    /// Neighbors in all three lattices.
    pub adjacency: Adjacency,
}

/// Description of the last hovered element.
#[derive(Resource, Default, Debug)]
pub struct Selection(pub Option<SelectionInfo>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency;

    #[test]
    fn corner_height_is_mean_of_its_hexes() {
        let lattice = HexLattice::build(&HexIndexConfig {
            shape: GridShape::Hexagon { radius: 2 },
            ..default()
        });
        let corner = Tuple::cube(0, 0, -1);
        let hex_mean = adjacency::corner_hexes(&corner)
            .iter()
            .filter_map(|h| lattice.hexes.data(h))
            .sum::<f32>()
            / 3.0;
        let got = lattice.data(LatticeKind::Corner, &corner).unwrap();
        assert!((got - hex_mean).abs() < 1e-5);
    }

    #[test]
    fn boundary_edge_uses_only_the_hex_inside() {
        let lattice = HexLattice::build(&HexIndexConfig {
            shape: GridShape::Hexagon { radius: 0 },
            ..default()
        });
        let origin = Tuple::cube(0, 0, 0);
        let h = lattice.data(LatticeKind::Hex, &origin).unwrap();
        for e in adjacency::hex_edges(&origin) {
            assert_eq!(lattice.data(LatticeKind::Edge, &e), Some(h));
        }
    }

    #[test]
    fn describe_places_hex_at_its_world_position() {
        let lattice = HexLattice::build(&HexIndexConfig::default());
        let t = Tuple::cube(2, -1, -1);
        let info = lattice.describe(LatticeKind::Hex, &t);
        assert_eq!(info.position, lattice.layout.hex_position(&t));
        assert_eq!(info.adjacency.corners.len(), 6);
    }
}
