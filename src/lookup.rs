//! Lattice lookup for a GUI front end.
//!
//! Builds a [`HexLattice`] at startup and, whenever [`Hovered`] changes,
//! describes the hovered element into [`Selection`]: its payload, world
//! position and neighbors in all three lattices.

mod entities;
mod systems;

pub use entities::{HexLattice, Hovered, Selection, SelectionInfo};

use bevy::prelude::*;

use crate::generators::NoiseSettings;
use crate::orientation::Orientation;

/// Which hexes the lattice is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum GridShape {
    /// Offset rectangle, `width` columns by `height` rows.
    Rectangle {
        /// Columns.
        width: i32,
        /// Rows.
        height: i32,
    },
    /// Every hex within `radius` steps of the origin.
    Hexagon {
        /// Largest distance from the origin.
        radius: u32,
    },
}

impl Default for GridShape {
    fn default() -> Self {
        GridShape::Hexagon { radius: 8 }
    }
}

/// Per-plugin configuration for the lattice lookup.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct HexIndexConfig {
    /// Pointy-top or flat-top hexes.
    pub orientation: Orientation,
    /// Which offset rows/columns are shoved (0 or 1).
    pub even: i32,
    /// Which hexes to build.
    pub shape: GridShape,
    /// Hex size in world units (center to vertex).
    pub spacing: f32,
    /// Height field stored on each hex.
    pub noise: NoiseSettings,
}

impl Default for HexIndexConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::PointyTop,
            even: 0,
            shape: GridShape::default(),
            spacing: 4.0,
            noise: NoiseSettings::default(),
        }
    }
}

/// Builds the hex/corner/edge lattice and answers hover queries against it.
pub struct HexIndexPlugin(pub HexIndexConfig);

impl Plugin for HexIndexPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<HexIndexConfig>()
            .insert_resource(self.0.clone())
            .init_resource::<Hovered>()
            .init_resource::<Selection>()
            .add_systems(Startup, systems::build_lattice)
            .add_systems(Update, systems::describe_hovered);
    }
}
