#![warn(missing_docs)]
//! Cube-coordinate indexing of a hexagonal grid.
//!
//! Hex centers, hex corners and hex edges each get an integer cube tuple:
//! hexes sum to 0, corners to ±1, and edges live in a doubled space where the
//! edge between two hexes is their sum. Every element can list its adjacent
//! hexes, corners and edges with plain integer arithmetic.
//!
//! [`HexArray`] stores payloads per hex; [`HexCornerArray`] and
//! [`HexEdgeArray`] are derived from it. [`HexIndexPlugin`] wires a lattice
//! into a Bevy app for hover lookups.

pub mod adjacency;
mod cell;
pub mod directions;
mod error;
mod generators;
mod hex_array;
mod layout;
mod lookup;
pub mod math;
mod orientation;
mod sub_lattice;
mod tuple;

pub use cell::{
    Adjacency, CornerData, Corners, EdgeData, Edges, HexData, Hexes, Lattice, LatticeData,
    LatticeKind,
};
pub use error::HexError;
pub use generators::{
    DataGenerator, Hexagon, NoiseHeight, NoiseSettings, OffsetRectangle, TupleGenerator,
};
pub use hex_array::HexArray;
pub use layout::ScreenLayout;
pub use lookup::{
    GridShape, HexIndexConfig, HexIndexPlugin, HexLattice, Hovered, Selection, SelectionInfo,
};
pub use orientation::{OffsetLayout, Orientation};
pub use sub_lattice::{HexCornerArray, HexEdgeArray, SubLattice};
pub use tuple::Tuple;
