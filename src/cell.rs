//! Lattice cells: a tuple key plus optional payload.

use std::fmt;
use std::marker::PhantomData;

use bevy::prelude::*;

use crate::adjacency;
use crate::generators::DataGenerator;
use crate::tuple::Tuple;

/// Which of the three lattices a tuple belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum LatticeKind {
    /// Hex centers, components sum to 0.
    #[default]
    Hex,
    /// Hex corners, components sum to ±1.
    Corner,
    /// Hex edges in the doubled space.
    Edge,
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LatticeKind::Hex => "hex",
            LatticeKind::Corner => "corner",
            LatticeKind::Edge => "edge",
        })
    }
}

impl LatticeKind {
    /// Neighbors of `t` in all three lattices, treating `t` as a member of `self`.
    pub fn adjacency(self, t: &Tuple) -> Adjacency {
        match self {
            LatticeKind::Hex => Hexes::adjacency(t),
            LatticeKind::Corner => Corners::adjacency(t),
            LatticeKind::Edge => Edges::adjacency(t),
        }
    }

    /// Position of `t` in continuous cube space (hex centers at integers).
    pub fn visual_index(self, t: &Tuple) -> Vec3 {
        match self {
            LatticeKind::Hex => Hexes::visual_index(t),
            LatticeKind::Corner => Corners::visual_index(t),
            LatticeKind::Edge => Edges::visual_index(t),
        }
    }
}

/// Everything a tuple touches, in each lattice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
    /// Adjacent hex centers.
    pub hexes: Vec<Tuple>,
    /// Adjacent corners.
    pub corners: Vec<Tuple>,
    /// Adjacent edges, doubled.
    pub edges: Vec<Tuple>,
}

/// Static description of one lattice: membership, visual mapping and its
/// neighbor relations.
pub trait Lattice: Copy + fmt::Debug + Eq + Send + Sync + 'static {
    /// Which lattice this is.
    const KIND: LatticeKind;

    /// Whether `t` is a well-formed member of this lattice.
    fn contains(t: &Tuple) -> bool;

    /// Position of `t` in continuous cube space.
    fn visual_index(t: &Tuple) -> Vec3;

    /// Members of this lattice touching the hex `hex`.
    fn of_hex(hex: &Tuple) -> Vec<Tuple>;

    /// Hexes touching `t`.
    fn adjacent_hexes(t: &Tuple) -> Vec<Tuple>;
    /// Corners touching `t`.
    fn adjacent_corners(t: &Tuple) -> Vec<Tuple>;
    /// Edges touching `t`.
    fn adjacent_edges(t: &Tuple) -> Vec<Tuple>;

    /// All three neighbor lists at once.
    fn adjacency(t: &Tuple) -> Adjacency {
        Adjacency {
            hexes: Self::adjacent_hexes(t),
            corners: Self::adjacent_corners(t),
            edges: Self::adjacent_edges(t),
        }
    }
}

fn as_vec3(t: &Tuple) -> Vec3 {
    let [x, y, z] = t.cube_entries();
    Vec3::new(x as f32, y as f32, z as f32)
}

/// Marker for the hex-center lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hexes {}

/// Marker for the hex-corner lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corners {}

/// Marker for the hex-edge lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edges {}

impl Lattice for Hexes {
    const KIND: LatticeKind = LatticeKind::Hex;

    fn contains(t: &Tuple) -> bool {
        t.len() == 3 && t.sum() == 0
    }

    fn visual_index(t: &Tuple) -> Vec3 {
        as_vec3(t)
    }

    fn of_hex(hex: &Tuple) -> Vec<Tuple> {
        vec![*hex]
    }

    fn adjacent_hexes(t: &Tuple) -> Vec<Tuple> {
        adjacency::adjacent_hexes(t).to_vec()
    }

    fn adjacent_corners(t: &Tuple) -> Vec<Tuple> {
        adjacency::hex_corners(t).to_vec()
    }

    fn adjacent_edges(t: &Tuple) -> Vec<Tuple> {
        adjacency::hex_edges(t).to_vec()
    }
}

impl Lattice for Corners {
    const KIND: LatticeKind = LatticeKind::Corner;

    fn contains(t: &Tuple) -> bool {
        t.len() == 3 && matches!(t.sum(), 1 | -1)
    }

    /// Centroid of the three hexes meeting at the corner.
    fn visual_index(t: &Tuple) -> Vec3 {
        as_vec3(t) - Vec3::splat(t.sum() as f32 / 3.0)
    }

    fn of_hex(hex: &Tuple) -> Vec<Tuple> {
        adjacency::hex_corners(hex).to_vec()
    }

    fn adjacent_hexes(t: &Tuple) -> Vec<Tuple> {
        adjacency::corner_hexes(t).to_vec()
    }

    fn adjacent_corners(t: &Tuple) -> Vec<Tuple> {
        adjacency::adjacent_corners(t).to_vec()
    }

    fn adjacent_edges(t: &Tuple) -> Vec<Tuple> {
        adjacency::corner_edges(t).to_vec()
    }
}

impl Lattice for Edges {
    const KIND: LatticeKind = LatticeKind::Edge;

    fn contains(t: &Tuple) -> bool {
        t.len() == 3 && t.sum() == 0 && t.entries().iter().filter(|c| *c & 1 == 0).count() == 1
    }

    /// Edge tuples are stored doubled; halving gives the edge midpoint.
    fn visual_index(t: &Tuple) -> Vec3 {
        as_vec3(t) / 2.0
    }

    fn of_hex(hex: &Tuple) -> Vec<Tuple> {
        adjacency::hex_edges(hex).to_vec()
    }

    fn adjacent_hexes(t: &Tuple) -> Vec<Tuple> {
        adjacency::edge_hexes(t).to_vec()
    }

    fn adjacent_corners(t: &Tuple) -> Vec<Tuple> {
        adjacency::edge_corners(t).to_vec()
    }

    fn adjacent_edges(t: &Tuple) -> Vec<Tuple> {
        adjacency::adjacent_edges(t).to_vec()
    }
}

/// A cell of lattice `L`: its tuple and an optional payload.
///
/// The payload is optional so that cells can exist before data is assigned,
/// e.g. the corners and edges derived from a populated [`HexArray`](crate::HexArray).
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeData<L: Lattice, T> {
    data: Option<T>,
    index: Tuple,
    lattice: PhantomData<fn() -> L>,
}

/// A hex-center cell.
pub type HexData<T> = LatticeData<Hexes, T>;
/// A hex-corner cell.
pub type CornerData<T> = LatticeData<Corners, T>;
/// A hex-edge cell; its tuple is stored doubled.
pub type EdgeData<T> = LatticeData<Edges, T>;

impl<L: Lattice, T> LatticeData<L, T> {
    /// A cell holding `data`.
    pub fn new(index: Tuple, data: T) -> Self {
        Self {
            data: Some(data),
            index,
            lattice: PhantomData,
        }
    }

    /// A cell with no payload yet.
    pub fn empty(index: Tuple) -> Self {
        Self {
            data: None,
            index,
            lattice: PhantomData,
        }
    }

    /// A cell whose payload is produced once by `generator`.
    pub fn generated(index: Tuple, generator: &dyn DataGenerator<T>) -> Self {
        let data = generator.generate(&index);
        Self::new(index, data)
    }

    /// The cell's tuple.
    pub fn index(&self) -> &Tuple {
        &self.index
    }

    /// The payload, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Mutable payload, if any.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    /// Replaces the payload, returning the previous one.
    pub fn set_data(&mut self, data: T) -> Option<T> {
        self.data.replace(data)
    }

    /// Removes and returns the payload.
    pub fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }

    /// Position in continuous cube space.
    pub fn visual_index(&self) -> Vec3 {
        L::visual_index(&self.index)
    }

    /// Hexes touching this cell.
    pub fn adjacent_hexes(&self) -> Vec<Tuple> {
        L::adjacent_hexes(&self.index)
    }

    /// Corners touching this cell.
    pub fn adjacent_corners(&self) -> Vec<Tuple> {
        L::adjacent_corners(&self.index)
    }

    /// Edges touching this cell.
    pub fn adjacent_edges(&self) -> Vec<Tuple> {
        L::adjacent_edges(&self.index)
    }
}
