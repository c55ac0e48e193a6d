//! Corner and edge containers derived from a populated hex array.

use std::fmt;

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::cell::{Corners, Edges, Lattice, LatticeData};
use crate::hex_array::HexArray;
use crate::tuple::Tuple;

/// Storage for one derived lattice, keyed by that lattice's tuples.
///
/// Built by value from a [`HexArray`]: the tuples are copied, and the two
/// containers evolve independently afterwards.
#[derive(Clone)]
pub struct SubLattice<L: Lattice, T> {
    cells: HashMap<Tuple, LatticeData<L, T>>,
}

/// The corners of every hex in a [`HexArray`].
pub type HexCornerArray<T> = SubLattice<Corners, T>;
/// The edges of every hex in a [`HexArray`].
pub type HexEdgeArray<T> = SubLattice<Edges, T>;

impl<L: Lattice, T> Default for SubLattice<L, T> {
    fn default() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }
}

impl<L: Lattice, T> SubLattice<L, T> {
    /// An empty lattice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty cell for every `L` member touching a hex of `base`.
    ///
    /// ```
    /// # use hex_index::{HexArray, HexCornerArray, OffsetLayout, Tuple};
    /// let mut hexes = HexArray::new(OffsetLayout::default());
    /// hexes.put(Tuple::cube(0, 0, 0), "origin");
    /// let corners: HexCornerArray<u8> = HexCornerArray::from_hex_array(&hexes);
    /// assert_eq!(corners.len(), 6);
    /// ```
    pub fn from_hex_array<E>(base: &HexArray<E>) -> Self {
        let mut lattice = Self::new();
        lattice.derive_from(base, L::of_hex);
        lattice
    }

    /// Enumerates `touching(hex)` for every hex of `base` and adds an empty
    /// cell for each tuple not yet present. Returns the number added.
    pub fn derive_from<E, I>(
        &mut self,
        base: &HexArray<E>,
        touching: impl Fn(&Tuple) -> I,
    ) -> usize
    where
        I: IntoIterator<Item = Tuple>,
    {
        let before = self.cells.len();
        for hex in base.tuples() {
            for t in touching(hex) {
                self.add_at_index(t);
            }
        }
        let added = self.cells.len() - before;
        debug!(kind = %L::KIND, added, from = base.len(), "derived sub-lattice");
        added
    }

    /// Adds an empty cell at `index` unless one exists. Returns whether it was
    /// added.
    pub fn add_at_index(&mut self, index: Tuple) -> bool {
        if self.cells.contains_key(&index) {
            return false;
        }
        self.cells.insert(index, LatticeData::empty(index));
        true
    }

    /// Sets the payload at `index`, creating the cell if needed. Returns the
    /// previous payload.
    pub fn set_at_index(&mut self, index: Tuple, data: T) -> Option<T> {
        match self.cells.get_mut(&index) {
            Some(cell) => cell.set_data(data),
            None => {
                self.cells.insert(index, LatticeData::new(index, data));
                None
            }
        }
    }

    /// Cell at `index`, if present.
    pub fn index(&self, index: &Tuple) -> Option<&LatticeData<L, T>> {
        self.cells.get(index)
    }

    /// Mutable cell at `index`, if present.
    pub fn index_mut(&mut self, index: &Tuple) -> Option<&mut LatticeData<L, T>> {
        self.cells.get_mut(index)
    }

    /// Payload at `index`, if the cell exists and has data.
    pub fn data(&self, index: &Tuple) -> Option<&T> {
        self.index(index).and_then(LatticeData::data)
    }

    /// Removes and returns the cell at `index`.
    pub fn remove(&mut self, index: &Tuple) -> Option<LatticeData<L, T>> {
        self.cells.remove(index)
    }

    /// Whether a cell exists at `index`.
    pub fn contains(&self, index: &Tuple) -> bool {
        self.cells.contains_key(index)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the lattice has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All stored tuples, in map order.
    pub fn tuples(&self) -> impl Iterator<Item = &Tuple> {
        self.cells.keys()
    }

    /// Cells in map order.
    pub fn iter(&self) -> impl Iterator<Item = &LatticeData<L, T>> {
        self.cells.values()
    }

    /// Mutable cells in map order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LatticeData<L, T>> {
        self.cells.values_mut()
    }
}

impl<L: Lattice, T: fmt::Debug> fmt::Debug for SubLattice<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubLattice")
            .field("kind", &L::KIND)
            .field("cells", &self.cells)
            .finish()
    }
}
