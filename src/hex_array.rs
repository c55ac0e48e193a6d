//! Sparse per-hex storage keyed by cube tuple.
//!
//! Cells are materialized from a tuple generator and filled by a data
//! generator, or written directly in cube or offset coordinates.

use std::fmt;

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::cell::HexData;
use crate::error::HexError;
use crate::generators::{DataGenerator, TupleGenerator};
use crate::orientation::OffsetLayout;
use crate::tuple::Tuple;

/// Per-hex storage keyed by cube tuple.
///
/// Two optional strategies drive the container: a [`TupleGenerator`] decides
/// which cells are materialized and the iteration order, a [`DataGenerator`]
/// supplies the payload of generated cells. Both can be swapped at any time.
///
/// Mutation requires `&mut self`; there is no internal locking, so callers
/// sharing an array across threads must serialize access themselves.
///
/// ```
/// # use hex_index::{HexArray, Hexagon, OffsetLayout, Tuple};
/// let disk = Hexagon { center: Tuple::cube(0, 0, 0), radius: 1 };
/// let hexes = HexArray::from_generators(OffsetLayout::default(), disk, |t: &Tuple| t.sum());
/// assert_eq!(hexes.len(), 7);
/// assert_eq!(hexes.index(&Tuple::cube(0, 0, 0)).and_then(|c| c.data()), Some(&0));
/// ```
pub struct HexArray<T> {
    cells: HashMap<Tuple, HexData<T>>,
    layout: OffsetLayout,
    tuple_generator: Option<Box<dyn TupleGenerator>>,
    data_generator: Option<Box<dyn DataGenerator<T>>>,
}

impl<T> HexArray<T> {
    /// An empty array with no generators.
    pub fn new(layout: OffsetLayout) -> Self {
        Self {
            cells: HashMap::new(),
            layout,
            tuple_generator: None,
            data_generator: None,
        }
    }

    /// An array holding one empty cell per generated tuple.
    pub fn from_tuple_generator(
        layout: OffsetLayout,
        tuples: impl TupleGenerator + 'static,
    ) -> Self {
        let mut array = Self::new(layout);
        array.set_tuple_generator(tuples);
        array.populate();
        array
    }

    /// An array holding one generated cell per generated tuple.
    pub fn from_generators(
        layout: OffsetLayout,
        tuples: impl TupleGenerator + 'static,
        data: impl DataGenerator<T> + 'static,
    ) -> Self {
        let mut array = Self::new(layout);
        array.set_tuple_generator(tuples);
        array.set_data_generator(data);
        array.populate();
        array
    }

    /// Replaces the tuple generator. Call [`Self::populate`] to materialize its cells.
    pub fn set_tuple_generator(&mut self, tuples: impl TupleGenerator + 'static) {
        self.tuple_generator = Some(Box::new(tuples));
    }

    /// Replaces the data generator used by [`Self::populate`] and [`Self::put_generated`].
    pub fn set_data_generator(&mut self, data: impl DataGenerator<T> + 'static) {
        self.data_generator = Some(Box::new(data));
    }

    /// Removes the tuple generator; iteration falls back to map order.
    pub fn clear_tuple_generator(&mut self) {
        self.tuple_generator = None;
    }

    /// Offset layout used by the offset-space helpers.
    pub fn layout(&self) -> OffsetLayout {
        self.layout
    }

    /// Materializes a cell for every generated tuple that has none yet.
    ///
    /// Returns the number of cells added. Existing cells keep their data.
    pub fn populate(&mut self) -> usize {
        let Some(tuples) = self.tuple_generator.as_deref() else {
            return 0;
        };
        let mut added = 0;
        for t in tuples.tuples() {
            if self.cells.contains_key(&t) {
                continue;
            }
            let cell = match self.data_generator.as_deref() {
                Some(data) => HexData::generated(t, data),
                None => HexData::empty(t),
            };
            self.cells.insert(t, cell);
            added += 1;
        }
        debug!(added, total = self.cells.len(), "populated hex array");
        added
    }

    /// Stores `data` at `index`, replacing any previous cell.
    pub fn put(&mut self, index: Tuple, data: T) -> Option<HexData<T>> {
        self.put_cell(HexData::new(index, data))
    }

    /// Stores a prepared cell under its own tuple, replacing any previous cell.
    pub fn put_cell(&mut self, cell: HexData<T>) -> Option<HexData<T>> {
        self.cells.insert(*cell.index(), cell)
    }

    /// Stores a cell whose data comes from the data generator, or an empty
    /// cell when none is configured.
    pub fn put_generated(&mut self, index: Tuple) -> Option<HexData<T>> {
        let cell = match self.data_generator.as_deref() {
            Some(data) => HexData::generated(index, data),
            None => HexData::empty(index),
        };
        self.put_cell(cell)
    }

    /// Removes and returns the cell at `index`.
    pub fn remove(&mut self, index: &Tuple) -> Option<HexData<T>> {
        self.cells.remove(index)
    }

    /// Cell at `index`, if present.
    pub fn index(&self, index: &Tuple) -> Option<&HexData<T>> {
        self.cells.get(index)
    }

    /// Mutable cell at `index`, if present.
    pub fn index_mut(&mut self, index: &Tuple) -> Option<&mut HexData<T>> {
        self.cells.get_mut(index)
    }

    /// Like [`Self::index`], but a missing cell is an error.
    pub fn try_index(&self, index: &Tuple) -> Result<&HexData<T>, HexError> {
        self.index(index).ok_or(HexError::MissingCell(*index))
    }

    /// Payload at `index`, if the cell exists and has data.
    pub fn data(&self, index: &Tuple) -> Option<&T> {
        self.index(index).and_then(HexData::data)
    }

    /// Cell at an offset-grid position.
    pub fn index_offset(&self, x: i32, y: i32) -> Option<&HexData<T>> {
        self.index(&self.layout.cube_at(x, y))
    }

    /// Stores `data` at an offset-grid position.
    pub fn put_offset(&mut self, x: i32, y: i32, data: T) -> Option<HexData<T>> {
        let index = self.layout.cube_at(x, y);
        self.put(index, data)
    }

    /// Whether a cell exists at `index`.
    pub fn contains(&self, index: &Tuple) -> bool {
        self.cells.contains_key(index)
    }

    /// Number of stored cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells are stored.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All stored tuples, in map order.
    pub fn tuples(&self) -> impl Iterator<Item = &Tuple> {
        self.cells.keys()
    }

    /// Cells in tuple-generator order, or map order without a generator.
    ///
    /// Generated tuples with no stored cell are skipped, as are stored cells
    /// the generator never produces.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &HexData<T>> + '_> {
        match self.tuple_generator.as_deref() {
            Some(tuples) => Box::new(tuples.tuples().filter_map(move |t| self.cells.get(&t))),
            None => Box::new(self.cells.values()),
        }
    }
}

impl<'a, T> IntoIterator for &'a HexArray<T> {
    type Item = &'a HexData<T>;
    type IntoIter = Box<dyn Iterator<Item = &'a HexData<T>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for HexArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HexArray")
            .field("len", &self.cells.len())
            .field("layout", &self.layout)
            .field("tuple_generator", &self.tuple_generator.is_some())
            .field("data_generator", &self.data_generator.is_some())
            .finish()
    }
}
