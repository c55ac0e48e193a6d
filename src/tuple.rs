//! Fixed-length integer coordinates used as map keys.

use std::fmt;

use crate::error::HexError;

/// An immutable coordinate of up to three integer components.
///
/// Offset coordinates have two components, cube coordinates three. Equality and
/// hashing are structural and order-sensitive, so tuples are used directly as
/// keys of the lattice containers. All arithmetic returns a new tuple and
/// wraps on overflow, so it never panics.
///
/// ```
/// # use hex_index::Tuple;
/// let t = Tuple::cube(1, -1, 0);
/// assert_eq!(t.entry(1), Ok(-1));
/// assert!(t.entry(3).is_err());
/// assert_eq!(t.mult(2), Tuple::cube(2, -2, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tuple {
    // Unused slots stay zero so the derived Eq/Hash only see real entries.
    entries: [i32; Tuple::MAX_LEN],
    len: u8,
}

impl Tuple {
    /// Largest supported number of components.
    pub const MAX_LEN: usize = 3;

    /// Builds a tuple from a slice of at most [`Self::MAX_LEN`] entries.
    pub fn new(entries: &[i32]) -> Result<Self, HexError> {
        if entries.len() > Self::MAX_LEN {
            return Err(HexError::TooLong(entries.len()));
        }
        let mut padded = [0; Self::MAX_LEN];
        padded[..entries.len()].copy_from_slice(entries);
        Ok(Self {
            entries: padded,
            len: entries.len() as u8,
        })
    }

    /// A 3-component cube coordinate.
    pub const fn cube(x: i32, y: i32, z: i32) -> Self {
        Self {
            entries: [x, y, z],
            len: 3,
        }
    }

    /// A 2-component offset (rectangular array) coordinate.
    pub const fn offset(x: i32, y: i32) -> Self {
        Self {
            entries: [x, y, 0],
            len: 2,
        }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the tuple has no components.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Component `index`, or [`HexError::IndexOutOfRange`].
    pub fn entry(&self, index: usize) -> Result<i32, HexError> {
        self.entries()
            .get(index)
            .copied()
            .ok_or(HexError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// The components, in order.
    pub fn entries(&self) -> &[i32] {
        &self.entries[..self.len()]
    }

    /// The three cube components; missing components read as zero.
    pub fn cube_entries(&self) -> [i32; 3] {
        self.entries
    }

    /// Sum of all components, wrapping on overflow. Zero for hex centers, ±1
    /// for corners.
    pub fn sum(&self) -> i32 {
        self.entries().iter().fold(0, |acc, c| acc.wrapping_add(*c))
    }

    /// Component-wise (wrapping) sum with a tuple of the same length.
    pub fn add(&self, other: &Tuple) -> Result<Tuple, HexError> {
        self.add_entries(other.entries())
    }

    /// Component-wise sum with a raw integer slice of the same length.
    pub fn add_entries(&self, other: &[i32]) -> Result<Tuple, HexError> {
        if other.len() != self.len() {
            return Err(HexError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let mut out = *self;
        for (a, b) in out.entries.iter_mut().zip(other) {
            *a = a.wrapping_add(*b);
        }
        Ok(out)
    }

    /// Every component multiplied by `scalar`, wrapping on overflow.
    pub fn mult(&self, scalar: i32) -> Tuple {
        let mut out = *self;
        for a in &mut out.entries[..self.len as usize] {
            *a = a.wrapping_mul(scalar);
        }
        out
    }

    /// Every component multiplied by a real scalar, truncated toward zero.
    ///
    /// ```
    /// # use hex_index::Tuple;
    /// assert_eq!(Tuple::cube(3, -3, 0).mult_f64(0.5), Tuple::cube(1, -1, 0));
    /// ```
    pub fn mult_f64(&self, scalar: f64) -> Tuple {
        let mut out = *self;
        for a in &mut out.entries[..self.len as usize] {
            *a = (*a as f64 * scalar) as i32;
        }
        out
    }
}

impl From<[i32; 3]> for Tuple {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::cube(x, y, z)
    }
}

impl From<[i32; 2]> for Tuple {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::offset(x, y)
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, e) in self.entries().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str(")")
    }
}
