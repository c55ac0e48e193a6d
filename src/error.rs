use thiserror::Error;

use crate::tuple::Tuple;

/// Structural failures of the index. Missing cells are normally `None`,
/// only [`HexArray::try_index`](crate::HexArray::try_index) reports them here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// `entry(index)` on a tuple with fewer than `index + 1` components.
    #[error("tuple index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested component.
        index: usize,
        /// Length of the tuple.
        len: usize,
    },
    /// Component-wise arithmetic between tuples of different lengths.
    #[error("tuple length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the receiver.
        left: usize,
        /// Length of the argument.
        right: usize,
    },
    /// Tuples hold at most [`Tuple::MAX_LEN`] components.
    #[error("tuple of length {0} exceeds the maximum of {max}", max = Tuple::MAX_LEN)]
    TooLong(usize),
    /// No cell is stored at this key.
    #[error("no cell at {0}")]
    MissingCell(Tuple),
}
