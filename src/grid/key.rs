use crate::{codec, Cell, LifeError};
use std::hash::Hash;

/// Representation of cells inside the grid's hash maps.
pub trait KeyScheme {
    type Key: Copy + Eq + Hash;

    /// Name shown in statistics.
    const NAME: &'static str;

    /// Key of a cell that satisfies [`codec::in_range`].
    fn key(cell: Cell) -> Self::Key;

    fn decode(key: Self::Key) -> Cell;

    /// Checked version of [`KeyScheme::key`].
    fn encode(cell: Cell) -> Result<Self::Key, LifeError> {
        if codec::in_range(cell.x, cell.y) {
            Ok(Self::key(cell))
        } else {
            Err(LifeError::CoordinateOutOfRange {
                x: cell.x,
                y: cell.y,
            })
        }
    }
}

/// Cells keyed by their Szudzik pair, see [`codec`].
pub struct PairedKey;

impl KeyScheme for PairedKey {
    type Key = i64;

    const NAME: &'static str = "szudzik";

    #[inline]
    fn key(cell: Cell) -> i64 {
        codec::pair(cell.x, cell.y)
    }

    #[inline]
    fn decode(key: i64) -> Cell {
        Cell::from_key(key)
    }
}

/// Cells used as map keys directly.
///
/// Shares the range limits of [`PairedKey`] so that both schemes evolve
/// patterns identically.
pub struct CellKey;

impl KeyScheme for CellKey {
    type Key = Cell;

    const NAME: &'static str = "cell";

    #[inline]
    fn key(cell: Cell) -> Cell {
        cell
    }

    #[inline]
    fn decode(key: Cell) -> Cell {
        key
    }
}
