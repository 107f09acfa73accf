use crate::codec;

/// Coordinate of a cell on the unbounded grid.
///
/// Cells are plain values: two cells are equal iff their coordinates are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    /// Offsets of the Moore neighborhood, column by column.
    const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 orthogonally and diagonally adjacent cells, always in the same order.
    ///
    /// Must not be called on cells at `i64::MIN`/`i64::MAX`; the grid only
    /// calls it on cells inside the encodable range.
    pub fn neighbors(self) -> [Cell; 8] {
        Self::NEIGHBOR_OFFSETS.map(|(dx, dy)| Cell::new(self.x + dx, self.y + dy))
    }

    /// Returns `true` if the cell can hold a live entity: it and all of its
    /// neighbors are encodable.
    pub fn is_habitable(self) -> bool {
        let m = codec::MAX_COORDINATE as u64;
        self.x.unsigned_abs() < m && self.y.unsigned_abs() < m
    }

    /// Szudzik key of the cell, see [`codec::encode`].
    pub fn key(self) -> Result<i64, crate::LifeError> {
        codec::encode(self.x, self.y)
    }

    /// Inverse of [`Cell::key`].
    pub fn from_key(key: i64) -> Self {
        let (x, y) = codec::decode(key);
        Self { x, y }
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
