mod engine;
mod key;

pub use engine::Grid;
pub use key::{CellKey, KeyScheme, PairedKey};

use crate::Cell;
use std::fmt;

/// Axis-aligned box covering every live cell.
///
/// `width` and `height` include the last column and row: a single cell has
/// a 1x1 box. Both are at least 1; [`Bounds::max_x`] and [`Bounds::max_y`]
/// are meaningless otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub width: u64,
    pub height: u64,
}

impl Bounds {
    pub fn max_x(&self) -> i64 {
        self.min_x + self.width as i64 - 1
    }

    pub fn max_y(&self) -> i64 {
        self.min_y + self.height as i64 - 1
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_x..=self.max_x()).contains(&cell.x)
            && (self.min_y..=self.max_y()).contains(&cell.y)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.min_x, self.min_y
        )
    }
}
