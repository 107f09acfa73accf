use super::{Bounds, KeyScheme};
use crate::{Cell, LifeError, Rule};
use ahash::AHashMap as HashMap;
use rand::{Rng, SeedableRng};
use std::mem::size_of;

/// Sparse unbounded field of a life-like automaton.
///
/// Only live cells are stored, together with the number of live neighbors of
/// every position that has at least one. The counts are kept exact after every
/// mutation, which makes a generation cost proportional to the population
/// instead of the area.
///
/// Live cells always satisfy [`Cell::is_habitable`], so their neighbors can be
/// keyed too. Births that would fall outside of that range are dropped.
///
/// # Example
///
/// ```rust
/// use lifelike::{Cell, DefaultGrid, Rule};
///
/// let mut grid = DefaultGrid::new();
/// for x in -1..=1 {
///     grid.spawn(Cell::new(x, 0)).unwrap();
/// }
/// grid.advance_generation(&Rule::conway());
/// assert!(grid.is_alive(Cell::new(0, -1)));
/// assert!(!grid.is_alive(Cell::new(-1, 0)));
/// ```
pub struct Grid<K: KeyScheme> {
    cells: HashMap<K::Key, Cell>,
    /// Never contains zeros.
    neighbor_counts: HashMap<K::Key, u8>,
}

impl<K: KeyScheme> Grid<K> {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            neighbor_counts: HashMap::new(),
        }
    }

    fn habitable_key(cell: Cell) -> Result<K::Key, LifeError> {
        if cell.is_habitable() {
            Ok(K::key(cell))
        } else {
            Err(LifeError::CoordinateOutOfRange {
                x: cell.x,
                y: cell.y,
            })
        }
    }

    /// `cell` must be habitable and dead.
    fn insert(&mut self, key: K::Key, cell: Cell) {
        for n in cell.neighbors() {
            *self.neighbor_counts.entry(K::key(n)).or_insert(0) += 1;
        }
        self.cells.insert(key, cell);
    }

    /// `cell` must be alive.
    fn remove(&mut self, key: K::Key, cell: Cell) {
        for n in cell.neighbors() {
            let nk = K::key(n);
            let count = self.neighbor_count_by_key(&nk);
            debug_assert!(count > 0, "neighbor {:?} of {:?} is not counted", n, cell);
            if count > 1 {
                self.neighbor_counts.insert(nk, count - 1);
            } else {
                self.neighbor_counts.remove(&nk);
            }
        }
        self.cells.remove(&key);
    }

    /// Brings `cell` to life. Does nothing if it is already alive.
    pub fn spawn(&mut self, cell: Cell) -> Result<(), LifeError> {
        let key = Self::habitable_key(cell)?;
        if !self.cells.contains_key(&key) {
            self.insert(key, cell);
        }
        Ok(())
    }

    /// Kills `cell`. Does nothing if it is already dead.
    pub fn kill(&mut self, cell: Cell) -> Result<(), LifeError> {
        let key = Self::habitable_key(cell)?;
        if self.cells.contains_key(&key) {
            self.remove(key, cell);
        }
        Ok(())
    }

    /// Spawns or kills `cell` depending on `state`.
    pub fn set_cell(&mut self, cell: Cell, state: bool) -> Result<(), LifeError> {
        if state {
            self.spawn(cell)
        } else {
            self.kill(cell)
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.neighbor_counts.clear();
    }

    /// Replaces the content with `cells`.
    ///
    /// The grid is left untouched if any of the cells is out of range.
    pub fn load_cells<I: IntoIterator<Item = Cell>>(
        &mut self,
        cells: I,
    ) -> Result<(), LifeError> {
        let cells = cells
            .into_iter()
            .map(|c| Self::habitable_key(c).map(|k| (k, c)))
            .collect::<Result<Vec<_>, _>>()?;
        self.clear();
        for (key, cell) in cells {
            if !self.cells.contains_key(&key) {
                self.insert(key, cell);
            }
        }
        Ok(())
    }

    /// Clears the grid and fills the square `field_size x field_size` window
    /// centered on the origin with cells alive with probability `density`.
    ///
    /// For even sizes the window is `[-field_size/2, field_size/2)` on both axes.
    /// Cells are visited column by column, so a given `rng` state always yields
    /// the same field.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        field_size: u32,
        density: f64,
        rng: &mut R,
    ) -> Result<(), LifeError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }
        let lo = -(field_size as i64 / 2);
        let hi = lo + field_size as i64;
        if field_size != 0 {
            for corner in [Cell::new(lo, lo), Cell::new(hi - 1, hi - 1)] {
                Self::habitable_key(corner)?;
            }
        }

        self.clear();
        for x in lo..hi {
            for y in lo..hi {
                if rng.gen_bool(density) {
                    let cell = Cell::new(x, y);
                    self.insert(K::key(cell), cell);
                }
            }
        }
        Ok(())
    }

    /// [`Grid::randomize`] with a ChaCha8 generator.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize_seeded(
        &mut self,
        field_size: u32,
        density: f64,
        seed: Option<u64>,
    ) -> Result<(), LifeError> {
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        self.randomize(field_size, density, &mut rng)
    }

    /// Advances the field by one generation under `rule`.
    ///
    /// All births and deaths are decided from the current state before any of
    /// them is applied. Cells without live neighbors always die and positions
    /// without live neighbors are never born, so `S0` and `B0` have no effect.
    pub fn advance_generation(&mut self, rule: &Rule) {
        let to_kill = self
            .cells
            .iter()
            .filter(|&(key, _)| {
                self.neighbor_counts
                    .get(key)
                    .map_or(true, |&count| !rule.is_survival(count))
            })
            .map(|(&key, &cell)| (key, cell))
            .collect::<Vec<_>>();
        let to_spawn = self
            .neighbor_counts
            .iter()
            .filter(|&(key, &count)| rule.is_birth(count) && !self.cells.contains_key(key))
            .map(|(&key, _)| (key, K::decode(key)))
            .filter(|(_, cell)| cell.is_habitable())
            .collect::<Vec<_>>();

        for (key, cell) in to_kill {
            self.remove(key, cell);
        }
        for (key, cell) in to_spawn {
            self.insert(key, cell);
        }
        debug_assert!(self.verify_neighbor_counts(), "neighbor counts diverged");
    }

    #[inline]
    fn neighbor_count_by_key(&self, key: &K::Key) -> u8 {
        self.neighbor_counts.get(key).copied().unwrap_or(0)
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        cell.is_habitable() && self.cells.contains_key(&K::key(cell))
    }

    /// Number of live cells among the 8 neighbors of `cell`.
    pub fn neighbor_count(&self, cell: Cell) -> u8 {
        K::encode(cell).map_or(0, |key| self.neighbor_count_by_key(&key))
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Number of positions with at least one live neighbor.
    pub fn tracked_positions(&self) -> usize {
        self.neighbor_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Live cells in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.values().copied()
    }

    /// Smallest box containing every live cell, `None` for an empty grid.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.cells();
        let first = cells.next()?;
        let (mut min, mut max) = (first, first);
        for c in cells {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
        }
        Some(Bounds {
            min_x: min.x,
            min_y: min.y,
            width: (max.x - min.x + 1) as u64,
            height: (max.y - min.y + 1) as u64,
        })
    }

    /// Recomputes every neighbor count from scratch and compares it with the
    /// maintained ones.
    pub fn verify_neighbor_counts(&self) -> bool {
        let mut expected = HashMap::<K::Key, u8>::with_capacity(self.neighbor_counts.len());
        for cell in self.cells() {
            for n in cell.neighbors() {
                *expected.entry(K::key(n)).or_insert(0) += 1;
            }
        }
        self.cells.iter().all(|(&key, &cell)| K::key(cell) == key)
            && expected.len() == self.neighbor_counts.len()
            && expected
                .iter()
                .all(|(key, count)| self.neighbor_counts.get(key) == Some(count))
    }

    /// Approximate heap memory used by the grid.
    pub fn bytes_total(&self) -> usize {
        self.cells.capacity() * size_of::<(K::Key, Cell)>()
            + self.neighbor_counts.capacity() * size_of::<(K::Key, u8)>()
    }

    /// Returns multiline string reporting grid stats.
    pub fn statistics(&self) -> String {
        let mut s = format!("Keys: {}\n", K::NAME);
        s += &format!("Population: {}\n", self.population());
        s += &format!("Tracked neighbors: {}\n", self.tracked_positions());
        match self.bounds() {
            Some(b) => s += &format!("Bounds: {}\n", b),
            None => s += "Bounds: empty\n",
        }
        s += &format!("Memory: {} KiB\n", self.bytes_total() >> 10);
        s
    }
}

impl<K: KeyScheme> Default for Grid<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyScheme> Clone for Grid<K> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            neighbor_counts: self.neighbor_counts.clone(),
        }
    }
}
