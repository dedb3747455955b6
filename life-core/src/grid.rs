use crate::config::{GRID_HEIGHT, GRID_WIDTH, LIVE_PROBABILITY};
use rand::Rng;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The opposite state.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// One complete generation of cells on the fixed
/// [`GRID_WIDTH`] × [`GRID_HEIGHT`] grid.
///
/// Cells are stored as a flat buffer indexed by `x + y * GRID_WIDTH`.
/// [`Grid::get`] and [`Grid::set`] expect in-range coordinates; neighbour
/// scans that may step outside the grid go through
/// [`crate::boundary::BoundaryPolicy`] instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Dead; GRID_WIDTH * GRID_HEIGHT],
        }
    }

    /// Creates a grid where each cell is independently alive with
    /// probability [`LIVE_PROBABILITY`].
    ///
    /// ### Parameters
    /// - `rng` - Random source; pass a seeded generator for
    ///   reproducible grids.
    pub fn random(rng: &mut impl Rng) -> Self {
        let cells = (0..GRID_WIDTH * GRID_HEIGHT)
            .map(|_| {
                if rng.random_bool(LIVE_PROBABILITY) {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect();

        Self { cells }
    }

    #[inline]
    fn index(x: usize, y: usize) -> usize {
        x + y * GRID_WIDTH
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[Self::index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[Self::index(x, y)] = cell;
    }

    /// Number of live cells in this generation.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
