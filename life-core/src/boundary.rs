use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::grid::{Cell, Grid};
use crate::types::Coord;
use glam::IVec2;

/// How neighbour coordinates outside the grid are resolved.
///
/// The policies form a small closed set dispatched by the simulator;
/// both read cells only through [`BoundaryPolicy::cell_at`], so the
/// grid itself never needs to know about boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Toroidal addressing: each grid edge connects to the opposite
    /// edge, so every coordinate resolves to some in-range cell.
    #[default]
    Wrap,
    /// Coordinates outside the grid resolve to no cell and read as
    /// dead, giving the field a hard edge. Selectable alternative to
    /// [`BoundaryPolicy::Wrap`].
    DeadOutside,
}

impl BoundaryPolicy {
    /// Resolves an arbitrary coordinate under this policy.
    ///
    /// ### Parameters
    /// - `p` - Any integer coordinate, in range or not.
    ///
    /// ### Returns
    /// `Some` coordinate with both components in
    /// `[0, GRID_WIDTH) × [0, GRID_HEIGHT)`, or `None` if the policy
    /// treats the location as permanently dead.
    pub fn resolve(self, p: Coord) -> Option<Coord> {
        let (w, h) = (GRID_WIDTH as i32, GRID_HEIGHT as i32);

        match self {
            BoundaryPolicy::Wrap => Some(IVec2::new(p.x.rem_euclid(w), p.y.rem_euclid(h))),
            BoundaryPolicy::DeadOutside => {
                if (0..w).contains(&p.x) && (0..h).contains(&p.y) {
                    Some(p)
                } else {
                    None
                }
            }
        }
    }

    /// Reads the cell at `p` through this policy.
    ///
    /// Coordinates that do not resolve to a cell read as [`Cell::Dead`].
    pub fn cell_at(self, grid: &Grid, p: Coord) -> Cell {
        match self.resolve(p) {
            Some(q) => grid.get(q.x as usize, q.y as usize),
            None => Cell::Dead,
        }
    }

    /// Counts live cells among the 8 neighbours of `p`.
    ///
    /// Scans the 3×3 block centered on `p`, excluding the center itself.
    /// Every neighbour is read through [`BoundaryPolicy::cell_at`], so
    /// the result depends only on the resolved states, not on scan
    /// order.
    pub fn live_neighbours(self, grid: &Grid, p: Coord) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    // Skip the cell itself.
                    continue;
                }
                if self.cell_at(grid, p + IVec2::new(dx, dy)).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }
}
