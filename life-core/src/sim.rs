use crate::boundary::BoundaryPolicy;
use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::grid::Grid;
use crate::rule::transition;
use crate::types::Coord;

/// Double-buffered generation stepper.
///
/// Owns the current and next generation grids plus the boundary policy
/// used for neighbour counting. [`Simulator::step`] reads only from the
/// current grid and writes every cell of the next grid exactly once,
/// then swaps the two, so no caller ever observes a partially-updated
/// generation.
///
/// ### Fields
/// - `current` - The generation visible to callers, read-only during a step.
/// - `next` - Scratch grid written during a step, recycled on swap.
/// - `policy` - How out-of-range neighbour coordinates are resolved.
/// - `generation` - Number of completed steps since the initial grid.
#[derive(Debug)]
pub struct Simulator {
    current: Grid,
    next: Grid,
    policy: BoundaryPolicy,
    generation: u64,
}

impl Simulator {
    /// Creates a simulator starting from `initial` at generation zero.
    pub fn new(initial: Grid, policy: BoundaryPolicy) -> Self {
        Self {
            current: initial,
            next: Grid::new(),
            policy,
            generation: 0,
        }
    }

    /// The complete, consistent generation to read or render.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Mutable access to the current generation, for editing cells
    /// between steps.
    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Switches the boundary policy; takes effect from the next step.
    pub fn set_policy(&mut self, policy: BoundaryPolicy) {
        self.policy = policy;
    }

    /// Number of completed steps since the initial generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the simulation by one generation.
    ///
    /// For every cell in the full grid: count live neighbours through
    /// the boundary policy, apply [`transition`], and write the result
    /// into the next buffer. Afterwards the buffers swap, recycling the
    /// old current grid as the next scratch buffer. Cells are
    /// independent under the strict read/write split, so scan order
    /// does not affect the outcome. Total over all grids; there is no
    /// failure mode.
    pub fn step(&mut self) {
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let p = Coord::new(x as i32, y as i32);
                let live = self.policy.live_neighbours(&self.current, p);
                self.next.set(x, y, transition(self.current.get(x, y), live));
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Builds a grid with the given cells alive and everything else dead.
    fn grid_with(live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new();
        for &(x, y) in live {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                if grid.get(x, y).is_alive() {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn all_dead_grid_stays_all_dead() {
        let mut sim = Simulator::new(Grid::new(), BoundaryPolicy::Wrap);

        for _ in 0..10 {
            sim.step();
            assert_eq!(sim.current().population(), 0);
        }
    }

    #[test]
    fn step_is_deterministic_for_equal_inputs() {
        let grid = Grid::random(&mut StdRng::seed_from_u64(99));

        let mut a = Simulator::new(grid.clone(), BoundaryPolicy::Wrap);
        let mut b = Simulator::new(grid, BoundaryPolicy::Wrap);

        for _ in 0..5 {
            a.step();
            b.step();
            assert_eq!(a.current(), b.current());
        }
    }

    #[test]
    fn step_recomputes_every_cell() {
        // Start fully alive: every cell has 8 live neighbours and must
        // die, so a single surviving cell would mean it was skipped.
        let mut grid = Grid::new();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                grid.set(x, y, Cell::Alive);
            }
        }
        let mut sim = Simulator::new(grid, BoundaryPolicy::Wrap);

        sim.step();

        assert_eq!(sim.current().population(), 0);
    }

    #[test]
    fn lone_cell_dies_and_its_slot_is_rewritten() {
        let mut sim = Simulator::new(grid_with(&[(10, 10)]), BoundaryPolicy::Wrap);

        sim.step();

        assert_eq!(sim.current().get(10, 10), Cell::Dead);
        assert_eq!(sim.current().population(), 0);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(10, 10), (11, 10), (10, 11), (11, 11)];
        let mut sim = Simulator::new(grid_with(&block), BoundaryPolicy::Wrap);

        for _ in 0..4 {
            sim.step();
            assert_eq!(live_cells(sim.current()), block.to_vec());
        }
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = grid_with(&[(9, 10), (10, 10), (11, 10)]);
        let vertical = grid_with(&[(10, 9), (10, 10), (10, 11)]);

        let mut sim = Simulator::new(horizontal.clone(), BoundaryPolicy::Wrap);

        sim.step();
        assert_eq!(sim.current(), &vertical);
        sim.step();
        assert_eq!(sim.current(), &horizontal);
    }

    #[test]
    fn blinker_across_the_seam_needs_the_wrap_policy() {
        // Three live cells in a row spanning the left/right edge.
        let seam = [(GRID_WIDTH - 1, 5), (0, 5), (1, 5)];

        // Toroidally this is an ordinary blinker and flips vertical.
        let mut wrap = Simulator::new(grid_with(&seam), BoundaryPolicy::Wrap);
        wrap.step();
        assert_eq!(live_cells(wrap.current()), vec![(0, 4), (0, 5), (0, 6)]);

        // With a hard edge the row is broken in two and starves.
        let mut edged = Simulator::new(grid_with(&seam), BoundaryPolicy::DeadOutside);
        edged.step();
        assert_eq!(edged.current().population(), 0);
    }

    #[test]
    fn generation_counts_completed_steps() {
        let mut sim = Simulator::new(Grid::new(), BoundaryPolicy::Wrap);
        assert_eq!(sim.generation(), 0);

        sim.step();
        sim.step();
        sim.step();

        assert_eq!(sim.generation(), 3);
    }

    /// Steps a grid holding `center` at (1, 1) with the given neighbour
    /// states packed into the 3×3 block around it, and returns the new
    /// center state.
    fn stepped_center(center: Cell, neighbours: &[Cell]) -> Cell {
        let spots = [
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ];

        let mut grid = Grid::new();
        grid.set(1, 1, center);
        for (&(x, y), &cell) in spots.iter().zip(neighbours) {
            grid.set(x, y, cell);
        }

        let mut sim = Simulator::new(grid, BoundaryPolicy::Wrap);
        sim.step();
        sim.current().get(1, 1)
    }

    #[test]
    fn stepped_cells_follow_the_transition_table() {
        use Cell::{Alive, Dead};

        // The classic rule checks, driven through a full step.
        assert_eq!(stepped_center(Alive, &[Dead, Alive, Dead]), Dead);
        assert_eq!(stepped_center(Dead, &[Alive, Alive, Alive]), Alive);
        assert_eq!(stepped_center(Alive, &[Dead, Dead, Alive]), Dead);
        assert_eq!(stepped_center(Dead, &[Alive, Dead, Dead]), Dead);
        assert_eq!(stepped_center(Alive, &[Dead, Alive, Alive]), Alive);
        assert_eq!(stepped_center(Alive, &[Alive, Alive, Alive, Alive]), Dead);
    }
}
