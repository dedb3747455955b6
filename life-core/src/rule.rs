use crate::grid::Cell;

/// The standard Game of Life transition.
///
/// A live cell survives with two or three live neighbours; fewer kill it
/// by isolation, more by overcrowding. A dead cell comes alive with
/// exactly three live neighbours and otherwise stays dead.
///
/// Pure in its two inputs; the rule never sees coordinates.
pub fn transition(old: Cell, live_neighbours: u8) -> Cell {
    match (old, live_neighbours) {
        (Cell::Alive, 2..=3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}
