/// Grid width in cells.
pub const GRID_WIDTH: usize = 48;

/// Grid height in cells.
pub const GRID_HEIGHT: usize = 48;

/// Probability that a cell starts alive in a randomized grid.
pub const LIVE_PROBABILITY: f64 = 0.5;

/// Target interval between generations when auto-running, in seconds.
pub const STEP_INTERVAL: f64 = 0.1;
