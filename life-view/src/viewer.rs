//! Interactive Game of Life viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state and
//! implements [`eframe::App`] to render the grid and drive generation
//! steps on a fixed interval.

use eframe::App;
use life_core::{
    boundary::BoundaryPolicy,
    config::{GRID_HEIGHT, GRID_WIDTH, STEP_INTERVAL},
    grid::Grid,
    sim::Simulator,
    types::Coord,
};
use rand::rng;

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Simulator`] with its two grid buffers.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions / input.
/// 2. If `running` is `true` and enough time has passed, advance the
///    simulation by one generation.
/// 3. Render the current generation as a grid of filled cells.
///
/// ### Fields
/// - `sim` - The double-buffered Game of Life simulator.
/// - `rng` - Random number generator used to seed fresh grids.
///
/// - `running` - Whether the simulation is currently auto-advancing.
///
/// - `step_interval` - Target time between automatic steps (seconds).
/// - `last_step_time` - Time stamp of the last step (egui time).
/// - `last_step_dt` - Actual time delta between the last two steps (for display only).
pub struct Viewer {
    sim: Simulator,
    rng: rand::rngs::ThreadRng,

    running: bool,

    step_interval: f64,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a new viewer seeded with a random generation.
    ///
    /// The default setup is a randomly populated grid under the toroidal
    /// wrap policy, auto-advancing at [`STEP_INTERVAL`] from the first
    /// frame.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to `eframe::run_native`.
    pub fn new() -> Self {
        let mut rng = rng();
        let sim = Simulator::new(Grid::random(&mut rng), BoundaryPolicy::Wrap);

        Self {
            sim,
            rng,
            running: true,
            step_interval: STEP_INTERVAL,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Reseeds the simulation with a fresh random generation.
    ///
    /// The boundary policy and timing settings are kept; the generation
    /// counter restarts at zero.
    fn randomize(&mut self) {
        self.sim = Simulator::new(Grid::random(&mut self.rng), self.sim.policy());
    }

    /// Replaces the simulation with an all-dead grid.
    ///
    /// Mainly useful as a blank canvas for toggling cells by hand;
    /// auto-running is paused.
    fn clear(&mut self) {
        self.sim = Simulator::new(Grid::new(), self.sim.policy());
        self.running = false;
    }

    /// Side length of one cell so the whole board fits inside `rect`.
    fn cell_size(rect: egui::Rect) -> f32 {
        (rect.width() / GRID_WIDTH as f32).min(rect.height() / GRID_HEIGHT as f32)
    }

    /// Top-left corner of the board, centered inside `rect`.
    fn board_origin(rect: egui::Rect, cell: f32) -> egui::Pos2 {
        let board = egui::vec2(cell * GRID_WIDTH as f32, cell * GRID_HEIGHT as f32);
        rect.center() - board * 0.5
    }

    /// Screen-space rectangle of the cell at `(x, y)`.
    ///
    /// ### Parameters
    /// - `origin` - Board top-left corner from [`Viewer::board_origin`].
    /// - `cell` - Cell side length from [`Viewer::cell_size`].
    /// - `x`, `y` - In-range grid coordinates.
    ///
    /// ### Returns
    /// The axis-aligned rectangle covering that cell on screen.
    fn cell_rect(origin: egui::Pos2, cell: f32, x: usize, y: usize) -> egui::Rect {
        let min = origin + egui::vec2(x as f32 * cell, y as f32 * cell);
        egui::Rect::from_min_size(min, egui::vec2(cell, cell))
    }

    /// Grid coordinate of the cell under a screen-space position.
    ///
    /// This is the inverse of [`Viewer::cell_rect`] for positions inside
    /// the board.
    ///
    /// ### Returns
    /// The coordinate of the hit cell, or `None` if `pos` lies outside
    /// the board.
    fn cell_under(origin: egui::Pos2, cell: f32, pos: egui::Pos2) -> Option<Coord> {
        let rel = (pos - origin) / cell;
        if rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }

        let (x, y) = (rel.x as usize, rel.y as usize);
        (x < GRID_WIDTH && y < GRID_HEIGHT).then(|| Coord::new(x as i32, y as i32))
    }

    /// Builds the top panel UI (run controls, stepping, boundary policy).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.step_interval)
                        .prefix("dt target = ")
                        .range(0.01..=1.0)
                        .speed(0.01),
                );

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.sim.step();
                    self.last_step_time = now;
                }

                if ui.button("Randomize").clicked() {
                    self.randomize();
                }

                if ui.button("Clear").clicked() {
                    self.clear();
                }

                ui.separator();
                ui.label("Edges:");

                if ui
                    .selectable_label(matches!(self.sim.policy(), BoundaryPolicy::Wrap), "Wrap")
                    .clicked()
                {
                    self.sim.set_policy(BoundaryPolicy::Wrap);
                }

                if ui
                    .selectable_label(
                        matches!(self.sim.policy(), BoundaryPolicy::DeadOutside),
                        "Dead",
                    )
                    .clicked()
                {
                    self.sim.set_policy(BoundaryPolicy::DeadOutside);
                }
            });
        });
    }

    /// Builds the bottom status bar (time step, generation, population).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.step_interval));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("generation = {}", self.sim.generation()));
                ui.label(format!("population = {}", self.sim.current().population()));
            });
        });
    }

    /// Builds the central panel where the grid is drawn and interacted with.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            let cell = Self::cell_size(rect);
            let origin = Self::board_origin(rect, cell);

            // Toggle the clicked cell between dead and alive.
            if response.clicked()
                && let Some(pos) = response.interact_pointer_pos()
                && let Some(p) = Self::cell_under(origin, cell, pos)
            {
                let (x, y) = (p.x as usize, p.y as usize);
                let flipped = self.sim.current().get(x, y).toggled();
                self.sim.current_mut().set(x, y, flipped);
            }

            // Draw every cell of the current generation.
            for y in 0..GRID_HEIGHT {
                for x in 0..GRID_WIDTH {
                    let color = if self.sim.current().get(x, y).is_alive() {
                        egui::Color32::WHITE
                    } else {
                        egui::Color32::from_gray(40)
                    };
                    painter.rect_filled(
                        Self::cell_rect(origin, cell, x, y),
                        egui::CornerRadius::ZERO,
                        color,
                    );
                }
            }

            // Auto-run simulation if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_step_time;
                if elapsed >= self.step_interval {
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = elapsed;
                    }
                    self.sim.step();
                    self.last_step_time = now;
                }

                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the top control bar and status bar.
    /// - Draws the central grid view, handles interactions, and advances
    ///   the simulation when due.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
