//! Core Game of Life simulation library for a fixed-size toroidal grid.
//!
//! Main components:
//! - [`grid`] — cell states and the flat generation grid.
//! - [`boundary`] — policies for resolving neighbour coordinates at the
//!   grid edges.
//! - [`rule`] — the birth/survival transition rule.
//! - [`sim`] — the double-buffered generation stepper.
//! - [`config`] — fixed grid dimensions and timing constants.
//! - [`types`] — shared type aliases.

pub mod boundary;
pub mod config;
pub mod grid;
pub mod rule;
pub mod sim;
pub mod types;
