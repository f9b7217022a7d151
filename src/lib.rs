//! Conway's Game of Life on a toroidal grid.
//!
//! [`grid::Grid`] holds the cells, [`rules`] computes generations under the
//! fixed B3/S23 rule, and [`session::Session`] drives a grid on a timer for
//! an interactive front end.

pub mod config;
pub mod error;
pub mod grid;
pub mod rules;
pub mod session;

pub use config::SimConfig;
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use rules::{count_live_neighbors, step, step_into, Pattern};
pub use session::Session;
