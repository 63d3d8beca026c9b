//! Standing water over N-dimensional height grids.
//!
//! Water at a given level surrounds the grid. [`solve`] works out where it
//! can reach and how deep it stands there, using a priority flood that
//! raises the level one spill point at a time.

pub mod classify;
pub mod config;
pub mod editing;
pub mod error;
pub mod grid;
pub mod height;
pub mod plugin;
pub mod solver;
pub mod terrain;

pub use config::FloodConfig;
pub use editing::{HeightChanged, HeightEdit, HeightEditor};
pub use error::GridError;
pub use grid::{Grid, Index};
pub use height::Height;
pub use plugin::FloodPlugin;
pub use solver::{solve, solve_with, FloodResult, Strategy};
