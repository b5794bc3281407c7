//! Laser Routing Puzzle Solver Library
//!
//! Places reflect, opaque and refract blocks on a grid so that laser beams
//! pass through every target point. Beams and blocks share one doubled
//! integer lattice (see [`lattice`]); the [`solver`] enumerates placements
//! and checks each complete configuration with the [`simulator`].

pub mod blocks;
pub mod error;
pub mod grid;
pub mod lattice;
pub mod level;
pub mod persistence;
pub mod simulator;
pub mod solver;
pub mod visualization;

pub use blocks::{BlockKind, Inventory};
pub use error::{Error, Result};
pub use grid::{Board, Cell};
pub use lattice::{Beam, Point};
pub use level::Level;
pub use simulator::simulate;
pub use solver::{solve, Solver};
