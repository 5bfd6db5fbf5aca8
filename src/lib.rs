//! Grecian Computer Solver Library
//!
//! Provides the core puzzle-solving functionality for stacked-dial
//! arithmetic puzzles.

pub mod dials;
pub mod display;
pub mod puzzles;
pub mod solver;

pub use dials::{Cell, DialStack, GapPolicy, Goal};
pub use solver::{solve, Outcome, SearchReport};
