//! Deterministic numerical routines.
//!
//! - [`solvers`]: bracketing root-finding and extremum search on scalar functions

pub mod solvers;
