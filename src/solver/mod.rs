//! Puzzle solver.
//!
//! Each cube can reach 24 orientations by clicks. The solver enumerates them
//! per cube (BFS, so each comes with a shortest click path), then assigns
//! orientations cube by cube, backtracking whenever a goal would see a
//! repeated value. Four cubes give at most 24^4 combinations, and pruning
//! cuts that to a few thousand in practice.

mod search;

pub use search::{reachable_orientations, solve, Solution};
