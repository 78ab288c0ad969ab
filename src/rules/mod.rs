//! Puzzle rules: how a click rotates a cube and when a goal holds.
//!
//! Both are pure functions over explicit arguments. The
//! [`crate::session::Session`] wires them into the click cycle:
//! rotate, validate, save.

pub mod rotation;
pub mod validation;

pub use rotation::{rotate, rotation};
pub use validation::{goal_validity, is_solved, validate};
