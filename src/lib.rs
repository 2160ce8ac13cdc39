//! 2D vector arithmetic for simulations on a wrapping (toroidal) field.

pub mod vector;

pub use vector::{Vector2D, wrap_coordinate};
