//! Value types shared by level layers

mod color;
mod vector;

pub use color::Color;
pub use vector::{Rect, Vector2};
