//! Inverted star pyramid rendering

mod core;
mod errors;

pub use core::{inverted_pyramid, MAX_HEIGHT, MIN_HEIGHT};
pub use errors::PyramidError;
