//! Backtracking search for distinct-digit combinations

pub mod constants;
mod core;

pub use core::CombinationFinder;
