//! Ninesum - digit-combination search and inverted star pyramids
//!
//! This library provides two small puzzle utilities: enumerating every set
//! of distinct digits 1-9 with a given length and sum, and rendering
//! inverted pyramid patterns of stars.

pub mod combinations;
pub mod pyramid;

// Re-export the main public API
pub use combinations::CombinationFinder;
pub use pyramid::{inverted_pyramid, PyramidError};

/// Enumerate every combination of distinct digits 1-9 with the given
/// length and sum.
///
/// This is a convenience function that creates a default finder and runs
/// the search. Each combination is strictly increasing, and the result
/// list is in lexicographic order with no duplicates.
///
/// Inputs with no structurally possible solution (negative values, a
/// length above the nine-digit domain) yield an empty list rather than an
/// error.
///
/// # Arguments
///
/// * `length` - Number of digits in each combination
/// * `target` - Sum the digits must reach
///
/// # Examples
///
/// ```
/// use ninesum::combination_sum;
///
/// assert_eq!(combination_sum(3, 6), vec![vec![1, 2, 3]]);
/// assert_eq!(combination_sum(3, 8), vec![vec![1, 2, 5], vec![1, 3, 4]]);
/// assert!(combination_sum(4, 5).is_empty());
/// ```
pub fn combination_sum(length: i32, target: i32) -> Vec<Vec<u8>> {
    CombinationFinder::new().find_combinations(length, target)
}
