use log::{debug, info};

use crate::combinations::constants::{DIGIT_MAX, DIGIT_MIN};

/// Main finder for combinations of distinct digits with a given length and sum
pub struct CombinationFinder {}

impl CombinationFinder {
    /// Create a new combination finder
    pub fn new() -> Self {
        Self {}
    }

    /// Enumerate every strictly increasing sequence of `length` distinct
    /// digits from 1-9 summing to `target`.
    ///
    /// Results are produced in lexicographic order, a direct consequence
    /// of trying candidates in increasing order and recursing depth-first.
    /// Inputs with no structurally possible solution (negative values,
    /// `length` above the digit domain size) yield an empty list.
    pub fn find_combinations(&self, length: i32, target: i32) -> Vec<Vec<u8>> {
        info!(
            "Searching for {}-digit combinations summing to {}",
            length, target
        );

        let mut results = Vec::new();
        let mut path = Vec::new();
        Self::backtrack(DIGIT_MIN, length, target, &mut path, &mut results);

        debug!("Search finished with {} combinations", results.len());
        results
    }

    fn backtrack(
        start: i32,
        remaining_count: i32,
        remaining_sum: i32,
        path: &mut Vec<u8>,
        results: &mut Vec<Vec<u8>>,
    ) {
        if remaining_count == 0 && remaining_sum == 0 {
            results.push(path.clone());
            return;
        }

        if remaining_count < 0 || remaining_sum < 0 {
            return;
        }

        // Not enough distinct digits >= start left to fill the remaining slots
        if start > DIGIT_MAX + 1 - remaining_count {
            return;
        }

        // Smallest reachable sum takes remaining_count consecutive digits from
        // start upward; largest takes remaining_count digits from 9 downward
        let min_sum = remaining_count * start + remaining_count * (remaining_count - 1) / 2;
        let max_sum = remaining_count * (2 * DIGIT_MAX + 1 - remaining_count) / 2;
        if remaining_sum < min_sum || remaining_sum > max_sum {
            return;
        }

        for num in start..=DIGIT_MAX {
            if num > remaining_sum {
                break;
            }

            path.push(num as u8);
            Self::backtrack(num + 1, remaining_count - 1, remaining_sum - num, path, results);
            path.pop();
        }
    }
}

impl Default for CombinationFinder {
    fn default() -> Self {
        Self::new()
    }
}
