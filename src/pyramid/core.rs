use log::{debug, warn};

use crate::pyramid::errors::PyramidError;

pub const MIN_HEIGHT: i32 = 2;
pub const MAX_HEIGHT: i32 = 50;

/// Render an inverted pyramid of stars with the given height.
///
/// Line `i`, counting from `n` down to 1, carries `n - i` leading spaces
/// followed by `i` stars each with a trailing space separator.
///
/// # Errors
///
/// Returns `PyramidError::OutOfRange` if `n` is outside [2, 50]; nothing
/// is rendered in that case.
pub fn inverted_pyramid(n: i32) -> Result<Vec<String>, PyramidError> {
    debug!("Rendering inverted pyramid of height {}", n);

    if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&n) {
        warn!("Pyramid height out of range: {}", n);
        return Err(PyramidError::OutOfRange { n });
    }

    let mut lines = Vec::with_capacity(n as usize);
    for i in (1..=n).rev() {
        let indent = " ".repeat((n - i) as usize);
        let stars = "* ".repeat(i as usize);
        lines.push(format!("{}{}", indent, stars));
    }

    debug!("Rendered {} pyramid lines", lines.len());
    Ok(lines)
}
