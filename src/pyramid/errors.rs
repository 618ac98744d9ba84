use thiserror::Error;

/// Errors that can occur when rendering a pyramid pattern
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PyramidError {
    #[error("Input must be between 2 - 50.")]
    OutOfRange { n: i32 },
}
