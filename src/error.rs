use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Shape of a matrix as `(rows, cols)`, carried in error values.
pub type Shape = (usize, usize);

#[derive(Error, Debug)]
pub enum Error {
    /// A matrix was requested with a zero dimension, or from empty/ragged data.
    #[error("invalid matrix shape {rows}x{cols}")]
    InvalidShape { rows: usize, cols: usize },

    /// Element-wise operation between matrices of different shapes.
    #[error("shape mismatch: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch { left: Shape, right: Shape },

    /// Neither a matrix product nor an element-wise product is defined.
    #[error("matrices cannot be multiplied: {}x{} by {}x{}", .left.0, .left.1, .right.0, .right.1)]
    IncompatibleShapes { left: Shape, right: Shape },

    /// Random initialization over an empty range.
    #[error("empty random range [{min}, {max})")]
    InvalidRange { min: f64, max: f64 },

    /// Input sequence length differs from the network's input size.
    #[error("expected {expected} inputs, got {actual}")]
    InputMismatch { expected: usize, actual: usize },

    #[error("a network needs at least one layer")]
    NoLayers,

    #[error("{inputs} input samples but {targets} target samples")]
    LengthMismatch { inputs: usize, targets: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
