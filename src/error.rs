//! Error types for state construction and rendering

use num_complex::Complex64;
use thiserror::Error;

/// Errors that can occur when building states or rendering the figure
#[derive(Debug, Error)]
pub enum BlochError {
    /// Amplitudes do not form a unit vector
    #[error("state not normalized: norm = {norm}")]
    NotNormalized { norm: f64 },

    /// An amplitude contains NaN or infinity
    #[error("non-finite amplitude in state: α = {alpha}, β = {beta}")]
    NonFiniteAmplitude { alpha: Complex64, beta: Complex64 },

    /// Canvas dimensions too small to hold the figure
    #[error("canvas of {width}x{height} cells is too small (minimum {min_width}x{min_height})")]
    CanvasTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },

    /// The display surface rejected the frame
    #[error("failed to write frame to display: {0}")]
    Display(#[from] std::io::Error),
}
