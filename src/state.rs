//! Two-level quantum states as amplitude pairs
//!
//! A pure single-qubit state is |ψ⟩ = α|0⟩ + β|1⟩ with |α|² + |β|² = 1.
//! States produced by this crate's generator satisfy the invariant by
//! construction; the checked constructor enforces it for arbitrary input.

use crate::error::BlochError;
use crate::Result;
use num_complex::Complex64;
use std::fmt;

/// Default tolerance for normalization checks
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-10;

/// A normalized two-level state |ψ⟩ = α|0⟩ + β|1⟩
///
/// # Example
/// ```
/// use blochq::QubitState;
/// use num_complex::Complex64;
///
/// let h = 1.0 / 2.0_f64.sqrt();
/// let plus = QubitState::new(Complex64::new(h, 0.0), Complex64::new(h, 0.0)).unwrap();
/// assert!(plus.is_normalized(1e-10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QubitState {
    alpha: Complex64,
    beta: Complex64,
}

impl QubitState {
    /// Create a state from amplitudes, validating normalization
    ///
    /// # Errors
    /// Returns [`BlochError::NonFiniteAmplitude`] if either amplitude
    /// contains NaN or infinity, and [`BlochError::NotNormalized`] if
    /// |α|² + |β|² deviates from 1 by more than [`DEFAULT_NORM_TOLERANCE`].
    pub fn new(alpha: Complex64, beta: Complex64) -> Result<Self> {
        if !is_finite(alpha) || !is_finite(beta) {
            return Err(BlochError::NonFiniteAmplitude { alpha, beta });
        }

        let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
        if (norm - 1.0).abs() > DEFAULT_NORM_TOLERANCE {
            return Err(BlochError::NotNormalized { norm });
        }

        Ok(Self { alpha, beta })
    }

    /// Build a state known to be normalized by construction
    pub(crate) fn new_unchecked(alpha: Complex64, beta: Complex64) -> Self {
        debug_assert!((alpha.norm_sqr() + beta.norm_sqr() - 1.0).abs() < 1e-9);
        Self { alpha, beta }
    }

    /// Create a state from Bloch sphere angles
    ///
    /// Builds |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩, which is normalized
    /// for any θ, φ.
    ///
    /// # Example
    /// ```
    /// use blochq::QubitState;
    /// use std::f64::consts::PI;
    ///
    /// // θ = π/2, φ = 0 is the |+⟩ state
    /// let plus = QubitState::from_angles(PI / 2.0, 0.0);
    /// assert!((plus.alpha().re - 1.0 / 2.0_f64.sqrt()).abs() < 1e-10);
    /// ```
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        let alpha = Complex64::new((theta / 2.0).cos(), 0.0);
        let beta = Complex64::from_polar((theta / 2.0).sin(), phi);
        Self { alpha, beta }
    }

    /// Amplitude of |0⟩
    #[inline]
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// Amplitude of |1⟩
    #[inline]
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// Norm of the amplitude vector, 1.0 for valid states
    pub fn norm(&self) -> f64 {
        (self.alpha.norm_sqr() + self.beta.norm_sqr()).sqrt()
    }

    /// Measurement probabilities [P(0), P(1)]
    pub fn probabilities(&self) -> [f64; 2] {
        [self.alpha.norm_sqr(), self.beta.norm_sqr()]
    }

    /// Check normalization within the given tolerance
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() < tolerance
    }
}

fn is_finite(amplitude: Complex64) -> bool {
    amplitude.re.is_finite() && amplitude.im.is_finite()
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4})|0⟩ + ({:.4})|1⟩", self.alpha, self.beta)
    }
}
