//! Bloch sphere coordinates for two-level states
//!
//! A pure state |ψ⟩ = α|0⟩ + β|1⟩ maps to the point
//!
//! x = 2·Re(ᾱβ),  y = 2·Im(ᾱβ),  z = |α|² − |β|²
//!
//! on the unit sphere. The components are the Pauli expectation values
//! ⟨σx⟩, ⟨σy⟩, ⟨σz⟩, so normalized states land exactly on the surface.

use crate::state::QubitState;
use std::f64::consts::PI;
use std::fmt;

/// A point on (or, for mixed input, within) the Bloch sphere
///
/// # Example
/// ```
/// use blochq::{BlochVector, ZaunerSet};
///
/// let set = ZaunerSet::generate();
/// let north = BlochVector::from_state(&set[0]);
/// assert!((north.z - 1.0).abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlochVector {
    /// ⟨σx⟩ component, -1 to 1
    pub x: f64,
    /// ⟨σy⟩ component, -1 to 1
    pub y: f64,
    /// ⟨σz⟩ component, +1 at |0⟩ and -1 at |1⟩
    pub z: f64,
}

/// Spherical coordinates on the Bloch sphere
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project a state onto the sphere
    pub fn from_state(state: &QubitState) -> Self {
        let cross = state.alpha().conj() * state.beta();

        Self {
            x: 2.0 * cross.re,
            y: 2.0 * cross.im,
            z: state.alpha().norm_sqr() - state.beta().norm_sqr(),
        }
    }

    /// Euclidean length; 1.0 for pure states
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether the point lies on the unit sphere within tolerance
    pub fn is_on_sphere(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Convert to spherical coordinates
    ///
    /// The origin has no well-defined direction and maps to θ = φ = 0.
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();
        if r < 1e-10 {
            return BlochAngles { theta: 0.0, phi: 0.0 };
        }

        let theta = (self.z / r).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }
}

impl BlochAngles {
    /// The unit vector at these spherical coordinates
    pub fn to_vector(&self) -> BlochVector {
        BlochVector {
            x: self.theta.sin() * self.phi.cos(),
            y: self.theta.sin() * self.phi.sin(),
            z: self.theta.cos(),
        }
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
