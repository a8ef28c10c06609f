//! Zauner fiducial vectors for d = 2, rendered on a terminal Bloch sphere
//!
//! This crate computes the four fixed single-qubit states that form the
//! d = 2 instance of Zauner's conjectured fiducial configuration:
//!
//! |ψ1⟩ = |0⟩, and three states (1/√3)|0⟩ + √(2/3)·e^(i·k·2π/3)|1⟩
//! for k = 0, 1, 2.
//!
//! Each state is projected onto the Bloch sphere and drawn as a ray from
//! the origin, together with a wireframe reference sphere, through a fixed
//! orthographic camera onto a character canvas.
//!
//! # Example
//! ```
//! use blochq::{SphereRenderer, ZaunerSet};
//!
//! let set = ZaunerSet::generate();
//! let frame = SphereRenderer::new().render(&set).unwrap();
//! assert!(frame.contains("Bloch Sphere"));
//! ```

pub mod bloch;
pub mod error;
pub mod fiducial;
pub mod render;
pub mod state;

// Re-exports for convenience
pub use bloch::{BlochAngles, BlochVector};
pub use error::BlochError;
pub use fiducial::ZaunerSet;
pub use num_complex::Complex64;
pub use render::{GlyphStyle, RenderConfig, SphereRenderer};
pub use state::QubitState;

/// Type alias for results in this crate
pub type Result<T> = std::result::Result<T, BlochError>;
