//! Terminal rendering of the Bloch sphere figure
//!
//! The figure is composed in world space ([`scene`]), projected through a
//! fixed orthographic camera ([`camera`]) and painted onto a
//! depth-buffered character canvas ([`canvas`]). Defaults reproduce the
//! reference view: elevation 20°, azimuth 135°, a 20x10 wireframe and
//! axes bounded to [-1, 1].
//!
//! # Example
//! ```
//! use blochq::{RenderConfig, SphereRenderer, ZaunerSet};
//!
//! let set = ZaunerSet::generate();
//! let renderer = SphereRenderer::with_config(
//!     RenderConfig::builder().show_coords(false).build(),
//! );
//! let frame = renderer.render(&set).unwrap();
//! assert!(frame.contains('Z'));
//! ```

pub mod camera;
mod canvas;
pub mod config;
mod scene;

pub use camera::{Camera, Projected};
pub use config::{GlyphStyle, RenderConfig, RenderConfigBuilder};

use crate::bloch::BlochVector;
use crate::fiducial::ZaunerSet;
use crate::Result;
use canvas::{Canvas, Layer};
use scene::Scene;
use std::io;

/// Renders a [`ZaunerSet`] as rays on a wireframe Bloch sphere
pub struct SphereRenderer {
    config: RenderConfig,
}

impl SphereRenderer {
    /// Renderer with the reference configuration
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Renderer with a custom configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Rasterize the figure to a string
    ///
    /// # Errors
    /// Fails if the configured canvas is too small to hold the figure.
    pub fn render(&self, set: &ZaunerSet) -> Result<String> {
        let mut canvas = Canvas::new(self.config.width, self.config.height)?;
        let camera = Camera::new(self.config.elevation_deg, self.config.azimuth_deg);
        let scene = Scene::compose(set, &self.config);
        let glyphs = self.config.style.glyphs();

        // leave view-space margin past the axis tips for the labels
        let extent = self.config.axis_limit * 1.3;
        let (cols, rows) = (canvas.width() as f64 - 1.0, canvas.height() as f64 - 1.0);
        let to_cell = move |point: [f64; 3]| -> (f64, f64, f64) {
            let p = camera.project(point);
            let col = (p.x + extent) / (2.0 * extent) * cols;
            let row = (extent - p.y) / (2.0 * extent) * rows;
            (col, row, p.depth)
        };

        for line in &scene.wires {
            for pair in line.windows(2) {
                canvas.draw_line(to_cell(pair[0]), to_cell(pair[1]), glyphs.wire, Layer::Wire);
            }
        }

        if self.config.show_axes {
            for axis in &scene.axes {
                canvas.draw_line(to_cell(axis.start), to_cell(axis.end), glyphs.axis, Layer::Axis);
            }
        }

        for ray in &scene.rays {
            canvas.draw_line(to_cell(ray.start), to_cell(ray.end), glyphs.ray, Layer::Ray);
        }

        // origin marker on top of the ray endpoints that meet there
        let (col, row, _) = to_cell([0.0, 0.0, 0.0]);
        canvas.put(col, row, glyphs.origin, f64::INFINITY, Layer::Ray);

        if self.config.show_labels {
            for label in &scene.labels {
                let (col, row, _) = to_cell(label.anchor);
                canvas.draw_text(col, row, label.text);
            }
        }

        let mut frame = String::new();
        if !self.config.title.is_empty() {
            let centered = format!("{:^width$}", self.config.title, width = self.config.width);
            frame.push_str(centered.trim_end());
            frame.push_str("\n\n");
        }
        frame.push_str(&canvas.to_string());

        if self.config.show_coords {
            frame.push('\n');
            for (i, state) in set.iter().enumerate() {
                let point = BlochVector::from_state(state);
                frame.push_str(&format!("  |ψ{}⟩ → {}\n", i + 1, point));
            }
        }

        Ok(frame)
    }

    /// Rasterize the figure and write it to the display surface
    ///
    /// # Errors
    /// Propagates canvas errors from [`render`](Self::render) and any
    /// write failure as [`BlochError::Display`](crate::BlochError).
    pub fn display<W: io::Write>(&self, set: &ZaunerSet, out: &mut W) -> Result<()> {
        let frame = self.render(set)?;
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

impl Default for SphereRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ZaunerSet {
    /// Render this set with the reference configuration
    pub fn render_ascii(&self) -> Result<String> {
        SphereRenderer::new().render(self)
    }

    /// Render this set with a custom configuration
    pub fn render_ascii_with_config(&self, config: &RenderConfig) -> Result<String> {
        SphereRenderer::with_config(config.clone()).render(self)
    }
}
