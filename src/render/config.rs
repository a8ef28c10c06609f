//! Render configuration
//!
//! Use `RenderConfig::default()` for the reference figure or
//! `RenderConfig::builder()` for fine-grained control.

/// Glyph style for the rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Unicode glyphs (default, best appearance)
    #[default]
    Unicode,
    /// ASCII-only glyphs for maximum compatibility
    Ascii,
}

/// Characters used for each scene element
#[derive(Debug, Clone, Copy)]
pub(crate) struct GlyphSet {
    pub ray: char,
    pub wire: char,
    pub axis: char,
    pub origin: char,
}

impl GlyphStyle {
    pub(crate) fn glyphs(self) -> GlyphSet {
        match self {
            GlyphStyle::Unicode => GlyphSet {
                ray: '●',
                wire: '·',
                axis: '∙',
                origin: '┼',
            },
            GlyphStyle::Ascii => GlyphSet {
                ray: '*',
                wire: '.',
                axis: '\'',
                origin: '+',
            },
        }
    }
}

/// Configuration for the sphere renderer
///
/// Defaults reproduce the reference figure: a 64x32 canvas viewed from
/// elevation 20° / azimuth 135°, a 20x10 wireframe, labeled axes bounded
/// to [-1, 1] and the fixed title.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in character cells
    pub width: usize,
    /// Canvas height in character cells
    pub height: usize,
    /// Camera elevation above the xy-plane, degrees
    pub elevation_deg: f64,
    /// Camera azimuth around the z-axis, degrees
    pub azimuth_deg: f64,
    /// Wireframe meridian count (samples of the azimuthal parameter)
    pub meridians: usize,
    /// Wireframe parallel count (samples of the polar parameter)
    pub parallels: usize,
    /// Glyph style
    pub style: GlyphStyle,
    /// Draw the coordinate axes
    pub show_axes: bool,
    /// Draw X/Y/Z labels at the positive axis tips
    pub show_labels: bool,
    /// List each state and its Bloch coordinates beneath the figure
    pub show_coords: bool,
    /// Title printed above the figure
    pub title: String,
    /// Axis bound; axes span [-limit, limit]
    pub axis_limit: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            elevation_deg: 20.0,
            azimuth_deg: 135.0,
            meridians: 20,
            parallels: 10,
            style: GlyphStyle::Unicode,
            show_axes: true,
            show_labels: true,
            show_coords: true,
            title: "Zauner's Conjecture Vectors on the Bloch Sphere".to_string(),
            axis_limit: 1.0,
        }
    }
}

impl RenderConfig {
    /// Create a new builder for RenderConfig
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: RenderConfig::default(),
        }
    }
}

/// Builder for [`RenderConfig`]
///
/// # Example
/// ```
/// use blochq::{GlyphStyle, RenderConfig};
///
/// let config = RenderConfig::builder()
///     .canvas(48, 24)
///     .camera(30.0, 45.0)
///     .style(GlyphStyle::Ascii)
///     .build();
/// assert_eq!(config.width, 48);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    /// Set canvas dimensions in character cells
    pub fn canvas(mut self, width: usize, height: usize) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set camera orientation in degrees
    pub fn camera(mut self, elevation_deg: f64, azimuth_deg: f64) -> Self {
        self.config.elevation_deg = elevation_deg;
        self.config.azimuth_deg = azimuth_deg;
        self
    }

    /// Set wireframe angular resolution
    pub fn sphere_resolution(mut self, meridians: usize, parallels: usize) -> Self {
        self.config.meridians = meridians;
        self.config.parallels = parallels;
        self
    }

    /// Set the glyph style
    pub fn style(mut self, style: GlyphStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Toggle the coordinate axes
    pub fn show_axes(mut self, show: bool) -> Self {
        self.config.show_axes = show;
        self
    }

    /// Toggle axis labels
    pub fn show_labels(mut self, show: bool) -> Self {
        self.config.show_labels = show;
        self
    }

    /// Toggle the per-state coordinate listing
    pub fn show_coords(mut self, show: bool) -> Self {
        self.config.show_coords = show;
        self
    }

    /// Set the figure title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> RenderConfig {
        self.config
    }
}
