//! Camera and style sweep for the Bloch sphere figure
//!
//! Run with: cargo run --example custom_view

use blochq::{BlochVector, GlyphStyle, RenderConfig, Result, SphereRenderer, ZaunerSet};

fn main() -> Result<()> {
    let set = ZaunerSet::generate();

    println!("=== Zauner Vectors on the Bloch Sphere ===\n");

    // Demo 1: the four states and their coordinates
    println!("1. The d = 2 configuration:");
    for (i, state) in set.iter().enumerate() {
        let point = BlochVector::from_state(state);
        println!("  |ψ{}⟩ = {}  →  {}", i + 1, state, point);
    }

    // Demo 2: the reference view
    println!("\n2. Reference view (elevation 20°, azimuth 135°):\n");
    println!("{}", SphereRenderer::new().render(&set)?);

    // Demo 3: looking straight down the z-axis
    println!("\n3. Top view (elevation 90°):\n");
    let top = RenderConfig::builder()
        .camera(90.0, 0.0)
        .title("Top View")
        .show_coords(false)
        .build();
    println!("{}", set.render_ascii_with_config(&top)?);

    // Demo 4: ASCII-only output for plain terminals
    println!("\n4. ASCII style:\n");
    let ascii = RenderConfig::builder()
        .style(GlyphStyle::Ascii)
        .canvas(48, 24)
        .title("Bloch Sphere (ASCII)")
        .show_coords(false)
        .build();
    println!("{}", set.render_ascii_with_config(&ascii)?);

    // Demo 5: orbiting the azimuth
    println!("\n5. Azimuth sweep:");
    for azim in [0.0, 90.0, 180.0, 270.0] {
        let config = RenderConfig::builder()
            .camera(20.0, azim)
            .canvas(40, 20)
            .title(format!("azimuth {azim}°"))
            .show_coords(false)
            .show_labels(false)
            .build();
        println!("\n{}", set.render_ascii_with_config(&config)?);
    }

    Ok(())
}
