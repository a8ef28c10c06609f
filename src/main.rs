//! Renders the four d = 2 Zauner vectors as rays on a terminal Bloch sphere.
//!
//! Generates the fixed fiducial configuration, projects each state onto
//! the sphere and writes the figure to stdout. Exits non-zero with a
//! message on stderr if the display surface rejects the frame.

use blochq::{Result, SphereRenderer, ZaunerSet};
use std::io::{self, Write};
use std::process::ExitCode;

fn run() -> Result<()> {
    let set = ZaunerSet::generate();
    let renderer = SphereRenderer::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer.display(&set, &mut out)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("blochq: {err}");
            ExitCode::FAILURE
        }
    }
}
