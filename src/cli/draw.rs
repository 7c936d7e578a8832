use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{self, Diagram};
use crate::diagram::{self, ClockFace};
use crate::error::Result;
use crate::models::ClockTime;

/// Write a clock diagram for one time
pub fn run(
    config_path: Option<PathBuf>,
    time: String,
    output: Option<PathBuf>,
    terminal: bool,
) -> Result<()> {
    let config = config::resolve(config_path.as_deref())?;
    let time: ClockTime = time.parse()?;

    let sketch = terminal || config.diagram.show_in_terminal;
    let path = render_time(time, &config.diagram, output.as_deref(), sketch)?;
    println!("Diagram written to: {}", path.display());

    Ok(())
}

/// Write the SVG for `time`, optionally sketching it on stdout first.
///
/// Without an explicit `output`, the file lands in `settings.output_dir`.
pub fn render_time(
    time: ClockTime,
    settings: &Diagram,
    output: Option<&Path>,
    sketch: bool,
) -> Result<PathBuf> {
    let face = ClockFace::new(time.hour(), time.minute());
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.output_dir.join(face.file_name()));

    if sketch {
        println!("{}\n", diagram::text::render(&face));
    }

    debug!(time = %time, path = %path.display(), "writing diagram");
    diagram::write_svg(&face, settings.size, &path)
}
