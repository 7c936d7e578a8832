use std::path::PathBuf;
use tracing::info;

use crate::config;
use crate::error::{ClockError, Result};
use crate::generator::{ProblemGenerator, Templates};
use crate::models::ClockProblem;
use crate::renderer::{OutputFormat, Renderer};

/// Generate a practice set
pub fn run(
    config_path: Option<PathBuf>,
    count: Option<usize>,
    seed: Option<u64>,
    format: OutputFormat,
    diagram: bool,
) -> Result<()> {
    let config = config::resolve(config_path.as_deref())?;

    let count = count.unwrap_or(config.questions);
    if count == 0 {
        return Err(ClockError::Config(
            "--count must be at least 1".to_string(),
        ));
    }

    let templates = Templates::from_config(&config.templates)?;
    let generator = ProblemGenerator::from_seed(seed, templates, config.angle_conversion);

    info!(count, ?seed, conversion = ?config.angle_conversion, "generating practice set");
    let problems: Vec<ClockProblem> = generator.take(count).collect();

    let output = Renderer::new(format).render(&problems)?;
    match format {
        OutputFormat::Markdown => crate::display::print_markdown(&output),
        OutputFormat::Text | OutputFormat::Json => print!("{}", output),
    }

    if diagram {
        let sketch = config.diagram.show_in_terminal && format != OutputFormat::Json;
        for problem in &problems {
            let path = super::draw::render_time(problem.time(), &config.diagram, None, sketch)?;
            // Keep stdout parseable for JSON
            if format == OutputFormat::Json {
                eprintln!("Diagram written to: {}", path.display());
            } else {
                println!("Diagram written to: {}", path.display());
            }
        }
    }

    Ok(())
}
