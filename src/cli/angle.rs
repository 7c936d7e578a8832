use chrono::Local;
use std::path::PathBuf;

use crate::config;
use crate::error::{ClockError, Result};
use crate::generator::Templates;
use crate::models::{ClockProblem, ClockTime};
use crate::renderer::render_answer;

/// Answer the clock-angle question for one time (or the current local time)
pub fn run(config_path: Option<PathBuf>, time: Option<String>, now: bool) -> Result<()> {
    let config = config::resolve(config_path.as_deref())?;

    let time = match (time, now) {
        (_, true) => ClockTime::from_naive(Local::now().time()),
        (Some(time), false) => time.parse()?,
        (None, false) => {
            return Err(ClockError::Time(
                "give a time like '3:15 p.m.' or pass --now".to_string(),
            ))
        }
    };

    let templates = Templates::from_config(&config.templates)?;
    let problem = ClockProblem::for_time(time, templates.first(), config.angle_conversion);

    println!("{}", problem.question());
    println!("{}", render_answer(&problem));

    Ok(())
}
