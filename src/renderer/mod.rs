//! Practice set renderer module
//!
//! Turns generated problems into plain text, Markdown, or JSON.

use clap::ValueEnum;

use crate::error::Result;
use crate::models::ClockProblem;

/// Banner printed above a practice set
pub const BANNER: &str = "🕒 Clock Angle Practice Questions";

/// Output format for a practice set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Banner followed by numbered question/answer blocks
    #[default]
    Text,
    /// Markdown list, styled in the terminal when supported
    Markdown,
    /// JSON array of problems
    Json,
}

/// Renderer for practice sets
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a complete practice set
    pub fn render(&self, problems: &[ClockProblem]) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.render_text(problems)),
            OutputFormat::Markdown => Ok(self.render_markdown(problems)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(problems)? + "\n"),
        }
    }

    fn render_text(&self, problems: &[ClockProblem]) -> String {
        let mut output = format!("{}\n\n", BANNER);

        for (i, problem) in problems.iter().enumerate() {
            output.push_str(&format!("Q{}: {}\n", i + 1, problem.question()));
            output.push_str(&render_answer(problem));
            output.push_str("\n\n");
        }

        output
    }

    fn render_markdown(&self, problems: &[ClockProblem]) -> String {
        let mut output = format!("# {}\n\n", BANNER);

        for (i, problem) in problems.iter().enumerate() {
            output.push_str(&format!(
                "{}. {}\n   *Answer:* **{}°**\n\n",
                i + 1,
                problem.question(),
                problem.angle()
            ));
        }

        output.trim_end().to_string()
    }
}

/// Indented answer line shared by every plain-text block
pub fn render_answer(problem: &ClockProblem) -> String {
    format!("   Answer: {}°", problem.angle())
}
