use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::AngleConversion;

/// Clockangle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of questions in a practice set
    pub questions: usize,

    /// How fractional angles become whole degrees ("truncate" or "round")
    pub angle_conversion: AngleConversion,

    /// Custom question templates; empty means the built-in set
    pub templates: Vec<String>,

    /// Diagram settings
    pub diagram: Diagram,
}

/// Clock diagram configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagram {
    /// Directory where SVG diagrams are written
    pub output_dir: PathBuf,

    /// Width and height of the SVG in pixels
    pub size: u32,

    /// Also sketch the clock in the terminal
    pub show_in_terminal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions: 5,
            angle_conversion: AngleConversion::Truncate,
            templates: Vec::new(),
            diagram: Diagram::default(),
        }
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./diagrams"),
            size: 400,
            show_in_terminal: false,
        }
    }
}
