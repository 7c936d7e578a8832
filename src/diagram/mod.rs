//! Clock diagram module
//!
//! Computes clock-face geometry once and hands it to two backends:
//! a standalone SVG document and a character sketch for the terminal.
//!
//! Coordinates are unit-based with the origin at the dial center and y up.
//! Angles follow the plotting convention: degrees counter-clockwise from
//! the 3 o'clock axis.

pub mod svg;
pub mod text;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ClockError, Result};
use crate::models::angle;

/// Dial radius
pub const DIAL_RADIUS: f64 = 1.0;
/// Radius at which hour numbers sit
pub const LABEL_RADIUS: f64 = 0.9;
/// Hour hand length
pub const HOUR_HAND_LENGTH: f64 = 0.5;
/// Minute hand length
pub const MINUTE_HAND_LENGTH: f64 = 0.8;

/// A point in unit coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Point at `radius` along `degrees` (plotting convention)
    pub fn polar(radius: f64, degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            x: radius * radians.cos(),
            y: radius * radians.sin(),
        }
    }
}

/// A clock hand drawn from the center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    pub angle: f64,
    pub length: f64,
}

impl Hand {
    pub fn tip(&self) -> Point {
        Point::polar(self.length, self.angle)
    }
}

/// Hour number and where to print it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourLabel {
    pub number: u8,
    pub position: Point,
}

/// Everything needed to draw one clock
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    pub hour: u8,
    pub minute: u8,
    pub hour_hand: Hand,
    pub minute_hand: Hand,
    pub labels: Vec<HourLabel>,
}

impl ClockFace {
    pub fn new(hour: u8, minute: u8) -> Self {
        let labels = (0..12u8)
            .map(|h| HourLabel {
                number: if h == 0 { 12 } else { h },
                position: Point::polar(LABEL_RADIUS, 90.0 - f64::from(h) * 30.0),
            })
            .collect();

        Self {
            hour,
            minute,
            hour_hand: Hand {
                angle: hour_hand_plot_angle(hour, minute),
                length: HOUR_HAND_LENGTH,
            },
            minute_hand: Hand {
                angle: minute_hand_plot_angle(minute),
                length: MINUTE_HAND_LENGTH,
            },
            labels,
        }
    }

    /// Default SVG file name for this face
    pub fn file_name(&self) -> String {
        format!("clock-{}-{:02}.svg", self.hour, self.minute)
    }
}

/// Hour hand angle: `90 - (hour mod 12) * 30 - minute * 0.5`
pub fn hour_hand_plot_angle(hour: u8, minute: u8) -> f64 {
    90.0 - angle::hour_hand_angle(hour, minute)
}

/// Minute hand angle: `90 - minute * 6`
pub fn minute_hand_plot_angle(minute: u8) -> f64 {
    90.0 - angle::minute_hand_angle(minute)
}

/// Render `face` as SVG and write it to `path`, creating parent directories
pub fn write_svg(face: &ClockFace, size: u32, path: &Path) -> Result<PathBuf> {
    let document = svg::render(face, size);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ClockError::Diagram(format!("cannot create '{}': {}", parent.display(), e))
        })?;
    }

    fs::write(path, document)
        .map_err(|e| ClockError::Diagram(format!("cannot write '{}': {}", path.display(), e)))?;

    Ok(path.to_path_buf())
}
