//! Hand-angle arithmetic
//!
//! All angles are in degrees, measured clockwise from the 12 o'clock mark.

use serde::{Deserialize, Serialize};

/// Degrees the hour hand moves per hour
const HOUR_STEP: f64 = 30.0;
/// Degrees the hour hand creeps per minute
const HOUR_CREEP: f64 = 0.5;
/// Degrees the minute hand moves per minute
const MINUTE_STEP: f64 = 6.0;

/// How the fractional separation is turned into whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleConversion {
    /// Drop the fraction (7.5 becomes 7)
    #[default]
    Truncate,
    /// Round half away from zero (7.5 becomes 8)
    Round,
}

impl AngleConversion {
    /// Convert a separation in `[0, 180]` to whole degrees
    pub fn apply(self, degrees: f64) -> u16 {
        match self {
            AngleConversion::Truncate => degrees.trunc() as u16,
            AngleConversion::Round => degrees.round() as u16,
        }
    }
}

/// Position of the hour hand
pub fn hour_hand_angle(hour: u8, minute: u8) -> f64 {
    f64::from(hour % 12) * HOUR_STEP + f64::from(minute) * HOUR_CREEP
}

/// Position of the minute hand
pub fn minute_hand_angle(minute: u8) -> f64 {
    f64::from(minute) * MINUTE_STEP
}

/// Absolute difference between the two hands, before taking the shorter arc
pub fn raw_difference(hour: u8, minute: u8) -> f64 {
    (hour_hand_angle(hour, minute) - minute_hand_angle(minute)).abs()
}

/// Shorter arc between the hands, always in `[0, 180]`
pub fn separation(hour: u8, minute: u8) -> f64 {
    let raw = raw_difference(hour, minute);
    raw.min(360.0 - raw)
}

/// Whole-degree answer for a time
pub fn hand_angle(hour: u8, minute: u8, conversion: AngleConversion) -> u16 {
    conversion.apply(separation(hour, minute))
}
