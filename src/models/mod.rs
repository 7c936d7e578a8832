//! Data models module
//!
//! Defines the clock-face domain: hand angles, times of day, and the
//! ClockProblem value handed to renderers.

pub mod angle;
pub mod problem;
pub mod time;

pub use angle::AngleConversion;
pub use problem::ClockProblem;
pub use time::ClockTime;
