use serde::Serialize;

use super::angle::{self, AngleConversion};
use super::time::{ClockTime, Period};

/// Placeholder substituted with the formatted time in question templates
pub const TIME_PLACEHOLDER: &str = "{time}";

/// One practice question with its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockProblem {
    /// Filled-in question text
    question: String,
    /// Whole degrees between the hands, in `[0, 180]`
    angle: u16,
    #[serde(flatten)]
    time: ClockTime,
}

impl ClockProblem {
    /// Build the problem for a chosen time using one phrasing template
    pub fn for_time(time: ClockTime, template: &str, conversion: AngleConversion) -> Self {
        let question = template.replacen(TIME_PLACEHOLDER, &time.to_string(), 1);
        let angle = angle::hand_angle(time.hour(), time.minute(), conversion);

        Self {
            question,
            angle,
            time,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn angle(&self) -> u16 {
        self.angle
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    pub fn period(&self) -> Period {
        self.time.period()
    }
}
