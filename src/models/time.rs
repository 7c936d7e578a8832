use chrono::{NaiveTime, Timelike};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ClockError, Result};

/// Half of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    /// Label used in question text
    pub fn label(self) -> &'static str {
        match self {
            Period::Am => "a.m.",
            Period::Pm => "p.m.",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A 12-hour time of day, as read off a clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    period: Period,
}

impl ClockTime {
    /// Create a time, rejecting hours outside 1..=12 and minutes outside 0..=59
    pub fn new(hour: u8, minute: u8, period: Period) -> Result<Self> {
        if !(1..=12).contains(&hour) {
            return Err(ClockError::Time(format!(
                "hour {} is outside 1..=12",
                hour
            )));
        }
        if minute > 59 {
            return Err(ClockError::Time(format!(
                "minute {} is outside 0..=59",
                minute
            )));
        }
        Ok(Self {
            hour,
            minute,
            period,
        })
    }

    /// Convert a 24-hour wall-clock time (0:05 becomes 12:05 a.m.)
    pub fn from_naive(time: NaiveTime) -> Self {
        let hour24 = time.hour() as u8;
        let period = if hour24 < 12 { Period::Am } else { Period::Pm };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour,
            minute: time.minute() as u8,
            period,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn period(&self) -> Period {
        self.period
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.period)
    }
}

/// Uniform draw: hour, then minute, then period
impl Distribution<ClockTime> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ClockTime {
        let hour = rng.gen_range(1..=12);
        let minute = rng.gen_range(0..=59);
        let period = if rng.gen_bool(0.5) {
            Period::Am
        } else {
            Period::Pm
        };
        ClockTime {
            hour,
            minute,
            period,
        }
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    /// Accepts "3:15 p.m.", "3:15pm", "3:15 AM" or 24-hour "15:15"
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let lower = input.to_ascii_lowercase();

        match split_period(&lower) {
            (clock, Some(period)) => {
                let (hour, minute) = clock
                    .split_once(':')
                    .filter(|(h, m)| is_digits(h) && is_digits(m) && m.len() == 2)
                    .ok_or_else(|| {
                        ClockError::Time(format!("'{}': expected H:MM", input))
                    })?;
                let hour: u8 = hour
                    .parse()
                    .map_err(|_| ClockError::Time(format!("'{}': bad hour", input)))?;
                let minute: u8 = minute
                    .parse()
                    .map_err(|_| ClockError::Time(format!("'{}': bad minute", input)))?;
                ClockTime::new(hour, minute, period)
            }
            (clock, None) => NaiveTime::parse_from_str(clock, "%H:%M")
                .map(ClockTime::from_naive)
                .map_err(|e| ClockError::Time(format!("'{}': {}", input, e))),
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split a trailing a.m./p.m. marker off a lowercased time string
fn split_period(s: &str) -> (&str, Option<Period>) {
    const MARKERS: [(&str, Period); 4] = [
        ("a.m.", Period::Am),
        ("p.m.", Period::Pm),
        ("am", Period::Am),
        ("pm", Period::Pm),
    ];

    for (marker, period) in MARKERS {
        if let Some(rest) = s.strip_suffix(marker) {
            return (rest.trim_end(), Some(period));
        }
    }
    (s, None)
}
