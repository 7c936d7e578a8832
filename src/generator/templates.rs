use rand::Rng;

use crate::error::{ClockError, Result};
use crate::models::problem::TIME_PLACEHOLDER;

/// Built-in question phrasings
pub const DEFAULT_TEMPLATES: [&str; 5] = [
    "What is the angle between the hour and minute hands at {time}?",
    "Find the angle made by the clock hands when the time is {time}.",
    "At {time}, what angle separates the hour hand and the minute hand?",
    "When the clock reads {time}, what is the angle between the hands?",
    "How many degrees separate the hands of a clock at {time}?",
];

/// Non-empty set of phrasing templates, each with exactly one `{time}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates(Vec<String>);

impl Templates {
    pub fn builtin() -> Self {
        Self(DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect())
    }

    /// Use custom templates from configuration, or the built-in set when none are given
    pub fn from_config(custom: &[String]) -> Result<Self> {
        if custom.is_empty() {
            return Ok(Self::builtin());
        }

        for (i, template) in custom.iter().enumerate() {
            let count = template.matches(TIME_PLACEHOLDER).count();
            if count != 1 {
                return Err(ClockError::Config(format!(
                    "template #{} must contain {} exactly once (found {}): {:?}",
                    i + 1,
                    TIME_PLACEHOLDER,
                    count,
                    template
                )));
            }
        }

        Ok(Self(custom.to_vec()))
    }

    /// Pick one template uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.gen_range(0..self.0.len())]
    }

    /// First template, used when a single deterministic phrasing is wanted
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
