//! Problem generator module
//!
//! Draws random times and turns them into phrased practice questions.
//! The random source is passed in, so a seed reproduces a whole set.

mod templates;

pub use templates::Templates;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::{AngleConversion, ClockProblem, ClockTime};

/// Generates clock-angle problems from an explicit random source
pub struct ProblemGenerator<R> {
    rng: R,
    templates: Templates,
    conversion: AngleConversion,
}

impl ProblemGenerator<StdRng> {
    /// Seeded generator when `seed` is given, entropy-seeded otherwise
    pub fn from_seed(seed: Option<u64>, templates: Templates, conversion: AngleConversion) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, templates, conversion)
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R, templates: Templates, conversion: AngleConversion) -> Self {
        Self {
            rng,
            templates,
            conversion,
        }
    }

    /// Produce one problem
    pub fn generate(&mut self) -> ClockProblem {
        let time: ClockTime = self.rng.gen();
        let template = self.templates.choose(&mut self.rng);
        let problem = ClockProblem::for_time(time, template, self.conversion);

        debug!(
            hour = problem.hour(),
            minute = problem.minute(),
            period = %problem.period(),
            angle = problem.angle(),
            "generated problem"
        );
        problem
    }
}

impl<R: Rng> Iterator for ProblemGenerator<R> {
    type Item = ClockProblem;

    fn next(&mut self) -> Option<ClockProblem> {
        Some(self.generate())
    }
}
