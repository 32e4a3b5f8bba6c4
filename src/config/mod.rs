//! Generation parameters.
//!
//! A `GeneratorConfig` is fully populated by the caller (the CLI, or a test)
//! and checked once with [`GeneratorConfig::validate`] before any sampling
//! happens.

use log::info;

use crate::alphabet::Alphabet;
use crate::envelope::AverageSettings;
use crate::error::{EdsError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub alphabet: Alphabet,
    /// Probability of starting a degenerate segment at each top-level position
    pub probability: f64,
    /// Envelope used for every depth-0 degenerate segment
    pub averages: AverageSettings,
    /// Probability of nesting a degenerate segment inside a variant
    pub recursion_probability: f64,
    pub max_depth: usize,
    /// Accounted length at which the top-level loop stops
    pub length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            alphabet: Alphabet::Dna,
            probability: 0.18,
            averages: AverageSettings::default(),
            recursion_probability: 0.1,
            max_depth: 5,
            length: 1000,
        }
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(EdsError::InvalidProbability { name, value });
    }
    Ok(())
}

fn check_parameter(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EdsError::InvalidParameter { name, value });
    }
    Ok(())
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        check_probability("probability", self.probability)?;
        check_probability("recursion probability", self.recursion_probability)?;
        check_parameter("length mean", self.averages.length_mean)?;
        check_parameter("length deviation", self.averages.length_deviation)?;
        check_parameter("count mean", self.averages.count_mean)?;
        check_parameter("count deviation", self.averages.count_deviation)?;
        Ok(())
    }

    /// Logs the resolved parameters, one per line.
    pub fn log_summary(&self) {
        info!("  alphabet: {}", self.alphabet);
        info!("  degenerate segment probability: {}", self.probability);
        info!("  gauss avg. length: {}", self.averages.length_mean);
        info!("  gauss standard deviation length: {}", self.averages.length_deviation);
        info!("  gauss avg. number: {}", self.averages.count_mean);
        info!("  gauss standard deviation number: {}", self.averages.count_deviation);
        info!("  recursive segment probability: {}", self.recursion_probability);
        info!("  maximum recursion depth: {}", self.max_depth);
        info!("  EDS length: {}", self.length);
    }
}
