use rand::Rng;
use rand_distr::StandardNormal;

/// Gaussian parameters for variant length and variant count at one
/// recursion depth.
///
/// The value is never mutated; each nested level works on its own copy
/// obtained through [`AverageSettings::derive`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AverageSettings {
    pub length_mean: f64,
    pub length_deviation: f64,
    pub count_mean: f64,
    pub count_deviation: f64,
}

impl Default for AverageSettings {
    fn default() -> Self {
        AverageSettings {
            length_mean: 4.0,
            length_deviation: 0.5,
            count_mean: 3.0,
            count_deviation: 0.5,
        }
    }
}

// floor(|mean + deviation * z|), z ~ N(0, 1)
fn sample_clipped<R: Rng + ?Sized>(mean: f64, deviation: f64, rng: &mut R) -> usize {
    let z: f64 = rng.sample(StandardNormal);
    (mean + deviation * z).abs().floor() as usize
}

// log2 shrinks anything >= 1 and leaves smaller values alone
fn shrink(mean: f64) -> f64 {
    if mean >= 1.0 {
        mean.log2()
    } else {
        mean
    }
}

impl AverageSettings {
    /// Number of variants of a degenerate segment. Zero is a valid draw.
    pub fn sample_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        sample_clipped(self.count_mean, self.count_deviation, rng)
    }

    /// Length of a variant or literal, clamped to `cap` when given.
    pub fn sample_length<R: Rng + ?Sized>(&self, cap: Option<usize>, rng: &mut R) -> usize {
        let length = sample_clipped(self.length_mean, self.length_deviation, rng);
        match cap {
            Some(cap) if length > cap => cap,
            _ => length,
        }
    }

    /// Settings for the next recursion depth.
    pub fn derive(&self) -> AverageSettings {
        AverageSettings {
            length_mean: shrink(self.length_mean),
            count_mean: shrink(self.count_mean),
            ..*self
        }
    }
}
