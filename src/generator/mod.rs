//! Recursive degenerate-segment generation and top-level assembly.
//!
//! All randomness comes from the caller's `Rng`. Given the same seeded
//! generator and configuration, the produced string is byte-identical.
//!
//! Recursion is bounded by the configured maximum depth, and every scan over
//! a length budget advances by at least one position per step, so generation
//! always terminates.

mod segment;

pub use segment::DegenerateSegment;

use log::{debug, trace};
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::config::GeneratorConfig;
use crate::envelope::AverageSettings;
use crate::error::Result;

/// Counters collected while a string is assembled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Plain symbols emitted by the top-level loop
    pub literal_symbols: usize,
    pub top_level_segments: usize,
    /// Degenerate segments generated below depth 0
    pub nested_segments: usize,
    pub deepest_depth: usize,
    /// Length as charged by the first-variant accounting rule
    pub accounted_length: usize,
}

/// Generation context for one run: the random stream plus the parameters
/// that stay fixed across recursion depths.
pub struct SegmentGenerator<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    alphabet: Alphabet,
    recursion_probability: f64,
    max_depth: usize,
    stats: GenerationStats,
}

impl<'a, R: Rng + ?Sized> SegmentGenerator<'a, R> {
    pub fn new(
        rng: &'a mut R,
        alphabet: Alphabet,
        recursion_probability: f64,
        max_depth: usize,
    ) -> Self {
        SegmentGenerator {
            rng,
            alphabet,
            recursion_probability,
            max_depth,
            stats: GenerationStats::default(),
        }
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Generates a degenerate segment at `depth`.
    ///
    /// At the maximum depth the result is a single literal. Otherwise the
    /// number of variants is sampled from `settings`, each variant mixing
    /// plain symbols with nested segments generated from `settings.derive()`.
    /// When the sampled count is zero a single literal is returned instead.
    pub fn generate(
        &mut self,
        depth: usize,
        settings: AverageSettings,
        cap: Option<usize>,
    ) -> DegenerateSegment {
        trace!("depth {}", depth);
        self.stats.deepest_depth = self.stats.deepest_depth.max(depth);

        if depth >= self.max_depth {
            let length = settings.sample_length(cap, self.rng);
            return DegenerateSegment::single(self.alphabet.random_literal(length, self.rng));
        }

        let count = settings.sample_count(self.rng);
        let mut variants = Vec::with_capacity(count);
        for _ in 0..count {
            let variant = self.variant(depth, &settings, cap);
            variants.push(variant);
        }

        let mut variants = variants.into_iter();
        match variants.next() {
            Some(first) => DegenerateSegment::new(first, variants.collect()),
            None => {
                let length = settings.sample_length(cap, self.rng);
                DegenerateSegment::single(self.alphabet.random_literal(length, self.rng))
            }
        }
    }

    fn variant(&mut self, depth: usize, settings: &AverageSettings, cap: Option<usize>) -> String {
        let target = settings.sample_length(cap, self.rng);
        let mut variant = String::with_capacity(target);

        let mut i = 0;
        while i < target {
            if self.rng.gen::<f64>() < self.recursion_probability {
                // nested segments are capped by the whole variant target,
                // not by what is left of it
                let nested = self.generate(depth + 1, settings.derive(), Some(target));
                self.stats.nested_segments += 1;
                nested.push_nested(&mut variant);
                i += nested.advance();
            } else {
                variant.push(self.alphabet.random_symbol(self.rng));
                i += 1;
            }
        }

        variant
    }
}

/// Result of a full assembly run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assembly {
    pub eds: String,
    pub stats: GenerationStats,
}

/// Builds a complete EDS string from `config`.
///
/// The configuration is validated first; an invalid one is the only way
/// this can fail.
pub fn assemble<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Assembly> {
    config.validate()?;

    let mut generator = SegmentGenerator::new(
        rng,
        config.alphabet,
        config.recursion_probability,
        config.max_depth,
    );
    let mut eds = String::with_capacity(config.length);
    let mut literal_symbols = 0;
    let mut top_level_segments = 0;

    let mut i = 0;
    while i < config.length {
        if generator.rng.gen::<f64>() < config.probability {
            let segment = generator.generate(0, config.averages, None);
            debug!(
                "degenerate segment at {}: {} variant(s), accounted length {}",
                i,
                segment.variant_count(),
                segment.accounted_length()
            );
            segment.push_top_level(&mut eds);
            top_level_segments += 1;
            i += segment.advance();
        } else {
            eds.push(config.alphabet.random_symbol(generator.rng));
            literal_symbols += 1;
            i += 1;
        }
    }

    let stats = GenerationStats {
        literal_symbols,
        top_level_segments,
        accounted_length: i,
        ..generator.stats
    };
    Ok(Assembly { eds, stats })
}
