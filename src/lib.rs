//! Random Elastic Degenerate String (EDS) generator.
//!
//! An EDS interleaves literal runs with degenerate segments such as
//! `{ACG,T,{A,C}GT}`; variants may nest further segments up to a maximum
//! depth. The output is meant as synthetic benchmark input for pattern
//! matching over degenerate text.

pub mod alphabet;
pub mod config;
pub mod envelope;
pub mod error;
pub mod generator;
pub mod io;
pub mod logger;

pub use alphabet::Alphabet;
pub use config::GeneratorConfig;
pub use envelope::AverageSettings;
pub use error::{EdsError, Result};
pub use generator::{assemble, Assembly, DegenerateSegment, GenerationStats, SegmentGenerator};
