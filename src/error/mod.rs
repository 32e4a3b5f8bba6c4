//! Error types for edsgen.
//!
//! Sampling never fails: negative draws, cap overruns and empty variant sets
//! are all recovered where they happen. The only failures are a bad
//! configuration, rejected before generation starts, and I/O while writing
//! the result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdsError {
    /// A probability parameter outside `[0, 1]`
    #[error("{name} must be in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// A mean or deviation that is negative or not finite
    #[error("{name} must be a finite non-negative number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Alphabet selector other than DNA or Protein
    #[error("unknown alphabet '{0}' (valid values: D for DNA, P for Protein)")]
    UnknownAlphabet(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The temporary output file could not replace the destination
    #[error("could not persist output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, EdsError>;
