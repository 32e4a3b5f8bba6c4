use rand::Rng;

use std::fmt;
use std::str::FromStr;

use crate::error::EdsError;

const DNA_SYMBOLS: &[u8] = b"ACGT";
const PROTEIN_SYMBOLS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// Symbol set the generated string is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Alphabet {
    #[default]
    Dna,
    Protein,
}

impl Alphabet {
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Dna => DNA_SYMBOLS,
            Alphabet::Protein => PROTEIN_SYMBOLS,
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        symbol.is_ascii() && self.symbols().contains(&(symbol as u8))
    }

    /// Uniformly random symbol of the alphabet.
    pub fn random_symbol<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        let symbols = self.symbols();
        symbols[rng.gen_range(0..symbols.len())] as char
    }

    /// `length` independent symbols; an empty string for `length == 0`.
    pub fn random_literal<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        let mut literal = String::with_capacity(length);
        self.push_random_literal(&mut literal, length, rng);
        literal
    }

    pub(crate) fn push_random_literal<R: Rng + ?Sized>(
        &self,
        buffer: &mut String,
        length: usize,
        rng: &mut R,
    ) {
        for _ in 0..length {
            buffer.push(self.random_symbol(rng));
        }
    }
}

impl FromStr for Alphabet {
    type Err = EdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "dna" => Ok(Alphabet::Dna),
            "p" | "protein" => Ok(Alphabet::Protein),
            _ => Err(EdsError::UnknownAlphabet(s.to_string())),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alphabet::Dna => "D",
            Alphabet::Protein => "P",
        };
        // symbols are ASCII
        write!(f, "{} [{}]", name, String::from_utf8_lossy(self.symbols()))
    }
}
