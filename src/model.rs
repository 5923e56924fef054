//! Core types for **symbols**, **codons**, **sequences** and **reports**.
//!
//! This module holds the data model used across the crate. A [`Sequence`] can
//! only be built from bytes that are all `A|C|G|T` (either case), so everything
//! downstream of construction works on validated [`Symbol`]s and never has to
//! handle an unknown letter.
//!
//! # Examples
//! ```
//! use codonmatch::model::Sequence;
//! let s: Sequence = "atgAT".parse().unwrap();
//! assert_eq!(s.to_string(), "ATGAT");
//! assert_eq!(s.usable_codons(), 1);
//! ```
use core::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MatchError;

/// One nucleotide letter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Symbol { A, C, G, T }

impl Symbol {
    /// Parse a single byte, case-insensitively.
    #[inline]
    pub fn from_byte(b: u8) -> Option<Symbol> {
        match b {
            b'A' | b'a' => Some(Symbol::A),
            b'C' | b'c' => Some(Symbol::C),
            b'G' | b'g' => Some(Symbol::G),
            b'T' | b't' => Some(Symbol::T),
            _ => None,
        }
    }

    /// Uppercase ASCII letter.
    #[inline]
    pub fn as_byte(self) -> u8 {
        match self {
            Symbol::A => b'A',
            Symbol::C => b'C',
            Symbol::G => b'G',
            Symbol::T => b'T',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_byte() as char) }
}

/// Three symbols read together; the unit of translation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Codon(pub [Symbol; 3]);

impl Codon {
    /// Build a codon from exactly three valid bytes.
    ///
    /// ```
    /// use codonmatch::model::Codon;
    /// assert!(Codon::new(b"tGa").is_some());
    /// assert!(Codon::new(b"TG").is_none());
    /// assert!(Codon::new(b"TGN").is_none());
    /// ```
    pub fn new(bytes: &[u8]) -> Option<Codon> {
        match bytes {
            [a, b, c] => Some(Codon([Symbol::from_byte(*a)?, Symbol::from_byte(*b)?, Symbol::from_byte(*c)?])),
            _ => None,
        }
    }

    /// Copy a codon out of a slice already known to be three symbols long.
    #[inline]
    pub(crate) fn from_symbols(s: &[Symbol]) -> Codon {
        Codon([s[0], s[1], s[2]])
    }

    pub fn symbols(&self) -> &[Symbol; 3] { &self.0 }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// An immutable, validated nucleotide sequence.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Sequence {
    symbols: Vec<Symbol>,
}

impl Sequence {
    /// Validate `bytes` and normalize them to uppercase symbols.
    ///
    /// The first byte outside `A|C|G|T` is reported as [`MatchError::MalformedSymbol`]
    /// with its 0-based position.
    pub fn new(bytes: &[u8]) -> Result<Sequence, MatchError> {
        let symbols = bytes
            .iter()
            .enumerate()
            .map(|(position, &b)| {
                Symbol::from_byte(b).ok_or(MatchError::MalformedSymbol { position, found: b as char })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Sequence { symbols })
    }

    pub fn len(&self) -> usize { self.symbols.len() }

    pub fn is_empty(&self) -> bool { self.symbols.is_empty() }

    pub fn symbols(&self) -> &[Symbol] { &self.symbols }

    /// Number of whole codons; a trailing 1–2 symbols do not count.
    pub fn usable_codons(&self) -> usize { self.symbols.len() / 3 }

    /// Iterate whole codons in reading frame 0.
    pub fn codons(&self) -> impl Iterator<Item = Codon> + '_ {
        self.symbols.chunks_exact(3).map(Codon::from_symbols)
    }

    /// The `i`-th whole codon, if there is one.
    pub fn codon_at(&self, i: usize) -> Option<Codon> {
        self.symbols.get(i * 3..i * 3 + 3).map(Codon::from_symbols)
    }
}

impl FromStr for Sequence {
    type Err = MatchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Sequence::new(s.as_bytes()) }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.symbols {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

/// The twenty standard amino acids plus the stop signal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum AminoAcid {
    Ala, Arg, Asn, Asp, Cys, Gln, Glu, Gly, His, Ile,
    Leu, Lys, Met, Phe, Pro, Ser, Thr, Trp, Tyr, Val,
    Stop,
}

impl AminoAcid {
    /// IUPAC one-letter code; stop is `*`.
    pub fn one_letter(self) -> char {
        match self {
            AminoAcid::Ala => 'A', AminoAcid::Arg => 'R', AminoAcid::Asn => 'N', AminoAcid::Asp => 'D',
            AminoAcid::Cys => 'C', AminoAcid::Gln => 'Q', AminoAcid::Glu => 'E', AminoAcid::Gly => 'G',
            AminoAcid::His => 'H', AminoAcid::Ile => 'I', AminoAcid::Leu => 'L', AminoAcid::Lys => 'K',
            AminoAcid::Met => 'M', AminoAcid::Phe => 'F', AminoAcid::Pro => 'P', AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T', AminoAcid::Trp => 'W', AminoAcid::Tyr => 'Y', AminoAcid::Val => 'V',
            AminoAcid::Stop => '*',
        }
    }

    pub fn three_letter(self) -> &'static str {
        match self {
            AminoAcid::Ala => "Ala", AminoAcid::Arg => "Arg", AminoAcid::Asn => "Asn", AminoAcid::Asp => "Asp",
            AminoAcid::Cys => "Cys", AminoAcid::Gln => "Gln", AminoAcid::Glu => "Glu", AminoAcid::Gly => "Gly",
            AminoAcid::His => "His", AminoAcid::Ile => "Ile", AminoAcid::Leu => "Leu", AminoAcid::Lys => "Lys",
            AminoAcid::Met => "Met", AminoAcid::Phe => "Phe", AminoAcid::Pro => "Pro", AminoAcid::Ser => "Ser",
            AminoAcid::Thr => "Thr", AminoAcid::Trp => "Trp", AminoAcid::Tyr => "Tyr", AminoAcid::Val => "Val",
            AminoAcid::Stop => "Stop",
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.three_letter()) }
}

/// Best placement of the sample inside one candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Alignment {
    /// 0-based symbol offset into the candidate; always a multiple of 3.
    pub offset: usize,
    /// Sum of per-codon scores at that offset.
    pub score: u32,
}

/// Score attached to a candidate by its 1-based input number.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct CandidateScore {
    /// 1-based position of the candidate in the input.
    pub index: usize,
    pub score: u32,
}

/// Outcome of evaluating one sample against all candidates.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", content = "candidates", rename_all = "snake_case")]
pub enum Report {
    /// 1-based numbers of every candidate identical to the sample, ascending.
    PerfectMatches(Vec<usize>),
    /// One entry per candidate, in input order.
    ScoredMatches(Vec<CandidateScore>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_rejects_first_bad_symbol() {
        let err = Sequence::new(b"ACGNTX").unwrap_err();
        assert_eq!(err, MatchError::MalformedSymbol { position: 3, found: 'N' });
    }

    #[test]
    fn sequence_normalizes_case() {
        let a: Sequence = "acgt".parse().unwrap();
        let b: Sequence = "ACGT".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "ACGT");
    }

    #[test]
    fn codons_skip_trailing_partial() {
        let s: Sequence = "ATGCCCTA".parse().unwrap();
        let cs: Vec<String> = s.codons().map(|c| c.to_string()).collect();
        assert_eq!(cs, vec!["ATG", "CCC"]);
        assert_eq!(s.usable_codons(), 2);
        assert!(s.codon_at(2).is_none());
        assert_eq!(s.codon_at(1).map(|c| c.to_string()).as_deref(), Some("CCC"));
    }

    #[test]
    fn empty_sequence_is_valid_but_empty() {
        let s = Sequence::new(b"").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.usable_codons(), 0);
    }
}
