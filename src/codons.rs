//! Codon → amino-acid lookup over the standard genetic code.
//!
//! The table itself lives in [`crate::data::standard_code`]; this module maps a
//! [`Codon`] onto it. Lookup is total: a `Codon` can only hold valid symbols, so
//! every one of the 64 combinations has exactly one entry.
//!
//! # Examples
//! ```
//! use codonmatch::codons::amino_acid_for;
//! use codonmatch::model::{AminoAcid, Codon};
//! assert_eq!(amino_acid_for(Codon::new(b"ATG").unwrap()), AminoAcid::Met);
//! assert_eq!(amino_acid_for(Codon::new(b"taa").unwrap()), AminoAcid::Stop);
//! ```
use crate::data::standard_code::{BASE_ORDER, STANDARD_CODE};
use crate::model::{AminoAcid, Codon, Sequence, Symbol};

#[inline]
fn base_index(s: Symbol) -> usize {
    match s {
        Symbol::T => 0,
        Symbol::C => 1,
        Symbol::A => 2,
        Symbol::G => 3,
    }
}

#[inline]
fn codon_index(codon: Codon) -> usize {
    let [first, second, third] = codon.0;
    base_index(first) * 16 + base_index(second) * 4 + base_index(third)
}

/// Amino acid encoded by `codon`.
#[inline]
pub fn amino_acid_for(codon: Codon) -> AminoAcid {
    STANDARD_CODE[codon_index(codon)]
}

/// All 64 `(codon, amino acid)` entries in table order (`TTT`, `TTC`, ... `GGG`).
pub fn codon_table() -> impl Iterator<Item = (Codon, AminoAcid)> {
    (0..STANDARD_CODE.len()).map(|i| {
        let codon = Codon([BASE_ORDER[i / 16], BASE_ORDER[(i / 4) % 4], BASE_ORDER[i % 4]]);
        (codon, STANDARD_CODE[i])
    })
}

/// Translate every whole codon of `seq` in frame 0; a trailing partial codon is dropped.
pub fn translate(seq: &Sequence) -> Vec<AminoAcid> {
    seq.codons().map(amino_acid_for).collect()
}

/// One-letter protein string for `seq`, e.g. `"M*"` for `ATGTAA`.
pub fn translate_to_string(seq: &Sequence) -> String {
    seq.codons().map(|c| amino_acid_for(c).one_letter()).collect()
}
