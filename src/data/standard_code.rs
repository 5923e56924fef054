//! The **standard genetic code** (NCBI translation table 1).
//!
//! Source: NCBI `gc.prt`, table 1 ("Standard"),
//! <https://ftp.ncbi.nih.gov/entrez/misc/data/gc.prt>.
//!
//! Entries are laid out in NCBI order: first base, then second, then third,
//! each cycling `T, C, A, G`. Row comments name the first two bases.

use crate::model::AminoAcid::{self, *};
use crate::model::Symbol;

/// Base order used to index [`STANDARD_CODE`].
pub const BASE_ORDER: [Symbol; 4] = [Symbol::T, Symbol::C, Symbol::A, Symbol::G];

/// 64 amino-acid assignments, indexed by `16 * b1 + 4 * b2 + b3` over [`BASE_ORDER`].
pub const STANDARD_CODE: [AminoAcid; 64] = [
    Phe, Phe, Leu, Leu,    // TT
    Ser, Ser, Ser, Ser,    // TC
    Tyr, Tyr, Stop, Stop,  // TA
    Cys, Cys, Stop, Trp,   // TG
    Leu, Leu, Leu, Leu,    // CT
    Pro, Pro, Pro, Pro,    // CC
    His, His, Gln, Gln,    // CA
    Arg, Arg, Arg, Arg,    // CG
    Ile, Ile, Ile, Met,    // AT
    Thr, Thr, Thr, Thr,    // AC
    Asn, Asn, Lys, Lys,    // AA
    Ser, Ser, Arg, Arg,    // AG
    Val, Val, Val, Val,    // GT
    Ala, Ala, Ala, Ala,    // GC
    Asp, Asp, Glu, Glu,    // GA
    Gly, Gly, Gly, Gly,    // GG
];
