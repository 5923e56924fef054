//! Watson–Crick base pairing.
//!
//! Pairing is **not** equality: `A`/`A` is not a pair. The scorer checks
//! identity first and only then asks whether two symbols pair.
//!
//! # Examples
//! ```
//! use codonmatch::pairing::is_complementary;
//! assert!(is_complementary(b'a', b'T'));
//! assert!(!is_complementary(b'G', b'G'));
//! assert!(!is_complementary(b'N', b'N'));
//! ```
use crate::model::Symbol;

impl Symbol {
    /// The base this symbol pairs with (`A`↔`T`, `C`↔`G`).
    #[inline]
    pub fn complement(self) -> Symbol {
        match self {
            Symbol::A => Symbol::T,
            Symbol::T => Symbol::A,
            Symbol::C => Symbol::G,
            Symbol::G => Symbol::C,
        }
    }

    #[inline]
    pub fn pairs_with(self, other: Symbol) -> bool {
        self.complement() == other
    }
}

/// `true` iff `{x, y}` is `{A, T}` or `{C, G}`, case-insensitively.
///
/// Anything outside `A|C|G|T` never pairs.
#[inline]
pub fn is_complementary(x: u8, y: u8) -> bool {
    match (Symbol::from_byte(x), Symbol::from_byte(y)) {
        (Some(a), Some(b)) => a.pairs_with(b),
        _ => false,
    }
}
