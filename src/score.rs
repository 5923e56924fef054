//! Codon-granular alignment scoring.
//!
//! A sample is slid across a candidate one codon (three symbols) at a time so
//! the reading frame never shifts. At each offset every whole sample codon is
//! compared with the candidate codon beneath it, and the first applicable rule
//! in [`RANKED_RULES`] decides the pair's score:
//!
//! | rule | condition | score |
//! |---|---|---|
//! | [`CodonRule::ExactCodon`] | all three symbols identical | 10 |
//! | [`CodonRule::SameAminoAcid`] | both codons encode the same amino acid | 5 |
//! | [`CodonRule::Nucleotidewise`] | per symbol: identical +2, paired +1 | 0..=6 |
//!
//! Trailing sample symbols past the last whole codon never take part.
//!
//! # Examples
//! ```
//! use codonmatch::model::Sequence;
//! use codonmatch::score::{best_alignment, best_score};
//! let sample: Sequence = "GGGAAA".parse().unwrap();
//! let candidate: Sequence = "TTTGGGAAA".parse().unwrap();
//! let aln = best_alignment(&sample, &candidate).unwrap();
//! assert_eq!((aln.offset, aln.score), (3, 20));
//! assert_eq!(best_score(&sample, &candidate).unwrap(), 20);
//! ```
use crate::codons::amino_acid_for;
use crate::error::{MatchError, Result, Role};
use crate::model::{Alignment, Codon, Sequence, Symbol};

pub const EXACT_CODON: u32 = 10;
pub const SAME_AMINO_ACID: u32 = 5;
pub const IDENTICAL_BASE: u32 = 2;
pub const PAIRED_BASE: u32 = 1;

/// Highest score a single codon pair can earn.
pub const MAX_CODON_SCORE: u32 = EXACT_CODON;

/// Codon-pair comparison tiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CodonRule {
    ExactCodon,
    SameAminoAcid,
    Nucleotidewise,
}

/// Rules in priority order. The first one that applies wins.
pub const RANKED_RULES: [CodonRule; 3] = [CodonRule::ExactCodon, CodonRule::SameAminoAcid, CodonRule::Nucleotidewise];

impl CodonRule {
    /// Score `a` against `b` under this rule alone, or `None` if the rule does not apply.
    ///
    /// [`CodonRule::Nucleotidewise`] always applies.
    pub fn apply(self, a: Codon, b: Codon) -> Option<u32> {
        match self {
            CodonRule::ExactCodon => (a == b).then_some(EXACT_CODON),
            CodonRule::SameAminoAcid => (amino_acid_for(a) == amino_acid_for(b)).then_some(SAME_AMINO_ACID),
            CodonRule::Nucleotidewise => {
                Some(a.0.iter().zip(b.0.iter()).map(|(&x, &y)| nucleotide_score(x, y)).sum())
            }
        }
    }
}

/// Per-symbol contribution inside the nucleotide-wise tier.
#[inline]
pub fn nucleotide_score(x: Symbol, y: Symbol) -> u32 {
    if x == y {
        IDENTICAL_BASE
    } else if x.pairs_with(y) {
        PAIRED_BASE
    } else {
        0
    }
}

/// The rule that decided `a` vs `b`, and the score it gave.
pub fn classify_codon_pair(a: Codon, b: Codon) -> (CodonRule, u32) {
    RANKED_RULES
        .iter()
        .find_map(|&rule| rule.apply(a, b).map(|s| (rule, s)))
        // unreachable: the last rule always applies
        .unwrap_or((CodonRule::Nucleotidewise, 0))
}

#[inline]
pub fn score_codon_pair(a: Codon, b: Codon) -> u32 {
    classify_codon_pair(a, b).1
}

/// Reject pairs the window search is not defined for.
pub fn check_pair(sample: &Sequence, candidate: &Sequence) -> Result<()> {
    if sample.is_empty() {
        return Err(MatchError::EmptySequence(Role::Sample));
    }
    if candidate.is_empty() {
        return Err(MatchError::EmptySequence(Role::Candidate));
    }
    if sample.len() > candidate.len() {
        return Err(MatchError::LengthViolation {
            role: Role::Candidate,
            sample_len: sample.len(),
            candidate_len: candidate.len(),
        });
    }
    Ok(())
}

/// Codon-aligned offsets at which the sample's whole codons fit inside the candidate.
///
/// Offsets run `0, 3, 6, ...` while `offset + 3 * usable_codons <= candidate.len()`,
/// so equal-length inputs yield exactly one offset and a sample one codon shorter
/// yields two.
pub fn offsets(sample: &Sequence, candidate: &Sequence) -> impl Iterator<Item = usize> {
    let window = sample.usable_codons() * 3;
    let last = candidate.len().checked_sub(window);
    last.into_iter().flat_map(|last| (0..=last).step_by(3))
}

/// Score of the sample placed at `offset` in the candidate.
///
/// Codons that would run past the candidate's end are not scored.
pub fn alignment_score(sample: &Sequence, candidate: &Sequence, offset: usize) -> u32 {
    let window = candidate.symbols().get(offset..).unwrap_or(&[]);
    sample
        .symbols()
        .chunks_exact(3)
        .zip(window.chunks_exact(3))
        .map(|(a, b)| score_codon_pair(Codon::from_symbols(a), Codon::from_symbols(b)))
        .sum()
}

/// Slide `sample` across `candidate` and return the best-scoring offset.
///
/// Ties go to the lowest offset.
pub fn best_alignment(sample: &Sequence, candidate: &Sequence) -> Result<Alignment> {
    check_pair(sample, candidate)?;
    let mut best = Alignment { offset: 0, score: 0 };
    for offset in offsets(sample, candidate) {
        let score = alignment_score(sample, candidate, offset);
        if score > best.score {
            best = Alignment { offset, score };
        }
    }
    Ok(best)
}

/// Best alignment score of `sample` anywhere (codon-aligned) inside `candidate`.
pub fn best_score(sample: &Sequence, candidate: &Sequence) -> Result<u32> {
    best_alignment(sample, candidate).map(|a| a.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence { s.parse().unwrap() }
    fn codon(s: &str) -> Codon { Codon::new(s.as_bytes()).unwrap() }

    #[test]
    fn exact_codon_wins_over_lower_tiers() {
        assert_eq!(classify_codon_pair(codon("ATG"), codon("atg")), (CodonRule::ExactCodon, 10));
    }

    #[test]
    fn synonymous_codons_score_five() {
        // TTA and CTG are both Leu; nucleotide-wise they would only score 2
        assert_eq!(classify_codon_pair(codon("TTA"), codon("CTG")), (CodonRule::SameAminoAcid, 5));
        assert_eq!(CodonRule::Nucleotidewise.apply(codon("TTA"), codon("CTG")), Some(2));
        assert_eq!(score_codon_pair(codon("TAA"), codon("TGA")), 5);
    }

    #[test]
    fn nucleotidewise_mixes_identity_and_pairing() {
        // Met vs Ile: A=A, T=T, G/C pair
        assert_eq!(classify_codon_pair(codon("ATG"), codon("ATC")), (CodonRule::Nucleotidewise, 5));
        // Met vs Gly: only the last G matches
        assert_eq!(score_codon_pair(codon("ATG"), codon("GGG")), 2);
        // Lys vs Phe: every position pairs
        assert_eq!(score_codon_pair(codon("AAA"), codon("TTT")), 3);
        // Pro vs Lys: nothing in common
        assert_eq!(score_codon_pair(codon("CCC"), codon("AAA")), 0);
    }

    #[test]
    fn rules_are_ranked_exact_first() {
        assert_eq!(RANKED_RULES[0], CodonRule::ExactCodon);
        assert_eq!(RANKED_RULES[1], CodonRule::SameAminoAcid);
        assert_eq!(RANKED_RULES[2], CodonRule::Nucleotidewise);
        assert_eq!(CodonRule::ExactCodon.apply(codon("ATG"), codon("ATC")), None);
        assert_eq!(CodonRule::SameAminoAcid.apply(codon("ATG"), codon("ATC")), None);
    }

    #[test]
    fn two_codon_scenario() {
        let sample = seq("ATGATG");
        assert_eq!(best_score(&sample, &seq("ATGATC")).unwrap(), 15);
        assert_eq!(best_score(&sample, &seq("GGGCCC")).unwrap(), 3);
    }

    #[test]
    fn equal_lengths_evaluate_only_offset_zero() {
        let s = seq("ACGTAC");
        assert_eq!(offsets(&s, &seq("TTTTTT")).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn one_codon_shorter_evaluates_two_offsets() {
        let sample = seq("GGGAAA");
        let candidate = seq("TTTGGGAAA");
        assert_eq!(offsets(&sample, &candidate).collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(alignment_score(&sample, &candidate, 0), 0);
        assert_eq!(alignment_score(&sample, &candidate, 3), 20);
        assert_eq!(best_alignment(&sample, &candidate).unwrap(), Alignment { offset: 3, score: 20 });
    }

    #[test]
    fn ties_keep_lowest_offset() {
        let a = best_alignment(&seq("AAA"), &seq("AAAAAAAAA")).unwrap();
        assert_eq!(a, Alignment { offset: 0, score: 10 });
    }

    #[test]
    fn trailing_symbols_are_ignored() {
        let candidate = seq("CCCGGGAAATTT");
        assert_eq!(
            best_score(&seq("GGGAAATT"), &candidate).unwrap(),
            best_score(&seq("GGGAAA"), &candidate).unwrap()
        );
        // window is 6 symbols, not 8, so offset 6 still fits
        assert_eq!(offsets(&seq("GGGAAATT"), &candidate).collect::<Vec<_>>(), vec![0, 3, 6]);
    }

    #[test]
    fn sample_shorter_than_a_codon_scores_zero() {
        assert_eq!(best_score(&seq("AT"), &seq("ATGATG")).unwrap(), 0);
    }

    #[test]
    fn length_and_emptiness_are_checked() {
        assert_eq!(
            best_score(&seq("ATGATG"), &seq("ATG")).unwrap_err(),
            MatchError::LengthViolation { role: Role::Candidate, sample_len: 6, candidate_len: 3 }
        );
        assert_eq!(best_score(&seq(""), &seq("ATG")).unwrap_err(), MatchError::EmptySequence(Role::Sample));
        assert_eq!(best_score(&seq("A"), &seq("")).unwrap_err(), MatchError::EmptySequence(Role::Candidate));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(min: usize, max: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'a'), Just(b'g')],
            min..=max,
        )
    }

    fn codon_bytes() -> impl Strategy<Value = Vec<u8>> { dna(3, 3) }

    proptest! {
        #[test]
        fn self_match_is_perfect(s in dna(1, 60)) {
            let s = Sequence::new(&s).unwrap();
            prop_assert_eq!(best_score(&s, &s).unwrap(), s.usable_codons() as u32 * EXACT_CODON);
        }

        #[test]
        fn codon_pair_score_in_range(a in codon_bytes(), b in codon_bytes()) {
            let (a, b) = (Codon::new(&a).unwrap(), Codon::new(&b).unwrap());
            let (rule, s) = classify_codon_pair(a, b);
            prop_assert!(s <= MAX_CODON_SCORE);
            if a == b {
                prop_assert_eq!((rule, s), (CodonRule::ExactCodon, EXACT_CODON));
            } else {
                prop_assert!(s <= 6 || rule == CodonRule::SameAminoAcid);
            }
        }

        #[test]
        fn total_score_bounded(s in dna(1, 30), extra in dna(0, 30)) {
            let sample = Sequence::new(&s).unwrap();
            let mut c = s.clone();
            c.extend_from_slice(&extra);
            c.reverse();
            let candidate = Sequence::new(&c).unwrap();
            let score = best_score(&sample, &candidate).unwrap();
            prop_assert!(score <= sample.usable_codons() as u32 * EXACT_CODON);
        }

        #[test]
        fn truncating_to_whole_codons_changes_nothing(s in dna(3, 30), tail in dna(0, 30)) {
            let mut c = tail.clone();
            c.extend_from_slice(&s);
            let candidate = Sequence::new(&c).unwrap();
            let sample = Sequence::new(&s).unwrap();
            let trimmed = Sequence::new(&s[..s.len() / 3 * 3]).unwrap();
            prop_assert_eq!(
                best_score(&sample, &candidate).unwrap(),
                best_score(&trimmed, &candidate).unwrap()
            );
        }
    }
}
