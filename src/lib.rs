#![forbid(unsafe_code)]
//! # codonmatch
//!
//! Codon-aware similarity scoring of a **sample** DNA sequence against a set of
//! **candidates**, reporting either the candidates identical to the sample or a
//! best alignment score for each one.
//!
//! ## How scoring works
//! - The sample slides across each candidate one codon at a time, so the reading
//!   frame is preserved; there are no gaps and no reverse complements.
//! - Each aligned codon pair scores 10 if identical, 5 if synonymous under the
//!   standard genetic code, and otherwise 2 per identical base plus 1 per
//!   Watson–Crick pair.
//! - A candidate's score is its best offset; exact matches short-circuit scoring.
//!
//! ## Modules
//! - [`model`]: symbols, codons, sequences and the [`Report`] type.
//! - [`codons`] and [`data::standard_code`]: the 64-entry codon table.
//! - [`pairing`]: base-pair complementarity.
//! - [`score`]: the ranked codon rules and the windowed search.
//! - [`evaluate`]: perfect-match scan, then per-candidate scoring.
//! - [`seqio`] / [`report`]: reading inputs and rendering results.
//!
//! ## Examples
//! ```rust
//! let report = codonmatch::match_sequences("ATGATG", &["ATGATC", "GGGCCC"]).unwrap();
//! print!("{}", codonmatch::report::render_text(&report));
//! // Candidate number 1 matches with a score of 15
//! // Candidate number 2 matches with a score of 3
//! let perfect = codonmatch::match_sequences("ATG", &["atg"]).unwrap();
//! assert_eq!(perfect, codonmatch::Report::PerfectMatches(vec![1]));
//! ```

pub mod error;
pub mod model;
pub mod codons;
pub mod pairing;
pub mod score;
pub mod evaluate;
pub mod seqio;
pub mod report;
pub mod data { pub mod standard_code; }

pub use error::MatchError;
pub use evaluate::{evaluate, evaluate_with, EvaluateOpts};
pub use model::{Report, Sequence};
pub use score::best_score;

/// Parse raw strings and evaluate them in one call.
///
/// A malformed symbol is reported by position only, without saying which
/// sequence held it; parse with [`Sequence::new`] directly when that matters.
pub fn match_sequences(sample: &str, candidates: &[&str]) -> Result<Report, MatchError> {
    let sample: Sequence = sample.parse()?;
    let candidates = candidates.iter().map(|c| c.parse()).collect::<Result<Vec<Sequence>, _>>()?;
    evaluate(&sample, &candidates)
}

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod end_to_end_tests {
    use super::*;
    use crate::model::CandidateScore;

    #[test]
    fn segment_file_to_text_report() {
        let input = seqio::parse_segments(
            "Sample\nCCCATGGCCTAA\n3\nc1\nTTTCCCATGGCGTAATTT\nc2\nCCCATGGCCTAG\nc3\nAAAAAAAAAAAA\n",
        )
        .unwrap();
        let r = evaluate(&input.sample, &input.candidates).unwrap();
        // c1: offset 3 gives CCC ATG GCG(Ala, synonymous) TAA = 10+10+5+10
        // c2: TAG is a synonymous stop = 10+10+10+5
        // c3: only ATG/AAA (3) and TAA/AAA (5) score, via identities and A/T pairs
        assert_eq!(
            r,
            Report::ScoredMatches(vec![
                CandidateScore { index: 1, score: 35 },
                CandidateScore { index: 2, score: 35 },
                CandidateScore { index: 3, score: 8 },
            ])
        );
        let best = report::best_matches(&r);
        assert_eq!(best.len(), 2);
    }

    #[test]
    fn match_sequences_propagates_bad_symbols() {
        assert_eq!(
            match_sequences("ATG", &["AUG"]).unwrap_err(),
            MatchError::MalformedSymbol { position: 1, found: 'U' }
        );
    }
}
