//! Evaluate a sample against every candidate.
//!
//! Evaluation runs in two phases:
//! 1. [`Phase::Scanning`]: every candidate is compared for exact identity with the
//!    sample. If any match, the report lists all of them and scoring never starts.
//! 2. [`Phase::Scoring`]: otherwise each candidate gets its best alignment score,
//!    in input order.
//!
//! Inputs are validated before the scan: an empty sequence or a candidate shorter
//! than the sample rejects the whole evaluation.
//!
//! # Examples
//! ```
//! use codonmatch::evaluate::evaluate;
//! use codonmatch::model::{CandidateScore, Report, Sequence};
//! let sample: Sequence = "ATGATG".parse().unwrap();
//! let cands: Vec<Sequence> = ["ATGATC", "GGGCCC"].iter().map(|s| s.parse().unwrap()).collect();
//! assert_eq!(
//!     evaluate(&sample, &cands).unwrap(),
//!     Report::ScoredMatches(vec![CandidateScore { index: 1, score: 15 }, CandidateScore { index: 2, score: 3 }])
//! );
//! ```
use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::{MatchError, Result, Role};
use crate::model::{Alignment, CandidateScore, Report, Sequence};
use crate::score::{self, best_alignment};

/// Options for [`evaluate_with`].
#[derive(Clone, Debug, Default)]
pub struct EvaluateOpts {
    /// Worker threads for the scoring phase. `None` or `Some(1)` scores on the
    /// calling thread; `Some(0)` uses all logical cores.
    pub threads: Option<usize>,
}

impl EvaluateOpts {
    fn worker_count(&self) -> usize {
        match self.threads {
            None => 1,
            Some(0) => num_cpus::get().max(1),
            Some(n) => n,
        }
    }
}

/// Evaluation phase, logged as it is entered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase { Scanning, Scoring }

/// Evaluate on the calling thread.
pub fn evaluate(sample: &Sequence, candidates: &[Sequence]) -> Result<Report> {
    evaluate_with(sample, candidates, &EvaluateOpts::default())
}

/// Evaluate with explicit options.
pub fn evaluate_with(sample: &Sequence, candidates: &[Sequence], opts: &EvaluateOpts) -> Result<Report> {
    run(sample, candidates, opts, best_alignment)
}

/// Check every (sample, candidate) pair before doing any work.
pub fn validate(sample: &Sequence, candidates: &[Sequence]) -> Result<()> {
    if sample.is_empty() {
        return Err(MatchError::EmptySequence(Role::Sample));
    }
    for (i, c) in candidates.iter().enumerate() {
        score::check_pair(sample, c).map_err(|e| e.for_candidate(i + 1))?;
    }
    Ok(())
}

/// 1-based numbers of the candidates identical to `sample`, ascending.
pub fn perfect_matches(sample: &Sequence, candidates: &[Sequence]) -> Vec<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| *c == sample)
        .map(|(i, _)| i + 1)
        .collect()
}

fn run<F>(sample: &Sequence, candidates: &[Sequence], opts: &EvaluateOpts, scorer: F) -> Result<Report>
where
    F: Fn(&Sequence, &Sequence) -> Result<Alignment> + Sync,
{
    validate(sample, candidates)?;

    debug!("{:?}: {} candidate(s) against a {} nt sample", Phase::Scanning, candidates.len(), sample.len());
    let perfect = perfect_matches(sample, candidates);
    if !perfect.is_empty() {
        info!("{} perfect match(es); skipping alignment scoring", perfect.len());
        return Ok(Report::PerfectMatches(perfect));
    }

    let workers = opts.worker_count();
    debug!("{:?}: {} codon(s) per window, {} worker(s)", Phase::Scoring, sample.usable_codons(), workers);
    let score_one = |(i, c): (usize, &Sequence)| -> Result<CandidateScore> {
        let aln = scorer(sample, c).map_err(|e| e.for_candidate(i + 1))?;
        debug!("candidate {}: best score {} at offset {}", i + 1, aln.score, aln.offset);
        Ok(CandidateScore { index: i + 1, score: aln.score })
    };

    let scores = if workers > 1 {
        match ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(|| candidates.par_iter().enumerate().map(score_one).collect::<Result<Vec<_>>>())?,
            Err(e) => {
                warn!("could not start {workers} scoring threads ({e}); scoring sequentially");
                candidates.iter().enumerate().map(score_one).collect::<Result<Vec<_>>>()?
            }
        }
    } else {
        candidates.iter().enumerate().map(score_one).collect::<Result<Vec<_>>>()?
    };

    Ok(Report::ScoredMatches(scores))
}
