//! Rendering of a [`Report`] for people and for downstream tools.
//!
//! The text form uses fixed phrasing, one line per candidate:
//!
//! ```text
//! Candidate number 2 is a perfect match
//! Candidate number 1 matches with a score of 15
//! Candidate number 1 matched with a best score of 15
//! ```
//!
//! The last form belongs to the optional best-of-all view ([`best_matches`]).
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::model::{CandidateScore, Report};

/// One line per reported candidate.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    match report {
        Report::PerfectMatches(indices) => {
            for n in indices {
                out.push_str(&format!("Candidate number {n} is a perfect match\n"));
            }
        }
        Report::ScoredMatches(scores) => {
            for s in scores {
                out.push_str(&format!("Candidate number {} matches with a score of {}\n", s.index, s.score));
            }
        }
    }
    out
}

/// Every candidate that shares the top score, in input order.
///
/// Empty for a perfect-match report.
pub fn best_matches(report: &Report) -> Vec<CandidateScore> {
    match report {
        Report::PerfectMatches(_) => Vec::new(),
        Report::ScoredMatches(scores) => {
            let Some(top) = scores.iter().map(|s| s.score).max() else { return Vec::new() };
            scores.iter().copied().filter(|s| s.score == top).collect()
        }
    }
}

pub fn render_best(best: &[CandidateScore]) -> String {
    best.iter()
        .map(|s| format!("Candidate number {} matched with a best score of {}\n", s.index, s.score))
        .collect()
}

/// Write a delimited table with header `candidate,id,outcome,score`.
///
/// `ids` are candidate identifiers in input order; missing ones are left blank.
pub fn write_table<W: Write>(report: &Report, ids: &[String], writer: W, delimiter: u8) -> Result<()> {
    let mut w = csv::WriterBuilder::new().delimiter(delimiter).from_writer(writer);
    w.write_record(["candidate", "id", "outcome", "score"])?;
    let id_of = |n: usize| ids.get(n - 1).map(String::as_str).unwrap_or("");
    match report {
        Report::PerfectMatches(indices) => {
            for &n in indices {
                w.write_record([n.to_string().as_str(), id_of(n), "perfect", ""])?;
            }
        }
        Report::ScoredMatches(scores) => {
            for s in scores {
                w.write_record([s.index.to_string().as_str(), id_of(s.index), "scored", s.score.to_string().as_str()])?;
            }
        }
    }
    w.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sample: &'a str,
    candidate_ids: &'a [String],
    report: &'a Report,
    best: Vec<CandidateScore>,
}

/// Pretty-printed JSON document carrying the report and its best-of-all view.
pub fn render_json(sample_id: &str, candidate_ids: &[String], report: &Report) -> Result<String> {
    let doc = JsonReport { sample: sample_id, candidate_ids, report, best: best_matches(report) };
    Ok(serde_json::to_string_pretty(&doc)?)
}
