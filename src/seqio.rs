//! Input parsing for **segment files** and **FASTA / FASTQ (optionally gzipped)**.
//!
//! ### Segment files
//! The plain-text layout consumed by the original matching exercise:
//!
//! ```text
//! <sample header>
//! <sample sequence>
//! <number of candidates N>
//! <candidate 1 header>
//! <candidate 1 sequence>
//! ...
//! <candidate N header>
//! <candidate N sequence>
//! ```
//!
//! Headers are kept as identifiers; each sequence sits on a single line.
//!
//! ### FASTA / FASTQ
//! Parsed with `needletail`. The first record is the sample and every later
//! record is a candidate.
//!
//! ### Errors
//! Parse and IO errors are returned as `anyhow::Result`; a bad nucleotide keeps
//! its [`MatchError::MalformedSymbol`](crate::error::MatchError) cause, with
//! context naming the record it came from.
//!
//! ### Example
//! ```
//! let text = "sample\nATGATG\n2\ncand one\nATGATC\ncand two\nGGGCCC\n";
//! let input = codonmatch::seqio::parse_segments(text).unwrap();
//! assert_eq!(input.candidates.len(), 2);
//! assert_eq!(input.candidate_ids[1], "cand two");
//! ```
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;
use needletail::{parse_fastx_file, FastxReader};

use crate::model::Sequence;

/// Input format, detected from the path or chosen explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat { Segments, Fastx }

impl InputFormat {
    /// FASTA/FASTQ extensions (optionally `.gz`) map to [`InputFormat::Fastx`];
    /// anything else is treated as a segment file.
    pub fn detect<P: AsRef<Path>>(path: P) -> InputFormat {
        let name = path.as_ref().to_string_lossy().to_ascii_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        let fastx = [".fa", ".fasta", ".fna", ".ffn", ".fq", ".fastq"];
        if fastx.iter().any(|ext| name.ends_with(ext)) { InputFormat::Fastx } else { InputFormat::Segments }
    }
}

/// A sample and its candidates, ready for [`crate::evaluate`].
#[derive(Debug, Clone)]
pub struct MatchInput {
    pub sample_id: String,
    pub sample: Sequence,
    /// Identifiers parallel to `candidates`.
    pub candidate_ids: Vec<String>,
    pub candidates: Vec<Sequence>,
}

/// Read `path`, detecting the format from its name when `format` is `None`.
pub fn read_input<P: AsRef<Path>>(path: P, format: Option<InputFormat>) -> Result<MatchInput> {
    let p = path.as_ref();
    let fmt = format.unwrap_or_else(|| InputFormat::detect(p));
    debug!("reading {} as {:?}", p.display(), fmt);
    match fmt {
        InputFormat::Segments => {
            let text = std::fs::read_to_string(p).with_context(|| format!("read segment file: {}", p.display()))?;
            parse_segments(&text).with_context(|| format!("parse segment file: {}", p.display()))
        }
        InputFormat::Fastx => {
            let reader = parse_fastx_file(p).with_context(|| format!("open FASTA/FASTQ: {}", p.display()))?;
            collect_fastx(reader).with_context(|| format!("parse FASTA/FASTQ: {}", p.display()))
        }
    }
}

/// Parse the text of a segment file.
pub fn parse_segments(text: &str) -> Result<MatchInput> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let Some((_, sample_id)) = lines.next() else { bail!("input is empty") };
    let Some((n, raw)) = lines.next() else { bail!("missing sample sequence after header") };
    let sample = Sequence::new(raw.as_bytes()).with_context(|| format!("sample sequence (line {n})"))?;

    let Some((n, raw)) = lines.next() else { bail!("missing candidate count") };
    let count: usize = raw.parse().with_context(|| format!("candidate count (line {n}) is not a number: {raw:?}"))?;
    if count == 0 {
        bail!("candidate count (line {n}) is zero");
    }

    let mut candidate_ids = Vec::with_capacity(count);
    let mut candidates = Vec::with_capacity(count);
    for k in 1..=count {
        let Some((_, id)) = lines.next() else { bail!("expected {count} candidates, found {}", k - 1) };
        let Some((n, raw)) = lines.next() else { bail!("candidate {k} has a header but no sequence") };
        let seq = Sequence::new(raw.as_bytes()).with_context(|| format!("candidate {k} sequence (line {n})"))?;
        candidate_ids.push(id.to_string());
        candidates.push(seq);
    }
    debug!("parsed sample of {} nt and {} candidate(s)", sample.len(), candidates.len());

    Ok(MatchInput { sample_id: sample_id.to_string(), sample, candidate_ids, candidates })
}

/// Drain a needletail reader: first record is the sample, the rest are candidates.
pub fn collect_fastx(mut reader: Box<dyn FastxReader + '_>) -> Result<MatchInput> {
    let mut records: Vec<(String, Sequence)> = Vec::new();
    while let Some(record) = reader.next() {
        let rec = record?;
        let id = String::from_utf8_lossy(rec.id()).split_whitespace().next().unwrap_or("").to_string();
        let seq = Sequence::new(&rec.seq()).with_context(|| format!("record {} ({id})", records.len() + 1))?;
        records.push((id, seq));
    }

    let mut it = records.into_iter();
    let Some((sample_id, sample)) = it.next() else { bail!("no records") };
    let (candidate_ids, candidates): (Vec<_>, Vec<_>) = it.unzip();
    if candidates.is_empty() {
        bail!("only one record ({sample_id}); need a sample followed by at least one candidate");
    }
    Ok(MatchInput { sample_id, sample, candidate_ids, candidates })
}
