//! Error taxonomy for the scoring core.
//!
//! Every variant is a caller-contract violation: there is no I/O in the core, so
//! nothing here is transient or worth retrying. File and parse failures at the
//! edges (see [`crate::seqio`]) travel as `anyhow::Error` and wrap these.
use thiserror::Error;

/// Which side of a comparison an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Sample,
    /// A candidate whose position in the input is not known at the call site.
    Candidate,
    /// 1-based candidate number, as it appears in the input.
    Numbered(usize),
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Sample => write!(f, "sample"),
            Role::Candidate => write!(f, "candidate"),
            Role::Numbered(n) => write!(f, "candidate {n}"),
        }
    }
}

/// Errors returned by sequence construction, scoring and evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A byte outside `A|C|G|T` (either case) was found in a sequence.
    #[error("malformed symbol {found:?} at position {position}")]
    MalformedSymbol { position: usize, found: char },

    /// The sample is longer than a candidate it must be slid across.
    #[error("sample ({sample_len} nt) is longer than {role} ({candidate_len} nt)")]
    LengthViolation { role: Role, sample_len: usize, candidate_len: usize },

    /// A zero-length sample or candidate.
    #[error("{0} is empty")]
    EmptySequence(Role),
}

impl MatchError {
    /// Attach a 1-based candidate number to an error raised for an unnumbered candidate.
    pub fn for_candidate(self, number: usize) -> Self {
        let tag = |role: Role| if role == Role::Candidate { Role::Numbered(number) } else { role };
        match self {
            MatchError::LengthViolation { role, sample_len, candidate_len } => {
                MatchError::LengthViolation { role: tag(role), sample_len, candidate_len }
            }
            MatchError::EmptySequence(role) => MatchError::EmptySequence(tag(role)),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
