use std::collections::HashSet;
use crate::models::{Candidate, CandidateId, Mentor};

pub const MAX_CANDIDATES: usize = 64;
pub const MAX_DISPLAY_REF_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Candidate id must be positive")]
    ZeroCandidateId,
    #[error("Duplicate candidate id: {0}")]
    DuplicateCandidate(CandidateId),
    #[error("Candidate {0} has no display reference")]
    EmptyDisplayRef(CandidateId),
    #[error("Display reference for candidate {0} exceeds maximum length of {MAX_DISPLAY_REF_LENGTH}")]
    DisplayRefTooLong(CandidateId),
    #[error("Too many candidates (maximum {MAX_CANDIDATES})")]
    TooManyCandidates,
    #[error("Negative vote count {count} for candidate {id}")]
    NegativeCount { id: CandidateId, count: i64 },
}

pub fn validate_roster(candidates: &[Candidate]) -> Result<(), ValidationError> {
    if candidates.len() > MAX_CANDIDATES { return Err(ValidationError::TooManyCandidates); }

    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.id == 0 { return Err(ValidationError::ZeroCandidateId); }
        if !seen.insert(candidate.id) { return Err(ValidationError::DuplicateCandidate(candidate.id)); }
        if candidate.display_ref.trim().is_empty() { return Err(ValidationError::EmptyDisplayRef(candidate.id)); }
        if candidate.display_ref.len() > MAX_DISPLAY_REF_LENGTH {
            return Err(ValidationError::DisplayRefTooLong(candidate.id));
        }
    }

    Ok(())
}

/// Converts a server-reported count into a store count.
pub fn validate_mentor_count(mentor: &Mentor) -> Result<u64, ValidationError> {
    u64::try_from(mentor.voting)
        .map_err(|_| ValidationError::NegativeCount { id: mentor.id, count: mentor.voting })
}
