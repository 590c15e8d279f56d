use crate::models::{Candidate, CandidateId};
use crate::validation::{validate_roster, ValidationError};

/// The fixed, ordered set of candidates known to the client.
///
/// Order is significant: it is the tie-break order used by the ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, ValidationError> {
        validate_roster(&candidates)?;
        Ok(Self { candidates })
    }

    pub fn from_pairs<S: Into<String>>(
        pairs: impl IntoIterator<Item = (CandidateId, S)>,
    ) -> Result<Self, ValidationError> {
        Self::new(pairs.into_iter().map(|(id, r)| Candidate::new(id, r)).collect())
    }

    pub fn contains(&self, id: CandidateId) -> bool {
        self.candidates.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CandidateId> + '_ {
        self.candidates.iter().map(|c| c.id)
    }

    /// Candidates ordered by id rather than by catalog position.
    pub fn sorted_by_id(&self) -> Vec<&Candidate> {
        let mut sorted: Vec<_> = self.candidates.iter().collect();
        sorted.sort_by_key(|c| c.id);
        sorted
    }

    pub fn len(&self) -> usize { self.candidates.len() }

    pub fn is_empty(&self) -> bool { self.candidates.is_empty() }
}
