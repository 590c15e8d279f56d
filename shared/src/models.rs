use serde::{Serialize, Deserialize};

pub type CandidateId = u32;

/// A mentor as listed by `GET /mentors`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mentor {
    pub id: CandidateId,
    #[serde(default)]
    pub name: String,
    pub voting: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentorsResponse {
    pub mentors: Vec<Mentor>,
}

/// Body returned by `POST /{id}/count`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountResponse {
    pub id: CandidateId,
    pub voting: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub display_ref: String,
}

impl Candidate {
    pub fn new(id: CandidateId, display_ref: impl Into<String>) -> Self {
        Self { id, display_ref: display_ref.into() }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub id: CandidateId,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub candidate: Candidate,
    pub count: u64,
    pub rank: usize,
}
