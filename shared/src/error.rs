use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;
use crate::models::CandidateId;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Failed to load candidate counts")]
    LoadFailure,
    #[error("Unknown candidate")]
    InvalidCandidate,
    #[error("Vote was not counted")]
    VoteSubmissionFailure,
    #[error("Server roster does not match the local roster")]
    PartialLoadMismatch,
}

/// Failures reported by a [`crate::gateway::VoteGateway`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("request timed out")]
    TimedOut,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn invalid_candidate(id: CandidateId) -> Self {
        Self::new(ErrorCode::InvalidCandidate, format!("Candidate {} is not on the roster", id))
    }

    pub fn load_failure(cause: &GatewayError) -> Self {
        Self::with_details(ErrorCode::LoadFailure, "Could not fetch mentor counts", cause.to_string())
    }

    pub fn submission_failure(id: CandidateId, cause: &GatewayError) -> Self {
        Self::with_details(
            ErrorCode::VoteSubmissionFailure,
            format!("Vote for candidate {} was rolled back", id),
            cause.to_string(),
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
