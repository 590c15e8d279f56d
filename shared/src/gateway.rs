use async_trait::async_trait;
use crate::error::GatewayError;
use crate::models::{CandidateId, CountResponse, MentorsResponse};

/// Remote vote counter.
///
/// Futures are not `Send`: the client runs on a single browser thread.
#[async_trait(?Send)]
pub trait VoteGateway {
    /// `GET /mentors`
    async fn fetch_mentors(&self) -> Result<MentorsResponse, GatewayError>;

    /// `POST /{id}/count`. A non-success status must map to [`GatewayError::Status`].
    async fn submit_vote(&self, id: CandidateId) -> Result<CountResponse, GatewayError>;
}
