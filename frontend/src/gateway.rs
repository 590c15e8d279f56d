use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{CandidateId, CountResponse, GatewayError, MentorsResponse, VoteGateway};

pub struct HttpGateway {
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    if !response.ok() {
        return Err(GatewayError::Status(response.status()));
    }
    response.json::<T>().await.map_err(|e| GatewayError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl VoteGateway for HttpGateway {
    async fn fetch_mentors(&self) -> Result<MentorsResponse, GatewayError> {
        let response = Request::get(&format!("{}/mentors", self.base_url))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn submit_vote(&self, id: CandidateId) -> Result<CountResponse, GatewayError> {
        let response = Request::post(&format!("{}/{}/count", self.base_url, id))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        decode(response).await
    }
}
