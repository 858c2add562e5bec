//! HTTP client for the backend ranking endpoint.

use crate::chat_api::{decode, read_body, transport_error};
use domain::error::ApiError;
use domain::job::{JobOpening, JobRanker};
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct RankRequest {
    job_seeker_id: u32,
    top_k: usize,
}

#[derive(Clone)]
pub struct MatchingApiClient {
    client: Arc<Client>,
    base_url: String,
}

impl MatchingApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl JobRanker for MatchingApiClient {
    /// `POST /match/rank-ui` returns openings in the same UI-compatible
    /// shape the local generator produces.
    async fn rank(&self, job_seeker_id: u32, top_k: usize) -> Result<Vec<JobOpening>, ApiError> {
        let url = format!("{}/match/rank-ui", self.base_url);
        tracing::debug!(%url, job_seeker_id, "requesting backend ranking");

        let response = self
            .client
            .post(&url)
            .json(&RankRequest {
                job_seeker_id,
                top_k,
            })
            .send()
            .await
            .map_err(transport_error)?;
        let (status, body) = read_body(response).await?;
        decode(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn rank_decodes_the_ui_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/match/rank-ui"))
            .and(body_json(json!({"job_seeker_id": 3, "top_k": 3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 1,
                "company": {
                    "name": "株式会社テクノロジー革新",
                    "industry": "IT・ソフトウェア",
                    "location": "東京都渋谷区"
                },
                "position": "システムエンジニア",
                "salary": {"min": 450, "max": 800},
                "matchingScore": 92,
                "matchingReasons": ["希望勤務地と勤務地が一致"],
                "requirements": ["チームワークを重視する方"],
                "benefits": ["リモートワーク可"]
            }])))
            .mount(&server)
            .await;

        let client = MatchingApiClient::new(server.uri());
        let jobs = client.rank(3, 3).await.unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].matching_score, 92);
        assert_eq!(jobs[0].company.name, "株式会社テクノロジー革新");
    }

    #[tokio::test]
    async fn rank_maps_failures_into_the_taxonomy() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/match/rank-ui"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let client = MatchingApiClient::new(server.uri());
        let err = client.rank(1, 3).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::ServerRejected {
                status: 503,
                detail: "down".to_string()
            }
        );
    }
}
