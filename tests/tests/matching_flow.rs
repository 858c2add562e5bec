//! Matching runs through the real ranking client against a mock server,
//! plus a rendering smoke pass over the outcome.

use application::matching_service::MatchingService;
use domain::seeker::ProcessingStatus;
use infrastructure::matching_api::MatchingApiClient;
use presentation::render;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tests::sample_seeker;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(base_url: String) -> MatchingService {
    MatchingService::new(Some(Arc::new(MatchingApiClient::new(base_url))))
        .with_extraction_delay(Duration::ZERO)
}

#[tokio::test]
async fn backend_ranking_is_preferred_when_available() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/match/rank-ui"))
        .and(body_json(json!({"job_seeker_id": 1, "top_k": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 42,
            "company": {
                "name": "バックエンド株式会社",
                "industry": "IT・ソフトウェア",
                "location": "東京都"
            },
            "position": "システムエンジニア",
            "salary": {"min": 500, "max": 700},
            "matchingScore": 95,
            "matchingReasons": ["実測スコアによる推薦"],
            "requirements": ["3年以上の経験"],
            "benefits": ["リモートワーク可"]
        }])))
        .mount(&server)
        .await;

    let mut matching = service(server.uri());
    let outcome = matching.run(&sample_seeker()).await.unwrap();

    assert_eq!(outcome.jobs.len(), 1);
    assert_eq!(outcome.jobs[0].id, 42);
    assert_eq!(outcome.jobs[0].matching_score, 95);
    assert!(matches!(
        outcome.status,
        ProcessingStatus::Completed { .. }
    ));
}

#[tokio::test]
async fn backend_failure_falls_back_to_local_generation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/match/rank-ui"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let mut matching = service(server.uri());
    let outcome = matching.run(&sample_seeker()).await.unwrap();

    assert_eq!(outcome.jobs.len(), 3);
    assert!(outcome
        .jobs
        .iter()
        .all(|j| (80..=99).contains(&j.matching_score)));
    assert!(outcome
        .jobs
        .windows(2)
        .all(|w| w[0].matching_score >= w[1].matching_score));
}

#[tokio::test]
async fn the_outcome_renders_without_panicking() {
    let mut matching = MatchingService::new(None).with_extraction_delay(Duration::ZERO);
    let seeker = sample_seeker();
    let outcome = matching.run(&seeker).await.unwrap();

    render::seeker_list(std::slice::from_ref(&seeker));
    render::profile(&outcome.profile);
    for job in &outcome.jobs {
        render::job_card(job);
    }
}
