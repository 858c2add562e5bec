//! Job openings produced by a matching run.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub industry: String,
    pub location: String,
}

/// Salary band in 万円.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

/// One ranked opening. Field names follow the backend's UI-compatible
/// payload (`matchingScore` etc.), which is also what `/match/rank-ui`
/// returns. Openings are created fresh on every run and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    pub id: u32,
    pub company: Company,
    pub position: String,
    pub salary: SalaryRange,
    pub matching_score: u32,
    pub matching_reasons: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
}

/// Remote ranking service. The HTTP client in `infrastructure` implements
/// this against `POST /match/rank-ui`; the matching service falls back to
/// the local generator when a call fails.
#[async_trait::async_trait]
pub trait JobRanker: Send + Sync {
    async fn rank(&self, job_seeker_id: u32, top_k: usize) -> Result<Vec<JobOpening>, ApiError>;
}
