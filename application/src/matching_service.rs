//! One matching run for a selected seeker: simulated extraction, then
//! ranking. The backend ranker is asked first when configured; local
//! generation is the fallback.

use crate::matching::generate;
use domain::job::{JobOpening, JobRanker};
use domain::seeker::{
    DesiredSalary, Education, JobSeeker, LanguageSkill, ProcessingStatus, SeekerProfile,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

pub const MATCH_TOP_K: usize = 3;

const EXTRACTION_DELAY: Duration = Duration::from_secs(2);
const EXTRACTION_CONFIDENCE: f32 = 0.85;

pub struct MatchOutcome {
    pub status: ProcessingStatus,
    pub profile: SeekerProfile,
    pub jobs: Vec<JobOpening>,
}

pub struct MatchingService {
    ranker: Option<Arc<dyn JobRanker>>,
    extraction_delay: Duration,
    in_flight: bool,
}

impl MatchingService {
    pub fn new(ranker: Option<Arc<dyn JobRanker>>) -> Self {
        Self {
            ranker,
            extraction_delay: EXTRACTION_DELAY,
            in_flight: false,
        }
    }

    pub fn with_extraction_delay(mut self, delay: Duration) -> Self {
        self.extraction_delay = delay;
        self
    }

    /// Run one matching pass. A run started while another is outstanding is
    /// ignored (`None`) rather than queued; two interleaved runs would
    /// produce divergent, last-write-wins result sets.
    pub async fn run(&mut self, seeker: &JobSeeker) -> Option<MatchOutcome> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        let outcome = self.run_inner(seeker).await;
        self.in_flight = false;
        Some(outcome)
    }

    async fn run_inner(&self, seeker: &JobSeeker) -> MatchOutcome {
        // Extraction lives on the backend; until that endpoint is wired up
        // this is a fixed-latency pass over canned attributes.
        tokio::time::sleep(self.extraction_delay).await;
        let profile = sample_profile(seeker);

        let jobs = match &self.ranker {
            Some(ranker) => match ranker.rank(seeker.id, MATCH_TOP_K).await {
                Ok(jobs) if !jobs.is_empty() => jobs,
                Ok(_) => generate(&profile),
                Err(err) => {
                    tracing::warn!(%err, "backend ranking failed, generating locally");
                    generate(&profile)
                }
            },
            None => generate(&profile),
        };

        MatchOutcome {
            status: ProcessingStatus::Completed {
                confidence: EXTRACTION_CONFIDENCE,
            },
            profile,
            jobs,
        }
    }

    pub fn is_running(&self) -> bool {
        self.in_flight
    }
}

/// Canned extraction result, addressed to the seeker by name.
fn sample_profile(seeker: &JobSeeker) -> SeekerProfile {
    let mut skills = BTreeMap::new();
    skills.insert(
        "プログラミング言語".to_string(),
        vec![
            "Python".to_string(),
            "JavaScript".to_string(),
            "TypeScript".to_string(),
        ],
    );
    skills.insert(
        "フレームワーク".to_string(),
        vec![
            "React".to_string(),
            "FastAPI".to_string(),
            "Node.js".to_string(),
        ],
    );
    skills.insert(
        "データベース".to_string(),
        vec!["MySQL".to_string(), "PostgreSQL".to_string()],
    );

    SeekerProfile {
        id: seeker.id,
        skills,
        job_categories: vec!["エンジニア".to_string(), "フルスタック開発者".to_string()],
        industries: vec!["IT・通信".to_string(), "Webサービス".to_string()],
        experience_years: Some(3),
        current_company: Some("サンプル株式会社".to_string()),
        desired_location: vec!["東京".to_string(), "神奈川".to_string()],
        desired_salary: Some(DesiredSalary::Range {
            min_amount: 400,
            max_amount: 600,
        }),
        education: Education {
            university: Some("サンプル大学".to_string()),
            degree: Some("情報工学科".to_string()),
        },
        languages: vec![
            LanguageSkill {
                language: "日本語".to_string(),
                level: "ネイティブ".to_string(),
            },
            LanguageSkill {
                language: "英語".to_string(),
                level: "日常会話".to_string(),
            },
        ],
        certifications: vec![
            "基本情報技術者".to_string(),
            "AWS認定ソリューションアーキテクト".to_string(),
        ],
        work_preferences: vec!["リモートワーク".to_string(), "フレックス制".to_string()],
        summary: Some(format!("{}さんのプロフィールをまとめました。", seeker.name)),
    }
}
