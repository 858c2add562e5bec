//! The job seeker directory.
//!
//! Canned data for now; the backend directory endpoint slots in behind
//! `fetch_all` once it lands, which is why the call is already async.

use chrono::Utc;
use domain::seeker::{JobSeeker, Skill, Tag};
use shared::types::Result;

pub struct SeekerDirectory;

impl SeekerDirectory {
    pub fn new() -> Self {
        Self
    }

    pub async fn fetch_all(&self) -> Result<Vec<JobSeeker>> {
        Ok(canned_seekers())
    }
}

impl Default for SeekerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn seeker(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    desired_job: &str,
    desired_industry: &str,
    desired_location: &[&str],
    desired_salary: Option<u32>,
    available_start_date: &str,
    work_style_type: &str,
    skills: &[(u32, &str)],
    tags: &[(u32, &str)],
) -> JobSeeker {
    JobSeeker {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        desired_job: desired_job.to_string(),
        desired_industry: desired_industry.to_string(),
        desired_location: desired_location.iter().map(|s| s.to_string()).collect(),
        desired_salary,
        available_start_date: available_start_date.to_string(),
        work_style_type: work_style_type.to_string(),
        skills: skills
            .iter()
            .map(|(id, name)| Skill {
                id: *id,
                name: name.to_string(),
            })
            .collect(),
        tags: tags
            .iter()
            .map(|(id, name)| Tag {
                id: *id,
                name: name.to_string(),
            })
            .collect(),
        created_at: Utc::now().to_rfc3339(),
    }
}

fn canned_seekers() -> Vec<JobSeeker> {
    vec![
        seeker(
            1,
            "田中 太郎",
            "taro@example.com",
            "080-0000-0001",
            "エンジニア",
            "IT",
            &["東京"],
            Some(500),
            "2025-09-01",
            "フルタイム",
            &[(1, "Python"), (2, "React")],
            &[(1, "フルリモート希望")],
        ),
        seeker(
            2,
            "佐藤 花子",
            "hanako@example.com",
            "080-0000-0002",
            "デザイナー",
            "Web",
            &["神奈川"],
            Some(450),
            "2025-10-01",
            "パートタイム",
            &[(3, "Figma"), (4, "Photoshop")],
            &[(2, "時短勤務希望")],
        ),
        seeker(
            3,
            "鈴木 一郎",
            "ichiro@example.com",
            "080-0000-0003",
            "PM",
            "コンサル",
            &["東京"],
            Some(600),
            "2025-11-01",
            "フルタイム",
            &[(5, "プロジェクト管理")],
            &[],
        ),
        seeker(
            4,
            "高橋 美咲",
            "misaki@example.com",
            "080-0000-0004",
            "マーケッター",
            "広告",
            &["大阪"],
            Some(480),
            "2025-09-15",
            "フルタイム",
            &[(6, "SEO"), (7, "SNS運用")],
            &[(3, "週休3日希望")],
        ),
        seeker(
            5,
            "渡辺 健太",
            "kenta@example.com",
            "080-0000-0005",
            "データアナリスト",
            "IT",
            &["東京", "神奈川"],
            Some(550),
            "2025-10-20",
            "フルタイム",
            &[(8, "SQL"), (9, "Python")],
            &[],
        ),
    ]
}
