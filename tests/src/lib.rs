//! Shared fixtures for the end-to-end tests.

use domain::seeker::{JobSeeker, Skill, Tag};

pub fn sample_seeker() -> JobSeeker {
    JobSeeker {
        id: 1,
        name: "田中 太郎".to_string(),
        email: "taro@example.com".to_string(),
        phone: "080-0000-0001".to_string(),
        desired_job: "エンジニア".to_string(),
        desired_industry: "IT".to_string(),
        desired_location: vec!["東京".to_string()],
        desired_salary: Some(500),
        available_start_date: "2025-09-01".to_string(),
        work_style_type: "フルタイム".to_string(),
        skills: vec![
            Skill {
                id: 1,
                name: "Python".to_string(),
            },
            Skill {
                id: 2,
                name: "React".to_string(),
            },
        ],
        tags: vec![Tag {
            id: 1,
            name: "フルリモート希望".to_string(),
        }],
        created_at: "2025-08-01T00:00:00Z".to_string(),
    }
}
