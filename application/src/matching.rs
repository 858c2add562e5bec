//! Dummy job generation and ranking.
//!
//! A fixed catalog of five employers gets a randomly chosen position, a
//! random score in 80..=99, and a short reason list derived from the
//! seeker's extracted profile; the top three by score come back. The RNG is
//! a parameter so a seeded generator makes the whole run deterministic.

use domain::job::{Company, JobOpening, SalaryRange};
use domain::seeker::SeekerProfile;
use rand::Rng;

struct CompanyTemplate {
    name: &'static str,
    industry: &'static str,
    positions: &'static [&'static str],
    salary: SalaryRange,
    location: &'static str,
    benefits: &'static [&'static str],
}

const COMPANY_CATALOG: [CompanyTemplate; 5] = [
    CompanyTemplate {
        name: "株式会社テクノロジー革新",
        industry: "IT・ソフトウェア",
        positions: &[
            "フロントエンドエンジニア",
            "システムエンジニア",
            "プロジェクトマネージャー",
        ],
        salary: SalaryRange { min: 450, max: 800 },
        location: "東京都渋谷区",
        benefits: &["リモートワーク可", "フレックス制", "年収査定制度"],
    },
    CompanyTemplate {
        name: "グローバル商事株式会社",
        industry: "商社・貿易",
        positions: &["営業企画", "海外事業企画", "マーケティング"],
        salary: SalaryRange { min: 400, max: 650 },
        location: "東京都千代田区",
        benefits: &["海外研修制度", "語学支援", "住宅手当"],
    },
    CompanyTemplate {
        name: "株式会社データアナリティクス",
        industry: "データサイエンス",
        positions: &[
            "データサイエンティスト",
            "機械学習エンジニア",
            "データアナリスト",
        ],
        salary: SalaryRange { min: 500, max: 900 },
        location: "東京都港区",
        benefits: &["研修制度充実", "書籍購入支援", "カンファレンス参加支援"],
    },
    CompanyTemplate {
        name: "コンサルティングパートナーズ",
        industry: "コンサルティング",
        positions: &[
            "戦略コンサルタント",
            "ITコンサルタント",
            "業務改善コンサルタント",
        ],
        salary: SalaryRange {
            min: 600,
            max: 1000,
        },
        location: "東京都新宿区",
        benefits: &["成果報酬制", "MBA支援制度", "海外プロジェクト参加機会"],
    },
    CompanyTemplate {
        name: "株式会社クリエイティブソリューション",
        industry: "広告・マーケティング",
        positions: &["Webディレクター", "UI/UXデザイナー", "デジタルマーケッター"],
        salary: SalaryRange { min: 380, max: 600 },
        location: "東京都品川区",
        benefits: &["クリエイティブ環境", "副業OK", "スキルアップ支援"],
    },
];

/// Industries present in the fixed catalog, in catalog order.
pub fn catalog_industries() -> Vec<&'static str> {
    COMPANY_CATALOG.iter().map(|c| c.industry).collect()
}

/// Synthesize and rank dummy openings for a profile. Always returns the top
/// three of the five catalog entries, sorted by score descending; the sort
/// is stable, so equal scores keep catalog order.
pub fn generate_dummy_jobs<R: Rng + ?Sized>(
    profile: &SeekerProfile,
    rng: &mut R,
) -> Vec<JobOpening> {
    let mut jobs: Vec<JobOpening> = COMPANY_CATALOG
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let position = template.positions[rng.gen_range(0..template.positions.len())];
            let matching_score = rng.gen_range(80..100);

            let mut reasons = Vec::new();
            if !profile.skills.is_empty() {
                let categories: Vec<&String> = profile.skills.keys().collect();
                let category = categories[rng.gen_range(0..categories.len())];
                let skills = &profile.skills[category];
                // An empty category simply contributes no reason; the list
                // is truncated below, never padded.
                if !skills.is_empty() {
                    let skill = &skills[rng.gen_range(0..skills.len())];
                    reasons.push(format!("{skill}のスキルが職務要件と合致"));
                }
            }
            if let Some(years) = profile.experience_years {
                if years > 0 {
                    reasons.push(format!("{years}年の経験が求められるレベルに適合"));
                }
            }
            reasons.push(format!("{}分野への転職希望と合致", template.industry));
            reasons.push("希望勤務地と勤務地が一致".to_string());
            reasons.truncate(rng.gen_range(2..4));

            JobOpening {
                id: index as u32 + 1,
                company: Company {
                    name: template.name.to_string(),
                    industry: template.industry.to_string(),
                    location: template.location.to_string(),
                },
                position: position.to_string(),
                salary: template.salary,
                matching_score,
                matching_reasons: reasons,
                requirements: vec![
                    format!("{position}として3年以上の経験"),
                    "チームワークを重視する方".to_string(),
                    "新しい技術への学習意欲がある方".to_string(),
                ],
                benefits: template.benefits.iter().map(|b| b.to_string()).collect(),
            }
        })
        .collect();

    jobs.sort_by(|a, b| b.matching_score.cmp(&a.matching_score));
    jobs.truncate(3);
    jobs
}

/// Convenience wrapper over the thread-local RNG.
pub fn generate(profile: &SeekerProfile) -> Vec<JobOpening> {
    generate_dummy_jobs(profile, &mut rand::thread_rng())
}
