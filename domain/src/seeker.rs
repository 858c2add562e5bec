//! Job seeker records and the attributes extracted from a résumé.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

/// A registered job seeker as the directory returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSeeker {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub desired_job: String,
    pub desired_industry: String,
    pub desired_location: Vec<String>,
    pub desired_salary: Option<u32>,
    pub available_start_date: String,
    pub work_style_type: String,
    pub skills: Vec<Skill>,
    pub tags: Vec<Tag>,
    pub created_at: String,
}

/// Desired salary as extracted from a résumé: either a range or a floor,
/// in units of 万円.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DesiredSalary {
    Range { min_amount: u32, max_amount: u32 },
    Minimum { amount: u32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    pub level: String,
}

/// Attributes extracted from a seeker's résumé. Read-only input to the
/// matching generator; the generator never mutates it.
///
/// `skills` maps a category name to the skill names inside it. A sorted map
/// keeps category iteration stable, which matters once a seeded RNG drives
/// the reason selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeekerProfile {
    pub id: u32,
    pub skills: BTreeMap<String, Vec<String>>,
    pub job_categories: Vec<String>,
    pub industries: Vec<String>,
    pub experience_years: Option<u32>,
    pub current_company: Option<String>,
    pub desired_location: Vec<String>,
    pub desired_salary: Option<DesiredSalary>,
    pub education: Education,
    pub languages: Vec<LanguageSkill>,
    pub certifications: Vec<String>,
    pub work_preferences: Vec<String>,
    pub summary: Option<String>,
}

/// Where a matching run currently stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed { confidence: f32 },
    Failed { error_message: String },
}
