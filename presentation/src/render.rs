//! Terminal rendering for seekers, extracted profiles, job cards, and chat
//! turns.

use colored::Colorize;
use domain::job::JobOpening;
use domain::seeker::{DesiredSalary, JobSeeker, SeekerProfile};
use domain::session::{ChatMessage, Sender};

pub fn seeker_list(seekers: &[JobSeeker]) {
    println!("{}", "Registered job seekers".bold());
    for seeker in seekers {
        let salary = seeker
            .desired_salary
            .map(|s| format!("{s}万円"))
            .unwrap_or_else(|| "未設定".to_string());
        println!(
            "  {} {}  {} / {} / {} / {}",
            format!("[{}]", seeker.id).blue(),
            seeker.name,
            seeker.desired_job,
            seeker.desired_industry,
            seeker.desired_location.join("、"),
            salary
        );
    }
}

pub fn profile(profile: &SeekerProfile) {
    println!("\n{}", "Extracted profile".bold());
    if let Some(summary) = &profile.summary {
        println!("  {summary}");
    }
    if let Some(company) = &profile.current_company {
        println!("  現職: {company}");
    }
    if let Some(years) = profile.experience_years {
        println!("  経験年数: {years}年");
    }
    if let Some(university) = &profile.education.university {
        println!("  学歴: {university}");
    }
    if !profile.job_categories.is_empty() {
        println!("  経験職種: {}", profile.job_categories.join("、"));
    }
    if !profile.industries.is_empty() {
        println!("  経験業界: {}", profile.industries.join("、"));
    }
    for (category, skills) in &profile.skills {
        println!("  {}: {}", category, skills.join("、"));
    }
    for lang in &profile.languages {
        println!("  {} ({})", lang.language, lang.level);
    }
    if !profile.certifications.is_empty() {
        println!("  資格: {}", profile.certifications.join("、"));
    }
    if !profile.work_preferences.is_empty() {
        println!("  働き方: {}", profile.work_preferences.join("、"));
    }
    match &profile.desired_salary {
        Some(DesiredSalary::Range {
            min_amount,
            max_amount,
        }) => println!("  希望年収: {min_amount}～{max_amount}万円"),
        Some(DesiredSalary::Minimum { amount }) => println!("  希望年収: {amount}万円以上"),
        None => {}
    }
    if !profile.desired_location.is_empty() {
        println!("  希望勤務地: {}", profile.desired_location.join("、"));
    }
}

pub fn job_card(job: &JobOpening) {
    println!(
        "\n{} {}",
        format!("{}点", job.matching_score).green().bold(),
        job.company.name.bold()
    );
    println!(
        "  {} / {} / {}",
        job.position, job.company.industry, job.company.location
    );
    println!("  年収 {}～{}万円", job.salary.min, job.salary.max);
    for reason in &job.matching_reasons {
        println!("  {} {}", "✓".green(), reason);
    }
    if !job.requirements.is_empty() {
        println!("  応募要件: {}", job.requirements.join(" / "));
    }
    if !job.benefits.is_empty() {
        println!("  待遇: {}", job.benefits.join(" / "));
    }
}

pub fn chat_message(message: &ChatMessage) {
    match message.sender {
        Sender::User => println!("{} {}", "You:".blue().bold(), message.message),
        Sender::Assistant => println!("{} {}", "Assistant:".cyan().bold(), message.message),
    }
}
