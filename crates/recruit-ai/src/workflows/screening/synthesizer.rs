//! Deterministic candidate pool synthesis for a job description.

use std::collections::HashSet;

use tracing::debug;

use super::domain::{
    Candidate, CandidateId, ContactDetails, ExperienceEntry, JobDescription,
    MAX_APPLICATION_COUNT,
};
use super::pools::{
    pick, BASELINE_SKILL, COMPANIES, DOMAINS, EDUCATION_LEVELS, FIRST_NAMES, INSTITUTIONS,
    LAST_NAMES, LOCATIONS, SENIORITY_LABELS,
};
use super::profiles::{profile_for, RoleFamily, RoleProfile};
use super::rng::SeededRng;
use super::scoring::{collect_violations, score_candidate, ScoreInputs, BASE_SCORE_FLOOR, BASE_SCORE_SPAN};

/// Year experience histories are anchored to.
pub const REFERENCE_YEAR: u16 = 2025;
/// Longest tenure attributed to the current employer.
pub const CURRENT_TENURE_CAP: u32 = 6;
pub const MAX_NAME_RETRIES: usize = 20;
pub const MUST_HAVE_RETENTION: f64 = 0.7;
pub const EXTRA_SKILL_CHANCE: f64 = 0.5;
pub const MAX_EXTRA_SKILLS: usize = 4;
const MAX_YEARS_DRAW: usize = 12;
const EMAIL_DOMAIN: &str = "candidates.example";

/// Builds candidate pools. Stateless: every call seeds a fresh generator from the job id.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateSynthesizer;

impl CandidateSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Produce `job.application_count` candidates in sequence order `1..=count`.
    pub fn synthesize(&self, job: &JobDescription, family: RoleFamily) -> Vec<Candidate> {
        let count = job.application_count;
        if count == 0 {
            return Vec::new();
        }

        let profile = profile_for(family);
        let mut rng = SeededRng::for_job(&job.id);
        let capacity = count.min(MAX_APPLICATION_COUNT) as usize;
        let mut used_names = HashSet::with_capacity(capacity);
        let mut candidates = Vec::with_capacity(capacity);

        for sequence in 1..=count {
            candidates.push(synthesize_one(job, profile, &mut rng, &mut used_names, sequence));
        }

        debug!(
            job_id = %job.id.0,
            role_family = family.key(),
            candidates = candidates.len(),
            "synthesized candidate pool"
        );

        candidates
    }

    /// Synthesize with a raw role key, falling back to the default profile for unknown keys.
    pub fn synthesize_with_key(&self, job: &JobDescription, role_key: &str) -> Vec<Candidate> {
        self.synthesize(job, RoleFamily::from_key(role_key))
    }
}

struct DrawnName {
    first: &'static str,
    last: &'static str,
    display: String,
}

fn draw_name(rng: &mut SeededRng, used: &mut HashSet<String>, sequence: u32) -> DrawnName {
    let mut first = pick(rng, FIRST_NAMES);
    let mut last = pick(rng, LAST_NAMES);
    let mut display = format!("{first} {last}");

    let mut retries = 0;
    while used.contains(&display) && retries < MAX_NAME_RETRIES {
        first = pick(rng, FIRST_NAMES);
        last = pick(rng, LAST_NAMES);
        display = format!("{first} {last}");
        retries += 1;
    }

    if used.contains(&display) {
        display = format!("{first} {last} {sequence}");
    }

    used.insert(display.clone());
    DrawnName {
        first,
        last,
        display,
    }
}

fn email_for(name: &DrawnName, sequence: u32) -> String {
    let first: String = name
        .first
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    let last: String = name
        .last
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    format!("{first}.{last}{sequence}@{EMAIL_DOMAIN}")
}

fn phone_for(sequence: u32) -> String {
    format!("+1-555-{:03}-{:04}", 100 + (sequence / 10_000) % 900, sequence % 10_000)
}

fn synthesize_one(
    job: &JobDescription,
    profile: &RoleProfile,
    rng: &mut SeededRng,
    used_names: &mut HashSet<String>,
    sequence: u32,
) -> Candidate {
    let name = draw_name(rng, used_names, sequence);
    let email = email_for(&name, sequence);

    let years_of_experience = rng.below(MAX_YEARS_DRAW) as u32 + 1;

    let current_company = pick(rng, COMPANIES);
    let prior_company = pick(rng, COMPANIES);
    let current_title = pick(rng, profile.current_titles);
    let prior_title = pick(rng, profile.prior_titles);
    let tech_stack = pick(rng, profile.tech_stacks);

    let location = pick(rng, LOCATIONS);
    let education = pick(rng, EDUCATION_LEVELS);
    let institution = pick(rng, INSTITUTIONS);
    let seniority = pick(rng, SENIORITY_LABELS);
    let domain = pick(rng, DOMAINS);

    let matched_must_haves: Vec<String> = job
        .must_have_skills
        .iter()
        .filter(|_| rng.chance(MUST_HAVE_RETENTION))
        .cloned()
        .collect();

    let violations = collect_violations(job, &matched_must_haves, years_of_experience);

    let base_score = rng.below(BASE_SCORE_SPAN) as u8 + BASE_SCORE_FLOOR;
    let card = score_candidate(&ScoreInputs {
        base_score,
        violations: &violations,
        matched_must_haves: matched_must_haves.len(),
        total_must_haves: job.must_have_skills.len(),
        years_of_experience,
        experience_min: job.experience_min,
        current_title,
        current_company,
        domain,
        education,
        institution,
    });

    let skills = build_skill_list(job, profile, &matched_must_haves, rng);
    let experience = build_history(
        profile,
        years_of_experience,
        (current_company, current_title),
        (prior_company, prior_title),
        tech_stack,
    );

    Candidate {
        id: CandidateId::for_sequence(&job.id, sequence),
        job_id: job.id.clone(),
        name: name.display,
        contact: ContactDetails {
            email,
            phone: phone_for(sequence),
        },
        current_company: current_company.to_string(),
        current_title: current_title.to_string(),
        prior_company: prior_company.to_string(),
        prior_title: prior_title.to_string(),
        years_of_experience,
        location: location.to_string(),
        education: education.to_string(),
        institution: institution.to_string(),
        seniority: seniority.to_string(),
        domain: domain.to_string(),
        tech_stack: tech_stack.to_string(),
        skills,
        matched_must_haves,
        violations,
        composite_score: card.composite_score,
        dimension_scores: card.dimension_scores,
        bucket: card.bucket,
        reasoning: card.reasoning,
        summary: card.summary,
        experience,
        shortlisted: false,
        bucket_override: None,
    }
}

/// Matched must-haves, then up to four extra profile skills (never a must-have), then the baseline.
fn build_skill_list(
    job: &JobDescription,
    profile: &RoleProfile,
    matched: &[String],
    rng: &mut SeededRng,
) -> Vec<String> {
    let must_haves: HashSet<String> = job
        .must_have_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();

    let mut extras: Vec<String> = profile
        .skill_pool
        .iter()
        .filter(|skill| !must_haves.contains(&skill.to_lowercase()))
        .filter(|_| rng.chance(EXTRA_SKILL_CHANCE))
        .map(|skill| skill.to_string())
        .collect();
    extras.truncate(MAX_EXTRA_SKILLS);

    let mut skills = Vec::with_capacity(matched.len() + extras.len() + 1);
    skills.extend(matched.iter().cloned());
    skills.extend(extras);

    let has_baseline = skills
        .iter()
        .any(|skill| skill.eq_ignore_ascii_case(BASELINE_SKILL));
    if !has_baseline && !must_haves.contains(&BASELINE_SKILL.to_lowercase()) {
        skills.push(BASELINE_SKILL.to_string());
    }

    skills
}

/// Current role always; prior role only past two years, taking roughly half the tenure.
fn build_history(
    profile: &RoleProfile,
    years_of_experience: u32,
    current: (&str, &str),
    prior: (&str, &str),
    tech_stack: &str,
) -> Vec<ExperienceEntry> {
    let (prior_years, current_years) = if years_of_experience > 2 {
        let prior_years = years_of_experience / 2;
        let current_years = (years_of_experience - prior_years).min(CURRENT_TENURE_CAP);
        (Some(prior_years), current_years)
    } else {
        (None, years_of_experience)
    };

    let current_start = REFERENCE_YEAR.saturating_sub(current_years as u16);
    let mut history = vec![ExperienceEntry {
        company: current.0.to_string(),
        title: current.1.to_string(),
        start_year: current_start,
        end_year: None,
        summary: (profile.current_role_summary)(current.0, tech_stack),
    }];

    if let Some(prior_years) = prior_years {
        history.push(ExperienceEntry {
            company: prior.0.to_string(),
            title: prior.1.to_string(),
            start_year: current_start.saturating_sub(prior_years as u16),
            end_year: Some(current_start),
            summary: (profile.prior_role_summary)(prior.0),
        });
    }

    history
}
