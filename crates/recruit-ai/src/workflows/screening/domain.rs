use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profiles::RoleFamily;

/// Identifier wrapper for job descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier wrapper for synthesized candidates, unique within a job's pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn for_sequence(job_id: &JobId, sequence: u32) -> Self {
        Self(format!("{}-c{:03}", job_id.0, sequence))
    }
}

/// Largest pool a single job may request; synthesis cost and memory grow linearly with it.
pub const MAX_APPLICATION_COUNT: u32 = 10_000;

/// Job description as authored in the dashboard. The engine treats it as immutable input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub id: JobId,
    pub title: String,
    pub must_have_skills: Vec<String>,
    pub experience_min: u32,
    pub experience_max: u32,
    pub application_count: u32,
    #[serde(default)]
    pub role_family: RoleFamily,
}

impl JobDescription {
    /// Checks the invariants the dashboard form enforces before a job reaches the engine.
    pub fn validate(&self) -> Result<(), JobValidationError> {
        if self.id.0.trim().is_empty() {
            return Err(JobValidationError::MissingId);
        }

        if self.experience_min > self.experience_max {
            return Err(JobValidationError::InvertedExperienceRange {
                min: self.experience_min,
                max: self.experience_max,
            });
        }

        if self.application_count > MAX_APPLICATION_COUNT {
            return Err(JobValidationError::TooManyApplications {
                count: self.application_count,
                max: MAX_APPLICATION_COUNT,
            });
        }

        let mut seen = HashSet::new();
        for skill in &self.must_have_skills {
            let normalized = skill.trim().to_lowercase();
            if normalized.is_empty() {
                return Err(JobValidationError::BlankSkill);
            }
            if !seen.insert(normalized) {
                return Err(JobValidationError::DuplicateSkill(skill.clone()));
            }
        }

        Ok(())
    }
}

/// Reasons a job description is rejected at the service or catalog boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobValidationError {
    #[error("job description is missing an identifier")]
    MissingId,
    #[error("minimum experience {min} exceeds maximum {max}")]
    InvertedExperienceRange { min: u32, max: u32 },
    #[error("must-have skill '{0}' is listed more than once")]
    DuplicateSkill(String),
    #[error("must-have skills cannot be blank")]
    BlankSkill,
    #[error("application count {count} exceeds the limit of {max}")]
    TooManyApplications { count: u32, max: u32 },
}

/// Match tier assigned by the gating rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Strong,
    Potential,
    Low,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Strong, Bucket::Potential, Bucket::Low];

    /// Rank order used for override direction: strong < potential < low.
    pub const fn rank(self) -> u8 {
        match self {
            Bucket::Strong => 0,
            Bucket::Potential => 1,
            Bucket::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Bucket::Strong => "strong",
            Bucket::Potential => "potential",
            Bucket::Low => "low",
        }
    }
}

/// Hard-requirement miss recorded against a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    MissingSkill { skill: String },
    ExperienceBelowMinimum { required: u32, actual: u32 },
}

impl Violation {
    pub fn message(&self) -> String {
        match self {
            Violation::MissingSkill { skill } => format!("Missing must-have skill: {skill}"),
            Violation::ExperienceBelowMinimum { required, actual } => format!(
                "Experience below minimum: {actual} year(s) against {required} required"
            ),
        }
    }

    pub fn missing_skill(&self) -> Option<&str> {
        match self {
            Violation::MissingSkill { skill } => Some(skill),
            Violation::ExperienceBelowMinimum { .. } => None,
        }
    }
}

/// Weighted sub-dimension scores; maxima are 40/30/15/15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub skills_match: u8,
    pub experience: u8,
    pub domain_fit: u8,
    pub education: u8,
}

impl DimensionScores {
    pub fn total(&self) -> u16 {
        u16::from(self.skills_match)
            + u16::from(self.experience)
            + u16::from(self.domain_fit)
            + u16::from(self.education)
    }
}

/// Explanatory prose per scoring dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionReasoning {
    pub skills_match: String,
    pub experience: String,
    pub domain_fit: String,
    pub education: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
}

/// One position in a candidate's work history. `end_year == None` means current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub start_year: u16,
    pub end_year: Option<u16>,
    pub summary: String,
}

impl ExperienceEntry {
    pub fn is_current(&self) -> bool {
        self.end_year.is_none()
    }
}

/// Fixed list of reasons a reviewer may cite when overriding a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideReason {
    TransferableSkills,
    SkillsVerifiedInInterview,
    InternalReferral,
    ScoringMismatch,
    RoleRequirementsChanged,
    CandidateWithdrew,
}

impl OverrideReason {
    pub const fn label(self) -> &'static str {
        match self {
            OverrideReason::TransferableSkills => "Transferable skills",
            OverrideReason::SkillsVerifiedInInterview => "Skills verified in interview",
            OverrideReason::InternalReferral => "Internal referral",
            OverrideReason::ScoringMismatch => "Score does not reflect resume",
            OverrideReason::RoleRequirementsChanged => "Role requirements changed",
            OverrideReason::CandidateWithdrew => "Candidate withdrew",
        }
    }
}

/// Human reclassification stored next to, never instead of, the original bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketOverride {
    pub bucket: Bucket,
    pub reason: OverrideReason,
    pub note: String,
    pub actor: String,
    pub recorded_at: DateTime<Utc>,
}

/// Engine output: one synthesized, scored, and classified candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub job_id: JobId,
    pub name: String,
    pub contact: ContactDetails,
    pub current_company: String,
    pub current_title: String,
    pub prior_company: String,
    pub prior_title: String,
    pub years_of_experience: u32,
    pub location: String,
    pub education: String,
    pub institution: String,
    pub seniority: String,
    pub domain: String,
    pub tech_stack: String,
    pub skills: Vec<String>,
    pub matched_must_haves: Vec<String>,
    pub violations: Vec<Violation>,
    pub composite_score: u8,
    pub dimension_scores: DimensionScores,
    pub bucket: Bucket,
    pub reasoning: DimensionReasoning,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub shortlisted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_override: Option<BucketOverride>,
}

impl Candidate {
    /// Bucket the dashboard should display: the override when present, else the original.
    pub fn effective_bucket(&self) -> Bucket {
        self.bucket_override
            .as_ref()
            .map(|entry| entry.bucket)
            .unwrap_or(self.bucket)
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
