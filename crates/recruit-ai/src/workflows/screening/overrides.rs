use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Bucket, BucketOverride, Candidate, CandidateId, JobId, OverrideReason};

pub const MIN_JUSTIFICATION_CHARS: usize = 10;

/// Reviewer-submitted reclassification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRequest {
    pub bucket: Bucket,
    pub reason: OverrideReason,
    pub justification: String,
    pub actor: String,
}

/// Validation errors raised by the override guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverrideError {
    #[error("justification must be at least {min} characters (found {found})")]
    JustificationTooShort { min: usize, found: usize },
    #[error("candidate is already in the {} bucket", .0.label())]
    Unchanged(Bucket),
    #[error("override must name the reviewer")]
    MissingActor,
}

/// Where an override moves a candidate relative to the engine's original bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideDirection {
    Upgrade,
    Downgrade,
    Reverted,
}

impl OverrideDirection {
    pub fn between(original: Bucket, target: Bucket) -> Self {
        match target.rank().cmp(&original.rank()) {
            std::cmp::Ordering::Less => Self::Upgrade,
            std::cmp::Ordering::Greater => Self::Downgrade,
            std::cmp::Ordering::Equal => Self::Reverted,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Upgrade => "upgrade",
            Self::Downgrade => "downgrade",
            Self::Reverted => "reverted",
        }
    }
}

/// Immutable audit record: the engine's original verdict next to the human one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub job_id: JobId,
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub original_bucket: Bucket,
    pub original_score: u8,
    pub previous_bucket: Bucket,
    pub overridden_bucket: Bucket,
    pub direction: OverrideDirection,
    pub reason: OverrideReason,
    pub justification: String,
    pub actor: String,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn to_override(&self) -> BucketOverride {
        BucketOverride {
            bucket: self.overridden_bucket,
            reason: self.reason,
            note: self.justification.clone(),
            actor: self.actor.clone(),
            recorded_at: self.recorded_at,
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "{}: {} -> {} ({}, {}) by {}",
            self.candidate_name,
            self.original_bucket.label(),
            self.overridden_bucket.label(),
            self.direction.label(),
            self.reason.label(),
            self.actor
        )
    }
}

/// Guard validating override requests before they reach the review repository.
#[derive(Debug, Clone)]
pub struct OverrideGuard {
    min_justification_chars: usize,
}

impl Default for OverrideGuard {
    fn default() -> Self {
        Self {
            min_justification_chars: MIN_JUSTIFICATION_CHARS,
        }
    }
}

impl OverrideGuard {
    /// Validate `request` against the candidate's current state and build the audit entry.
    ///
    /// `candidate` must carry its current review overlay so an unchanged target is detected
    /// against the effective bucket, while direction is measured from the original bucket.
    pub fn review(
        &self,
        candidate: &Candidate,
        request: OverrideRequest,
        recorded_at: DateTime<Utc>,
    ) -> Result<AuditEntry, OverrideError> {
        let justification = request.justification.trim().to_string();
        let found = justification.chars().count();
        if found < self.min_justification_chars {
            return Err(OverrideError::JustificationTooShort {
                min: self.min_justification_chars,
                found,
            });
        }

        let actor = request.actor.trim().to_string();
        if actor.is_empty() {
            return Err(OverrideError::MissingActor);
        }

        let previous_bucket = candidate.effective_bucket();
        if request.bucket == previous_bucket {
            return Err(OverrideError::Unchanged(previous_bucket));
        }

        Ok(AuditEntry {
            job_id: candidate.job_id.clone(),
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            original_bucket: candidate.bucket,
            original_score: candidate.composite_score,
            previous_bucket,
            overridden_bucket: request.bucket,
            direction: OverrideDirection::between(candidate.bucket, request.bucket),
            reason: request.reason,
            justification,
            actor,
            recorded_at,
        })
    }
}
