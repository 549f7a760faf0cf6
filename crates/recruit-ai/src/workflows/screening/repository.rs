use serde::{Deserialize, Serialize};

use super::domain::{BucketOverride, CandidateId, JobId};
use super::overrides::AuditEntry;

/// Composite key addressing one candidate in one job's pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateKey {
    pub job_id: JobId,
    pub candidate_id: CandidateId,
}

impl CandidateKey {
    pub fn new(job_id: &JobId, candidate_id: &CandidateId) -> Self {
        Self {
            job_id: job_id.clone(),
            candidate_id: candidate_id.clone(),
        }
    }
}

/// Reviewer-owned state layered over an engine-produced candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateReview {
    pub shortlisted: bool,
    pub bucket_override: Option<BucketOverride>,
}

/// Storage abstraction for review state so the service can be exercised in isolation.
pub trait ReviewRepository: Send + Sync {
    fn review(&self, key: &CandidateKey) -> Result<Option<CandidateReview>, RepositoryError>;
    fn set_shortlisted(&self, key: &CandidateKey, shortlisted: bool)
        -> Result<(), RepositoryError>;
    /// Append to the audit log and make the entry the candidate's current override.
    fn record_override(&self, entry: AuditEntry) -> Result<(), RepositoryError>;
    /// Audit entries for a job, oldest first.
    fn audit_log(&self, job_id: &JobId) -> Result<Vec<AuditEntry>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
