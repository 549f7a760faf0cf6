use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{Candidate, CandidateId, JobDescription, JobId, JobValidationError};
use super::overrides::{AuditEntry, OverrideError, OverrideGuard, OverrideRequest};
use super::report::{summarize_pool, PoolSummary};
use super::repository::{CandidateKey, RepositoryError, ReviewRepository};
use super::store::CandidateStore;
use super::synthesizer::CandidateSynthesizer;

/// Service composing the candidate store, the review repository, and the override guard.
pub struct ScreeningService<R> {
    store: Arc<CandidateStore>,
    reviews: Arc<R>,
    guard: OverrideGuard,
    synthesizer: CandidateSynthesizer,
}

impl<R> ScreeningService<R>
where
    R: ReviewRepository + 'static,
{
    pub fn new(store: Arc<CandidateStore>, reviews: Arc<R>) -> Self {
        Self {
            store,
            reviews,
            guard: OverrideGuard::default(),
            synthesizer: CandidateSynthesizer::new(),
        }
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    pub fn jobs(&self) -> &[JobDescription] {
        self.store.jobs()
    }

    /// A job's pool in sequence order, with review state applied.
    pub fn candidates(&self, job_id: &JobId) -> Result<Vec<Candidate>, ScreeningServiceError> {
        self.ensure_job(job_id)?;
        self.store
            .get(job_id)
            .iter()
            .map(|candidate| self.with_review(candidate))
            .collect()
    }

    pub fn candidate(
        &self,
        job_id: &JobId,
        candidate_id: &CandidateId,
    ) -> Result<Candidate, ScreeningServiceError> {
        let base = self.find(job_id, candidate_id)?;
        self.with_review(base)
    }

    pub fn shortlist(
        &self,
        job_id: &JobId,
        candidate_id: &CandidateId,
        shortlisted: bool,
    ) -> Result<Candidate, ScreeningServiceError> {
        let base = self.find(job_id, candidate_id)?;
        self.reviews
            .set_shortlisted(&CandidateKey::new(job_id, candidate_id), shortlisted)?;
        info!(job_id = %job_id.0, candidate_id = %candidate_id.0, shortlisted, "shortlist updated");
        self.with_review(base)
    }

    /// Validate and record a bucket override. The original bucket and score stay untouched.
    pub fn override_bucket(
        &self,
        job_id: &JobId,
        candidate_id: &CandidateId,
        request: OverrideRequest,
    ) -> Result<AuditEntry, ScreeningServiceError> {
        let current = self.candidate(job_id, candidate_id)?;
        let entry = match self.guard.review(&current, request, Utc::now()) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(job_id = %job_id.0, candidate_id = %candidate_id.0, error = %err, "override rejected");
                return Err(err.into());
            }
        };

        self.reviews.record_override(entry.clone())?;
        info!(
            job_id = %job_id.0,
            candidate_id = %candidate_id.0,
            from = entry.original_bucket.label(),
            to = entry.overridden_bucket.label(),
            direction = entry.direction.label(),
            "bucket override recorded"
        );
        Ok(entry)
    }

    pub fn audit_trail(&self, job_id: &JobId) -> Result<Vec<AuditEntry>, ScreeningServiceError> {
        self.ensure_job(job_id)?;
        Ok(self.reviews.audit_log(job_id)?)
    }

    pub fn pool_summary(&self, job_id: &JobId) -> Result<PoolSummary, ScreeningServiceError> {
        let job = self
            .store
            .job(job_id)
            .ok_or_else(|| ScreeningServiceError::UnknownJob(job_id.clone()))?;
        let candidates = self.candidates(job_id)?;
        Ok(summarize_pool(job, &candidates))
    }

    /// Synthesize a pool for a job outside the startup store. The result is not cached.
    pub fn synthesize(&self, job: &JobDescription) -> Result<Vec<Candidate>, ScreeningServiceError> {
        job.validate()?;
        let candidates = self.synthesizer.synthesize(job, job.role_family);
        info!(
            job_id = %job.id.0,
            candidates = candidates.len(),
            "on-demand synthesis complete"
        );
        Ok(candidates)
    }

    fn ensure_job(&self, job_id: &JobId) -> Result<(), ScreeningServiceError> {
        if self.store.contains(job_id) {
            Ok(())
        } else {
            Err(ScreeningServiceError::UnknownJob(job_id.clone()))
        }
    }

    fn find(
        &self,
        job_id: &JobId,
        candidate_id: &CandidateId,
    ) -> Result<&Candidate, ScreeningServiceError> {
        self.ensure_job(job_id)?;
        self.store
            .get(job_id)
            .iter()
            .find(|candidate| &candidate.id == candidate_id)
            .ok_or_else(|| ScreeningServiceError::UnknownCandidate(candidate_id.clone()))
    }

    fn with_review(&self, base: &Candidate) -> Result<Candidate, ScreeningServiceError> {
        let mut candidate = base.clone();
        if let Some(review) = self
            .reviews
            .review(&CandidateKey::new(&base.job_id, &base.id))?
        {
            candidate.shortlisted = review.shortlisted;
            candidate.bucket_override = review.bucket_override;
        }
        Ok(candidate)
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error("job '{}' is not in the candidate store", .0.as_str())]
    UnknownJob(JobId),
    #[error("candidate '{}' not found", .0.as_str())]
    UnknownCandidate(CandidateId),
    #[error(transparent)]
    Override(#[from] OverrideError),
    #[error(transparent)]
    InvalidJob(#[from] JobValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
