use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::screening::catalog::baseline_jobs;
use crate::workflows::screening::domain::{Bucket, Candidate, JobDescription, JobId, OverrideReason};
use crate::workflows::screening::overrides::{AuditEntry, OverrideRequest};
use crate::workflows::screening::repository::{
    CandidateKey, CandidateReview, RepositoryError, ReviewRepository,
};
use crate::workflows::screening::{
    screening_router, CandidateStore, CandidateSynthesizer, RoleFamily, ScreeningService,
};

pub(super) fn jobs() -> Vec<JobDescription> {
    baseline_jobs()
}

pub(super) fn job(id: &str) -> JobDescription {
    jobs()
        .into_iter()
        .find(|job| job.id.0 == id)
        .expect("baseline job present")
}

pub(super) fn custom_job(id: &str, application_count: u32) -> JobDescription {
    JobDescription {
        id: JobId(id.to_string()),
        title: "Platform Engineer".to_string(),
        must_have_skills: vec!["Rust".to_string(), "Linux".to_string()],
        experience_min: 3,
        experience_max: 6,
        application_count,
        role_family: RoleFamily::DevOps,
    }
}

pub(super) fn pool(id: &str) -> Vec<Candidate> {
    let job = job(id);
    CandidateSynthesizer::new().synthesize(&job, job.role_family)
}

pub(super) fn store() -> Arc<CandidateStore> {
    Arc::new(CandidateStore::build(&jobs(), &CandidateSynthesizer::new()))
}

pub(super) fn build_service() -> (ScreeningService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ScreeningService::new(store(), repository.clone());
    (service, repository)
}

pub(super) fn screening_router_with_service(
    service: ScreeningService<MemoryRepository>,
) -> axum::Router {
    screening_router(Arc::new(service))
}

/// First candidate in `candidates` whose original bucket is not `bucket`.
pub(super) fn candidate_outside<'a>(candidates: &'a [Candidate], bucket: Bucket) -> &'a Candidate {
    candidates
        .iter()
        .find(|candidate| candidate.bucket != bucket)
        .expect("pool contains a candidate outside the bucket")
}

pub(super) fn override_request(bucket: Bucket) -> OverrideRequest {
    OverrideRequest {
        bucket,
        reason: OverrideReason::SkillsVerifiedInInterview,
        justification: "Demonstrated the missing skills in the technical screen.".to_string(),
        actor: "recruiter@example.com".to_string(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) reviews: Arc<Mutex<HashMap<CandidateKey, CandidateReview>>>,
    pub(super) log: Arc<Mutex<Vec<AuditEntry>>>,
}

impl MemoryRepository {
    pub(super) fn entries(&self) -> Vec<AuditEntry> {
        self.log.lock().expect("audit mutex poisoned").clone()
    }
}

impl ReviewRepository for MemoryRepository {
    fn review(&self, key: &CandidateKey) -> Result<Option<CandidateReview>, RepositoryError> {
        let guard = self.reviews.lock().expect("repository mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn set_shortlisted(
        &self,
        key: &CandidateKey,
        shortlisted: bool,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.reviews.lock().expect("repository mutex poisoned");
        guard.entry(key.clone()).or_default().shortlisted = shortlisted;
        Ok(())
    }

    fn record_override(&self, entry: AuditEntry) -> Result<(), RepositoryError> {
        let key = CandidateKey::new(&entry.job_id, &entry.candidate_id);
        self.reviews
            .lock()
            .expect("repository mutex poisoned")
            .entry(key)
            .or_default()
            .bucket_override = Some(entry.to_override());
        self.log.lock().expect("audit mutex poisoned").push(entry);
        Ok(())
    }

    fn audit_log(&self, job_id: &JobId) -> Result<Vec<AuditEntry>, RepositoryError> {
        let guard = self.log.lock().expect("audit mutex poisoned");
        Ok(guard
            .iter()
            .filter(|entry| &entry.job_id == job_id)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl ReviewRepository for UnavailableRepository {
    fn review(&self, _key: &CandidateKey) -> Result<Option<CandidateReview>, RepositoryError> {
        Err(RepositoryError::Unavailable("review store offline".to_string()))
    }

    fn set_shortlisted(
        &self,
        _key: &CandidateKey,
        _shortlisted: bool,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("review store offline".to_string()))
    }

    fn record_override(&self, _entry: AuditEntry) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("review store offline".to_string()))
    }

    fn audit_log(&self, _job_id: &JobId) -> Result<Vec<AuditEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("review store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
