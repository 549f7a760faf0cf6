use metrics_exporter_prometheus::PrometheusHandle;
use recruit_ai::workflows::screening::{
    AuditEntry, CandidateKey, CandidateReview, JobId, RepositoryError, ReviewRepository,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local review state. Shortlists and overrides are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReviewRepository {
    reviews: Arc<Mutex<HashMap<CandidateKey, CandidateReview>>>,
    audit: Arc<Mutex<Vec<AuditEntry>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("review store lock poisoned".to_string()))
}

impl ReviewRepository for InMemoryReviewRepository {
    fn review(&self, key: &CandidateKey) -> Result<Option<CandidateReview>, RepositoryError> {
        Ok(lock(&self.reviews)?.get(key).cloned())
    }

    fn set_shortlisted(
        &self,
        key: &CandidateKey,
        shortlisted: bool,
    ) -> Result<(), RepositoryError> {
        lock(&self.reviews)?
            .entry(key.clone())
            .or_default()
            .shortlisted = shortlisted;
        Ok(())
    }

    fn record_override(&self, entry: AuditEntry) -> Result<(), RepositoryError> {
        let key = CandidateKey::new(&entry.job_id, &entry.candidate_id);
        let mut reviews = lock(&self.reviews)?;
        let mut audit = lock(&self.audit)?;
        reviews.entry(key).or_default().bucket_override = Some(entry.to_override());
        audit.push(entry);
        Ok(())
    }

    fn audit_log(&self, job_id: &JobId) -> Result<Vec<AuditEntry>, RepositoryError> {
        Ok(lock(&self.audit)?
            .iter()
            .filter(|entry| &entry.job_id == job_id)
            .cloned()
            .collect())
    }
}
