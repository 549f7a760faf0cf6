use std::collections::HashMap;

use tracing::info;

use super::domain::{Candidate, JobDescription, JobId};
use super::synthesizer::CandidateSynthesizer;

/// Candidate pools keyed by job id, built once at startup and read-only afterwards.
///
/// Jobs created after the build are not added here; callers synthesize those on demand.
#[derive(Debug, Clone, Default)]
pub struct CandidateStore {
    jobs: Vec<JobDescription>,
    pools: HashMap<JobId, Vec<Candidate>>,
}

impl CandidateStore {
    /// Synthesize a pool for every job with applications; zero-application jobs map to an empty pool.
    pub fn build(jobs: &[JobDescription], synthesizer: &CandidateSynthesizer) -> Self {
        let mut pools = HashMap::with_capacity(jobs.len());

        for job in jobs {
            let pool = if job.application_count > 0 {
                synthesizer.synthesize(job, job.role_family)
            } else {
                Vec::new()
            };
            pools.insert(job.id.clone(), pool);
        }

        let candidates: usize = pools.values().map(Vec::len).sum();
        info!(jobs = jobs.len(), candidates, "candidate store built");

        Self {
            jobs: jobs.to_vec(),
            pools,
        }
    }

    /// Pool for a job, or an empty slice when the job was not part of the build.
    pub fn get(&self, job_id: &JobId) -> &[Candidate] {
        self.pools.get(job_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, job_id: &JobId) -> bool {
        self.pools.contains_key(job_id)
    }

    pub fn job(&self, job_id: &JobId) -> Option<&JobDescription> {
        self.jobs.iter().find(|job| &job.id == job_id)
    }

    /// Jobs in the order they were supplied to [`CandidateStore::build`].
    pub fn jobs(&self) -> &[JobDescription] {
        &self.jobs
    }

    pub fn total_candidates(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }
}
