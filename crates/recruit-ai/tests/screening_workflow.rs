use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use recruit_ai::workflows::screening::{
    baseline_jobs, load_jobs, summarize_pool, top_candidates, write_candidates_csv, AuditEntry,
    Bucket, CandidateKey, CandidateReview, CandidateStore, CandidateSynthesizer, JobCatalogError,
    JobId, OverrideReason, OverrideRequest, RepositoryError, ReviewRepository, ScreeningService,
};

#[derive(Default)]
struct InMemoryReviews {
    reviews: Mutex<HashMap<CandidateKey, CandidateReview>>,
    log: Mutex<Vec<AuditEntry>>,
}

impl ReviewRepository for InMemoryReviews {
    fn review(&self, key: &CandidateKey) -> Result<Option<CandidateReview>, RepositoryError> {
        Ok(self.reviews.lock().expect("mutex").get(key).cloned())
    }

    fn set_shortlisted(
        &self,
        key: &CandidateKey,
        shortlisted: bool,
    ) -> Result<(), RepositoryError> {
        self.reviews
            .lock()
            .expect("mutex")
            .entry(key.clone())
            .or_default()
            .shortlisted = shortlisted;
        Ok(())
    }

    fn record_override(&self, entry: AuditEntry) -> Result<(), RepositoryError> {
        self.reviews
            .lock()
            .expect("mutex")
            .entry(CandidateKey::new(&entry.job_id, &entry.candidate_id))
            .or_default()
            .bucket_override = Some(entry.to_override());
        self.log.lock().expect("mutex").push(entry);
        Ok(())
    }

    fn audit_log(&self, job_id: &JobId) -> Result<Vec<AuditEntry>, RepositoryError> {
        Ok(self
            .log
            .lock()
            .expect("mutex")
            .iter()
            .filter(|entry| &entry.job_id == job_id)
            .cloned()
            .collect())
    }
}

fn service() -> ScreeningService<InMemoryReviews> {
    let store = CandidateStore::build(&baseline_jobs(), &CandidateSynthesizer::new());
    ScreeningService::new(Arc::new(store), Arc::new(InMemoryReviews::default()))
}

#[test]
fn store_is_reproducible_across_builds() {
    let jobs = baseline_jobs();
    let first = CandidateStore::build(&jobs, &CandidateSynthesizer::new());
    let second = CandidateStore::build(&jobs, &CandidateSynthesizer::new());

    let expected: usize = jobs.iter().map(|job| job.application_count as usize).sum();
    assert_eq!(first.total_candidates(), expected);
    for job in &jobs {
        assert_eq!(first.get(&job.id), second.get(&job.id));
    }

    let jd1 = JobId("jd1".to_string());
    let strong = |store: &CandidateStore| {
        store
            .get(&jd1)
            .iter()
            .filter(|c| c.bucket == Bucket::Strong)
            .count()
    };
    assert_eq!(strong(&first), strong(&second));
}

#[test]
fn summary_accounts_for_every_candidate() {
    let service = service();
    for job in baseline_jobs() {
        let summary = service.pool_summary(&job.id).expect("summary");
        let bucketed: usize = summary.buckets.iter().map(|entry| entry.count).sum();
        assert_eq!(summary.total, job.application_count as usize);
        assert_eq!(bucketed, summary.total);
        assert!(!summary.observations.is_empty());
    }
}

#[test]
fn top_candidates_rank_by_tier_then_score() {
    let service = service();
    let candidates = service
        .candidates(&JobId("jd4".to_string()))
        .expect("pool");
    let top = top_candidates(&candidates, 10);

    assert_eq!(top.len(), 10);
    for pair in top.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.effective_bucket().rank() < b.effective_bucket().rank()
                || (a.effective_bucket() == b.effective_bucket()
                    && a.composite_score >= b.composite_score)
        );
    }
}

#[test]
fn override_flows_into_summary_and_export() {
    let service = service();
    let job_id = JobId("jd2".to_string());
    let target = service
        .candidates(&job_id)
        .expect("pool")
        .into_iter()
        .find(|c| c.bucket == Bucket::Low || c.bucket == Bucket::Potential)
        .expect("non-strong candidate");

    service
        .override_bucket(
            &job_id,
            &target.id,
            OverrideRequest {
                bucket: Bucket::Strong,
                reason: OverrideReason::InternalReferral,
                justification: "Referred by the payments platform lead.".to_string(),
                actor: "recruiter@example.com".to_string(),
            },
        )
        .expect("override");

    let candidates = service.candidates(&job_id).expect("pool");
    let job = service.store().job(&job_id).expect("job").clone();
    let summary = summarize_pool(&job, &candidates);
    assert_eq!(summary.overridden, 1);

    let mut buffer = Vec::new();
    write_candidates_csv(&candidates, &mut buffer).expect("csv export");
    let csv = String::from_utf8(buffer).expect("utf8");
    let mut lines = csv.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("id,name,email"));
    assert_eq!(lines.count(), candidates.len());

    let row = csv
        .lines()
        .find(|line| line.starts_with(&format!("{},", target.id.0)))
        .expect("overridden row");
    assert!(row.contains(&format!("{},strong", target.bucket.label())));
}

#[test]
fn catalog_file_round_trips_through_the_loader() {
    let path = std::env::temp_dir().join(format!("recruit-ai-jobs-{}.json", std::process::id()));
    let raw = serde_json::to_string(&baseline_jobs()).expect("serialize jobs");
    std::fs::write(&path, raw).expect("write catalog");

    let loaded = load_jobs(&path).expect("load catalog");
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, baseline_jobs());

    let bad = std::env::temp_dir().join(format!("recruit-ai-bad-{}.json", std::process::id()));
    std::fs::write(&bad, "{\"jobs\": []}").expect("write catalog");
    let err = load_jobs(&bad).expect_err("object is not a job list");
    std::fs::remove_file(&bad).ok();
    assert!(matches!(err, JobCatalogError::Parse(_)));
}
