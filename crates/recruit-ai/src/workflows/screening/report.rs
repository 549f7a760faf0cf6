use std::collections::HashMap;

use serde::Serialize;

use super::domain::{Bucket, Candidate, JobDescription, JobId, Violation};

#[derive(Debug, Clone, Serialize)]
pub struct BucketCount {
    pub bucket: Bucket,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGap {
    pub skill: String,
    pub missing_count: usize,
}

/// Dashboard-level digest of one job's candidate pool.
#[derive(Debug, Clone, Serialize)]
pub struct PoolSummary {
    pub job_id: JobId,
    pub job_title: String,
    pub total: usize,
    pub buckets: Vec<BucketCount>,
    pub original_buckets: Vec<BucketCount>,
    pub shortlisted: usize,
    pub overridden: usize,
    pub average_score: f32,
    pub experience_shortfalls: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_gaps: Vec<SkillGap>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
}

impl PoolSummary {
    pub fn count(&self, bucket: Bucket) -> usize {
        self.buckets
            .iter()
            .find(|entry| entry.bucket == bucket)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

const TOP_GAP_LIMIT: usize = 3;

pub fn summarize_pool(job: &JobDescription, candidates: &[Candidate]) -> PoolSummary {
    let total = candidates.len();
    let buckets = count_buckets(candidates, Candidate::effective_bucket);
    let original_buckets = count_buckets(candidates, |candidate| candidate.bucket);
    let shortlisted = candidates.iter().filter(|c| c.shortlisted).count();
    let overridden = candidates
        .iter()
        .filter(|c| c.bucket_override.is_some())
        .count();

    let average_score = if total == 0 {
        0.0
    } else {
        let sum: u32 = candidates
            .iter()
            .map(|c| u32::from(c.composite_score))
            .sum();
        ((sum as f32 / total as f32) * 10.0).round() / 10.0
    };

    let experience_shortfalls = candidates
        .iter()
        .filter(|c| {
            c.violations
                .iter()
                .any(|v| matches!(v, Violation::ExperienceBelowMinimum { .. }))
        })
        .count();

    let top_gaps = skill_gaps(job, candidates);

    let strong = buckets
        .iter()
        .find(|entry| entry.bucket == Bucket::Strong)
        .map(|entry| entry.count)
        .unwrap_or(0);

    let mut observations = Vec::new();
    if total == 0 {
        observations.push("No applications received yet.".to_string());
    } else {
        let pct = (strong as f32 / total as f32 * 100.0).round();
        observations.push(format!(
            "{strong} of {total} candidates ({pct:.0}%) clear every hard requirement with a strong score."
        ));
        if let Some(gap) = top_gaps.first() {
            observations.push(format!(
                "{} is the most common gap ({} candidates).",
                gap.skill, gap.missing_count
            ));
        }
        if experience_shortfalls > 0 {
            observations.push(format!(
                "{experience_shortfalls} candidate(s) fall below the {}-year experience minimum.",
                job.experience_min
            ));
        }
        if overridden > 0 {
            observations.push(format!(
                "{overridden} reviewer override(s) recorded; see the audit trail."
            ));
        }
    }

    PoolSummary {
        job_id: job.id.clone(),
        job_title: job.title.clone(),
        total,
        buckets,
        original_buckets,
        shortlisted,
        overridden,
        average_score,
        experience_shortfalls,
        top_gaps,
        observations,
    }
}

/// Highest effective tier first, then composite score, then sequence order.
pub fn top_candidates(candidates: &[Candidate], limit: usize) -> Vec<&Candidate> {
    let mut ranked: Vec<&Candidate> = candidates.iter().collect();
    ranked.sort_by(|a, b| {
        a.effective_bucket()
            .rank()
            .cmp(&b.effective_bucket().rank())
            .then_with(|| b.composite_score.cmp(&a.composite_score))
    });
    ranked.truncate(limit);
    ranked
}

fn count_buckets<F>(candidates: &[Candidate], bucket_of: F) -> Vec<BucketCount>
where
    F: Fn(&Candidate) -> Bucket,
{
    Bucket::ALL
        .iter()
        .map(|bucket| BucketCount {
            bucket: *bucket,
            label: bucket.label(),
            count: candidates.iter().filter(|c| bucket_of(*c) == *bucket).count(),
        })
        .collect()
}

fn skill_gaps(job: &JobDescription, candidates: &[Candidate]) -> Vec<SkillGap> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for candidate in candidates {
        for skill in candidate.violations.iter().filter_map(Violation::missing_skill) {
            *counts.entry(skill).or_default() += 1;
        }
    }

    let mut gaps: Vec<SkillGap> = job
        .must_have_skills
        .iter()
        .filter_map(|skill| {
            counts.get(skill.as_str()).map(|count| SkillGap {
                skill: skill.clone(),
                missing_count: *count,
            })
        })
        .collect();
    gaps.sort_by(|a, b| b.missing_count.cmp(&a.missing_count));
    gaps.truncate(TOP_GAP_LIMIT);
    gaps
}
