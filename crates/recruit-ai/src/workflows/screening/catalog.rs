//! Job descriptions known at startup: the built-in baseline set or a JSON catalog file.

use std::fs;
use std::path::{Path, PathBuf};

use super::domain::{JobDescription, JobId, JobValidationError};
use super::profiles::RoleFamily;

#[derive(Debug, thiserror::Error)]
pub enum JobCatalogError {
    #[error("failed to read job catalog {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("job catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("job '{job_id}' is invalid: {source}")]
    Invalid {
        job_id: String,
        #[source]
        source: JobValidationError,
    },
    #[error("job id '{0}' appears more than once in the catalog")]
    DuplicateJob(String),
}

/// Fixed startup set the candidate store is built from.
pub fn baseline_jobs() -> Vec<JobDescription> {
    vec![
        job(
            "jd1",
            "Senior Full-Stack Engineer",
            &["React", "Node.js", "TypeScript", "PostgreSQL"],
            (4, 8),
            214,
            RoleFamily::FullStack,
        ),
        job(
            "jd2",
            "Backend Engineer, Payments",
            &["Go", "PostgreSQL", "Kafka", "Kubernetes"],
            (3, 7),
            156,
            RoleFamily::Backend,
        ),
        job(
            "jd3",
            "Product Manager, Growth",
            &["Roadmapping", "Stakeholder Management", "Analytics"],
            (5, 10),
            98,
            RoleFamily::Product,
        ),
        job(
            "jd4",
            "Data Analyst",
            &["SQL", "Python", "Tableau", "Statistics"],
            (2, 5),
            143,
            RoleFamily::DataAnalyst,
        ),
        job(
            "jd5",
            "DevOps Engineer",
            &["AWS", "Terraform", "Kubernetes", "CI/CD"],
            (4, 9),
            0,
            RoleFamily::DevOps,
        ),
    ]
}

fn job(
    id: &str,
    title: &str,
    skills: &[&str],
    (experience_min, experience_max): (u32, u32),
    application_count: u32,
    role_family: RoleFamily,
) -> JobDescription {
    JobDescription {
        id: JobId(id.to_string()),
        title: title.to_string(),
        must_have_skills: skills.iter().map(|skill| skill.to_string()).collect(),
        experience_min,
        experience_max,
        application_count,
        role_family,
    }
}

/// Parse and validate a JSON array of job descriptions.
pub fn parse_jobs(raw: &str) -> Result<Vec<JobDescription>, JobCatalogError> {
    let jobs: Vec<JobDescription> = serde_json::from_str(raw)?;
    validate_catalog(&jobs)?;
    Ok(jobs)
}

pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<JobDescription>, JobCatalogError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| JobCatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_jobs(&raw)
}

/// Catalog from `path` when given, otherwise the baseline set.
pub fn resolve_jobs(path: Option<&Path>) -> Result<Vec<JobDescription>, JobCatalogError> {
    match path {
        Some(path) => load_jobs(path),
        None => Ok(baseline_jobs()),
    }
}

fn validate_catalog(jobs: &[JobDescription]) -> Result<(), JobCatalogError> {
    let mut seen = std::collections::HashSet::new();
    for job in jobs {
        job.validate().map_err(|source| JobCatalogError::Invalid {
            job_id: job.id.0.clone(),
            source,
        })?;
        if !seen.insert(job.id.clone()) {
            return Err(JobCatalogError::DuplicateJob(job.id.0.clone()));
        }
    }
    Ok(())
}
