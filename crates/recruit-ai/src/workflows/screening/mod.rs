//! Candidate screening: deterministic pool synthesis, scoring, gating, and reviewer overrides.
//!
//! Data flows job description -> synthesizer (seeded generator, attribute pools, role
//! profile) -> scoring -> bucket gate -> candidate store. Review state (shortlists,
//! overrides) lives in a [`ReviewRepository`] and is layered over the immutable store by
//! [`ScreeningService`].

pub mod catalog;
pub mod domain;
pub mod export;
pub mod overrides;
pub mod pools;
pub mod profiles;
pub mod report;
pub mod repository;
pub mod rng;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;
pub mod synthesizer;

#[cfg(test)]
mod tests;

pub use catalog::{baseline_jobs, load_jobs, resolve_jobs, JobCatalogError};
pub use domain::{
    Bucket, BucketOverride, Candidate, CandidateId, ContactDetails, DimensionReasoning,
    DimensionScores, ExperienceEntry, JobDescription, JobId, JobValidationError,
    OverrideReason, Violation,
};
pub use export::write_candidates_csv;
pub use overrides::{AuditEntry, OverrideDirection, OverrideError, OverrideRequest};
pub use profiles::{profile_for, RoleFamily, RoleProfile};
pub use report::{summarize_pool, top_candidates, PoolSummary};
pub use repository::{CandidateKey, CandidateReview, RepositoryError, ReviewRepository};
pub use router::screening_router;
pub use service::{ScreeningService, ScreeningServiceError};
pub use store::CandidateStore;
pub use synthesizer::CandidateSynthesizer;
