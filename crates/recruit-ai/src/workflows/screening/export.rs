use std::io::Write;

use serde::Serialize;

use super::domain::Candidate;

#[derive(Debug, Serialize)]
struct CandidateRow<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    years_of_experience: u32,
    composite_score: u8,
    skills_match: u8,
    experience: u8,
    domain_fit: u8,
    education: u8,
    original_bucket: &'static str,
    effective_bucket: &'static str,
    shortlisted: bool,
    violations: String,
}

/// Write one CSV row per candidate; the header row precedes the first record.
pub fn write_candidates_csv<W: Write>(candidates: &[Candidate], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for candidate in candidates {
        let violations = candidate
            .violations
            .iter()
            .map(|violation| violation.message())
            .collect::<Vec<_>>()
            .join("; ");

        csv_writer.serialize(CandidateRow {
            id: &candidate.id.0,
            name: &candidate.name,
            email: &candidate.contact.email,
            years_of_experience: candidate.years_of_experience,
            composite_score: candidate.composite_score,
            skills_match: candidate.dimension_scores.skills_match,
            experience: candidate.dimension_scores.experience,
            domain_fit: candidate.dimension_scores.domain_fit,
            education: candidate.dimension_scores.education,
            original_bucket: candidate.bucket.label(),
            effective_bucket: candidate.effective_bucket().label(),
            shortlisted: candidate.shortlisted,
            violations,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
