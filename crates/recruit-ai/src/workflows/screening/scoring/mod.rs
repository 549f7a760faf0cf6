mod narrative;
mod policy;
mod rules;
mod weights;

pub use policy::classify_bucket;
pub use rules::{collect_violations, composite_score, dimension_pct, dimension_scores};
pub use weights::{
    DimensionWeights, BASE_SCORE_FLOOR, BASE_SCORE_SPAN, POTENTIAL_THRESHOLD, STRONG_THRESHOLD,
    WEIGHTS,
};

use super::domain::{Bucket, DimensionReasoning, DimensionScores, Violation};
use narrative::SummaryContext;

/// Everything the scorer needs to know about a freshly synthesized candidate.
#[derive(Debug, Clone)]
pub struct ScoreInputs<'a> {
    pub base_score: u8,
    pub violations: &'a [Violation],
    pub matched_must_haves: usize,
    pub total_must_haves: usize,
    pub years_of_experience: u32,
    pub experience_min: u32,
    pub current_title: &'a str,
    pub current_company: &'a str,
    pub domain: &'a str,
    pub education: &'a str,
    pub institution: &'a str,
}

/// Composite score, sub-scores, tier, and the prose explaining them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub composite_score: u8,
    pub dimension_scores: DimensionScores,
    pub bucket: Bucket,
    pub reasoning: DimensionReasoning,
    pub summary: String,
}

/// Stateless scorer: penalize, split into dimensions, gate, then narrate.
pub fn score_candidate(inputs: &ScoreInputs<'_>) -> ScoreCard {
    let violation_count = inputs.violations.len();
    let composite = composite_score(inputs.base_score, violation_count);
    let scores = dimension_scores(composite);
    let bucket = classify_bucket(composite, violation_count);

    let reasoning = DimensionReasoning {
        skills_match: narrative::skills_reasoning(
            dimension_pct(scores.skills_match, WEIGHTS.skills_match),
            inputs.matched_must_haves,
            inputs.total_must_haves,
        ),
        experience: narrative::experience_reasoning(
            dimension_pct(scores.experience, WEIGHTS.experience),
            inputs.years_of_experience,
            inputs.experience_min,
            inputs.current_company,
        ),
        domain_fit: narrative::domain_reasoning(
            dimension_pct(scores.domain_fit, WEIGHTS.domain_fit),
            inputs.domain,
            inputs.current_company,
        ),
        education: narrative::education_reasoning(
            dimension_pct(scores.education, WEIGHTS.education),
            inputs.education,
            inputs.institution,
        ),
    };

    let summary = narrative::overall_summary(&SummaryContext {
        bucket,
        composite_score: composite,
        current_title: inputs.current_title,
        company: inputs.current_company,
        years: inputs.years_of_experience,
        matched: inputs.matched_must_haves,
        total: inputs.total_must_haves,
        violation_count,
    });

    ScoreCard {
        composite_score: composite,
        dimension_scores: scores,
        bucket,
        reasoning,
        summary,
    }
}
