use super::super::domain::{DimensionScores, JobDescription, Violation};
use super::weights::{MAX_COMPOSITE, MIN_COMPOSITE, PENALTY_PER_VIOLATION, WEIGHTS};

/// Penalize the drawn base score per violation and clamp into `[10, 100]`.
pub fn composite_score(base_score: u8, violation_count: usize) -> u8 {
    let count = i32::try_from(violation_count).unwrap_or(i32::MAX / PENALTY_PER_VIOLATION);
    let penalized = i32::from(base_score).saturating_sub(count.saturating_mul(PENALTY_PER_VIOLATION));
    penalized.clamp(MIN_COMPOSITE, MAX_COMPOSITE) as u8
}

/// Split the composite by the fixed 40:30:15:15 ratios, rounding half away from zero.
pub fn dimension_scores(composite: u8) -> DimensionScores {
    DimensionScores {
        skills_match: weighted(composite, WEIGHTS.skills_match),
        experience: weighted(composite, WEIGHTS.experience),
        domain_fit: weighted(composite, WEIGHTS.domain_fit),
        education: weighted(composite, WEIGHTS.education),
    }
}

fn weighted(composite: u8, weight: u8) -> u8 {
    (f64::from(composite) / 100.0 * f64::from(weight)).round() as u8
}

/// Share of a dimension's maximum, as a whole percentage.
pub fn dimension_pct(score: u8, weight: u8) -> u8 {
    if weight == 0 {
        return 0;
    }
    ((f64::from(score) / f64::from(weight)) * 100.0).round().min(100.0) as u8
}

/// Must-have skills missing from `matched`, in job order, then the experience shortfall.
pub fn collect_violations(
    job: &JobDescription,
    matched: &[String],
    years_of_experience: u32,
) -> Vec<Violation> {
    let mut violations: Vec<Violation> = job
        .must_have_skills
        .iter()
        .filter(|skill| !matched.contains(skill))
        .map(|skill| Violation::MissingSkill {
            skill: skill.clone(),
        })
        .collect();

    if years_of_experience < job.experience_min {
        violations.push(Violation::ExperienceBelowMinimum {
            required: job.experience_min,
            actual: years_of_experience,
        });
    }

    violations
}
