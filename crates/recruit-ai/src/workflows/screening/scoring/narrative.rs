//! Prose templates explaining each dimension. Pure text: nothing here feeds back into scores.

use super::super::domain::Bucket;
use super::weights::{
    NarrativeBands, DOMAIN_BANDS, EDUCATION_BANDS, EXPERIENCE_BANDS, SKILLS_BANDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Strong,
    Fair,
    Weak,
}

impl Band {
    pub fn for_pct(pct: u8, bands: NarrativeBands) -> Self {
        if pct >= bands.strong {
            Band::Strong
        } else if pct >= bands.fair {
            Band::Fair
        } else {
            Band::Weak
        }
    }
}

pub fn skills_reasoning(pct: u8, matched: usize, total: usize) -> String {
    if total == 0 {
        return format!(
            "No must-have skills listed for this role; skills scored on general profile ({pct}%)."
        );
    }

    match Band::for_pct(pct, SKILLS_BANDS) {
        Band::Strong => format!(
            "Strong skills alignment ({pct}%): demonstrates {matched} of {total} must-have skills."
        ),
        Band::Fair => format!(
            "Partial skills alignment ({pct}%): demonstrates {matched} of {total} must-have skills; probe the gaps in interview."
        ),
        Band::Weak => format!(
            "Limited skills alignment ({pct}%): only {matched} of {total} must-have skills evidenced."
        ),
    }
}

pub fn experience_reasoning(pct: u8, years: u32, required: u32, company: &str) -> String {
    match Band::for_pct(pct, EXPERIENCE_BANDS) {
        Band::Strong => format!(
            "{years} years of relevant experience, currently at {company}; comfortably meets the {required}-year bar ({pct}%)."
        ),
        Band::Fair => format!(
            "{years} years of experience, most recently at {company}; adequate against the {required}-year bar ({pct}%)."
        ),
        Band::Weak if years < required => format!(
            "{years} years of experience at {company} falls short of the {required}-year minimum ({pct}%)."
        ),
        Band::Weak => format!(
            "{years} years of experience at {company}, but depth of relevant work is unclear ({pct}%)."
        ),
    }
}

pub fn domain_reasoning(pct: u8, domain: &str, company: &str) -> String {
    match Band::for_pct(pct, DOMAIN_BANDS) {
        Band::Strong => {
            format!("Deep {domain} background at {company} transfers directly to this role ({pct}%).")
        }
        Band::Fair => {
            format!("{domain} exposure at {company} is adjacent to this role's domain ({pct}%).")
        }
        Band::Weak => format!("Limited domain overlap; {domain} work at {company} ({pct}%)."),
    }
}

pub fn education_reasoning(pct: u8, education: &str, institution: &str) -> String {
    match Band::for_pct(pct, EDUCATION_BANDS) {
        Band::Strong => format!("{education} from {institution} is well suited to the role ({pct}%)."),
        Band::Fair => format!("{education} from {institution} provides a relevant foundation ({pct}%)."),
        Band::Weak => {
            format!("{education} from {institution}; credentials are loosely related ({pct}%).")
        }
    }
}

/// Inputs for the overall summary line.
pub struct SummaryContext<'a> {
    pub bucket: Bucket,
    pub composite_score: u8,
    pub current_title: &'a str,
    pub company: &'a str,
    pub years: u32,
    pub matched: usize,
    pub total: usize,
    pub violation_count: usize,
}

pub fn overall_summary(context: &SummaryContext<'_>) -> String {
    let SummaryContext {
        bucket,
        composite_score,
        current_title,
        company,
        years,
        matched,
        total,
        violation_count,
    } = *context;

    match bucket {
        Bucket::Strong => format!(
            "{current_title} at {company} with {years} years of experience. Meets every hard requirement and covers {matched}/{total} must-have skills; recommended for interview (score {composite_score})."
        ),
        Bucket::Potential if violation_count > 0 => format!(
            "{current_title} at {company} with {years} years of experience. Promising profile but misses {violation_count} hard requirement(s); review before advancing (score {composite_score})."
        ),
        Bucket::Potential => format!(
            "{current_title} at {company} with {years} years of experience. Solid fit with room to grow; worth a recruiter screen (score {composite_score})."
        ),
        Bucket::Low => format!(
            "{current_title} at {company} with {years} years of experience. Covers {matched}/{total} must-have skills with {violation_count} unmet requirement(s); not a match at this time (score {composite_score})."
        ),
    }
}
