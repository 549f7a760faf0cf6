use super::super::domain::Bucket;
use super::weights::{POTENTIAL_THRESHOLD, STRONG_THRESHOLD};

/// Gate a candidate into a match tier.
///
/// Only `strong` is gated on violations. A candidate with unmet must-haves and a
/// composite at or above the strong threshold still lands in `potential`, because
/// the second branch looks at the score alone.
pub fn classify_bucket(composite_score: u8, violation_count: usize) -> Bucket {
    if violation_count == 0 && composite_score >= STRONG_THRESHOLD {
        Bucket::Strong
    } else if composite_score >= POTENTIAL_THRESHOLD {
        Bucket::Potential
    } else {
        Bucket::Low
    }
}
