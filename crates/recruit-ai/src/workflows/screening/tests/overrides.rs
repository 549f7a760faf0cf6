use chrono::{TimeZone, Utc};

use super::common::*;
use crate::workflows::screening::domain::Bucket;
use crate::workflows::screening::overrides::{
    OverrideDirection, OverrideError, OverrideGuard, MIN_JUSTIFICATION_CHARS,
};

fn recorded_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 15, 30, 0)
        .single()
        .expect("valid timestamp")
}

#[test]
fn short_justification_is_rejected() {
    let candidates = pool("jd1");
    let candidate = candidate_outside(&candidates, Bucket::Strong);
    let mut request = override_request(Bucket::Strong);
    request.justification = "  looks ok  ".to_string();

    let err = OverrideGuard::default()
        .review(candidate, request, recorded_at())
        .expect_err("too short");

    assert_eq!(
        err,
        OverrideError::JustificationTooShort {
            min: MIN_JUSTIFICATION_CHARS,
            found: 8,
        }
    );
}

#[test]
fn blank_actor_is_rejected() {
    let candidates = pool("jd1");
    let candidate = candidate_outside(&candidates, Bucket::Strong);
    let mut request = override_request(Bucket::Strong);
    request.actor = "   ".to_string();

    let err = OverrideGuard::default()
        .review(candidate, request, recorded_at())
        .expect_err("actor required");
    assert_eq!(err, OverrideError::MissingActor);
}

#[test]
fn target_matching_current_bucket_is_rejected() {
    let candidates = pool("jd1");
    let candidate = &candidates[0];

    let err = OverrideGuard::default()
        .review(candidate, override_request(candidate.bucket), recorded_at())
        .expect_err("no-op override");
    assert_eq!(err, OverrideError::Unchanged(candidate.bucket));
}

#[test]
fn upgrade_records_original_verdict_alongside_override() {
    let candidates = pool("jd1");
    let candidate = candidate_outside(&candidates, Bucket::Strong);

    let entry = OverrideGuard::default()
        .review(candidate, override_request(Bucket::Strong), recorded_at())
        .expect("override accepted");

    assert_eq!(entry.original_bucket, candidate.bucket);
    assert_eq!(entry.original_score, candidate.composite_score);
    assert_eq!(entry.previous_bucket, candidate.bucket);
    assert_eq!(entry.overridden_bucket, Bucket::Strong);
    assert_eq!(entry.direction, OverrideDirection::Upgrade);
    assert_eq!(entry.recorded_at, recorded_at());
    assert!(entry.describe().contains(&candidate.name));

    let applied = entry.to_override();
    assert_eq!(applied.bucket, Bucket::Strong);
    assert_eq!(applied.actor, "recruiter@example.com");
}

#[test]
fn reverting_to_original_bucket_is_tracked_as_revert() {
    let candidates = pool("jd1");
    let mut candidate = candidate_outside(&candidates, Bucket::Low).clone();
    let guard = OverrideGuard::default();

    let downgrade = guard
        .review(&candidate, override_request(Bucket::Low), recorded_at())
        .expect("downgrade accepted");
    assert_eq!(downgrade.direction, OverrideDirection::Downgrade);

    candidate.bucket_override = Some(downgrade.to_override());
    let revert = guard
        .review(&candidate, override_request(candidate.bucket), recorded_at())
        .expect("revert accepted");

    assert_eq!(revert.previous_bucket, Bucket::Low);
    assert_eq!(revert.overridden_bucket, candidate.bucket);
    assert_eq!(revert.direction, OverrideDirection::Reverted);
}

#[test]
fn direction_is_measured_against_rank() {
    assert_eq!(
        OverrideDirection::between(Bucket::Low, Bucket::Potential),
        OverrideDirection::Upgrade
    );
    assert_eq!(
        OverrideDirection::between(Bucket::Strong, Bucket::Potential),
        OverrideDirection::Downgrade
    );
    assert_eq!(
        OverrideDirection::between(Bucket::Potential, Bucket::Potential),
        OverrideDirection::Reverted
    );
}
