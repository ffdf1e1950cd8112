//! Decides whether a file's timestamps need correcting.
//!
//! Creation time drifts through copies and syncs, so only disagreements of a
//! full day or more are corrected. Both sides are compared as instants; a DST
//! change between capture and creation shifts the wall clock, not the gap.

use crate::model::{CaptureTimestamp, DecisionReason, ReconciliationDecision};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, Utc};

pub const CORRECTION_THRESHOLD_HOURS: i64 = 24;

pub fn decide(capture: CaptureTimestamp, creation: DateTime<Local>) -> ReconciliationDecision {
    let capture = match capture {
        CaptureTimestamp::Captured(instant) if !is_zero_time(instant.naive_local()) => instant,
        _ => return ReconciliationDecision::keep(DecisionReason::NoTimestamp),
    };

    let elapsed = (capture.with_timezone(&Utc) - creation.with_timezone(&Utc)).abs();
    if elapsed < Duration::hours(CORRECTION_THRESHOLD_HOURS) {
        return ReconciliationDecision::keep(DecisionReason::WithinThreshold);
    }
    ReconciliationDecision::update()
}

/// Unix epoch or 0001-01-01 00:00:00, both written by broken clocks.
fn is_zero_time(value: NaiveDateTime) -> bool {
    let midnight = |y| {
        NaiveDate::from_ymd_opt(y, 1, 1).and_then(|date| date.and_hms_opt(0, 0, 0))
    };
    Some(value) == midnight(1970) || Some(value) == midnight(1)
}
