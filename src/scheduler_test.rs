use super::*;
use chrono::TimeZone;

fn at(secs: i64) -> DateTime<Local> {
    Local.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

#[test]
fn poll_before_deadline_yields_nothing() {
    let mut task = Scheduled::after(at(0), Duration::seconds(3), "clear");
    assert_eq!(task.poll(at(2)), None);
    assert!(task.is_pending());
}

#[test]
fn poll_at_deadline_yields_payload_once() {
    let mut task = Scheduled::after(at(0), Duration::seconds(3), "clear");
    assert_eq!(task.poll(at(3)), Some("clear"));
    assert_eq!(task.poll(at(10)), None);
    assert!(!task.is_pending());
}

#[test]
fn cancelled_task_never_fires() {
    let mut task = Scheduled::after(at(0), Duration::seconds(1), 7);
    assert_eq!(task.cancel(), Some(7));
    assert_eq!(task.poll(at(5)), None);
}

#[test]
fn remaining_counts_down_to_zero() {
    let mut task = Scheduled::after(at(0), Duration::seconds(3), ());
    assert_eq!(task.remaining(at(1)), Duration::seconds(2));
    assert_eq!(task.remaining(at(5)), Duration::zero());
    task.cancel();
    assert_eq!(task.remaining(at(1)), Duration::zero());
}

#[test]
fn oversized_delay_saturates_instead_of_overflowing() {
    let mut task = Scheduled::after(at(0), Duration::MAX, "late");
    assert_eq!(task.due(), at(365 * 24 * 60 * 60));
    assert_eq!(task.poll(at(1_000_000)), None);
    assert!(task.is_pending());
}

#[test]
fn earliest_skips_missing_deadlines() {
    assert_eq!(earliest([None, Some(at(5)), Some(at(2))]), Some(at(2)));
    assert_eq!(earliest([None, None]), None);
}
