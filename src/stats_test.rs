use super::*;
use crate::catalog::Catalog;

#[test]
fn weekly_progress_matches_dashboard_numbers() {
    assert_eq!(weekly_progress_percent(4, 5), 80.0);
    assert_eq!(remaining_workouts(4, 5), 1);
}

#[test]
fn zero_goal_does_not_divide_by_zero() {
    assert_eq!(weekly_progress_percent(3, 0), 0.0);
    assert_eq!(remaining_workouts(3, 0), 0);
}

#[test]
fn overshooting_goal_is_reported_as_is() {
    assert_eq!(weekly_progress_percent(6, 5), 120.0);
    assert_eq!(remaining_workouts(6, 5), 0);
}

#[test]
fn library_summary_of_builtin_workouts() {
    let catalog = Catalog::builtin();
    let summary = LibrarySummary::from_workouts(&catalog.workouts);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.completed, 4);
    assert_eq!(summary.total_exercises, 30);
    // (45 + 50 + 60 + 30 + 35) / 5 = 44
    assert_eq!(summary.avg_duration, 44);
}

#[test]
fn empty_library_summary_is_zeroed() {
    assert_eq!(LibrarySummary::from_workouts(&[]), LibrarySummary::default());
}

#[test]
fn unique_muscle_groups_dedupes() {
    let catalog = Catalog::builtin();
    // Chest Triceps Shoulders Quadriceps Glutes Hamstrings Back Traps Lats Biceps Rhomboids Core
    assert_eq!(unique_muscle_groups(&catalog.exercises), 12);
}

#[test]
fn helpers_for_headline_numbers() {
    assert_eq!(total_hours(2840), 47);
    assert_eq!(first_name("Jane Doe"), "Jane");
    assert_eq!(first_name(""), "");
}

#[test]
fn confidence_tiers() {
    assert_eq!(ConfidenceTier::of(94), ConfidenceTier::High);
    assert_eq!(ConfidenceTier::of(90), ConfidenceTier::High);
    assert_eq!(ConfidenceTier::of(87), ConfidenceTier::Medium);
    assert_eq!(ConfidenceTier::of(79), ConfidenceTier::Low);
}

#[test]
fn status_counts_for_each_side() {
    let catalog = Catalog::builtin();
    let front = StatusCounts::of(&catalog.front_muscles);
    assert_eq!(front, StatusCounts { worked: 2, active: 1, rest: 2, missed: 2 });
    let back = StatusCounts::of(&catalog.back_muscles);
    assert_eq!(back.get(MuscleStatus::Missed), 1);
    assert_eq!(back.get(MuscleStatus::Worked), 2);
}
