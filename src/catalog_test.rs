use super::*;
use crate::models::{Difficulty, MuscleStatus};

#[test]
fn builtin_catalog_parses() {
    let catalog = Catalog::from_json(BUILTIN_CATALOG).unwrap();
    assert_eq!(catalog.exercises.len(), 6);
    assert_eq!(catalog.workouts.len(), 5);
    assert_eq!(catalog.front_muscles.len(), 7);
    assert_eq!(catalog.back_muscles.len(), 6);
    assert_eq!(catalog.coach.replies.len(), 5);
    assert_eq!(catalog.weekly_activity.len(), 7);
}

#[test]
fn builtin_records_keep_their_enums() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.exercises[2].difficulty, Difficulty::Advanced);
    assert_eq!(catalog.front_muscles[0].id, "chest");
    assert_eq!(catalog.front_muscles[0].status, MuscleStatus::Worked);
    assert_eq!(catalog.dashboard_stats.weekly_goal, 5);
}

#[test]
fn partial_catalog_leaves_other_sets_empty() {
    let catalog = Catalog::from_json(r#"{"coach": {"greeting": "hey", "replies": ["ok"], "suggestedQuestions": []}}"#).unwrap();
    assert!(catalog.exercises.is_empty());
    assert_eq!(catalog.coach.greeting, "hey");
}

#[test]
fn malformed_catalog_is_an_error() {
    assert!(Catalog::from_json("[1, 2").is_err());
}

#[test]
fn malformed_catalog_file_names_the_file() {
    let path = std::env::temp_dir().join(format!("fittracker-bad-catalog-{}.json", std::process::id()));
    fs::write(&path, "{\"exercises\": 3}").unwrap();
    let err = Catalog::load(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(&err, AppError::Catalog { path: bad, .. } if *bad == path));
    assert!(err.to_string().contains("fittracker-bad-catalog"));
}

#[test]
fn unreadable_path_falls_back_to_builtin() {
    let catalog = Catalog::load_or_builtin(Some(Path::new("/no/such/catalog.json")));
    assert_eq!(catalog.exercises.len(), 6);
}
