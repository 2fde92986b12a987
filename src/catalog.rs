use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{
    Achievement, AnalyticsStats, DailyActivity, DashboardStats, Exercise, Insight, MuscleGroup,
    MuscleProgress, RecentWorkout, Workout,
};

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CoachScript {
    pub greeting: String,
    pub replies: Vec<String>,
    pub suggested_questions: Vec<String>,
}

/// Every read-only dataset the views render. Nothing here is ever mutated.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub workouts: Vec<Workout>,
    pub front_muscles: Vec<MuscleGroup>,
    pub back_muscles: Vec<MuscleGroup>,
    pub insights: Vec<Insight>,
    pub achievements: Vec<Achievement>,
    pub recent_workouts: Vec<RecentWorkout>,
    pub weekly_activity: Vec<DailyActivity>,
    pub muscle_progress: Vec<MuscleProgress>,
    pub dashboard_stats: DashboardStats,
    pub analytics_stats: AnalyticsStats,
    pub coach: CoachScript,
}

impl Catalog {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| AppError::Catalog {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The demo data shipped with the binary.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "built-in catalog is malformed");
                Self::default()
            }
        }
    }

    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    exercises = catalog.exercises.len(),
                    workouts = catalog.workouts.len(),
                    "loaded catalog"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to built-in catalog");
                Self::builtin()
            }
        }
    }
}
