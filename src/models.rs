//models.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub muscle_groups: Vec<String>,
    pub equipment: String,
    pub difficulty: Difficulty,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub exercise_count: u32,
    pub estimated_duration: u32,
    pub difficulty: Difficulty,
    pub last_performed: String,
    pub times_completed: u32,
    pub category: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleStatus {
    Worked,
    Rest,
    Missed,
    Active,
}

impl MuscleStatus {
    pub const ALL: [MuscleStatus; 4] = [
        MuscleStatus::Worked,
        MuscleStatus::Active,
        MuscleStatus::Rest,
        MuscleStatus::Missed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MuscleStatus::Worked => "Recently Worked",
            MuscleStatus::Active => "Currently Active",
            MuscleStatus::Rest => "Needs Rest",
            MuscleStatus::Missed => "Needs Attention",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            MuscleStatus::Worked => "Worked",
            MuscleStatus::Active => "Active",
            MuscleStatus::Rest => "Rest",
            MuscleStatus::Missed => "Missed",
        }
    }
}

/// Placement on the body outline, in percent of the map's width and height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroup {
    pub id: String,
    pub name: String,
    pub status: MuscleStatus,
    pub last_worked: String,
    pub intensity: u8,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Recovery,
    Performance,
    Balance,
    Progression,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Insight {
    pub id: u32,
    pub title: String,
    pub insight: String,
    pub confidence: u8,
    pub kind: InsightKind,
    pub action: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementKind {
    Streak,
    PersonalRecord,
    Milestone,
    Consistency,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: String,
    pub kind: AchievementKind,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecentWorkout {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub duration: String,
    pub exercises: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DailyActivity {
    pub day: String,
    pub workouts: u32,
    pub duration: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MuscleProgress {
    pub name: String,
    pub sessions: u32,
    pub progress: u8,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub weekly_workouts: u32,
    pub total_exercises: u32,
    pub current_streak: u32,
    pub weekly_goal: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsStats {
    pub total_workouts: u32,
    /// Minutes.
    pub total_time: u32,
    pub avg_duration: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub calories_burned: u32,
    /// Percent.
    pub strength_gains: f32,
    pub weekly_goal: u32,
    pub weekly_complete: u32,
}
