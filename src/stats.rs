use std::collections::BTreeSet;

use crate::models::{Exercise, MuscleGroup, MuscleStatus, Workout};

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// Share of the weekly goal completed, in percent. `done <= goal` is assumed,
/// not enforced, so this can exceed 100.
pub fn weekly_progress_percent(done: u32, goal: u32) -> f32 {
    if goal == 0 {
        return 0.0;
    }
    done as f32 * 100.0 / goal as f32
}

pub fn remaining_workouts(done: u32, goal: u32) -> u32 {
    goal.saturating_sub(done)
}

pub fn total_hours(minutes: u32) -> u32 {
    (minutes as f32 / 60.0).round() as u32
}

pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

pub fn unique_muscle_groups(exercises: &[Exercise]) -> usize {
    exercises
        .iter()
        .flat_map(|e| e.muscle_groups.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .len()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibrarySummary {
    pub total: usize,
    pub completed: usize,
    pub total_exercises: u32,
    pub avg_duration: u32,
}

impl LibrarySummary {
    pub fn from_workouts(workouts: &[Workout]) -> Self {
        if workouts.is_empty() {
            return Self::default();
        }
        let minutes: u32 = workouts.iter().map(|w| w.estimated_duration).sum();
        LibrarySummary {
            total: workouts.len(),
            completed: workouts.iter().filter(|w| w.times_completed > 0).count(),
            total_exercises: workouts.iter().map(|w| w.exercise_count).sum(),
            avg_duration: (minutes as f32 / workouts.len() as f32).round() as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn of(confidence: u8) -> Self {
        match confidence {
            90.. => ConfidenceTier::High,
            80..=89 => ConfidenceTier::Medium,
            _ => ConfidenceTier::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub worked: usize,
    pub active: usize,
    pub rest: usize,
    pub missed: usize,
}

impl StatusCounts {
    pub fn of(muscles: &[MuscleGroup]) -> Self {
        muscles.iter().fold(Self::default(), |mut counts, m| {
            match m.status {
                MuscleStatus::Worked => counts.worked += 1,
                MuscleStatus::Active => counts.active += 1,
                MuscleStatus::Rest => counts.rest += 1,
                MuscleStatus::Missed => counts.missed += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: MuscleStatus) -> usize {
        match status {
            MuscleStatus::Worked => self.worked,
            MuscleStatus::Active => self.active,
            MuscleStatus::Rest => self.rest,
            MuscleStatus::Missed => self.missed,
        }
    }
}
