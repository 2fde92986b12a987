use crate::models::{Exercise, Workout};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

pub const ALL: &str = "All";

pub const EXERCISE_CATEGORIES: [&str; 7] = [ALL, "Chest", "Back", "Legs", "Shoulders", "Arms", "Core"];
pub const WORKOUT_CATEGORIES: [&str; 5] = [ALL, "Strength", "Cardio", "Flexibility", "HIIT"];

pub trait Searchable {
    fn category(&self) -> &str;

    /// `term` is already lowercased and non-empty.
    fn matches_term(&self, term: &str) -> bool;
}

impl Searchable for Exercise {
    fn category(&self) -> &str {
        &self.category
    }

    fn matches_term(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self
                .muscle_groups
                .iter()
                .any(|group| group.to_lowercase().contains(term))
    }
}

impl Searchable for Workout {
    fn category(&self) -> &str {
        &self.category
    }

    fn matches_term(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.description.to_lowercase().contains(term)
    }
}

/// Items in `category` (or any, for `"All"`) whose searchable text contains
/// `search_term`, ignoring case. Source order is kept.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], search_term: &str, category: &str) -> Vec<&'a T> {
    let term = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| category == ALL || item.category() == category)
        .filter(|item| term.is_empty() || item.matches_term(&term))
        .collect()
}

/// Search box plus category selection, as held by the Exercises and Workouts views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            search_term: String::new(),
            category: ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_items(items, &self.search_term, &self.category)
    }
}
