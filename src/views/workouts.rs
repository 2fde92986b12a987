use eframe::egui;
use egui::{RichText, ScrollArea, Ui};

use crate::catalog::Catalog;
use crate::filter::{FilterState, WORKOUT_CATEGORIES};
use crate::stats::LibrarySummary;
use super::{badge, category_bar, difficulty_color, empty_state, page_header, stat_card, ACCENT, PRIMARY, SUCCESS, WARNING};

#[derive(Default)]
pub struct WorkoutsView {
    filter: FilterState,
}

impl WorkoutsView {
    pub fn show(&mut self, ui: &mut Ui, catalog: &Catalog) {
        page_header(ui, "Workout Library", "Create, manage, and track your workout routines");

        let summary = LibrarySummary::from_workouts(&catalog.workouts);
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, summary.total.to_string(), "Total Workouts", PRIMARY);
            stat_card(ui, summary.completed.to_string(), "Completed", SUCCESS);
            stat_card(ui, summary.total_exercises.to_string(), "Total Exercises", WARNING);
            stat_card(ui, format!("{}m", summary.avg_duration), "Avg Duration", ACCENT);
        });
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(
                egui::TextEdit::singleline(&mut self.filter.search_term)
                    .hint_text("Search workouts...")
                    .desired_width(f32::INFINITY),
            );
            category_bar(ui, &WORKOUT_CATEGORIES, &mut self.filter.category);
        });
        ui.add_space(8.0);

        let visible = self.filter.apply(&catalog.workouts);
        if visible.is_empty() {
            empty_state(
                ui,
                "No workouts found",
                "Try adjusting your search or create a new workout to get started.",
            );
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for workout in visible {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&workout.name).size(20.0).strong());
                        badge(ui, workout.difficulty.label(), difficulty_color(workout.difficulty));
                        badge(ui, &workout.category, PRIMARY);
                    });
                    ui.label(RichText::new(&workout.description).weak());
                    ui.horizontal(|ui| {
                        ui.label(format!("{} exercises", workout.exercise_count));
                        ui.separator();
                        ui.label(format!("{} min", workout.estimated_duration));
                        ui.separator();
                        ui.label(format!("Last: {}", workout.last_performed));
                        ui.separator();
                        ui.label(format!("Completed {} times", workout.times_completed));
                    });
                });
            }
        });
    }
}
