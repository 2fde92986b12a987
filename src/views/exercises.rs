use eframe::egui;
use egui::{RichText, ScrollArea, Ui};

use crate::catalog::Catalog;
use crate::filter::{FilterState, EXERCISE_CATEGORIES};
use crate::stats::unique_muscle_groups;
use super::{badge, category_bar, difficulty_color, empty_state, page_header, stat_card, PRIMARY, SUCCESS};

#[derive(Default)]
pub struct ExercisesView {
    filter: FilterState,
}

impl ExercisesView {
    pub fn show(&mut self, ui: &mut Ui, catalog: &Catalog) {
        page_header(ui, "Exercise Database", "Manage and explore your exercise library");

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(
                egui::TextEdit::singleline(&mut self.filter.search_term)
                    .hint_text("Search exercises...")
                    .desired_width(f32::INFINITY),
            );
            if category_bar(ui, &EXERCISE_CATEGORIES, &mut self.filter.category) {
                tracing::debug!(category = %self.filter.category, "exercise category changed");
            }
        });
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            stat_card(ui, catalog.exercises.len().to_string(), "Total Exercises", PRIMARY);
            stat_card(ui, unique_muscle_groups(&catalog.exercises).to_string(), "Muscle Groups", SUCCESS);
        });
        ui.add_space(8.0);

        let visible = self.filter.apply(&catalog.exercises);
        if visible.is_empty() {
            empty_state(
                ui,
                "No exercises found",
                "Try adjusting your search or pick another category.",
            );
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for exercise in visible {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&exercise.name).size(20.0).strong());
                        badge(ui, exercise.difficulty.label(), difficulty_color(exercise.difficulty));
                    });
                    ui.label(RichText::new(format!("{} • {}", exercise.category, exercise.equipment)).weak());
                    ui.label(exercise.description.as_str());
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new("Target Muscles:").strong());
                        for muscle in &exercise.muscle_groups {
                            badge(ui, muscle, PRIMARY);
                        }
                    });
                });
            }
        });
    }
}
