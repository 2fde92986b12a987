use eframe::egui;
use egui::{Color32, RichText, Ui};

use crate::models::{Difficulty, MuscleStatus};
use crate::stats::ConfidenceTier;

pub mod ai_analytics;
pub mod analytics;
pub mod dashboard;
pub mod exercises;
pub mod login;
pub mod shell;
pub mod workouts;

pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const WARNING: Color32 = Color32::from_rgb(245, 158, 11);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const PRIMARY: Color32 = Color32::from_rgb(59, 130, 246);
pub const ACCENT: Color32 = Color32::from_rgb(168, 85, 247);

pub fn status_color(status: MuscleStatus) -> Color32 {
    match status {
        MuscleStatus::Worked => SUCCESS,
        MuscleStatus::Active => PRIMARY,
        MuscleStatus::Rest => WARNING,
        MuscleStatus::Missed => DANGER,
    }
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Beginner => SUCCESS,
        Difficulty::Intermediate => WARNING,
        Difficulty::Advanced => DANGER,
    }
}

pub fn confidence_color(confidence: u8) -> Color32 {
    match ConfidenceTier::of(confidence) {
        ConfidenceTier::High => SUCCESS,
        ConfidenceTier::Medium => WARNING,
        ConfidenceTier::Low => Color32::GRAY,
    }
}

pub fn page_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.label(RichText::new(title).heading().size(30.0).strong());
    ui.label(RichText::new(subtitle).weak());
    ui.add_space(12.0);
}

/// Big number over a small caption, the building block of every stats row.
pub fn stat_card(ui: &mut Ui, value: impl Into<String>, caption: &str, color: Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(160.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(value.into()).size(26.0).strong().color(color));
            ui.label(RichText::new(caption).small().weak());
        });
    });
}

pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(RichText::new(text).small().strong().color(color));
}

/// Clickable list of category names; returns true when the selection changed.
pub fn category_bar(ui: &mut Ui, categories: &[&str], selected: &mut String) -> bool {
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        for category in categories {
            let is_selected = selected.as_str() == *category;
            if ui.selectable_label(is_selected, *category).clicked() && !is_selected {
                *selected = category.to_string();
                changed = true;
            }
        }
    });
    changed
}

pub fn empty_state(ui: &mut Ui, title: &str, hint: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new(title).size(20.0).strong());
            ui.label(RichText::new(hint).weak());
            ui.add_space(24.0);
        });
    });
}
