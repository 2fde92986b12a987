use eframe::egui;
use egui::{RichText, ScrollArea, Sense, Ui};
use egui_extras::{Column, TableBuilder};

use crate::catalog::Catalog;
use crate::models::AchievementKind;
use crate::stats::{total_hours, weekly_progress_percent};
use super::{stat_card, ACCENT, PRIMARY, SUCCESS, WARNING};

fn achievement_tag(kind: AchievementKind) -> (&'static str, egui::Color32) {
    match kind {
        AchievementKind::Streak => ("Streak", WARNING),
        AchievementKind::PersonalRecord => ("Personal Record", SUCCESS),
        AchievementKind::Milestone => ("Milestone", PRIMARY),
        AchievementKind::Consistency => ("Consistency", ACCENT),
    }
}

pub fn show(ui: &mut Ui, catalog: &Catalog) {
    let stats = &catalog.analytics_stats;
    super::page_header(ui, "Analytics", "Track your progress and performance over time");

    ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, stats.total_workouts.to_string(), "Total Workouts", PRIMARY);
            stat_card(ui, format!("{}h", total_hours(stats.total_time)), "Total Time", SUCCESS);
            stat_card(ui, format!("{} days", stats.current_streak), "Current Streak", WARNING);
            stat_card(ui, stats.calories_burned.to_string(), "Calories Burned", ACCENT);
        });
        ui.add_space(12.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("This Week").size(20.0).strong());
            for day in &catalog.weekly_activity {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&day.day).monospace());
                    let width = if day.workouts > 0 { day.duration.max(20) as f32 * 3.0 } else { 20.0 };
                    let color = if day.workouts > 0 { PRIMARY } else { ui.visuals().faint_bg_color };
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 16.0), Sense::hover());
                    ui.painter().rect_filled(rect, 4.0, color);
                    if day.workouts > 0 {
                        ui.label(format!("{}m", day.duration));
                    }
                });
            }
            ui.add_space(6.0);
            let weekly = weekly_progress_percent(stats.weekly_complete, stats.weekly_goal);
            ui.label(format!("Weekly goal: {}/{} workouts", stats.weekly_complete, stats.weekly_goal));
            ui.add(egui::ProgressBar::new((weekly / 100.0).clamp(0.0, 1.0)).show_percentage());
        });
        ui.add_space(12.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Muscle Group Progress").size(20.0).strong());
            TableBuilder::new(ui)
                .id_salt("muscle_progress")
                .vscroll(false)
                .striped(true)
                .column(Column::auto().at_least(120.0))
                .column(Column::auto().at_least(80.0))
                .column(Column::remainder())
                .header(22.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Muscle");
                    });
                    header.col(|ui| {
                        ui.strong("Sessions");
                    });
                    header.col(|ui| {
                        ui.strong("Progress");
                    });
                })
                .body(|mut body| {
                    for muscle in &catalog.muscle_progress {
                        body.row(24.0, |mut row| {
                            row.col(|ui| {
                                ui.label(muscle.name.as_str());
                            });
                            row.col(|ui| {
                                ui.label(muscle.sessions.to_string());
                            });
                            row.col(|ui| {
                                ui.add(
                                    egui::ProgressBar::new(f32::from(muscle.progress) / 100.0)
                                        .text(format!("{}%", muscle.progress)),
                                );
                            });
                        });
                    }
                });
        });
        ui.add_space(12.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Recent Achievements").size(20.0).strong());
            for achievement in &catalog.achievements {
                let (tag, color) = achievement_tag(achievement.kind);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(tag).small().strong().color(color));
                    ui.label(RichText::new(&achievement.title).strong());
                    ui.label(RichText::new(format!("{} ({})", achievement.description, achievement.date)).weak());
                });
            }
        });
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            stat_card(ui, format!("{} days", stats.longest_streak), "Longest Streak", WARNING);
            stat_card(ui, format!("{} min", stats.avg_duration), "Avg Duration", PRIMARY);
            stat_card(ui, format!("+{}%", stats.strength_gains), "Strength Gains", SUCCESS);
        });
    });
}
