use eframe::egui;
use egui::{RichText, Ui};

use crate::catalog::Catalog;
use crate::router::Route;
use crate::session::Session;
use crate::stats::{first_name, remaining_workouts, weekly_progress_percent};
use super::{stat_card, ACCENT, PRIMARY, SUCCESS, WARNING};

pub fn show(ui: &mut Ui, catalog: &Catalog, session: &Session) -> Option<Route> {
    let mut navigate = None;
    let stats = &catalog.dashboard_stats;
    let progress = weekly_progress_percent(stats.weekly_workouts, stats.weekly_goal);

    ui.label(
        RichText::new(format!("Welcome back, {}!", first_name(&session.name)))
            .heading()
            .size(30.0)
            .strong(),
    );
    ui.label(RichText::new("Ready to crush your fitness goals today?").weak());
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        stat_card(ui, stats.weekly_workouts.to_string(), "This Week", PRIMARY);
        stat_card(ui, stats.total_exercises.to_string(), "Total Exercises", SUCCESS);
        stat_card(ui, format!("{} days", stats.current_streak), "Current Streak", WARNING);
        stat_card(ui, format!("{}%", progress.round()), "Weekly Goal", ACCENT);
    });
    ui.add_space(12.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Weekly Progress").size(20.0).strong());
        ui.label(format!(
            "{} of {} workouts completed",
            stats.weekly_workouts, stats.weekly_goal
        ));
        ui.add(egui::ProgressBar::new((progress / 100.0).clamp(0.0, 1.0)));
        ui.label(
            RichText::new(format!(
                "{} more to go",
                remaining_workouts(stats.weekly_workouts, stats.weekly_goal)
            ))
            .small()
            .weak(),
        );
    });
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        egui::Frame::group(columns[0].style()).show(&mut columns[0], |ui| {
            ui.label(RichText::new("Recent Workouts").size(20.0).strong());
            for workout in &catalog.recent_workouts {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&workout.name).strong());
                    ui.label(RichText::new(format!(
                        "{} • {} • {} exercises",
                        workout.date, workout.duration, workout.exercises
                    )).weak());
                });
            }
        });

        egui::Frame::group(columns[1].style()).show(&mut columns[1], |ui| {
            ui.label(RichText::new("Quick Actions").size(20.0).strong());
            for (label, route) in [
                ("Browse Exercises", Route::Exercises),
                ("Start a Workout", Route::Workouts),
                ("View Analytics", Route::Analytics),
                ("Ask the AI Coach", Route::AiAnalytics),
            ] {
                if ui.button(label).clicked() {
                    navigate = Some(route);
                }
            }
        });
    });

    navigate
}
