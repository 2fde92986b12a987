use chrono::{DateTime, Local};
use eframe::egui;
use egui::{RichText, Ui};

use crate::router::Route;
use crate::session::{SessionStore, DEMO_EMAIL, DEMO_PASSWORD};
use super::DANGER;

#[derive(Default)]
pub struct LoginView {
    email: String,
    password: String,
    error: Option<String>,
}

impl LoginView {
    fn submit(&mut self, session: &mut SessionStore, now: DateTime<Local>) {
        self.error = session
            .login(&self.email, &self.password, now)
            .err()
            .map(|e| e.to_string());
    }

    pub fn show(&mut self, ui: &mut Ui, session: &mut SessionStore, requested: Option<Route>, now: DateTime<Local>) {
        let busy = session.is_loading();

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(RichText::new("FitTracker").heading().size(40.0).strong());
            ui.label(RichText::new("Your personal fitness journey starts here").weak());
            ui.add_space(30.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_max_width(380.0);
                ui.label(RichText::new("Welcome back").size(24.0).strong());
                ui.label(RichText::new("Sign in to continue your fitness journey").weak());
                if let Some(route) = requested {
                    ui.label(RichText::new(format!("{} is only available after signing in.", route.title())).small());
                }
                ui.add_space(12.0);

                ui.label("Email");
                ui.add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut self.email).hint_text("Enter your email"),
                );
                ui.label("Password");
                let password = ui.add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut self.password)
                        .password(true)
                        .hint_text("Enter your password"),
                );
                let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if let Some(error) = &self.error {
                    ui.label(RichText::new(error).color(DANGER));
                }
                ui.add_space(8.0);

                if busy {
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new());
                        ui.label("Signing in...");
                    });
                } else if ui.button(RichText::new("Sign In").size(18.0)).clicked() || enter {
                    self.submit(session, now);
                }

                ui.separator();
                if ui.add_enabled(!busy, egui::Button::new("Try Demo Login")).clicked() {
                    self.email = DEMO_EMAIL.to_string();
                    self.password = DEMO_PASSWORD.to_string();
                    self.error = None;
                }
                ui.label(RichText::new("Demo app - any email/password combination works").small().weak());
            });
        });
    }
}
