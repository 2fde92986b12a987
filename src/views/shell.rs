use eframe::egui;
use egui::{Align, Layout, RichText};

use crate::router::{Route, NAV_ROUTES};
use crate::session::Session;

pub enum ShellAction {
    Navigate(Route),
    Logout,
}

/// Header shown above every signed-in page.
pub fn show_header(ctx: &egui::Context, current: Route, session: &Session) -> Option<ShellAction> {
    let mut action = None;
    egui::TopBottomPanel::top("shell_header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui
                .add(egui::Label::new(RichText::new("FitTracker").size(22.0).strong()).sense(egui::Sense::click()))
                .clicked()
            {
                action = Some(ShellAction::Navigate(Route::Dashboard));
            }
            ui.add_space(24.0);

            for route in NAV_ROUTES {
                if ui.selectable_label(current == route, route.title()).clicked() && current != route {
                    action = Some(ShellAction::Navigate(route));
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Log out").clicked() {
                    action = Some(ShellAction::Logout);
                }
                ui.label(RichText::new(&session.name).strong());
            });
        });
        ui.add_space(6.0);
    });
    action
}
