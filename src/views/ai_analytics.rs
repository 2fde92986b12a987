//! AI Coach page: muscle map, static insights, the JSON import box and the
//! coach chat. Owns every timer on the page, so dropping the view (navigating
//! away) cancels pending replies and status resets.

use chrono::{DateTime, Local};
use eframe::egui;
use egui::{Align2, Color32, FontId, RichText, ScrollArea, Sense, Ui};

use crate::catalog::Catalog;
use crate::chat::{CannedReplies, ChatPanel};
use crate::config::AppConfig;
use crate::import::{ImportPanel, ImportStatus};
use crate::models::{MuscleStatus, Role};
use crate::muscle_map::{BodyView, MuscleMap};
use crate::scheduler;
use super::{badge, confidence_color, page_header, status_color, DANGER, SUCCESS};

const MAP_SIZE: egui::Vec2 = egui::vec2(260.0, 390.0);

pub struct AiAnalyticsView {
    muscle_map: MuscleMap,
    chat: ChatPanel,
    import: ImportPanel,
}

impl AiAnalyticsView {
    pub fn new(catalog: &Catalog, config: &AppConfig, now: DateTime<Local>) -> Self {
        let replies = CannedReplies::new(catalog.coach.replies.clone());
        AiAnalyticsView {
            muscle_map: MuscleMap::default(),
            chat: ChatPanel::new(&catalog.coach.greeting, Box::new(replies), config.reply_delay(), now),
            import: ImportPanel::new(config.import_status_lifetime()),
        }
    }

    pub fn poll(&mut self, now: DateTime<Local>) {
        self.chat.poll(now);
        self.import.poll(now);
    }

    pub fn next_deadline(&self) -> Option<DateTime<Local>> {
        scheduler::earliest([self.chat.next_deadline(), self.import.next_deadline()])
    }

    pub fn show(&mut self, ui: &mut Ui, catalog: &Catalog, now: DateTime<Local>) {
        page_header(ui, "AI Analytics & Coach", "Get AI-powered insights and personalized coaching");

        ScrollArea::vertical().show(ui, |ui| {
            self.show_muscle_map(ui, catalog);
            ui.add_space(12.0);
            ui.columns(2, |columns| {
                show_insights(&mut columns[0], catalog);
                columns[0].add_space(12.0);
                self.show_import(&mut columns[0], now);
                self.show_chat(&mut columns[1], catalog, now);
            });
        });
    }

    fn show_muscle_map(&mut self, ui: &mut Ui, catalog: &Catalog) {
        let (front, back) = (&catalog.front_muscles, &catalog.back_muscles);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Muscle Map Analysis").size(20.0).strong());
                for view in [BodyView::Front, BodyView::Back] {
                    if ui.selectable_label(self.muscle_map.view() == view, view.label()).clicked() {
                        self.muscle_map.switch_view(view, front, back);
                    }
                }
                if ui.button("Reset").clicked() {
                    self.muscle_map.reset();
                }
            });

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(MAP_SIZE, Sense::hover());
                ui.painter().rect_filled(rect, 8.0, ui.visuals().faint_bg_color);

                let mut clicked = None;
                for muscle in self.muscle_map.muscles(front, back) {
                    let p = muscle.position;
                    let area = egui::Rect::from_min_size(
                        rect.min + egui::vec2(p.x / 100.0 * rect.width(), p.y / 100.0 * rect.height()),
                        egui::vec2(p.width / 100.0 * rect.width(), p.height / 100.0 * rect.height()),
                    );
                    let response = ui.interact(area, ui.id().with(&muscle.id), Sense::click());
                    let alpha = if response.hovered() { 230 } else { 170 };
                    let color = status_color(muscle.status);
                    ui.painter().rect_filled(
                        area,
                        4.0,
                        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha),
                    );
                    ui.painter().text(
                        area.center(),
                        Align2::CENTER_CENTER,
                        &muscle.name,
                        FontId::proportional(11.0),
                        Color32::WHITE,
                    );
                    if response.clicked() {
                        clicked = Some(muscle.id.clone());
                    }
                }
                if let Some(id) = clicked {
                    self.muscle_map.select(&id, front, back);
                }

                ui.vertical(|ui| {
                    match self.muscle_map.selected(front, back) {
                        Some(muscle) => {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&muscle.name).size(18.0).strong());
                                badge(ui, muscle.status.label(), status_color(muscle.status));
                            });
                            ui.label(format!("Last Worked: {}", muscle.last_worked));
                            ui.label("Training Intensity:");
                            ui.add(
                                egui::ProgressBar::new(f32::from(muscle.intensity) / 100.0)
                                    .fill(status_color(muscle.status))
                                    .text(format!("{}%", muscle.intensity)),
                            );
                        }
                        None => {
                            ui.label(RichText::new("Click on a muscle group to view detailed analysis").weak());
                        }
                    }
                    ui.add_space(12.0);

                    let counts = self.muscle_map.counts(front, back);
                    for status in MuscleStatus::ALL {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("■").color(status_color(status)));
                            ui.label(format!("{}: {}", status.short_label(), counts.get(status)));
                            ui.label(RichText::new(status.label()).small().weak());
                        });
                    }
                });
            });
        });
    }

    fn show_import(&mut self, ui: &mut Ui, now: DateTime<Local>) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(RichText::new("Data Import").size(20.0).strong());
            ui.label(RichText::new("Import your fitness data from DEXA scans, wearables, or other sources").weak());
            ui.add(
                egui::TextEdit::multiline(&mut self.import.input)
                    .code_editor()
                    .desired_rows(6)
                    .desired_width(f32::INFINITY)
                    .hint_text(r#"{"bodyFat": 15.2, "muscleMass": 68.5, "boneDensity": 1.15}"#),
            );
            ui.horizontal(|ui| {
                if ui.add_enabled(self.import.can_submit(), egui::Button::new("Import Data")).clicked() {
                    self.import.submit(now);
                }
                // Fade the status out over its last half second.
                let fade = self
                    .import
                    .status_remaining(now)
                    .map_or(1.0, |left| (left.num_milliseconds() as f32 / 500.0).clamp(0.0, 1.0));
                if fade < 1.0 {
                    ui.ctx().request_repaint();
                }
                let status = self.import.status();
                if let Some(message) = status.message() {
                    let color = if matches!(status, ImportStatus::Success) { SUCCESS } else { DANGER };
                    let color = color.gamma_multiply(fade);
                    let label = ui.label(RichText::new(message).color(color));
                    if let ImportStatus::Error(detail) = status {
                        label.on_hover_text(detail.as_str());
                    }
                }
            });
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Supported:").small());
                for source in ["DEXA Scan", "InBody", "Apple Health", "Fitbit", "Garmin", "MyFitnessPal"] {
                    ui.label(RichText::new(source).small().weak());
                }
            });
        });
    }

    fn show_chat(&mut self, ui: &mut Ui, catalog: &Catalog, now: DateTime<Local>) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(RichText::new("AI Workout Coach").size(20.0).strong());
            ScrollArea::vertical()
                .id_salt("coach_transcript")
                .max_height(320.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in self.chat.transcript().messages() {
                        let (who, color) = match message.role {
                            Role::User => ("You", super::PRIMARY),
                            Role::Assistant => ("Coach", ui.visuals().text_color()),
                        };
                        ui.label(RichText::new(format!("{who} · {}", message.timestamp.format("%H:%M"))).small().weak());
                        ui.label(RichText::new(&message.content).color(color));
                        ui.add_space(6.0);
                    }
                    if self.chat.is_waiting() {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new());
                            ui.label(RichText::new("Coach is typing...").weak());
                        });
                    }
                });
            ui.separator();

            ui.label(RichText::new("Suggested questions:").small().weak());
            ui.horizontal_wrapped(|ui| {
                for question in &catalog.coach.suggested_questions {
                    if ui.small_button(question.as_str()).clicked() {
                        self.chat.draft = question.clone();
                    }
                }
            });

            let waiting = self.chat.is_waiting();
            ui.horizontal(|ui| {
                let input = ui.add_enabled(
                    !waiting,
                    egui::TextEdit::singleline(&mut self.chat.draft).hint_text("Ask your AI coach..."),
                );
                let enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let can_send = !waiting && !self.chat.draft.trim().is_empty();
                if ui.add_enabled(can_send, egui::Button::new("Send")).clicked() || (enter && can_send) {
                    self.chat.send_draft(now);
                }
            });
        });
    }
}

fn show_insights(ui: &mut Ui, catalog: &Catalog) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("AI Insights").size(20.0).strong());
        ui.label(RichText::new("Personalized recommendations based on your training data").weak());
        for insight in &catalog.insights {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(&insight.title).strong());
                ui.label(
                    RichText::new(format!("Confidence: {}%", insight.confidence))
                        .small()
                        .color(confidence_color(insight.confidence)),
                );
                ui.label(RichText::new(&insight.action).small().weak());
            });
            ui.label(insight.insight.as_str());
            ui.add(egui::ProgressBar::new(f32::from(insight.confidence) / 100.0));
        }
    });
}
