use chrono::{DateTime, Local};
use eframe::{App, CreationContext, Frame, egui};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::router::{Route, Router, NAV_ROUTES};
use crate::scheduler;
use crate::session::SessionStore;
use crate::views::ai_analytics::AiAnalyticsView;
use crate::views::exercises::ExercisesView;
use crate::views::login::LoginView;
use crate::views::shell::{self, ShellAction};
use crate::views::workouts::WorkoutsView;
use crate::views::{analytics, dashboard};

/// The mounted page and its local state. Replacing it drops the old view,
/// which cancels anything that view had scheduled.
enum Page {
    Login(LoginView),
    Dashboard,
    Exercises(ExercisesView),
    Workouts(WorkoutsView),
    Analytics,
    AiAnalytics(Box<AiAnalyticsView>),
}

pub struct FitApp {
    config: AppConfig,
    catalog: Catalog,
    session: SessionStore,
    router: Router,
    page: Page,
}

impl FitApp {
    pub fn new(cc: &CreationContext, config: AppConfig, catalog: Catalog, start_path: Option<String>) -> Self {
        cc.egui_ctx.set_visuals(if config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        let session = SessionStore::new(config.login_delay());
        let mut router = Router::new(session.is_authenticated());
        if let Some(path) = start_path {
            router.navigate_path(&path, session.is_authenticated());
        }
        let page = mount(router.current(), &catalog, &config, Local::now());
        FitApp {
            config,
            catalog,
            session,
            router,
            page,
        }
    }

    fn navigate(&mut self, requested: Route, now: DateTime<Local>) {
        let before = self.router.current();
        let route = self.router.navigate(requested, self.session.is_authenticated());
        if route != before {
            tracing::debug!(from = before.path(), to = route.path(), "navigating");
            self.page = mount(route, &self.catalog, &self.config, now);
        }
    }

    fn poll(&mut self, now: DateTime<Local>) {
        if let Some(session) = self.session.poll(now) {
            tracing::debug!(name = %session.name, "session started");
        }
        if self.router.sync(self.session.is_authenticated()) {
            self.page = mount(self.router.current(), &self.catalog, &self.config, now);
        }
        if let Page::AiAnalytics(view) = &mut self.page {
            view.poll(now);
        }
    }

    fn next_deadline(&self) -> Option<DateTime<Local>> {
        let page = match &self.page {
            Page::AiAnalytics(view) => view.next_deadline(),
            _ => None,
        };
        scheduler::earliest([self.session.next_deadline(), page])
    }

    /// Number keys 1-5 jump between pages, as long as no text field has focus.
    fn shortcut(&self, ctx: &egui::Context) -> Option<Route> {
        if ctx.wants_keyboard_input() {
            return None;
        }
        let keys = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3, egui::Key::Num4, egui::Key::Num5];
        keys.iter()
            .zip(NAV_ROUTES)
            .find(|(key, _)| ctx.input(|i| i.key_pressed(**key)))
            .map(|(_, route)| route)
    }
}

fn mount(route: Route, catalog: &Catalog, config: &AppConfig, now: DateTime<Local>) -> Page {
    match route {
        Route::Login => Page::Login(LoginView::default()),
        Route::Dashboard => Page::Dashboard,
        Route::Exercises => Page::Exercises(ExercisesView::default()),
        Route::Workouts => Page::Workouts(WorkoutsView::default()),
        Route::Analytics => Page::Analytics,
        Route::AiAnalytics => Page::AiAnalytics(Box::new(AiAnalyticsView::new(catalog, config, now))),
    }
}

impl App for FitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Local::now();
        self.poll(now);

        let mut requested = self.shortcut(ctx);

        if let Some(session) = self.session.current() {
            match shell::show_header(ctx, self.router.current(), session) {
                Some(ShellAction::Navigate(route)) => requested = Some(route),
                Some(ShellAction::Logout) => {
                    self.session.logout();
                    requested = Some(Route::Login);
                }
                None => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.page {
            Page::Login(view) => view.show(ui, &mut self.session, self.router.requested(), now),
            Page::Dashboard => {
                if let Some(session) = self.session.current() {
                    if let Some(route) = dashboard::show(ui, &self.catalog, session) {
                        requested = Some(route);
                    }
                }
            }
            Page::Exercises(view) => view.show(ui, &self.catalog),
            Page::Workouts(view) => view.show(ui, &self.catalog),
            Page::Analytics => analytics::show(ui, &self.catalog),
            Page::AiAnalytics(view) => view.show(ui, &self.catalog, now),
        });

        if let Some(route) = requested {
            self.navigate(route, now);
        }

        if let Some(due) = self.next_deadline() {
            let wait = (due - Local::now()).to_std().unwrap_or_default();
            ctx.request_repaint_after(wait);
        }
    }
}
