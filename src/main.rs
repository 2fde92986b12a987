use std::fs;
use std::path::Path;
use std::sync::Arc;

use eframe::egui;

mod app;
mod catalog;
mod chat;
mod config;
mod error;
mod filter;
mod import;
mod models;
mod muscle_map;
mod router;
mod scheduler;
mod session;
mod stats;
mod views;

use app::FitApp;
use catalog::Catalog;
use config::AppConfig;
use error::AppError;

fn main() -> eframe::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
    }

    // Optional deep link, e.g. `fit_tracker /workouts`; still goes through the login gate.
    let start_path = std::env::args().nth(1);
    let config = AppConfig::discover();
    let catalog = Catalog::load_or_builtin(config.catalog_path.as_deref());
    let fonts = match config.font_path.as_deref().map(load_fonts) {
        Some(Ok(fonts)) => Some(fonts),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "using default fonts");
            None
        }
        None => None,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("FitTracker"),
        ..Default::default()
    };

    tracing::info!("starting FitTracker");
    eframe::run_native(
        "FitTracker",
        options,
        Box::new(move |cc| {
            if let Some(fonts) = fonts {
                cc.egui_ctx.set_fonts(fonts);
            }
            Ok(Box::new(FitApp::new(cc, config, catalog, start_path)))
        }),
    )
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let default_filter = if cfg!(debug_assertions) {
        "info,fit_tracker=debug"
    } else {
        "info"
    };
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).compact().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

/// Replaces both the proportional and monospace families with one TTF file.
fn load_fonts(path: &Path) -> Result<egui::FontDefinitions, AppError> {
    let font_data = fs::read(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "custom".to_owned(),
        Arc::new(egui::FontData::from_owned(font_data)),
    );
    fonts.families.insert(
        egui::FontFamily::Proportional,
        vec!["custom".to_owned()],
    );
    fonts.families.insert(
        egui::FontFamily::Monospace,
        vec!["custom".to_owned()],
    );
    tracing::info!(path = %path.display(), "loaded custom font");
    Ok(fonts)
}
