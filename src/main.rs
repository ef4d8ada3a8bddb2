use eframe::egui;

mod app;
mod batch;
mod config;
mod download;
mod error;
mod localizations;
mod models;
mod settings;
mod theme;
mod ui;

use app::MediaCatcherApp;
use config::AppConfig;
use localizations::Localizations;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    match &config.ytdlp {
        Some(path) => log::info!("Using yt-dlp at {}", path.display()),
        None => log::warn!("yt-dlp not found; downloads are disabled until it is installed"),
    }
    log::debug!("Settings file: {}", config.settings_path.display());

    let localizer = Localizations::new();
    log::info!("Language: {}", localizer.current());
    let title = localizer.tr("app-title");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([420.0, 520.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    let app = MediaCatcherApp::new(config, localizer);

    eframe::run_native(&title, options, Box::new(|_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("Failed to start the window: {}", e))
}
